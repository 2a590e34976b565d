use crate::{reduced, Step, Transducer, Transformer};

/* Take */

#[derive(Debug, Clone, Copy)]
pub struct Take {
    len: usize,
}

/// Forwards the first `len` items, then terminates the fold.
///
/// `take(0)` forwards nothing and reports the chain as full right away, so the
/// source is not asked for a single element.
pub fn take(len: usize) -> Take {
    Take { len }
}

impl<X> Transducer<X> for Take {
    type Output = TakeTransformer<X>;

    fn apply(&self, next: X) -> Self::Output {
        TakeTransformer {
            base: next,
            remaining: self.len,
        }
    }
}

/* TakeTransformer */

pub struct TakeTransformer<X> {
    base: X,
    remaining: usize,
}

impl<I, X> Transformer<I> for TakeTransformer<X>
where
    X: Transformer<I>,
{
    type Acc = X::Acc;

    fn init(&mut self) -> Self::Acc {
        self.base.init()
    }

    fn step(&mut self, acc: Self::Acc, item: I) -> Step<Self::Acc> {
        if self.remaining == 0 {
            return reduced(acc);
        }

        self.remaining -= 1;

        let step = self.base.step(acc, item);

        if self.remaining == 0 {
            step.ensure_reduced()
        } else {
            step
        }
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        self.base.complete(acc)
    }

    fn is_full(&self) -> bool {
        self.remaining == 0 || self.base.is_full()
    }
}
