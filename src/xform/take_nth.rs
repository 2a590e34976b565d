use crate::{Error, Step, Transducer, Transformer};

/* TakeNth */

#[derive(Debug, Clone, Copy)]
pub struct TakeNth {
    nth: usize,
}

/// Forwards every `nth` item, counting the items seen from one: positions
/// `nth`, `2 * nth`, ...
///
/// Fails with [`Error::InvalidStep`] if `nth` is zero.
pub fn take_nth(nth: usize) -> Result<TakeNth, Error> {
    if nth == 0 {
        return Err(Error::InvalidStep);
    }

    Ok(TakeNth { nth })
}

impl<X> Transducer<X> for TakeNth {
    type Output = TakeNthTransformer<X>;

    fn apply(&self, next: X) -> Self::Output {
        TakeNthTransformer {
            base: next,
            nth: self.nth,
            seen: 0,
        }
    }
}

/* TakeNthTransformer */

pub struct TakeNthTransformer<X> {
    base: X,
    nth: usize,
    seen: usize,
}

impl<I, X> Transformer<I> for TakeNthTransformer<X>
where
    X: Transformer<I>,
{
    type Acc = X::Acc;

    fn init(&mut self) -> Self::Acc {
        self.base.init()
    }

    fn step(&mut self, acc: Self::Acc, item: I) -> Step<Self::Acc> {
        self.seen += 1;

        if self.seen % self.nth == 0 {
            self.base.step(acc, item)
        } else {
            Step::Continue(acc)
        }
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        self.base.complete(acc)
    }

    fn is_full(&self) -> bool {
        self.base.is_full()
    }
}
