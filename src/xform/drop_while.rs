use crate::{Step, Transducer, Transformer};

/* DropWhile */

#[derive(Debug, Clone, Copy)]
pub struct DropWhile<O> {
    operation: O,
}

/// Discards items while `operation` holds. Once it fails, that item and all
/// following ones are forwarded and `operation` is not called again.
pub fn drop_while<O>(operation: O) -> DropWhile<O> {
    DropWhile { operation }
}

impl<X, O> Transducer<X> for DropWhile<O>
where
    O: Clone,
{
    type Output = DropWhileTransformer<X, O>;

    fn apply(&self, next: X) -> Self::Output {
        DropWhileTransformer {
            base: next,
            operation: self.operation.clone(),
            dropping: true,
        }
    }
}

/* DropWhileTransformer */

pub struct DropWhileTransformer<X, O> {
    base: X,
    operation: O,
    dropping: bool,
}

impl<I, X, O> Transformer<I> for DropWhileTransformer<X, O>
where
    X: Transformer<I>,
    O: FnMut(&I) -> bool,
{
    type Acc = X::Acc;

    fn init(&mut self) -> Self::Acc {
        self.base.init()
    }

    fn step(&mut self, acc: Self::Acc, item: I) -> Step<Self::Acc> {
        if self.dropping && (self.operation)(&item) {
            return Step::Continue(acc);
        }

        self.dropping = false;

        self.base.step(acc, item)
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        self.base.complete(acc)
    }

    fn is_full(&self) -> bool {
        self.base.is_full()
    }
}
