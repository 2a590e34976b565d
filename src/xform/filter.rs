use crate::misc::complement;
use crate::{Step, Transducer, Transformer};

/* Filter */

#[derive(Debug, Clone, Copy)]
pub struct Filter<O> {
    operation: O,
}

/// Forwards only the items `operation` holds for.
pub fn filter<O>(operation: O) -> Filter<O> {
    Filter { operation }
}

/// Forwards only the items `operation` does not hold for.
pub fn remove<T, O>(operation: O) -> Filter<impl FnMut(&T) -> bool + Clone>
where
    T: ?Sized,
    O: FnMut(&T) -> bool + Clone,
{
    filter(complement(operation))
}

impl<X, O> Transducer<X> for Filter<O>
where
    O: Clone,
{
    type Output = FilterTransformer<X, O>;

    fn apply(&self, next: X) -> Self::Output {
        FilterTransformer {
            base: next,
            operation: self.operation.clone(),
        }
    }
}

/* FilterTransformer */

pub struct FilterTransformer<X, O> {
    base: X,
    operation: O,
}

impl<I, X, O> Transformer<I> for FilterTransformer<X, O>
where
    X: Transformer<I>,
    O: FnMut(&I) -> bool,
{
    type Acc = X::Acc;

    fn init(&mut self) -> Self::Acc {
        self.base.init()
    }

    fn step(&mut self, acc: Self::Acc, item: I) -> Step<Self::Acc> {
        if (self.operation)(&item) {
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
