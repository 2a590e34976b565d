use crate::{Step, Transducer, Transformer};

/* Map */

#[derive(Debug, Clone, Copy)]
pub struct Map<O> {
    operation: O,
}

/// Replaces every item with `operation(item)`.
pub fn map<O>(operation: O) -> Map<O> {
    Map { operation }
}

impl<X, O> Transducer<X> for Map<O>
where
    O: Clone,
{
    type Output = MapTransformer<X, O>;

    fn apply(&self, next: X) -> Self::Output {
        MapTransformer {
            base: next,
            operation: self.operation.clone(),
        }
    }
}

/* MapTransformer */

pub struct MapTransformer<X, O> {
    base: X,
    operation: O,
}

impl<I, T, X, O> Transformer<I> for MapTransformer<X, O>
where
    X: Transformer<T>,
    O: FnMut(I) -> T,
{
    type Acc = X::Acc;

    fn init(&mut self) -> Self::Acc {
        self.base.init()
    }

    fn step(&mut self, acc: Self::Acc, item: I) -> Step<Self::Acc> {
        let mapped_item = (self.operation)(item);

        self.base.step(acc, mapped_item)
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        self.base.complete(acc)
    }

    fn is_full(&self) -> bool {
        self.base.is_full()
    }
}
