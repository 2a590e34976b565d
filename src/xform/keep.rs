use crate::{Step, Transducer, Transformer};

/* Keep */

#[derive(Debug, Clone, Copy)]
pub struct Keep<O> {
    operation: O,
}

/// Forwards `value` for every item `operation` maps to `Some(value)`, drops
/// the items mapped to [`none()`](crate::none).
pub fn keep<O>(operation: O) -> Keep<O> {
    Keep { operation }
}

impl<X, O> Transducer<X> for Keep<O>
where
    O: Clone,
{
    type Output = KeepTransformer<X, O>;

    fn apply(&self, next: X) -> Self::Output {
        KeepTransformer {
            base: next,
            operation: self.operation.clone(),
        }
    }
}

/* KeepTransformer */

pub struct KeepTransformer<X, O> {
    base: X,
    operation: O,
}

impl<I, T, X, O> Transformer<I> for KeepTransformer<X, O>
where
    X: Transformer<T>,
    O: FnMut(I) -> Option<T>,
{
    type Acc = X::Acc;

    fn init(&mut self) -> Self::Acc {
        self.base.init()
    }

    fn step(&mut self, acc: Self::Acc, item: I) -> Step<Self::Acc> {
        match (self.operation)(item) {
            Some(item) => self.base.step(acc, item),
            None => Step::Continue(acc),
        }
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        self.base.complete(acc)
    }

    fn is_full(&self) -> bool {
        self.base.is_full()
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn keep_drops_none() {
        let out = into(
            Vec::new(),
            keep(|x: i32| if x % 3 == 0 { none() } else { Some(x * 10) }),
            1..7,
        )
        .unwrap();

        assert_eq!(out, vec![10, 20, 40, 50]);
    }

    #[test]
    fn keep_keeps_falsy_values() {
        let out = into(Vec::new(), keep(|x: i32| Some(x == 2)), vec![1, 2, 3]).unwrap();

        assert_eq!(out, vec![false, true, false]);
    }
}
