use crate::{reduced, Step, Transducer, Transformer};

/* TakeWhile */

#[derive(Debug, Clone, Copy)]
pub struct TakeWhile<O> {
    operation: O,
}

/// Forwards items while `operation` holds. The first item it does not hold
/// for terminates the fold without being forwarded.
pub fn take_while<O>(operation: O) -> TakeWhile<O> {
    TakeWhile { operation }
}

impl<X, O> Transducer<X> for TakeWhile<O>
where
    O: Clone,
{
    type Output = TakeWhileTransformer<X, O>;

    fn apply(&self, next: X) -> Self::Output {
        TakeWhileTransformer {
            base: next,
            operation: self.operation.clone(),
            taking: true,
        }
    }
}

/* TakeWhileTransformer */

pub struct TakeWhileTransformer<X, O> {
    base: X,
    operation: O,
    taking: bool,
}

impl<I, X, O> Transformer<I> for TakeWhileTransformer<X, O>
where
    X: Transformer<I>,
    O: FnMut(&I) -> bool,
{
    type Acc = X::Acc;

    fn init(&mut self) -> Self::Acc {
        self.base.init()
    }

    fn step(&mut self, acc: Self::Acc, item: I) -> Step<Self::Acc> {
        if self.taking && (self.operation)(&item) {
            return self.base.step(acc, item);
        }

        self.taking = false;

        reduced(acc)
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        self.base.complete(acc)
    }

    fn is_full(&self) -> bool {
        !self.taking || self.base.is_full()
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn take_while_stops_at_first_failure() {
        let out = into(Vec::new(), take_while(|x: &i32| *x < 4), vec![1, 2, 3, 4, 1, 2]).unwrap();

        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn take_while_failing_first_item() {
        let out = into(Vec::new(), take_while(|x: &i32| *x > 10), vec![1, 20]).unwrap();

        assert!(out.is_empty());
    }
}
