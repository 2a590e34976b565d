use std::marker::PhantomData;
use std::mem::take;

use crate::{Step, Transducer, Transformer};

/* PartitionBy */

pub struct PartitionBy<O, I, K> {
    operation: O,
    _marker: PhantomData<fn(&I) -> K>,
}

/// Groups consecutive items `operation` maps to equal keys into one `Vec`.
///
/// A group is forwarded as soon as the key changes; the trailing group is
/// forwarded when the reduction completes.
///
/// ```
/// use transducers::{into, partition_by};
///
/// let groups = into(Vec::new(), partition_by(|x: &i32| *x), vec![1, 1, 2, 2, 2, 1]).unwrap();
///
/// assert_eq!(groups, vec![vec![1, 1], vec![2, 2, 2], vec![1]]);
/// ```
pub fn partition_by<I, K, O>(operation: O) -> PartitionBy<O, I, K>
where
    O: FnMut(&I) -> K,
{
    PartitionBy {
        operation,
        _marker: PhantomData,
    }
}

impl<O: Clone, I, K> Clone for PartitionBy<O, I, K> {
    fn clone(&self) -> Self {
        Self {
            operation: self.operation.clone(),
            _marker: PhantomData,
        }
    }
}

impl<X, O, I, K> Transducer<X> for PartitionBy<O, I, K>
where
    O: FnMut(&I) -> K + Clone,
{
    type Output = PartitionByTransformer<X, O, I, K>;

    fn apply(&self, next: X) -> Self::Output {
        PartitionByTransformer {
            base: next,
            operation: self.operation.clone(),
            buffer: Vec::new(),
            last: None,
        }
    }
}

/* PartitionByTransformer */

pub struct PartitionByTransformer<X, O, I, K> {
    base: X,
    operation: O,
    buffer: Vec<I>,
    last: Option<K>,
}

impl<X, O, I, K> Transformer<I> for PartitionByTransformer<X, O, I, K>
where
    X: Transformer<Vec<I>>,
    O: FnMut(&I) -> K,
    K: PartialEq,
{
    type Acc = X::Acc;

    fn init(&mut self) -> Self::Acc {
        self.base.init()
    }

    fn step(&mut self, acc: Self::Acc, item: I) -> Step<Self::Acc> {
        let key = (self.operation)(&item);
        let changed = matches!(&self.last, Some(last) if *last != key);

        self.last = Some(key);

        if !changed {
            self.buffer.push(item);

            return Step::Continue(acc);
        }

        let group = take(&mut self.buffer);
        let step = self.base.step(acc, group);

        if !step.is_reduced() {
            self.buffer.push(item);
        }

        step
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        self.last = None;

        let acc = if self.buffer.is_empty() {
            acc
        } else {
            let group = take(&mut self.buffer);

            self.base.step(acc, group).into_inner()
        };

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
    fn partition_by_flushes_trailing_group() {
        let out = into(
            Vec::new(),
            partition_by(|s: &&str| s.len()),
            vec!["a", "b", "cc", "dd", "e"],
        )
        .unwrap();

        assert_eq!(out, vec![vec!["a", "b"], vec!["cc", "dd"], vec!["e"]]);
    }

    #[test]
    fn partition_by_empty_input() {
        let out: Vec<Vec<i32>> = into(Vec::new(), partition_by(|x: &i32| *x > 0), Vec::new()).unwrap();

        assert!(out.is_empty());
    }

    #[test]
    fn partition_by_with_take_drops_pending_item() {
        let xform = comp(partition_by(|x: &i32| x % 2 == 0), take(1));
        let out = into(Vec::new(), xform, vec![1, 3, 2, 4, 5]).unwrap();

        assert_eq!(out, vec![vec![1, 3]]);
    }
}
