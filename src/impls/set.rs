use std::collections::{BTreeSet, BinaryHeap, HashSet};
use std::hash::{BuildHasher, Hash};

use crate::{Error, Reducible, Sink, Step, Transformer};

/// Iteration order follows the set's own, arbitrary for `HashSet`.
impl<T, S> Reducible for HashSet<T, S>
where
    S: BuildHasher,
{
    type Item = T;

    fn kind(&self) -> &'static str {
        "hash-set"
    }

    fn fold_with<X>(self, transformer: &mut X, acc: X::Acc) -> Result<Step<X::Acc>, Error>
    where
        X: Transformer<T>,
    {
        Ok(transformer.step_iter(acc, self))
    }
}

impl<T> Reducible for BTreeSet<T> {
    type Item = T;

    fn kind(&self) -> &'static str {
        "btree-set"
    }

    fn fold_with<X>(self, transformer: &mut X, acc: X::Acc) -> Result<Step<X::Acc>, Error>
    where
        X: Transformer<T>,
    {
        Ok(transformer.step_iter(acc, self))
    }
}

/// Walks the heap in its internal, unsorted order.
impl<T> Reducible for BinaryHeap<T> {
    type Item = T;

    fn kind(&self) -> &'static str {
        "binary-heap"
    }

    fn fold_with<X>(self, transformer: &mut X, acc: X::Acc) -> Result<Step<X::Acc>, Error>
    where
        X: Transformer<T>,
    {
        Ok(transformer.step_iter(acc, self.into_vec()))
    }
}

impl<T, S> Sink<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn append(&mut self, item: T) {
        self.insert(item);
    }
}

impl<T> Sink<T> for BTreeSet<T>
where
    T: Ord,
{
    fn append(&mut self, item: T) {
        self.insert(item);
    }
}
