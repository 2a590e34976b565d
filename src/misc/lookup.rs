use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};

/// Collections that can be indexed by a key of type `K`.
pub trait Lookup<K> {
    type Value;

    fn lookup(&self, key: &K) -> Option<&Self::Value>;
}

impl<T> Lookup<usize> for [T] {
    type Value = T;

    fn lookup(&self, index: &usize) -> Option<&T> {
        self.get(*index)
    }
}

impl<T> Lookup<usize> for Vec<T> {
    type Value = T;

    fn lookup(&self, index: &usize) -> Option<&T> {
        self.as_slice().get(*index)
    }
}

impl<T, const N: usize> Lookup<usize> for [T; N] {
    type Value = T;

    fn lookup(&self, index: &usize) -> Option<&T> {
        self[..].get(*index)
    }
}

impl<T> Lookup<usize> for VecDeque<T> {
    type Value = T;

    fn lookup(&self, index: &usize) -> Option<&T> {
        self.get(*index)
    }
}

impl<Q, K, V, S> Lookup<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash,
    S: BuildHasher,
{
    type Value = V;

    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<Q, K, V> Lookup<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord,
{
    type Value = V;

    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<'a, K, C> Lookup<K> for &'a C
where
    C: Lookup<K> + ?Sized,
{
    type Value = C::Value;

    fn lookup(&self, key: &K) -> Option<&C::Value> {
        (**self).lookup(key)
    }
}

/// Returns a function reading the value at `key` out of an element, `None` if
/// it is absent.
///
/// Pairs with [`keep`](crate::keep) to drop elements missing the key.
///
/// ```
/// use std::collections::HashMap;
///
/// use transducers::{get, into, keep};
///
/// let rows: Vec<HashMap<&str, i32>> = vec![
///     vec![("id", 1)].into_iter().collect(),
///     HashMap::new(),
///     vec![("id", 3)].into_iter().collect(),
/// ];
///
/// let ids = into(Vec::new(), keep(get("id")), rows).unwrap();
/// assert_eq!(ids, vec![1, 3]);
/// ```
pub fn get<K, C>(key: K) -> impl FnMut(C) -> Option<C::Value> + Clone
where
    K: Clone,
    C: Lookup<K>,
    C::Value: Clone,
{
    move |collection: C| collection.lookup(&key).cloned()
}
