use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::{AssocSink, Error, Pair, Reducible, Step, Transformer};

/// Entries are yielded as [`Pair`]s so that [`key`](crate::key) and
/// [`value`](crate::value) can pick them apart.
impl<K, V, S> Reducible for HashMap<K, V, S>
where
    S: BuildHasher,
{
    type Item = Pair<K, V>;

    fn kind(&self) -> &'static str {
        "hash-map"
    }

    fn fold_with<X>(self, transformer: &mut X, acc: X::Acc) -> Result<Step<X::Acc>, Error>
    where
        X: Transformer<Pair<K, V>>,
    {
        Ok(transformer.step_iter(acc, self.into_iter().map(Pair::from)))
    }
}

impl<K, V> Reducible for BTreeMap<K, V> {
    type Item = Pair<K, V>;

    fn kind(&self) -> &'static str {
        "btree-map"
    }

    fn fold_with<X>(self, transformer: &mut X, acc: X::Acc) -> Result<Step<X::Acc>, Error>
    where
        X: Transformer<Pair<K, V>>,
    {
        Ok(transformer.step_iter(acc, self.into_iter().map(Pair::from)))
    }
}

impl<K, V, S> AssocSink<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn insert_pair(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K, V> AssocSink<K, V> for BTreeMap<K, V>
where
    K: Ord,
{
    fn insert_pair(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

/// Insertion ordered map. A repeated key keeps its first position and takes
/// the latest value.
impl<K, V> AssocSink<K, V> for Vec<Pair<K, V>>
where
    K: PartialEq,
{
    fn insert_pair(&mut self, key: K, value: V) {
        match self.iter_mut().find(|pair| pair.key == key) {
            Some(pair) => pair.value = value,
            None => self.push(Pair::new(key, value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use crate::*;

    #[test]
    fn map_source_yields_pairs() {
        let mut source = BTreeMap::new();
        source.insert("a", 1);
        source.insert("b", 2);

        let keys = into(Vec::new(), map(key()), source.clone()).unwrap();
        let keys = keys.into_iter().collect::<Result<Vec<_>, _>>().unwrap();
        let values = into(Vec::new(), map(value()), source).unwrap();

        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    fn hash_map_round_trip() {
        let mut source = HashMap::new();
        source.insert(1, "one");
        source.insert(2, "two");

        let out: HashMap<i32, &str> = into_assoc(HashMap::new(), identity(), source.clone()).unwrap();

        assert_eq!(out, source);
    }

    #[test]
    fn ordered_sink_keeps_first_position() {
        let pairs = vec![("x", 1), ("y", 2), ("x", 3)];
        let out = into_assoc(Vec::new(), identity(), pairs).unwrap();

        assert_eq!(out, vec![Pair::new("x", 3), Pair::new("y", 2)]);
    }
}
