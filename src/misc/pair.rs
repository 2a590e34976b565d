use crate::Error;

/// A key/value association as yielded by map sources and consumed by
/// [`into_assoc`](crate::into_assoc).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Pair<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}

/// Element that is either a key/value pair or a bare value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Entry<K, V> {
    Pair(Pair<K, V>),
    Single(V),
}

/// Elements [`key`] and [`value`] know how to pick apart.
pub trait Keyed {
    type Key;
    type Value;

    /// Splits the element, fails with [`Error::NotAPair`] if it has no key.
    fn into_pair(self) -> Result<Pair<Self::Key, Self::Value>, Error>;

    /// Returns the value part, the element itself if it has no key.
    fn into_value(self) -> Self::Value;
}

impl<K, V> Keyed for Pair<K, V> {
    type Key = K;
    type Value = V;

    fn into_pair(self) -> Result<Pair<K, V>, Error> {
        Ok(self)
    }

    fn into_value(self) -> V {
        self.value
    }
}

impl<K, V> Keyed for (K, V) {
    type Key = K;
    type Value = V;

    fn into_pair(self) -> Result<Pair<K, V>, Error> {
        Ok(self.into())
    }

    fn into_value(self) -> V {
        self.1
    }
}

impl<K, V> Keyed for Entry<K, V> {
    type Key = K;
    type Value = V;

    fn into_pair(self) -> Result<Pair<K, V>, Error> {
        match self {
            Entry::Pair(pair) => Ok(pair),
            Entry::Single(_) => Err(Error::NotAPair),
        }
    }

    fn into_value(self) -> V {
        match self {
            Entry::Pair(pair) => pair.value,
            Entry::Single(value) => value,
        }
    }
}

/// Returns a function extracting the key of a pair.
///
/// ```
/// use transducers::{key, Entry, Pair};
///
/// assert_eq!(key()(Pair::new("a", 1)).unwrap(), "a");
/// assert!(key()(Entry::<&str, i32>::Single(1)).is_err());
/// ```
pub fn key<E>() -> fn(E) -> Result<E::Key, Error>
where
    E: Keyed,
{
    |entry| entry.into_pair().map(|pair| pair.key)
}

/// Returns a function extracting the value of a pair, bare values pass through.
pub fn value<E>() -> fn(E) -> E::Value
where
    E: Keyed,
{
    E::into_value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_of_single_passes_through() {
        assert_eq!(value()(Entry::<&str, i32>::Single(7)), 7);
        assert_eq!(value()(Entry::Pair(Pair::new("k", 8))), 8);
        assert_eq!(value()(("k", 9)), 9);
    }

    #[test]
    fn key_of_single_is_not_a_pair() {
        let err = key()(Entry::<&str, i32>::Single(7)).unwrap_err();

        assert!(matches!(err, Error::NotAPair));
        assert_eq!(key()(("k", 9)).unwrap(), "k");
    }
}
