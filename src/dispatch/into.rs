use std::marker::PhantomData;

use crate::misc::Keyed;
use crate::{reduced, AssocSink, Error, Reducible, Sink, Step, Transducer, Transformer};

/* Appender */

/// Innermost transformer of [`into`], appends every item to the accumulator.
///
/// The collection is handed in as `Some(empty)`; `init` has no collection to
/// offer and answers `None`, which ends the fold on the first item.
pub struct Appender<C> {
    _marker: PhantomData<fn() -> C>,
}

impl<C> Appender<C> {
    pub fn new() -> Self {
        Self { _marker: PhantomData }
    }
}

impl<C> Default for Appender<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, C> Transformer<I> for Appender<C>
where
    C: Sink<I>,
{
    type Acc = Option<C>;

    fn init(&mut self) -> Option<C> {
        None
    }

    fn step(&mut self, acc: Option<C>, item: I) -> Step<Option<C>> {
        match acc {
            Some(mut collection) => {
                collection.append(item);

                Step::Continue(Some(collection))
            }
            None => reduced(None),
        }
    }

    fn complete(&mut self, acc: Option<C>) -> Option<C> {
        acc
    }
}

/* AssocAppender */

/// Innermost transformer of [`into_assoc`], inserts every pair into the
/// accumulator.
///
/// An item without a key terminates the reduction with [`Error::NotAPair`].
/// `init` has no collection to offer and yields [`Error::MissingSeed`].
pub struct AssocAppender<C> {
    _marker: PhantomData<fn() -> C>,
}

impl<C> AssocAppender<C> {
    pub fn new() -> Self {
        Self { _marker: PhantomData }
    }
}

impl<C> Default for AssocAppender<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, C> Transformer<E> for AssocAppender<C>
where
    E: Keyed,
    C: AssocSink<E::Key, E::Value>,
{
    type Acc = Result<C, Error>;

    fn init(&mut self) -> Self::Acc {
        Err(Error::MissingSeed)
    }

    fn step(&mut self, acc: Self::Acc, item: E) -> Step<Self::Acc> {
        let mut collection = match acc {
            Ok(collection) => collection,
            Err(err) => return reduced(Err(err)),
        };

        match item.into_pair() {
            Ok(pair) => {
                collection.insert_pair(pair.key, pair.value);

                Step::Continue(Ok(collection))
            }
            Err(err) => reduced(Err(err)),
        }
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        acc
    }
}

/// Transforms `source` with `xform` and appends the results to `empty`.
///
/// ```
/// use transducers::{into, map};
///
/// assert_eq!(into(Vec::new(), map(|x: i32| x * 2), [1, 2, 3]).unwrap(), vec![2, 4, 6]);
/// ```
pub fn into<C, T, S>(empty: C, xform: T, source: S) -> Result<C, Error>
where
    S: Reducible,
    T: Transducer<Appender<C>>,
    T::Output: Transformer<S::Item, Acc = Option<C>>,
{
    crate::reduce(xform.apply(Appender::new()), Some(empty), source)?.ok_or(Error::MissingSeed)
}

/// Transforms `source` with `xform` and inserts the resulting key/value pairs
/// into `empty`. A later pair replaces an earlier one with the same key.
///
/// ```
/// use std::collections::BTreeMap;
///
/// use transducers::{into_assoc, map};
///
/// let lengths: BTreeMap<&str, usize> =
///     into_assoc(BTreeMap::new(), map(|w: &'static str| (w, w.len())), vec!["a", "bcd"]).unwrap();
///
/// assert_eq!(lengths[&"bcd"], 3);
/// ```
pub fn into_assoc<C, T, S>(empty: C, xform: T, source: S) -> Result<C, Error>
where
    S: Reducible,
    T: Transducer<AssocAppender<C>>,
    T::Output: Transformer<S::Item, Acc = Result<C, Error>>,
{
    crate::reduce(xform.apply(AssocAppender::new()), Ok(empty), source)?
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::*;

    #[derive(Debug, PartialEq)]
    struct Log(Vec<String>);

    impl Sink<&'static str> for Log {
        fn append(&mut self, item: &'static str) {
            self.0.push(item.to_owned());
        }
    }

    #[test]
    fn into_needs_no_default_seed() {
        let out = into(Log(vec![String::from(">")]), take(1), vec!["a", "b"]).unwrap();

        assert_eq!(out, Log(vec![String::from(">"), String::from("a")]));
    }

    #[test]
    fn appenders_have_no_identity() {
        let mut appender = Appender::<Vec<i32>>::new();
        let empty = Transformer::<i32>::init(&mut appender);

        assert_eq!(appender.step(empty, 1), reduced(None));

        let mut appender = AssocAppender::<HashMap<i32, i32>>::new();
        let empty = Transformer::<(i32, i32)>::init(&mut appender);

        assert!(matches!(empty, Err(Error::MissingSeed)));
    }

    #[test]
    fn into_assoc_rejects_single_values() {
        let source = vec![Entry::Pair(Pair::new("a", 1)), Entry::Single(2)];
        let err = into_assoc(HashMap::new(), identity(), source).unwrap_err();

        assert!(matches!(err, Error::NotAPair));
    }

    #[test]
    fn into_assoc_last_write_wins() {
        let out: HashMap<char, usize> =
            into_assoc(HashMap::new(), map(|w: &str| (w.chars().next().unwrap_or('-'), w.len())), vec!["ab", "abc", "b"])
                .unwrap();

        assert_eq!(out[&'a'], 3);
        assert_eq!(out[&'b'], 1);
    }
}
