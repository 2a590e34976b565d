use tracing::trace;

use crate::misc::Try;
use crate::{reduced, Error, Fold, Reducible, Seed, Transducer, Transformer, TryWrap};

/// Reduces `source` through `transformer`, starting from `init`.
///
/// Elements are stepped in source order until the source is exhausted, a step
/// returns [`Step::Reduced`](crate::Step::Reduced) or the transformer reports
/// [`is_full`](Transformer::is_full). `complete` is then called exactly once
/// and its result returned.
///
/// ```
/// use transducers::{filter, reduce, wrap, Transducer};
///
/// let rf = filter(|x: &i32| x % 2 == 1).apply(wrap(|acc: i32, x: i32| acc + x));
/// assert_eq!(reduce(rf, 0, 1..=5).unwrap(), 9);
/// ```
pub fn reduce<X, S>(mut transformer: X, init: X::Acc, source: S) -> Result<X::Acc, Error>
where
    S: Reducible,
    X: Transformer<S::Item>,
{
    let kind = source.kind();

    trace!(kind, "reduce");

    let step = if transformer.is_full() {
        reduced(init)
    } else {
        source.fold_with(&mut transformer, init)?
    };

    if step.is_reduced() {
        trace!(kind, "reduction terminated early");
    }

    Ok(transformer.complete(step.into_inner()))
}

/// Like [`reduce`], the transformer's own `init` supplies the accumulator.
pub fn reduce_init<X, S>(mut transformer: X, source: S) -> Result<X::Acc, Error>
where
    S: Reducible,
    X: Transformer<S::Item>,
{
    let init = transformer.init();

    reduce(transformer, init, source)
}

/// Applies `xform` to the reducing function `operation` and reduces `source`
/// with the result, starting from `init`.
///
/// ```
/// use transducers::{comp, filter, map, transduce};
///
/// let xform = comp(filter(|x: &i32| x % 2 == 0), map(|x: i32| x * x));
/// let sum = transduce(xform, |acc: i32, x: i32| acc + x, 0, 1..=4).unwrap();
///
/// assert_eq!(sum, 20);
/// ```
pub fn transduce<T, F, A, S>(xform: T, operation: F, init: A, source: S) -> Result<A, Error>
where
    S: Reducible,
    T: Transducer<Fold<F, A>>,
    T::Output: Transformer<S::Item, Acc = Option<A>>,
{
    let transformer = xform.apply(Fold::new(operation));

    reduce(transformer, Some(init), source)?.ok_or(Error::MissingSeed)
}

/// [`transduce`] for a fallible reducing function returning `Result` or
/// `Option`.
///
/// The first failure terminates the reduction and is returned as is, inside
/// the `Ok` of the outer result. The outer error is reserved for failures of
/// the source itself.
///
/// ```
/// use transducers::{identity, try_transduce};
///
/// let sum: Result<u8, &str> = try_transduce(
///     identity(),
///     |acc: u8, x: u8| acc.checked_add(x).ok_or("overflow"),
///     0,
///     vec![100, 100, 100],
/// )
/// .unwrap();
///
/// assert_eq!(sum, Err("overflow"));
/// ```
pub fn try_transduce<T, F, R, S>(xform: T, operation: F, init: R::Output, source: S) -> Result<R, Error>
where
    R: Try,
    R::Output: Clone,
    S: Reducible,
    T: Transducer<TryWrap<F, Seed<R::Output>, R>>,
    T::Output: Transformer<S::Item, Acc = R>,
{
    let transformer = xform.apply(TryWrap::with_init(operation, Seed::new(init.clone())));

    reduce(transformer, R::from_output(init), source)
}
