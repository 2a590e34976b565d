use super::{Step, Transformer};
use crate::Error;

/// A source that knows how to walk its elements through a transformer.
///
/// Implementing `Reducible` for a type registers it as a source kind for
/// [`reduce`](crate::reduce), [`transduce`](crate::transduce) and
/// [`into`](crate::into).
///
/// `fold_with` must step the elements in source order, must not pull another
/// element once a step returned [`Step::Reduced`] or the transformer reports
/// [`is_full`](Transformer::is_full), and must not call `complete`: the
/// dispatcher does that exactly once after the walk.
///
/// # Examples
///
/// ```
/// use transducers::{into, map, Error, Reducible, Step, Transformer};
///
/// struct Countdown(u32);
///
/// impl Reducible for Countdown {
///     type Item = u32;
///
///     fn kind(&self) -> &'static str {
///         "countdown"
///     }
///
///     fn fold_with<X>(self, transformer: &mut X, acc: X::Acc) -> Result<Step<X::Acc>, Error>
///     where
///         X: Transformer<u32>,
///     {
///         Ok(transformer.step_iter(acc, (1..=self.0).rev()))
///     }
/// }
///
/// let out = into(Vec::new(), map(|x: u32| x * 10), Countdown(3)).unwrap();
/// assert_eq!(out, vec![30, 20, 10]);
/// ```
pub trait Reducible: Sized {
    /// The type of the elements this source yields.
    type Item;

    /// Short name of the source kind, used for diagnostics.
    fn kind(&self) -> &'static str;

    /// Walk the elements through `transformer`, starting with `acc`.
    fn fold_with<X>(self, transformer: &mut X, acc: X::Acc) -> Result<Step<X::Acc>, Error>
    where
        X: Transformer<Self::Item>;
}
