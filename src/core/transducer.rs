use std::rc::Rc;

use super::Transformer;
use crate::Error;

/// A stage-builder: given the *next* transformer of a chain, returns a new
/// transformer decorating it.
///
/// Builders hold configuration only. Every call to `apply` creates a fresh
/// transformer with fresh per-reduction state, so the same builder may be used
/// for any number of reductions.
pub trait Transducer<X> {
    /// The transformer produced by this stage.
    type Output;

    fn apply(&self, next: X) -> Self::Output;
}

impl<'a, X, T> Transducer<X> for &'a T
where
    T: Transducer<X> + ?Sized,
{
    type Output = T::Output;

    fn apply(&self, next: X) -> Self::Output {
        (**self).apply(next)
    }
}

/* Comp */

/// Composition of two stage-builders, see [`comp`].
#[derive(Debug, Clone, Copy)]
pub struct Comp<A, B> {
    outer: A,
    inner: B,
}

impl<X, A, B> Transducer<X> for Comp<A, B>
where
    B: Transducer<X>,
    A: Transducer<B::Output>,
{
    type Output = A::Output;

    fn apply(&self, next: X) -> Self::Output {
        self.outer.apply(self.inner.apply(next))
    }
}

/// Composes two stage-builders right to left.
///
/// Applying the result to a transformer `t` yields `outer(inner(t))`, so
/// `outer` is the first stage every item passes through.
///
/// ```
/// use transducers::{comp, filter, into, map};
///
/// let xform = comp(map(|x: i32| x + 1), filter(|x: &i32| x % 2 == 0));
/// let out = into(Vec::new(), &xform, vec![1, 2, 3, 4]).unwrap();
///
/// assert_eq!(out, vec![2, 4]);
/// ```
pub fn comp<A, B>(outer: A, inner: B) -> Comp<A, B> {
    Comp { outer, inner }
}

/// Composes two or more stage-builders, the first being the outermost.
///
/// `comp!(a, b, c)` folds to `comp(comp(a, b), c)`. Less than two stages do
/// not compile.
///
/// ```
/// use transducers::{comp, into, map, take};
///
/// let xform = comp!(map(|x: i32| x * 2), map(|x: i32| x + 1), take(2));
///
/// assert_eq!(into(Vec::new(), xform, 1..10).unwrap(), vec![3, 5]);
/// ```
#[macro_export]
macro_rules! comp {
    () => {
        compile_error!("comp must be given at least 2 stages")
    };
    ($first:expr $(,)?) => {
        compile_error!("comp must be given at least 2 stages")
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {{
        let composed = $first;
        $(
            let composed = $crate::comp(composed, $rest);
        )+
        composed
    }};
}

/* BoxTransducer */

/// A boxed transformer with input `I` and accumulator `A`.
pub type BoxTransformer<'a, I, A> = Box<dyn Transformer<I, Acc = A> + 'a>;

/// Type erased stage-builder for chains whose stages keep the item type.
///
/// Used to build chains at runtime, see [`comp_all`].
pub struct BoxTransducer<'a, I, A> {
    operation: Rc<dyn Fn(BoxTransformer<'a, I, A>) -> BoxTransformer<'a, I, A> + 'a>,
}

impl<'a, I, A> BoxTransducer<'a, I, A> {
    pub fn new<T>(stage: T) -> Self
    where
        T: Transducer<BoxTransformer<'a, I, A>> + 'a,
        T::Output: Transformer<I, Acc = A> + 'a,
    {
        Self {
            operation: Rc::new(
                move |next: BoxTransformer<'a, I, A>| -> BoxTransformer<'a, I, A> {
                    Box::new(stage.apply(next))
                },
            ),
        }
    }
}

impl<'a, I, A> Clone for BoxTransducer<'a, I, A> {
    fn clone(&self) -> Self {
        Self {
            operation: self.operation.clone(),
        }
    }
}

impl<'a, I, A, X> Transducer<X> for BoxTransducer<'a, I, A>
where
    X: Transformer<I, Acc = A> + 'a,
{
    type Output = BoxTransformer<'a, I, A>;

    fn apply(&self, next: X) -> Self::Output {
        (self.operation)(Box::new(next))
    }
}

fn chain<'a, I, A>(outer: BoxTransducer<'a, I, A>, inner: BoxTransducer<'a, I, A>) -> BoxTransducer<'a, I, A>
where
    I: 'a,
    A: 'a,
{
    BoxTransducer {
        operation: Rc::new(move |next: BoxTransformer<'a, I, A>| -> BoxTransformer<'a, I, A> {
            (outer.operation)((inner.operation)(next))
        }),
    }
}

/// Composes a runtime list of stages, the first being the outermost.
///
/// Fails with [`Error::TooFewStages`] if less than two stages are given.
pub fn comp_all<'a, I, A>(
    stages: Vec<BoxTransducer<'a, I, A>>,
) -> Result<BoxTransducer<'a, I, A>, Error>
where
    I: 'a,
    A: 'a,
{
    let given = stages.len();
    let mut stages = stages.into_iter();

    match (stages.next(), stages.next()) {
        (Some(first), Some(second)) => Ok(stages.fold(chain(first, second), chain)),
        _ => Err(Error::TooFewStages { given }),
    }
}
