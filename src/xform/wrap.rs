use std::marker::PhantomData;

use crate::misc::Try;
use crate::{reduced, Step, Transformer};

/// Source of the identity accumulator of a [`Wrap`].
pub trait Init {
    type Output;

    fn init(&mut self) -> Self::Output;
}

impl<A, F> Init for F
where
    F: FnMut() -> A,
{
    type Output = A;

    fn init(&mut self) -> A {
        self()
    }
}

/// Uses a clone of the supplied seed as identity accumulator.
#[derive(Debug, Clone)]
pub struct Seed<A>(A);

impl<A> Seed<A> {
    pub fn new(value: A) -> Self {
        Self(value)
    }
}

impl<A: Clone> Init for Seed<A> {
    type Output = A;

    fn init(&mut self) -> A {
        self.0.clone()
    }
}

/* Wrap */

/// Turns a plain reducing function `FnMut(acc, item) -> acc` into the
/// innermost transformer of a chain.
pub struct Wrap<F, N> {
    operation: F,
    init: N,
}

impl<F, N> Wrap<F, N> {
    pub fn with_init(operation: F, init: N) -> Self {
        Self { operation, init }
    }
}

/// Wraps a reducing function, `A::default()` being its identity accumulator.
///
/// ```
/// use transducers::{reduce, wrap};
///
/// let sum = reduce(wrap(|acc: i32, x: i32| acc + x), 0, vec![1, 2, 3]).unwrap();
/// assert_eq!(sum, 6);
/// ```
pub fn wrap<A, F>(operation: F) -> Wrap<F, fn() -> A>
where
    A: Default,
{
    Wrap {
        operation,
        init: A::default,
    }
}

impl<I, A, F, N> Transformer<I> for Wrap<F, N>
where
    F: FnMut(A, I) -> A,
    N: Init<Output = A>,
{
    type Acc = A;

    fn init(&mut self) -> A {
        self.init.init()
    }

    fn step(&mut self, acc: A, item: I) -> Step<A> {
        Step::Continue((self.operation)(acc, item))
    }

    fn complete(&mut self, acc: A) -> A {
        acc
    }
}

/* Fold */

/// Innermost transformer of [`transduce`](crate::transduce), a reducing
/// function that has no identity of its own.
///
/// The seed is handed in as `Some(seed)`. `init` answers `None` and a fold fed
/// with it ends right away, so the accumulator type needs neither `Clone` nor
/// `Default`.
pub struct Fold<F, A> {
    operation: F,
    _marker: PhantomData<fn() -> A>,
}

impl<F, A> Fold<F, A> {
    pub fn new(operation: F) -> Self {
        Self {
            operation,
            _marker: PhantomData,
        }
    }
}

impl<I, A, F> Transformer<I> for Fold<F, A>
where
    F: FnMut(A, I) -> A,
{
    type Acc = Option<A>;

    fn init(&mut self) -> Option<A> {
        None
    }

    fn step(&mut self, acc: Option<A>, item: I) -> Step<Option<A>> {
        match acc {
            Some(acc) => Step::Continue(Some((self.operation)(acc, item))),
            None => reduced(None),
        }
    }

    fn complete(&mut self, acc: Option<A>) -> Option<A> {
        acc
    }
}

/* TryWrap */

/// Innermost transformer for a fallible reducing function.
///
/// The accumulator is the function's return type itself; the first failure
/// terminates the fold with that failure as final accumulator.
pub struct TryWrap<F, N, R> {
    operation: F,
    init: N,
    _marker: PhantomData<fn() -> R>,
}

impl<F, N, R> TryWrap<F, N, R> {
    pub fn with_init(operation: F, init: N) -> Self {
        Self {
            operation,
            init,
            _marker: PhantomData,
        }
    }
}

impl<I, R, F, N> Transformer<I> for TryWrap<F, N, R>
where
    R: Try,
    F: FnMut(R::Output, I) -> R,
    N: Init<Output = R::Output>,
{
    type Acc = R;

    fn init(&mut self) -> R {
        R::from_output(self.init.init())
    }

    fn step(&mut self, acc: R, item: I) -> Step<R> {
        let acc = match acc.branch() {
            Ok(acc) => acc,
            Err(residual) => return reduced(R::from_residual(residual)),
        };

        match (self.operation)(acc, item).branch() {
            Ok(acc) => Step::Continue(R::from_output(acc)),
            Err(residual) => reduced(R::from_residual(residual)),
        }
    }

    fn complete(&mut self, acc: R) -> R {
        acc
    }
}
