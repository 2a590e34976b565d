use std::ops::Deref;

/// Marker wrapping the accumulator of a fold that must not consume any
/// further input.
///
/// A `Reduced` value is terminal: it is never fed back into
/// [`Transformer::step`](crate::Transformer::step). Every stage that sees it
/// returned from the next stage stops forwarding and hands it upwards, until the
/// dispatcher unwraps it with [`deref`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reduced<T>(T);

impl<T> Reduced<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Reduced<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

/// Outcome of a single [`Transformer::step`](crate::Transformer::step).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step<T> {
    /// Keep feeding input.
    Continue(T),

    /// Stop the fold, the wrapped value is final.
    Reduced(Reduced<T>),
}

impl<T> Step<T> {
    pub fn is_reduced(&self) -> bool {
        matches!(self, Step::Reduced(_))
    }

    /// Wraps the accumulator into a `Reduced` unless it already is one.
    pub fn ensure_reduced(self) -> Self {
        match self {
            Step::Continue(value) => Step::Reduced(Reduced::new(value)),
            reduced => reduced,
        }
    }

    /// Returns the accumulator, whether the fold was terminated or not.
    pub fn into_inner(self) -> T {
        match self {
            Step::Continue(value) => value,
            Step::Reduced(reduced) => reduced.into_inner(),
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Step::Continue(value) => value,
            Step::Reduced(reduced) => &reduced.0,
        }
    }

    /// Maps the accumulator while keeping the termination state.
    pub fn map<U, O>(self, operation: O) -> Step<U>
    where
        O: FnOnce(T) -> U,
    {
        match self {
            Step::Continue(value) => Step::Continue(operation(value)),
            Step::Reduced(reduced) => Step::Reduced(Reduced::new(operation(reduced.into_inner()))),
        }
    }
}

impl<T> From<Reduced<T>> for Step<T> {
    fn from(reduced: Reduced<T>) -> Self {
        Step::Reduced(reduced)
    }
}

/// Terminates a fold with `value` as the final accumulator.
pub fn reduced<T>(value: T) -> Step<T> {
    Step::Reduced(Reduced::new(value))
}

pub fn is_reduced<T>(step: &Step<T>) -> bool {
    step.is_reduced()
}

pub fn ensure_reduced<T>(step: Step<T>) -> Step<T> {
    step.ensure_reduced()
}

pub fn deref<T>(reduced: Reduced<T>) -> T {
    reduced.into_inner()
}

/// Unwraps the accumulator of `step` if it was reduced, returns it as is otherwise.
pub fn unreduced<T>(step: Step<T>) -> T {
    match step {
        Step::Continue(value) => value,
        Step::Reduced(reduced) => deref(reduced),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_round_trip() {
        assert_eq!(unreduced(reduced(5)), 5);
        assert!(is_reduced(&reduced(5)));
        assert!(!is_reduced(&Step::Continue(5)));
    }

    #[test]
    fn ensure_reduced_does_not_double_wrap() {
        let once = ensure_reduced(reduced("x"));
        let twice = ensure_reduced(once);

        assert_eq!(twice, reduced("x"));
        assert_eq!(ensure_reduced(Step::Continue(1)), reduced(1));
    }

    #[test]
    fn map_keeps_termination_state() {
        assert_eq!(reduced(2).map(|x| x * 10), reduced(20));
        assert_eq!(Step::Continue(2).map(|x| x + 1), Step::Continue(3));
    }

    #[test]
    fn deref_exposes_value() {
        let value = Reduced::new(vec![1, 2]);

        assert_eq!(value.len(), 2);
        assert_eq!(deref(value), vec![1, 2]);
    }
}
