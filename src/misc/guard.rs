/// Outcome of running a fallible check through [`guard`].
#[derive(Debug, Clone, PartialEq)]
pub struct Guarded<T, E> {
    pub value: T,
    pub error: Option<E>,
}

impl<T, E> Guarded<T, E> {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }

    /// `(value, succeeded, error)`
    pub fn into_tuple(self) -> (T, bool, Option<E>) {
        let succeeded = self.succeeded();

        (self.value, succeeded, self.error)
    }
}

impl<T, E> From<Guarded<T, E>> for (T, bool, Option<E>) {
    fn from(guarded: Guarded<T, E>) -> Self {
        guarded.into_tuple()
    }
}

/// Wraps a fallible check so that its failure is captured next to the
/// checked value instead of aborting the reduction.
///
/// ```
/// use transducers::{guard, into, map};
///
/// let parse = guard(|s: &&str| s.parse::<u8>());
/// let out = into(Vec::new(), map(parse), vec!["1", "x"]).unwrap();
///
/// assert!(out[0].succeeded());
/// assert!(!out[1].succeeded());
/// ```
pub fn guard<T, R, E, F>(mut check: F) -> impl FnMut(T) -> Guarded<T, E> + Clone
where
    F: FnMut(&T) -> Result<R, E> + Clone,
{
    move |value: T| {
        let error = check(&value).err();

        Guarded { value, error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn even(x: &i32) -> Result<(), String> {
        if x % 2 == 0 {
            Ok(())
        } else {
            Err(format!("{} is odd", x))
        }
    }

    #[test]
    fn guard_captures_success_and_failure() {
        let mut check = guard(even);

        assert_eq!(check(2).into_tuple(), (2, true, None));
        assert_eq!(check(3).into_tuple(), (3, false, Some(String::from("3 is odd"))));
    }
}
