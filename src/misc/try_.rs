/// Outcome of a fallible reducing function.
///
/// Lets [`try_transduce`](crate::try_transduce) work with both `Result` and
/// `Option` returning functions.
pub trait Try {
    type Output;
    type Residual;

    fn branch(self) -> Result<Self::Output, Self::Residual>;
    fn from_output(output: Self::Output) -> Self;
    fn from_residual(residual: Self::Residual) -> Self;
}

impl<T> Try for Option<T> {
    type Output = T;
    type Residual = ();

    fn branch(self) -> Result<T, ()> {
        self.ok_or(())
    }

    fn from_output(output: T) -> Self {
        Some(output)
    }

    fn from_residual(_: ()) -> Self {
        None
    }
}

impl<T, E> Try for Result<T, E> {
    type Output = T;
    type Residual = E;

    fn branch(self) -> Result<T, E> {
        self
    }

    fn from_output(output: T) -> Self {
        Ok(output)
    }

    fn from_residual(residual: E) -> Self {
        Err(residual)
    }
}
