use crate::{Error, Reducible, Step, Transformer};

impl<'a, T> Reducible for &'a [T] {
    type Item = &'a T;

    fn kind(&self) -> &'static str {
        "slice"
    }

    fn fold_with<X>(self, transformer: &mut X, acc: X::Acc) -> Result<Step<X::Acc>, Error>
    where
        X: Transformer<&'a T>,
    {
        Ok(transformer.step_iter(acc, self))
    }
}

impl<'a, T> Reducible for &'a Vec<T> {
    type Item = &'a T;

    fn kind(&self) -> &'static str {
        "slice"
    }

    fn fold_with<X>(self, transformer: &mut X, acc: X::Acc) -> Result<Step<X::Acc>, Error>
    where
        X: Transformer<&'a T>,
    {
        self.as_slice().fold_with(transformer, acc)
    }
}
