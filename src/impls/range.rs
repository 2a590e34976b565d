use std::ops::{Range, RangeFrom, RangeInclusive};

use crate::{Error, Reducible, Step, Transformer};

impl<T> Reducible for Range<T>
where
    Range<T>: Iterator<Item = T>,
{
    type Item = T;

    fn kind(&self) -> &'static str {
        "range"
    }

    fn fold_with<X>(self, transformer: &mut X, acc: X::Acc) -> Result<Step<X::Acc>, Error>
    where
        X: Transformer<T>,
    {
        Ok(transformer.step_iter(acc, self))
    }
}

impl<T> Reducible for RangeInclusive<T>
where
    RangeInclusive<T>: Iterator<Item = T>,
{
    type Item = T;

    fn kind(&self) -> &'static str {
        "range"
    }

    fn fold_with<X>(self, transformer: &mut X, acc: X::Acc) -> Result<Step<X::Acc>, Error>
    where
        X: Transformer<T>,
    {
        Ok(transformer.step_iter(acc, self))
    }
}

/// Unbounded, the reduction only ends once a stage terminates it.
impl<T> Reducible for RangeFrom<T>
where
    RangeFrom<T>: Iterator<Item = T>,
{
    type Item = T;

    fn kind(&self) -> &'static str {
        "range-from"
    }

    fn fold_with<X>(self, transformer: &mut X, acc: X::Acc) -> Result<Step<X::Acc>, Error>
    where
        X: Transformer<T>,
    {
        Ok(transformer.step_iter(acc, self))
    }
}
