use crate::{Error, Reducible, Step, Transformer};

/// Adapts any [`IntoIterator`] into a source.
///
/// Items are pulled lazily, so wrapping an infinite or side effecting iterator
/// is fine as long as some stage terminates the reduction.
#[derive(Debug, Clone)]
pub struct Iterable<I> {
    iter: I,
}

impl<I> Iterable<I>
where
    I: Iterator,
{
    pub fn new<T>(iter: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: iter.into_iter(),
        }
    }
}

impl<I> Reducible for Iterable<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn kind(&self) -> &'static str {
        "iterable"
    }

    fn fold_with<X>(self, transformer: &mut X, acc: X::Acc) -> Result<Step<X::Acc>, Error>
    where
        X: Transformer<I::Item>,
    {
        Ok(transformer.step_iter(acc, self.iter))
    }
}
