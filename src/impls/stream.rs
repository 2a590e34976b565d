use futures::executor::block_on_stream;
use futures::stream::Stream;

use crate::{Error, Reducible, Step, Transformer};

/// Source draining a [`Stream`] on the current thread.
///
/// Every item is awaited with [`block_on_stream`], the reduction itself stays
/// synchronous.
pub struct BlockingStream<S> {
    stream: S,
}

impl<S> BlockingStream<S>
where
    S: Stream + Unpin,
{
    pub fn new(stream: S) -> Self {
        Self { stream }
    }
}

impl<S> Reducible for BlockingStream<S>
where
    S: Stream + Unpin,
{
    type Item = S::Item;

    fn kind(&self) -> &'static str {
        "stream"
    }

    fn fold_with<X>(self, transformer: &mut X, acc: X::Acc) -> Result<Step<X::Acc>, Error>
    where
        X: Transformer<S::Item>,
    {
        Ok(transformer.step_iter(acc, block_on_stream(self.stream)))
    }
}

#[cfg(test)]
mod tests {
    use futures::stream;

    use crate::*;

    #[test]
    fn drains_stream() {
        let source = BlockingStream::new(stream::iter(vec![1, 2, 3, 4]));
        let out = into(Vec::new(), filter(|x: &i32| x % 2 == 0), source).unwrap();

        assert_eq!(out, vec![2, 4]);
    }
}
