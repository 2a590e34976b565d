use std::marker::PhantomData;
use std::mem::replace;

use crate::{Error, Step, Transducer, Transformer};

/* PartitionAll */

pub struct PartitionAll<I> {
    size: usize,
    _marker: PhantomData<fn(I)>,
}

/// Groups items into `Vec`s of `size` items, the last group may be shorter.
///
/// Fails with [`Error::InvalidPartitionSize`] if `size` is zero.
pub fn partition_all<I>(size: usize) -> Result<PartitionAll<I>, Error> {
    if size == 0 {
        return Err(Error::InvalidPartitionSize);
    }

    Ok(PartitionAll {
        size,
        _marker: PhantomData,
    })
}

impl<I> Clone for PartitionAll<I> {
    fn clone(&self) -> Self {
        Self {
            size: self.size,
            _marker: PhantomData,
        }
    }
}

impl<I> Copy for PartitionAll<I> {}

impl<X, I> Transducer<X> for PartitionAll<I> {
    type Output = PartitionAllTransformer<X, I>;

    fn apply(&self, next: X) -> Self::Output {
        PartitionAllTransformer {
            base: next,
            size: self.size,
            buffer: Vec::with_capacity(self.size),
        }
    }
}

/* PartitionAllTransformer */

pub struct PartitionAllTransformer<X, I> {
    base: X,
    size: usize,
    buffer: Vec<I>,
}

impl<X, I> Transformer<I> for PartitionAllTransformer<X, I>
where
    X: Transformer<Vec<I>>,
{
    type Acc = X::Acc;

    fn init(&mut self) -> Self::Acc {
        self.base.init()
    }

    fn step(&mut self, acc: Self::Acc, item: I) -> Step<Self::Acc> {
        self.buffer.push(item);

        if self.buffer.len() < self.size {
            return Step::Continue(acc);
        }

        let group = replace(&mut self.buffer, Vec::with_capacity(self.size));

        self.base.step(acc, group)
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        let acc = if self.buffer.is_empty() {
            acc
        } else {
            let group = replace(&mut self.buffer, Vec::new());

            self.base.step(acc, group).into_inner()
        };

        self.base.complete(acc)
    }

    fn is_full(&self) -> bool {
        self.base.is_full()
    }
}
