use super::{Reduced, Step};

/// The `Transformer` trait encapsulates one stage of a [fold][fold]. It is
/// fed items one by one using the `step` method. At the end, once all items
/// have been stepped, `complete` is called exactly once to flush whatever the
/// stage still buffers.
///
/// Stages wrap the next transformer of the chain and must call through to its
/// `step` when passing an item on, and to its `complete` when finishing.
///
/// [fold]: https://doc.rust-lang.org/std/iter/trait.Iterator.html#method.fold
pub trait Transformer<I> {
    /// The accumulator threaded through the fold.
    type Acc;

    /// Returns the identity accumulator, used when no seed is supplied.
    fn init(&mut self) -> Self::Acc;

    /// Consume next item and return the new accumulator.
    fn step(&mut self, acc: Self::Acc, item: I) -> Step<Self::Acc>;

    /// Step through the items of `iter` until it is exhausted or the fold is
    /// terminated.
    ///
    /// The default implementation checks `is_full` before pulling every item,
    /// so a full transformer never makes the iterator produce another element.
    fn step_iter<T>(&mut self, mut acc: Self::Acc, iter: T) -> Step<Self::Acc>
    where
        T: IntoIterator<Item = I>,
        Self: Sized,
    {
        let mut iter = iter.into_iter();

        loop {
            if self.is_full() {
                return Step::Reduced(Reduced::new(acc));
            }

            let item = match iter.next() {
                Some(item) => item,
                None => return Step::Continue(acc),
            };

            match self.step(acc, item) {
                Step::Continue(next) => acc = next,
                reduced => return reduced,
            }
        }
    }

    /// Finish the fold, produce the final accumulator.
    fn complete(&mut self, acc: Self::Acc) -> Self::Acc;

    /// Hint whether this `Transformer` would like to stop processing
    /// further items, e.g. if a `take` has been satisfied.
    fn is_full(&self) -> bool {
        false
    }
}

impl<'a, I, X> Transformer<I> for &'a mut X
where
    X: Transformer<I> + ?Sized,
{
    type Acc = X::Acc;

    fn init(&mut self) -> Self::Acc {
        (**self).init()
    }

    fn step(&mut self, acc: Self::Acc, item: I) -> Step<Self::Acc> {
        (**self).step(acc, item)
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        (**self).complete(acc)
    }

    fn is_full(&self) -> bool {
        (**self).is_full()
    }
}

impl<I, X> Transformer<I> for Box<X>
where
    X: Transformer<I> + ?Sized,
{
    type Acc = X::Acc;

    fn init(&mut self) -> Self::Acc {
        (**self).init()
    }

    fn step(&mut self, acc: Self::Acc, item: I) -> Step<Self::Acc> {
        (**self).step(acc, item)
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        (**self).complete(acc)
    }

    fn is_full(&self) -> bool {
        (**self).is_full()
    }
}
