use crate::{Step, Transducer, Transformer};

/* DropFirst */

#[derive(Debug, Clone, Copy)]
pub struct DropFirst {
    len: usize,
}

/// Discards the first `len` items and forwards everything after them.
pub fn drop(len: usize) -> DropFirst {
    DropFirst { len }
}

impl<X> Transducer<X> for DropFirst {
    type Output = DropFirstTransformer<X>;

    fn apply(&self, next: X) -> Self::Output {
        DropFirstTransformer {
            base: next,
            remaining: self.len,
        }
    }
}

/* DropFirstTransformer */

pub struct DropFirstTransformer<X> {
    base: X,
    remaining: usize,
}

impl<I, X> Transformer<I> for DropFirstTransformer<X>
where
    X: Transformer<I>,
{
    type Acc = X::Acc;

    fn init(&mut self) -> Self::Acc {
        self.base.init()
    }

    fn step(&mut self, acc: Self::Acc, item: I) -> Step<Self::Acc> {
        if self.remaining > 0 {
            self.remaining -= 1;

            Step::Continue(acc)
        } else {
            self.base.step(acc, item)
        }
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        self.base.complete(acc)
    }

    fn is_full(&self) -> bool {
        self.base.is_full()
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn drop_discards_prefix() {
        let out = into(Vec::new(), crate::drop(2), vec![1, 2, 3, 4]).unwrap();

        assert_eq!(out, vec![3, 4]);
    }

    #[test]
    fn drop_more_than_available() {
        let out = into(Vec::new(), crate::drop(9), vec![1, 2, 3]).unwrap();

        assert!(out.is_empty());
    }
}
