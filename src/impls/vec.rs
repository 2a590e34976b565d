use std::collections::VecDeque;

use crate::{Error, Reducible, Sink, Step, Transformer};

impl<T> Reducible for Vec<T> {
    type Item = T;

    fn kind(&self) -> &'static str {
        "vec"
    }

    fn fold_with<X>(self, transformer: &mut X, acc: X::Acc) -> Result<Step<X::Acc>, Error>
    where
        X: Transformer<T>,
    {
        Ok(transformer.step_iter(acc, self))
    }
}

impl<T> Reducible for VecDeque<T> {
    type Item = T;

    fn kind(&self) -> &'static str {
        "vec-deque"
    }

    fn fold_with<X>(self, transformer: &mut X, acc: X::Acc) -> Result<Step<X::Acc>, Error>
    where
        X: Transformer<T>,
    {
        Ok(transformer.step_iter(acc, self))
    }
}

impl<T, const N: usize> Reducible for [T; N] {
    type Item = T;

    fn kind(&self) -> &'static str {
        "array"
    }

    fn fold_with<X>(self, transformer: &mut X, acc: X::Acc) -> Result<Step<X::Acc>, Error>
    where
        X: Transformer<T>,
    {
        Ok(transformer.step_iter(acc, IntoIterator::into_iter(self)))
    }
}

impl<T> Sink<T> for Vec<T> {
    fn append(&mut self, item: T) {
        self.push(item);
    }
}

impl<T> Sink<T> for VecDeque<T> {
    fn append(&mut self, item: T) {
        self.push_back(item);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use crate::*;

    #[test]
    fn vec_deque_round_trip() {
        let source: VecDeque<_> = vec![1, 2, 3].into();
        let out = into(VecDeque::new(), map(|x: i32| x * x), source).unwrap();

        assert_eq!(out, VecDeque::from(vec![1, 4, 9]));
    }

    #[test]
    fn array_source() {
        let out = into(Vec::new(), take(2), [String::from("a"), String::from("b"), String::from("c")]).unwrap();

        assert_eq!(out, vec!["a", "b"]);
    }

    #[test]
    fn into_appends_to_non_empty_seed() {
        let out = into(vec![0], identity(), vec![1, 2]).unwrap();

        assert_eq!(out, vec![0, 1, 2]);
    }
}
