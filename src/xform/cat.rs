use crate::{comp, map, Comp, Map, Step, Transducer, Transformer};

/* Cat */

#[derive(Debug, Default, Clone, Copy)]
pub struct Cat;

/// Flattens one level: every item is itself iterable and its elements are
/// forwarded one by one.
pub fn cat() -> Cat {
    Cat
}

/// Maps every item to an iterable and flattens the result, `comp(map(f), cat())`.
pub fn mapcat<O>(operation: O) -> Comp<Map<O>, Cat> {
    comp(map(operation), cat())
}

impl<X> Transducer<X> for Cat {
    type Output = CatTransformer<X>;

    fn apply(&self, next: X) -> Self::Output {
        CatTransformer { base: next }
    }
}

/* CatTransformer */

pub struct CatTransformer<X> {
    base: X,
}

impl<I, X> Transformer<I> for CatTransformer<X>
where
    I: IntoIterator,
    X: Transformer<I::Item>,
{
    type Acc = X::Acc;

    fn init(&mut self) -> Self::Acc {
        self.base.init()
    }

    fn step(&mut self, acc: Self::Acc, item: I) -> Step<Self::Acc> {
        self.base.step_iter(acc, item)
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
    fn cat_flattens_one_level() {
        let out = into(Vec::new(), cat(), vec![vec![1, 2], vec![], vec![3]]).unwrap();

        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn cat_propagates_termination_out_of_inner_items() {
        let xform = comp(cat(), take(3));
        let out = into(Vec::new(), xform, vec![vec![1, 2], vec![3, 4], vec![5]]).unwrap();

        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn mapcat_maps_then_flattens() {
        let out = into(String::new(), mapcat(|s: &'static str| s.chars().rev()), vec!["ab", "cd"]).unwrap();

        assert_eq!(out, "badc");
    }
}
