pub mod cat;
pub mod drop;
pub mod drop_while;
pub mod filter;
pub mod identity;
pub mod keep;
pub mod map;
pub mod partition_all;
pub mod partition_by;
pub mod take;
pub mod take_nth;
pub mod take_while;
pub mod wrap;

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::*;

    #[test]
    fn test_fused_chain() {
        let xform = comp!(
            map(|x: i32| x + 1),
            filter(|x: &i32| x % 3 != 0),
            crate::drop(1),
            partition_all(2).unwrap(),
            take(2),
        );

        let out = into(Vec::new(), &xform, 0..100).unwrap();

        assert_eq!(out, vec![vec![2, 4], vec![5, 7]]);
    }

    #[test]
    fn test_complete_runs_once() {
        struct Counting<'a> {
            completed: &'a Cell<usize>,
        }

        impl<'a> Transformer<i32> for Counting<'a> {
            type Acc = i32;

            fn init(&mut self) -> i32 {
                0
            }

            fn step(&mut self, acc: i32, item: i32) -> Step<i32> {
                Step::Continue(acc + item)
            }

            fn complete(&mut self, acc: i32) -> i32 {
                self.completed.set(self.completed.get() + 1);

                acc
            }
        }

        let completed = Cell::new(0);
        let xform = comp(take(2), partition_all(5).unwrap());
        let transformer = xform.apply(map(|group: Vec<i32>| group.len() as i32).apply(Counting {
            completed: &completed,
        }));

        let out = reduce_init(transformer, vec![7, 8, 9]).unwrap();

        assert_eq!(out, 2);
        assert_eq!(completed.get(), 1);
    }

    #[test]
    fn test_stacked_buffers_flush_in_order() {
        let xform = comp(partition_all(3).unwrap(), partition_all(2).unwrap());

        let out = into(Vec::new(), &xform, 1..=5).unwrap();

        assert_eq!(out, vec![vec![vec![1, 2, 3], vec![4, 5]]]);
    }
}
