//! Property-based tests for stage fusion and reduction.

use proptest::prelude::*;
use transducers::{
    comp, compose, filter, into, is_reduced, keep, map, partition_all, reduced, remove, take, unreduced, Step,
};

proptest! {
    #[test]
    fn fused_chain_matches_iterator_pipeline(items in prop::collection::vec(-1000i64..1000, 0..200)) {
        let xform = comp!(
            map(|x: i64| x * 3),
            filter(|x: &i64| x % 2 == 0),
            keep(|x: i64| if x > 0 { Some(x - 1) } else { None }),
            remove(|x: &i64| x % 5 == 0),
        );

        let fused = into(Vec::new(), xform, items.clone()).unwrap();
        let expected: Vec<i64> = items
            .into_iter()
            .map(|x| x * 3)
            .filter(|x| x % 2 == 0)
            .filter_map(|x| if x > 0 { Some(x - 1) } else { None })
            .filter(|x| x % 5 != 0)
            .collect();

        prop_assert_eq!(fused, expected);
    }

    #[test]
    fn take_forwards_min_of_n_and_len(items in prop::collection::vec(any::<u8>(), 0..50), n in 0usize..60) {
        let out = into(Vec::new(), take(n), items.clone()).unwrap();

        prop_assert_eq!(out.len(), n.min(items.len()));
        prop_assert_eq!(&out[..], &items[..out.len()]);
    }

    #[test]
    fn partition_all_group_sizes(len in 0usize..100, size in 1usize..12) {
        let groups = into(Vec::new(), partition_all(size).unwrap(), 0..len).unwrap();

        prop_assert_eq!(groups.len(), (len + size - 1) / size);

        if let Some((last, full)) = groups.split_last() {
            prop_assert!(full.iter().all(|group| group.len() == size));
            prop_assert!(!last.is_empty() && last.len() <= size);
        }

        prop_assert_eq!(groups.concat(), (0..len).collect::<Vec<_>>());
    }

    #[test]
    fn compose_applies_inner_first(x in -10_000i32..10_000) {
        let mut f = compose(|y: i32| y - 7, |y: i32| y * 2);

        prop_assert_eq!(f(x), x * 2 - 7);
    }

    #[test]
    fn reduced_round_trip(x in any::<i64>()) {
        prop_assert!(is_reduced(&reduced(x)));
        prop_assert!(!is_reduced(&Step::Continue(x)));
        prop_assert_eq!(unreduced(reduced(x)), x);
    }
}
