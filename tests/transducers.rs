use std::cell::Cell;
use std::collections::{BTreeMap, HashMap};
use std::io::Cursor;

use transducers::{
    cat, comp, comp_all, guard, identity, into, into_assoc, keep, key, map, mapcat, none, partition_by,
    take, take_nth, take_while, transduce, value, BoxTransducer, ByteStream, Error, Iterable, Pair,
};

#[test]
fn into_vec_and_string() {
    assert_eq!(into(vec![], map(|x: i32| x * 2), [1, 2, 3]).unwrap(), vec![2, 4, 6]);
    assert_eq!(into(String::new(), identity(), "abc").unwrap(), "abc");
}

#[test]
fn partition_by_identity() {
    let out = into(Vec::new(), partition_by(|x: &i32| *x), vec![1, 1, 2, 2, 2, 1]).unwrap();

    assert_eq!(out, vec![vec![1, 1], vec![2, 2, 2], vec![1]]);
}

#[test]
fn take_nth_keeps_every_nth_counting_from_one() {
    let out = into(Vec::new(), take_nth(3).unwrap(), 1..=10).unwrap();

    assert_eq!(out, vec![3, 6, 9]);
    assert!(matches!(take_nth(0), Err(Error::InvalidStep)));
}

#[test]
fn comp_all_requires_two_stages() {
    let stages: Vec<BoxTransducer<i32, Vec<i32>>> = vec![BoxTransducer::new(map(|x: i32| x + 1))];

    assert!(matches!(comp_all(stages), Err(Error::TooFewStages { given: 1 })));
}

#[test]
fn comp_all_chains_boxed_stages() {
    let stages: Vec<BoxTransducer<i32, Option<Vec<i32>>>> = vec![
        BoxTransducer::new(map(|x: i32| x + 1)),
        BoxTransducer::new(take(2)),
        BoxTransducer::new(keep(|x: i32| if x > 1 { Some(x) } else { none() })),
    ];
    let xform = comp_all(stages).unwrap();

    assert_eq!(into(Vec::new(), &xform, vec![0, 5, 9]).unwrap(), vec![6]);
    assert_eq!(into(Vec::new(), &xform, vec![4, 5, 9]).unwrap(), vec![5, 6]);
}

#[test]
fn mapcat_over_words() {
    let xform = comp(mapcat(|line: &'static str| line.split(' ')), take_while(|w: &&str| *w != "stop"));
    let out = into(Vec::new(), xform, vec!["a b", "c stop d", "e"]).unwrap();

    assert_eq!(out, vec!["a", "b", "c"]);
}

#[test]
fn nested_cat_terminates_whole_reduction() {
    let pulled = Cell::new(0);
    let source = Iterable::new(vec![vec![1, 2, 3], vec![4, 5], vec![6]].into_iter().inspect(|_| pulled.set(pulled.get() + 1)));

    let out = into(Vec::new(), comp(cat(), take(4)), source).unwrap();

    assert_eq!(out, vec![1, 2, 3, 4]);
    assert_eq!(pulled.get(), 2);
}

#[test]
fn map_entries_through_key_and_value() {
    let mut scores = BTreeMap::new();
    scores.insert("ann", 3);
    scores.insert("bob", 5);

    let values = transduce(map(value()), |acc: i32, x: i32| acc + x, 0, scores.clone()).unwrap();
    let swapped: HashMap<i32, &str> = into_assoc(
        HashMap::new(),
        map(|pair: Pair<&'static str, i32>| Pair::new(pair.value, pair.key)),
        scores.clone(),
    )
    .unwrap();
    let keys = into(Vec::new(), keep(|pair: Pair<&'static str, i32>| key()(pair).ok()), scores).unwrap();

    assert_eq!(values, 8);
    assert_eq!(swapped[&5], "bob");
    assert_eq!(keys, vec!["ann", "bob"]);
}

#[test]
fn guard_splits_good_and_bad_input() {
    let out = into(Vec::new(), map(guard(|s: &&str| s.parse::<u32>())), vec!["7", "x"]).unwrap();
    let tuples: Vec<_> = out.into_iter().map(|guarded| guarded.into_tuple()).collect();

    assert_eq!(tuples[0].0, "7");
    assert!(tuples[0].1);
    assert!(tuples[0].2.is_none());
    assert_eq!(tuples[1].0, "x");
    assert!(!tuples[1].1);
    assert!(tuples[1].2.is_some());
}

#[test]
fn byte_stream_lines() {
    let input = Cursor::new(b"ab\ncd\n".to_vec());
    let xform = comp(partition_by(|b: &u8| *b == b'\n'), keep(|line: Vec<u8>| {
        if line == b"\n" {
            None
        } else {
            String::from_utf8(line).ok()
        }
    }));

    let out = into(Vec::new(), xform, ByteStream::new(input)).unwrap();

    assert_eq!(out, vec!["ab", "cd"]);
}
