use ordered_st::{Error, OrderedSymbolTable};

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a table and a `BTreeMap`.
/// This way we can ensure that after a random smattering of puts
/// and deletes we have the same set of keys in both.
fn do_ops<K, V>(ops: &[Op<K, V>], table: &mut OrderedSymbolTable<K, V>, map: &mut BTreeMap<K, V>)
where
    K: Clone + Ord + std::fmt::Debug,
    V: Clone + PartialEq + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Put(k, v) => {
                table.put(k.clone(), v.clone());
                map.insert(k.clone(), v.clone());
            }
            Op::DeleteKey(k) => {
                table.delete_key(k);
                map.remove(k);
            }
            Op::DeleteMin => {
                let expected = map.keys().next().cloned();
                let expected = expected.and_then(|k| map.remove_entry(&k));
                assert_eq!(table.delete_min().ok(), expected);
            }
            Op::DeleteMax => {
                let expected = map.keys().next_back().cloned();
                let expected = expected.and_then(|k| map.remove_entry(&k));
                assert_eq!(table.delete_max().ok(), expected);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut table = OrderedSymbolTable::new();
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut table, &mut map);
    table.size() == map.len() && map.iter().all(|(key, value)| table.get(key) == Ok(value))
}

#[quickcheck]
fn iterates_like_a_btreemap(ops: Vec<Op<i16, u8>>) -> bool {
    let mut table = OrderedSymbolTable::new();
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut table, &mut map);
    table.iter().eq(map.iter()) && table.iter().len() == map.len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut table = OrderedSymbolTable::new();
    for x in &xs {
        table.put(*x, *x);
    }

    xs.iter().all(|x| table.get(x) == Ok(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let table: OrderedSymbolTable<_, _> = xs.iter().map(|&x| (x, x)).collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| table.get(x) == Err(Error::KeyNotFound))
}

#[quickcheck]
fn last_put_wins(xs: Vec<(i8, u16)>) -> bool {
    let table: OrderedSymbolTable<_, _> = xs.iter().copied().collect();
    let expected: BTreeMap<_, _> = xs.iter().copied().collect();

    expected.iter().all(|(k, v)| table.get(k) == Ok(v))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut table = OrderedSymbolTable::new();
    for x in &xs {
        table.put(*x, *x);
    }
    for delete in &deletes {
        table.delete_key(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !table.contains(x))
        && still_present.iter().all(|x| table.contains(x))
}

#[quickcheck]
fn min_and_max_track_extremes(xs: Vec<i8>) -> bool {
    let table: OrderedSymbolTable<_, _> = xs.iter().map(|&x| (x, x)).collect();

    match (xs.iter().min(), xs.iter().max()) {
        (Some(min), Some(max)) => table.min() == Ok(min) && table.max() == Ok(max),
        _ => table.min() == Err(Error::EmptyTree) && table.max() == Err(Error::EmptyTree),
    }
}

#[quickcheck]
fn range_len_matches_linear_scan(xs: Vec<i8>, lo: i8, hi: i8) -> bool {
    let table: OrderedSymbolTable<_, _> = xs.iter().map(|&x| (x, ())).collect();
    let expected = table.keys().filter(|&&k| lo <= k && k <= hi).count();

    table.range_len(&lo, &hi) == expected
}

#[test]
fn deleting_extremes_exposes_next_extremes() {
    let mut table: OrderedSymbolTable<_, _> =
        [5, 3, 8, 1, 4, 7, 9].into_iter().map(|k| (k, k.to_string())).collect();

    assert_eq!(table.delete_min().map(|(k, _)| k), Ok(1));
    assert_eq!(table.min().map(String::as_str), Ok("3"));
    assert_eq!(table.delete_max().map(|(k, _)| k), Ok(9));
    assert_eq!(table.max().map(String::as_str), Ok("8"));
    assert_eq!(table.max_key(), Ok(&8));
    assert_eq!(table.size(), 5);
}
