#[macro_use]
extern crate quickcheck_macros;

use quickcheck::{Arbitrary, Gen};

mod ordered;

/// An enum for the mutating operations a quicktest applies to a table.
#[derive(Copy, Clone, Debug)]
pub enum Op<K, V> {
    /// Put the K, V into the table
    Put(K, V),
    /// Remove the K from the table
    DeleteKey(K),
    /// Remove the smallest key
    DeleteMin,
    /// Remove the largest key
    DeleteMax,
}

impl<K, V> Arbitrary for Op<K, V>
where
    K: Arbitrary,
    V: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 2, 3]).unwrap() {
            0 => Op::Put(K::arbitrary(g), V::arbitrary(g)),
            1 => Op::DeleteKey(K::arbitrary(g)),
            2 => Op::DeleteMin,
            3 => Op::DeleteMax,
            _ => unreachable!(),
        }
    }
}
