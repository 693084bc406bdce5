use proptest::prelude::*;
use rusty_tables::{ChainedTable, HashTable, OpenAddressTable, UniversalTable};
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum TableOp {
    Insert(u16, u32),
    Delete(u16),
    Search(u16),
    Clear,
}

fn table_ops_strategy() -> impl Strategy<Value = Vec<TableOp>> {
    prop::collection::vec(
        prop_oneof![
            6 => (any::<u16>(), any::<u32>()).prop_map(|(k, v)| TableOp::Insert(k % 512, v)),
            3 => any::<u16>().prop_map(|k| TableOp::Delete(k % 512)),
            3 => any::<u16>().prop_map(|k| TableOp::Search(k % 512)),
            1 => Just(TableOp::Clear),
        ],
        0..400,
    )
}

/// Replays `ops` on `table` and on a `HashMap`, checking every answer matches.
fn check_against_model<T>(mut table: T, ops: &[TableOp]) -> Result<(), TestCaseError>
where
    T: HashTable<u16, u32>,
{
    let mut model: HashMap<u16, u32> = HashMap::new();
    for op in ops {
        match op {
            TableOp::Insert(k, v) => {
                prop_assert_eq!(model.insert(*k, *v), table.insert(*k, *v));
            }
            TableOp::Delete(k) => {
                prop_assert_eq!(model.remove(k), table.delete(k));
            }
            TableOp::Search(k) => {
                prop_assert_eq!(model.get(k), table.search(k));
            }
            TableOp::Clear => {
                model.clear();
                table.clear();
            }
        }
        prop_assert_eq!(model.len(), table.size());
    }
    let mut keys: Vec<u16> = table.keys().into_iter().copied().collect();
    keys.sort();
    let mut expected: Vec<u16> = model.keys().copied().collect();
    expected.sort();
    prop_assert_eq!(expected, keys);
    Ok(())
}

proptest! {
    #[test]
    fn prop_chained_matches_model(ops in table_ops_strategy()) {
        check_against_model(ChainedTable::<u16, u32>::new(), &ops)?;
    }

    #[test]
    fn prop_universal_matches_model(ops in table_ops_strategy(), seed in any::<u64>()) {
        check_against_model(UniversalTable::<u16, u32>::with_seed(16, seed).unwrap(), &ops)?;
    }

    #[test]
    fn prop_open_addressing_matches_model(ops in table_ops_strategy()) {
        // 521 is prime and above the 512 distinct keys, so no insert can overflow.
        check_against_model(OpenAddressTable::<u16, u32>::with_capacity(521).unwrap(), &ops)?;
    }

    #[test]
    fn prop_latest_value_wins(key in any::<i64>(), first in any::<u32>(), second in any::<u32>()) {
        let mut table: ChainedTable<i64, u32> = ChainedTable::new();
        prop_assert_eq!(None, table.insert(key, first));
        prop_assert_eq!(Some(first), table.insert(key, second));
        prop_assert_eq!(Some(&second), table.search(&key));
        prop_assert_eq!(1, table.size());
    }

    #[test]
    fn prop_load_factor_stays_bounded(keys in prop::collection::hash_set(any::<u64>(), 0..2000)) {
        let mut table: ChainedTable<u64, u64> = ChainedTable::with_capacity(2).unwrap();
        for key in &keys {
            let before: usize = table.capacity();
            table.insert(*key, *key);
            let after: usize = table.capacity();
            prop_assert!(after == before || after == before * 2);
            prop_assert!(table.size() * 4 <= table.capacity() * 3);
        }
        for key in &keys {
            prop_assert_eq!(Some(key), table.search(key));
        }
    }

    #[test]
    fn prop_rehash_keeps_survivors(keys in prop::collection::hash_set(any::<u32>(), 1..600), seed in any::<u64>()) {
        let keys: Vec<u32> = keys.into_iter().collect();
        let mut table: UniversalTable<u32, u32> = UniversalTable::with_seed(4, seed).unwrap();
        let (dropped, kept) = keys.split_at(keys.len() / 3);
        for key in dropped {
            table.insert(*key, key.wrapping_mul(3));
        }
        for key in dropped {
            prop_assert_eq!(Some(key.wrapping_mul(3)), table.delete(key));
        }
        for key in kept {
            table.insert(*key, key.wrapping_mul(3));
        }
        for key in kept {
            prop_assert_eq!(Some(&key.wrapping_mul(3)), table.search(key));
        }
        for key in dropped {
            prop_assert_eq!(None, table.search(key));
        }
        prop_assert!(table.size() * 4 <= table.capacity() * 3);
    }

    #[test]
    fn prop_open_addressing_never_exceeds_capacity(
        capacity in 1usize..64,
        keys in prop::collection::vec(any::<u32>(), 0..200),
    ) {
        let mut table: OpenAddressTable<u32, u32> = OpenAddressTable::with_capacity(capacity).unwrap();
        for key in keys {
            let _ = table.try_insert(key, key);
            prop_assert!(table.size() <= capacity);
        }
    }

    #[test]
    fn prop_probe_advances_by_step(key in any::<u64>(), capacity in 1usize..200) {
        let table: OpenAddressTable<u64, ()> = OpenAddressTable::with_capacity(capacity).unwrap();
        let probe = table.probe(&key);
        let step: usize = probe.step();
        let indices: Vec<usize> = probe.collect();
        prop_assert_eq!(capacity, indices.len());
        for pair in indices.windows(2) {
            prop_assert!(pair[0] < capacity);
            prop_assert_eq!((pair[0] + step) % capacity, pair[1]);
        }
    }
}
