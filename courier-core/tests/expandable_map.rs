//! Property-based tests for `ExpandableMap`.
//!
//! # Invariants tested
//!
//! - **No-loss growth:** every inserted key stays findable exactly once
//!   across any number of growth events.
//! - **Idempotent update:** re-associating a key never changes `len()` and
//!   `find` returns the latest value.
//! - **Load bound:** after any insertion `len <= max_load_factor × buckets`.

use std::collections::{HashMap, HashSet};

use courier_core::ExpandableMap;
use courier_core::map::INITIAL_BUCKETS;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn unique_keys_survive_growth(keys in prop::collection::hash_set(any::<u32>(), 0..500)) {
        let mut map = ExpandableMap::new();
        for key in &keys {
            prop_assert_eq!(map.associate(*key, u64::from(*key) * 3), None);
        }
        prop_assert_eq!(map.len(), keys.len());
        for key in &keys {
            prop_assert_eq!(map.find(key), Some(&(u64::from(*key) * 3)));
        }
        let iterated: HashSet<u32> = map.iter().map(|(key, _)| *key).collect();
        prop_assert_eq!(iterated.len(), keys.len());
    }

    #[test]
    fn latest_association_wins(ops in prop::collection::vec((0_u8..32, any::<i32>()), 1..300)) {
        let mut map = ExpandableMap::new();
        let mut reference = HashMap::new();
        for (key, value) in ops {
            let previous = map.associate(key, value);
            prop_assert_eq!(previous, reference.insert(key, value));
        }
        prop_assert_eq!(map.len(), reference.len());
        for (key, value) in &reference {
            prop_assert_eq!(map.find(key), Some(value));
        }
    }

    #[test]
    fn load_stays_within_bound(
        count in 0_usize..400,
        factor in prop_oneof![Just(0.5), Just(0.75), Just(1.0), Just(3.0)],
    ) {
        let mut map = ExpandableMap::with_max_load_factor(factor);
        for key in 0..count {
            map.associate(key, ());
            let load = map.len() as f64 / map.bucket_count() as f64;
            prop_assert!(load <= factor, "load {} above {}", load, factor);
        }
        prop_assert!(map.bucket_count() >= INITIAL_BUCKETS);
        prop_assert!(map.bucket_count().is_power_of_two());
    }
}
