use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use splay_collections::splay_tree::SplayMap;
use std::collections::BTreeMap;

const NUM_OF_OPERATIONS: usize = 100_000;

#[test]
fn int_test_splay_map() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut map = SplayMap::new();
    let mut expected = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen::<u32>();
        let val = rng.gen::<u32>();

        map.insert(key, val);
        expected.push((key, val));
    }

    expected.reverse();
    expected.sort_by(|l, r| l.0.cmp(&r.0));
    expected.dedup_by_key(|pair| pair.0);

    assert_eq!(map.len(), expected.len());
    assert_eq!(map.validate(), Ok(()));

    assert_eq!(map.min(), Some(&expected[0].0));
    assert_eq!(map.max(), Some(&expected[expected.len() - 1].0));

    for entry in &expected {
        assert!(map.contains_key(&entry.0));
        assert_eq!(map.get(&entry.0), Some(&entry.1));
        assert!(map.search(&entry.0));
        assert_eq!(map.root(), Some((&entry.0, &entry.1)));
    }

    expected.shuffle(&mut rng);

    let mut expected_len = expected.len();
    for entry in expected {
        let old_entry = map.remove(&entry.0);
        expected_len -= 1;
        assert_eq!(old_entry, Some((entry.0, entry.1)));
        assert_eq!(map.len(), expected_len);
    }
    assert!(map.is_empty());
}

#[test]
fn int_test_splay_map_mixed_operations() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut map = SplayMap::new();
    let mut expected = BTreeMap::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0..1_000u32);
        match rng.gen_range(0..4) {
            0 => {
                let val = rng.gen::<u32>();
                assert_eq!(map.insert(key, val), expected.insert(key, val));
                assert_eq!(map.root(), Some((&key, &val)));
            },
            1 => assert_eq!(map.remove(&key), expected.remove_entry(&key)),
            2 => assert_eq!(map.search(&key), expected.contains_key(&key)),
            _ => {
                if let Some(value) = map.get_mut(&key) {
                    *value = value.wrapping_add(1);
                }
                if let Some(value) = expected.get_mut(&key) {
                    *value = value.wrapping_add(1);
                }
            },
        }
        assert_eq!(map.len(), expected.len());
    }

    assert_eq!(map.validate(), Ok(()));
    assert_eq!(
        map.iter().collect::<Vec<(&u32, &u32)>>(),
        expected.iter().collect::<Vec<(&u32, &u32)>>(),
    );
}
