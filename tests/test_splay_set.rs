use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use splay_collections::splay_tree::SplaySet;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 100_000;

fn build(keys: &[u32]) -> SplaySet<u32> {
    let mut set = SplaySet::new();
    for key in keys {
        set.insert(*key);
    }
    set
}

#[test]
fn int_test_scenarios() {
    let mut set = build(&[10, 20, 30, 40, 50, 25]);
    assert_eq!(set.traverse(), vec![&10, &20, &25, &30, &40, &50]);

    assert!(set.search(&20));
    assert_eq!(set.traverse(), vec![&10, &20, &25, &30, &40, &50]);

    assert_eq!(set.remove(&99), None);
    assert_eq!(set.traverse(), vec![&10, &20, &25, &30, &40, &50]);

    assert_eq!(set.remove(&20), Some(20));
    assert!(!set.search(&20));
    assert_eq!(set.traverse(), vec![&10, &25, &30, &40, &50]);

    let mut single = build(&[10]);
    single.insert(10);
    assert_eq!(single.traverse(), vec![&10]);

    let mut empty: SplaySet<u32> = SplaySet::new();
    assert!(!empty.search(&5));
    assert_eq!(empty.remove(&5), None);
    assert!(empty.traverse().is_empty());
}

#[test]
fn int_test_splay_set() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut set = SplaySet::new();
    let mut expected = BTreeSet::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0..10_000u32);
        match rng.gen_range(0..3) {
            0 => {
                assert_eq!(set.insert(key), expected.insert(key));
                assert_eq!(set.root(), Some(&key));
            },
            1 => assert_eq!(set.remove(&key), expected.take(&key)),
            _ => {
                let found = set.search(&key);
                assert_eq!(found, expected.contains(&key));
                if found {
                    assert_eq!(set.root(), Some(&key));
                }
            },
        }
    }

    assert_eq!(set.len(), expected.len());
    assert_eq!(set.validate(), Ok(()));
    assert_eq!(set.iter().collect::<Vec<&u32>>(), expected.iter().collect::<Vec<&u32>>());
    assert_eq!(set.into_iter().collect::<Vec<u32>>(), expected.into_iter().collect::<Vec<u32>>());
}

#[test]
fn int_test_monotone_insertions() {
    let mut set = SplaySet::new();
    for key in 0..NUM_OF_OPERATIONS as u32 {
        set.insert(key);
    }
    assert_eq!(set.root(), Some(&(NUM_OF_OPERATIONS as u32 - 1)));

    // the first search walks the full height of the tree
    assert!(set.search(&0));
    assert_eq!(set.root(), Some(&0));

    for key in (0..NUM_OF_OPERATIONS as u32).rev() {
        assert_eq!(set.remove(&key), Some(key));
    }
    assert!(set.is_empty());
}

#[test]
fn int_test_borrowed_keys() {
    let mut set = SplaySet::new();
    for word in &["delta", "alpha", "charlie", "bravo"] {
        set.insert(word.to_string());
    }
    assert!(set.search("charlie"));
    assert_eq!(set.root().map(String::as_str), Some("charlie"));
    assert_eq!(set.remove("alpha"), Some(String::from("alpha")));
    assert_eq!(set.to_string(), "bravo charlie delta");
}
