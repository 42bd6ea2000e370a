//! Thread-safe access to a splay tree through a single exclusive lock.
//!
//! Every operation on a splay tree, including a lookup, may restructure it, so readers and writers
//! alike need exclusive access. `SyncSplaySet` holds the lock for the whole of each call and never
//! inside the rotations themselves.

use crate::splay_tree::SplaySet;
use log::debug;
use parking_lot::{Mutex, MutexGuard};
use std::borrow::Borrow;
use std::fmt;

/// A splay set that can be shared between threads.
///
/// # Examples
///
/// ```
/// use splay_collections::sync::SyncSplaySet;
/// use std::sync::Arc;
/// use std::thread;
///
/// let set = Arc::new(SyncSplaySet::new());
/// let handles: Vec<_> = (0..4)
///     .map(|i| {
///         let set = Arc::clone(&set);
///         thread::spawn(move || {
///             set.insert(i);
///         })
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(set.to_vec(), vec![0, 1, 2, 3]);
/// ```
pub struct SyncSplaySet<T> {
    set: Mutex<SplaySet<T>>,
}

impl<T> SyncSplaySet<T> {
    /// Constructs a new, empty `SyncSplaySet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::sync::SyncSplaySet;
    ///
    /// let set: SyncSplaySet<u32> = SyncSplaySet::new();
    /// ```
    pub fn new() -> Self {
        SyncSplaySet {
            set: Mutex::new(SplaySet::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SplaySet<T>> {
        match self.set.try_lock() {
            Some(guard) => guard,
            None => {
                debug!("splay set lock is contended, waiting");
                self.set.lock()
            },
        }
    }

    /// Inserts a key into the set. Returns `false` if the key already exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::sync::SyncSplaySet;
    ///
    /// let set = SyncSplaySet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&self, key: T) -> bool
    where
        T: Ord,
    {
        self.lock().insert(key)
    }

    /// Removes a key from the set, returning it if it existed.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::sync::SyncSplaySet;
    ///
    /// let set = SyncSplaySet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove<V>(&self, key: &V) -> Option<T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.lock().remove(key)
    }

    /// Checks if a key exists in the set, splaying it towards the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::sync::SyncSplaySet;
    ///
    /// let set = SyncSplaySet::new();
    /// set.insert(1);
    /// assert!(set.search(&1));
    /// assert!(!set.search(&2));
    /// ```
    pub fn search<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.lock().search(key)
    }

    /// Checks if a key exists in the set without restructuring it.
    pub fn contains<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.lock().contains(key)
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Clears the set, removing all values.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Returns a copy of the keys of the set in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::sync::SyncSplaySet;
    ///
    /// let set = SyncSplaySet::new();
    /// set.insert(2);
    /// set.insert(1);
    /// assert_eq!(set.to_vec(), vec![1, 2]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.lock().iter().cloned().collect()
    }

    /// Runs `f` against the set while holding the lock, so that several operations happen
    /// atomically.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::sync::SyncSplaySet;
    ///
    /// let set = SyncSplaySet::new();
    /// let inserted = set.with(|set| {
    ///     set.insert(1);
    ///     set.insert(2);
    ///     set.len()
    /// });
    /// assert_eq!(inserted, 2);
    /// ```
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut SplaySet<T>) -> R,
    {
        f(&mut self.lock())
    }

    /// Consumes the wrapper, returning the underlying set.
    pub fn into_inner(self) -> SplaySet<T> {
        self.set.into_inner()
    }
}

impl<T> Default for SyncSplaySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<SplaySet<T>> for SyncSplaySet<T> {
    fn from(set: SplaySet<T>) -> Self {
        SyncSplaySet {
            set: Mutex::new(set),
        }
    }
}

impl<T> fmt::Debug for SyncSplaySet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncSplaySet").field("set", &*self.lock()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::SyncSplaySet;
    use crate::splay_tree::SplaySet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SyncSplaySet<u32>>();
    }

    #[test]
    fn test_operations() {
        let set = SyncSplaySet::new();
        assert!(set.is_empty());
        assert!(set.insert(2));
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&1));
        assert!(set.search(&2));
        assert_eq!(set.remove(&2), Some(2));
        assert_eq!(set.to_vec(), vec![1]);
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_from_and_into_inner() {
        let set: SplaySet<u32> = vec![3, 1, 2].into_iter().collect();
        let sync_set = SyncSplaySet::from(set);
        assert!(sync_set.search(&1));
        let set = sync_set.into_inner();
        assert_eq!(set.root(), Some(&1));
        assert_eq!(set.traverse(), vec![&1, &2, &3]);
    }

    #[test]
    fn test_concurrent_operations() {
        let set = Arc::new(SyncSplaySet::new());
        let handles: Vec<_> = (0..8u32)
            .map(|thread_index| {
                let set = Arc::clone(&set);
                thread::spawn(move || {
                    for key in 0..1_000u32 {
                        set.insert(key * 8 + thread_index);
                        set.search(&key);
                    }
                    for key in 0..500u32 {
                        set.remove(&(key * 8 + thread_index));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let expected: Vec<u32> = (4_000..8_000).collect();
        assert_eq!(set.to_vec(), expected);
        assert_eq!(set.with(|set| set.validate()), Ok(()));
    }

    #[test]
    fn test_debug() {
        let set = SyncSplaySet::new();
        set.insert(1);
        assert_eq!(format!("{:?}", set), "SyncSplaySet { set: {1} }");
    }
}
