use crate::error::Result;
use crate::splay_tree::map::{SplayMap, SplayMapIntoIter, SplayMapIter};
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using a splay tree.
///
/// An splay tree is a self-adjusting binary tree with an additional property that recently accessed
/// items are quick to access again. Inserting, removing, or searching for a key splays it (or the
/// last key visited while looking for it) to the root. Each key is stored at most once.
///
/// # Examples
///
/// ```
/// use splay_collections::splay_tree::SplaySet;
///
/// let mut set = SplaySet::new();
/// for key in &[10, 20, 30, 40, 50, 25] {
///     set.insert(*key);
/// }
/// assert_eq!(set.traverse(), vec![&10, &20, &25, &30, &40, &50]);
///
/// assert!(set.search(&20));
/// assert_eq!(set.root(), Some(&20));
///
/// assert_eq!(set.remove(&20), Some(20));
/// assert!(!set.search(&20));
/// assert_eq!(set.to_string(), "10 25 30 40 50");
/// ```
pub struct SplaySet<T> {
    map: SplayMap<T, ()>,
}

impl<T> SplaySet<T> {
    /// Constructs a new, empty `SplaySet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let set: SplaySet<u32> = SplaySet::new();
    /// ```
    pub fn new() -> Self {
        SplaySet {
            map: SplayMap::new(),
        }
    }

    /// Inserts a key into the set and splays it to the root. Returns `false`, leaving the stored
    /// key in place, if the key already exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        self.map.insert(key, ()).is_none()
    }

    /// Removes a key from the set. If the key exists in the set, it will return the associated
    /// key. Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.remove(key).map(|pair| pair.0)
    }

    /// Checks if a key exists in the set. The key, or the last key visited while looking for it,
    /// is splayed to the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert!(set.search(&1));
    /// assert_eq!(set.root(), Some(&1));
    /// assert!(!set.search(&2));
    /// ```
    pub fn search<V>(&mut self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.search(key)
    }

    /// Checks if a key exists in the set. Note that `contains` does not splay the tree in order to
    /// use a non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Returns the key at the root of the tree. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(2);
    /// set.insert(1);
    /// assert_eq!(set.root(), Some(&1));
    /// ```
    pub fn root(&self) -> Option<&T> {
        self.map.root().map(|pair| pair.0)
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let set: SplaySet<u32> = SplaySet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns a key in the set that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.floor(key)
    }

    /// Returns a key in the set that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.ceil(key)
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.map.min()
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        self.map.max()
    }

    /// Checks that the keys of the set are strictly ascending in-order.
    pub fn validate(&self) -> Result<()>
    where
        T: Ord,
    {
        self.map.validate()
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> SplaySetIter<'_, T> {
        SplaySetIter {
            map_iter: self.map.iter(),
        }
    }

    /// Returns the keys of the set in ascending order. Traversal does not splay the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(3);
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.traverse(), vec![&1, &2, &3]);
    /// ```
    pub fn traverse(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<T> IntoIterator for SplaySet<T> {
    type Item = T;
    type IntoIter = SplaySetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            map_iter: self.map.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SplaySet<T>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = SplaySetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `SplaySet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct SplaySetIntoIter<T> {
    map_iter: SplayMapIntoIter<T, ()>,
}

impl<T> Iterator for SplaySetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }
}

/// An iterator for `SplaySet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct SplaySetIter<'a, T>
where
    T: 'a,
{
    map_iter: SplayMapIter<'a, T, ()>,
}

impl<'a, T> Iterator for SplaySetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }
}

impl<T> Default for SplaySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SplaySet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = SplaySet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for SplaySet<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> fmt::Debug for SplaySet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

// Keys in order, separated by single spaces.
impl<T> fmt::Display for SplaySet<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, key) in self.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}
