use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::splay_tree::node::Node;
use crate::splay_tree::tree;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Index, IndexMut};

/// An ordered map implemented using splay tree.
///
/// An splay tree is a self-adjusting binary tree with an additional property that recently accessed
/// items are quick to access again. After each operation that takes `&mut self`, the item that was
/// accessed, or the last item visited while looking for it, is "splayed" to the root of the tree.
///
/// # Examples
///
/// ```
/// use splay_collections::splay_tree::SplayMap;
///
/// let mut map = SplayMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Some(&0));
/// assert_eq!(map.ceil(&2), Some(&3));
///
/// map[&0] = 2;
/// assert_eq!(map.remove(&0), Some((0, 2)));
/// assert_eq!(map.remove(&1), None);
/// ```
pub struct SplayMap<T, U> {
    tree: tree::Tree<T, U>,
    len: usize,
}

impl<T, U> SplayMap<T, U> {
    /// Constructs a new, empty `SplayMap<T, U>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let map: SplayMap<u32, u32> = SplayMap::new();
    /// ```
    pub fn new() -> Self {
        SplayMap { tree: None, len: 0 }
    }

    /// Inserts a key-value pair into the map and splays it to the root. If the key already exists
    /// in the map, the stored key is kept, the value is replaced, and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some(1));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<U>
    where
        T: Ord,
    {
        let SplayMap {
            ref mut tree,
            ref mut len,
        } = self;
        let old_value = tree::insert(tree, key, value);
        if old_value.is_none() {
            *len += 1;
        }
        old_value
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `None` and the tree is left splayed
    /// around the nearest key.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<(T, U)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let SplayMap {
            ref mut tree,
            ref mut len,
        } = self;
        tree::remove(tree, key).map(|entry| {
            let Entry { key, value } = entry;
            *len -= 1;
            (key, value)
        })
    }

    /// Checks if a key exists in the map and splays it, or its nearest neighbour, to the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// assert!(map.search(&1));
    /// assert_eq!(map.root(), Some((&1, &1)));
    /// assert!(!map.search(&3));
    /// assert_eq!(map.root(), Some((&2, &2)));
    /// ```
    pub fn search<V>(&mut self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::search(&mut self.tree, key)
    }

    /// Checks if a key exists in the map. Note that `contains_key` does not splay the tree in
    /// order to use a non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map. Note that `get` does not splay the tree
    /// in order to use a non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get(&self.tree, key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist. The key is splayed to the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get_mut(&mut self.tree, key).map(|entry| &mut entry.value)
    }

    /// Returns the key-value pair currently at the root of the tree, which is the most recently
    /// splayed key. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// assert_eq!(map.root(), Some((&2, &2)));
    /// ```
    pub fn root(&self) -> Option<(&T, &U)> {
        tree::root(&self.tree).map(|entry| (&entry.key, &entry.value))
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let map: SplayMap<u32, u32> = SplayMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        tree::clear(&mut self.tree);
        self.len = 0;
    }

    /// Returns a key in the map that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist. Note that `floor` does not splay the tree in order to use a
    /// non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.floor(&0), None);
    /// assert_eq!(map.floor(&2), Some(&1));
    /// ```
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::floor(&self.tree, key).map(|entry| &entry.key)
    }

    /// Returns a key in the map that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist. Note that `ceil` does not splay the tree in order to use a
    /// non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.ceil(&0), Some(&1));
    /// assert_eq!(map.ceil(&2), None);
    /// ```
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::ceil(&self.tree, key).map(|entry| &entry.key)
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty. Note that `min`
    /// does not splay the tree in order to use a non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree).map(|entry| &entry.key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty. Note that `max`
    /// does not splay the tree in order to use a non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree).map(|entry| &entry.key)
    }

    /// Checks that the in-order traversal of the map is strictly ascending. This only fails if
    /// the `Ord` implementation of the keys is not a total order.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(2, 2);
    /// map.insert(1, 1);
    /// assert_eq!(map.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<()>
    where
        T: Ord,
    {
        let mut prev: Option<&T> = None;
        for (position, (key, _)) in self.iter().enumerate() {
            if let Some(prev) = prev {
                match prev.cmp(key) {
                    Ordering::Less => {},
                    Ordering::Equal => return Err(Error::DuplicateKey { position }),
                    Ordering::Greater => return Err(Error::OutOfOrder { position }),
                }
            }
            prev = Some(key);
        }
        Ok(())
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> SplayMapIter<'_, T, U> {
        SplayMapIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }

    /// Returns a mutable iterator over the map. The iterator will yield key-value pairs using
    /// in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// for (key, value) in &mut map {
    ///     *value += 1;
    /// }
    ///
    /// let mut iterator = map.iter_mut();
    /// assert_eq!(iterator.next(), Some((&1, &mut 2)));
    /// assert_eq!(iterator.next(), Some((&2, &mut 3)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter_mut(&mut self) -> SplayMapIterMut<'_, T, U> {
        SplayMapIterMut {
            current: self.tree.as_mut().map(|node| &mut **node),
            stack: Vec::new(),
        }
    }
}

impl<T, U> Drop for SplayMap<T, U> {
    fn drop(&mut self) {
        tree::clear(&mut self.tree);
    }
}

impl<T, U> IntoIterator for SplayMap<T, U> {
    type IntoIter = SplayMapIntoIter<T, U>;
    type Item = (T, U);

    fn into_iter(mut self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree.take(),
            stack: Vec::new(),
        }
    }
}

impl<'a, T, U> IntoIterator for &'a SplayMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = SplayMapIter<'a, T, U>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, U> IntoIterator for &'a mut SplayMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = SplayMapIterMut<'a, T, U>;
    type Item = (&'a T, &'a mut U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owning iterator for `SplayMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields owned entries.
pub struct SplayMapIntoIter<T, U> {
    current: tree::Tree<T, U>,
    stack: Vec<Node<T, U>>,
}

impl<T, U> Iterator for SplayMapIntoIter<T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node {
                entry: Entry { key, value },
                right,
                ..
            } = node;
            self.current = right;
            (key, value)
        })
    }
}

impl<T, U> Drop for SplayMapIntoIter<T, U> {
    fn drop(&mut self) {
        tree::clear(&mut self.current);
        for node in &mut self.stack {
            tree::clear(&mut node.right);
        }
    }
}

/// An iterator for `SplayMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references.
pub struct SplayMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    current: &'a tree::Tree<T, U>,
    stack: Vec<&'a Node<T, U>>,
}

impl<'a, T, U> Iterator for SplayMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node {
                entry: Entry { ref key, ref value },
                ref right,
                ..
            } = node;
            self.current = right;
            (key, value)
        })
    }
}

type BorrowedIterEntryMut<'a, T, U> = (&'a mut Entry<T, U>, BorrowedTreeMut<'a, T, U>);
type BorrowedTreeMut<'a, T, U> = Option<&'a mut Node<T, U>>;

/// A mutable iterator for `SplayMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields mutable references.
pub struct SplayMapIterMut<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    current: BorrowedTreeMut<'a, T, U>,
    stack: Vec<BorrowedIterEntryMut<'a, T, U>>,
}

impl<'a, T, U> Iterator for SplayMapIterMut<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a mut U);

    fn next(&mut self) -> Option<Self::Item> {
        let SplayMapIterMut {
            ref mut current,
            ref mut stack,
        } = self;
        while let Some(node) = current.take() {
            let Node {
                ref mut entry,
                ref mut left,
                ref mut right,
            } = *node;
            *current = left.as_mut().map(|node| &mut **node);
            stack.push((entry, right.as_mut().map(|node| &mut **node)));
        }
        stack.pop().map(|(entry, right)| {
            *current = right;
            (&entry.key, &mut entry.value)
        })
    }
}

impl<T, U> Default for SplayMap<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U> fmt::Debug for SplayMap<T, U>
where
    T: fmt::Debug,
    U: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, T, U, V> Index<&'a V> for SplayMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    type Output = U;

    fn index(&self, key: &V) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a, T, U, V> IndexMut<&'a V> for SplayMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    fn index_mut(&mut self, key: &V) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}
