use crate::entry::Entry;
use crate::splay_tree::tree::Tree;
use std::mem;

/// A struct representing an internal node of a splay tree.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub left: Tree<T, U>,
    pub right: Tree<T, U>,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Node {
            entry: Entry { key, value },
            left: None,
            right: None,
        }
    }

    // The right child takes the place of `self`, which becomes its left child.
    pub fn rotate_left(&mut self) {
        let mut child = self.right.take().expect("Expected right child node to be `Some`.");
        self.right = child.left.take();
        mem::swap(&mut *child, self);
        self.left = Some(child);
    }

    // The left child takes the place of `self`, which becomes its right child.
    pub fn rotate_right(&mut self) {
        let mut child = self.left.take().expect("Expected left child node to be `Some`.");
        self.left = child.right.take();
        mem::swap(&mut *child, self);
        self.right = Some(child);
    }
}

#[cfg(test)]
mod tests {
    use super::Node;

    fn leaf(key: u32) -> Option<Box<Node<u32, ()>>> {
        Some(Box::new(Node::new(key, ())))
    }

    fn key(tree: &Option<Box<Node<u32, ()>>>) -> Option<u32> {
        tree.as_ref().map(|node| node.entry.key)
    }

    #[test]
    fn test_rotate_right() {
        // 4(2(1, 3), 5) => 2(1, 4(3, 5))
        let mut root = Node::new(4, ());
        let mut child = Node::new(2, ());
        child.left = leaf(1);
        child.right = leaf(3);
        root.left = Some(Box::new(child));
        root.right = leaf(5);

        root.rotate_right();

        assert_eq!(root.entry.key, 2);
        assert_eq!(key(&root.left), Some(1));
        let right = root.right.as_ref().unwrap();
        assert_eq!(right.entry.key, 4);
        assert_eq!(key(&right.left), Some(3));
        assert_eq!(key(&right.right), Some(5));
    }

    #[test]
    fn test_rotate_left() {
        // 2(1, 4(3, 5)) => 4(2(1, 3), 5)
        let mut root = Node::new(2, ());
        let mut child = Node::new(4, ());
        child.left = leaf(3);
        child.right = leaf(5);
        root.left = leaf(1);
        root.right = Some(Box::new(child));

        root.rotate_left();

        assert_eq!(root.entry.key, 4);
        assert_eq!(key(&root.right), Some(5));
        let left = root.left.as_ref().unwrap();
        assert_eq!(left.entry.key, 2);
        assert_eq!(key(&left.left), Some(1));
        assert_eq!(key(&left.right), Some(3));
    }

    #[test]
    fn test_rotate_round_trip() {
        let mut root = Node::new(2, ());
        root.right = leaf(3);

        root.rotate_left();
        assert_eq!(root.entry.key, 3);
        assert!(root.right.is_none());

        root.rotate_right();
        assert_eq!(root.entry.key, 2);
        assert!(root.left.is_none());
        assert_eq!(key(&root.right), Some(3));
    }

    #[test]
    #[should_panic]
    fn test_rotate_without_child() {
        let mut root: Node<u32, ()> = Node::new(1, ());
        root.rotate_right();
    }
}
