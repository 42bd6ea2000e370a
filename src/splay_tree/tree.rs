use crate::entry::Entry;
use crate::splay_tree::node::Node;
use log::trace;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

// The grandchild slot a suspended level of the splay walk continued into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    LeftLeft,
    LeftRight,
    RightLeft,
    RightRight,
}

// A suspended level of the splay walk. The grandchild slot named by `step` is detached while the
// walk continues below it and is refilled with the splayed subtree when the walk unwinds.
struct Frame<T, U> {
    node: Box<Node<T, U>>,
    step: Step,
}

// Compares `key` against the child in `slot` and detaches the grandchild on the side the search
// continues to. Returns `None` if there is no child.
fn descend<T, U, V>(slot: &mut Tree<T, U>, key: &V) -> Option<(Ordering, Tree<T, U>)>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    slot.as_mut().map(|child| {
        let ordering = key.cmp(child.entry.key.borrow());
        let grandchild = match ordering {
            Ordering::Less => child.left.take(),
            Ordering::Greater => child.right.take(),
            Ordering::Equal => None,
        };
        (ordering, grandchild)
    })
}

/// Moves the node with `key` to the root of `tree`. If no such node exists, the last node visited
/// while searching for `key` is moved to the root instead.
///
/// Each level of the walk consumes a node and its child on the search path. On the way back up, a
/// zig-zig pair is rotated at the node first and then at the child, a zig-zag pair at the child
/// first and then at the node, and a lone child left at the bottom of the walk is a single zig.
/// The walk keeps its suspended levels on the heap, so its depth is not bounded by the call stack.
pub fn splay<T, U, V>(tree: &mut Tree<T, U>, key: &V)
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut frames: Vec<Frame<T, U>> = Vec::new();
    let mut current = tree.take();

    let mut result = loop {
        let mut node = match current.take() {
            Some(node) => node,
            None => break None,
        };

        let (step, grandchild) = match key.cmp(node.entry.key.borrow()) {
            Ordering::Equal => break Some(node),
            Ordering::Less => match descend(&mut node.left, key) {
                None => break Some(node),
                Some((Ordering::Equal, _)) => {
                    node.rotate_right();
                    break Some(node);
                },
                Some((Ordering::Less, grandchild)) => (Step::LeftLeft, grandchild),
                Some((Ordering::Greater, grandchild)) => (Step::LeftRight, grandchild),
            },
            Ordering::Greater => match descend(&mut node.right, key) {
                None => break Some(node),
                Some((Ordering::Equal, _)) => {
                    node.rotate_left();
                    break Some(node);
                },
                Some((Ordering::Less, grandchild)) => (Step::RightLeft, grandchild),
                Some((Ordering::Greater, grandchild)) => (Step::RightRight, grandchild),
            },
        };

        frames.push(Frame { node, step });
        current = grandchild;
    };

    trace!("splay walk unwinding {} levels", frames.len());

    while let Some(Frame { mut node, step }) = frames.pop() {
        match step {
            Step::LeftLeft => {
                if let Some(ref mut child) = node.left {
                    child.left = result;
                }
                node.rotate_right();
                if node.left.is_some() {
                    node.rotate_right();
                }
            },
            Step::LeftRight => {
                if let Some(ref mut child) = node.left {
                    child.right = result;
                    if child.right.is_some() {
                        child.rotate_left();
                    }
                }
                node.rotate_right();
            },
            Step::RightLeft => {
                if let Some(ref mut child) = node.right {
                    child.left = result;
                    if child.left.is_some() {
                        child.rotate_right();
                    }
                }
                node.rotate_left();
            },
            Step::RightRight => {
                if let Some(ref mut child) = node.right {
                    child.right = result;
                }
                node.rotate_left();
                if node.right.is_some() {
                    node.rotate_left();
                }
            },
        }
        result = Some(node);
    }

    *tree = result;
}

/// Inserts a key-value pair and leaves its node at the root. If the key already exists, the
/// existing key is kept, its value is replaced, and the old value is returned.
pub fn insert<T, U>(tree: &mut Tree<T, U>, key: T, value: U) -> Option<U>
where
    T: Ord,
{
    splay(tree, &key);
    let mut root = match tree.take() {
        Some(root) => root,
        None => {
            *tree = Some(Box::new(Node::new(key, value)));
            return None;
        },
    };

    match key.cmp(&root.entry.key) {
        Ordering::Equal => {
            let old_value = mem::replace(&mut root.entry.value, value);
            *tree = Some(root);
            Some(old_value)
        },
        Ordering::Less => {
            let mut new_node = Node::new(key, value);
            new_node.left = root.left.take();
            new_node.right = Some(root);
            *tree = Some(Box::new(new_node));
            None
        },
        Ordering::Greater => {
            let mut new_node = Node::new(key, value);
            new_node.right = root.right.take();
            new_node.left = Some(root);
            *tree = Some(Box::new(new_node));
            None
        },
    }
}

/// Removes the entry with `key`. A missing key leaves the tree splayed around its nearest
/// neighbour and returns `None`.
pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Option<Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    if !search(tree, key) {
        return None;
    }

    let root = tree.take()?;
    let Node { entry, left, right } = *root;
    *tree = match left {
        Some(left_child) => {
            // every key on the left is smaller, so the walk brings up the maximum, which has no
            // right child
            let mut left_tree = Some(left_child);
            splay(&mut left_tree, key);
            if let Some(ref mut node) = left_tree {
                node.right = right;
            }
            trace!("joined subtrees of removed root");
            left_tree
        },
        None => right,
    };
    Some(entry)
}

/// Splays `key` and reports whether it is now at the root.
pub fn search<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> bool
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    splay(tree, key);
    match tree {
        Some(ref node) => key.cmp(node.entry.key.borrow()) == Ordering::Equal,
        None => false,
    }
}

pub fn root<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| &node.entry)
}

pub fn get<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&node.entry),
        }
    }
    None
}

pub fn get_mut<'a, T, U, V>(tree: &'a mut Tree<T, U>, key: &V) -> Option<&'a mut Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    if search(tree, key) {
        tree.as_mut().map(|node| &mut node.entry)
    } else {
        None
    }
}

pub fn ceil<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    let mut best = None;
    while let Some(ref node) = curr {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Greater => curr = &node.right,
            Ordering::Less => {
                best = Some(&node.entry);
                curr = &node.left;
            },
            Ordering::Equal => return Some(&node.entry),
        }
    }
    best
}

pub fn floor<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    let mut best = None;
    while let Some(ref node) = curr {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => {
                best = Some(&node.entry);
                curr = &node.right;
            },
            Ordering::Equal => return Some(&node.entry),
        }
    }
    best
}

pub fn min<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.entry
    })
}

pub fn max<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.entry
    })
}

/// Drops every node of `tree` without recursing, so arbitrarily tall trees can be freed.
pub fn clear<T, U>(tree: &mut Tree<T, U>) {
    let mut stack: Vec<Box<Node<T, U>>> = tree.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
