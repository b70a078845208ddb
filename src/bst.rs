//! An unbalanced Binary Search Tree storing values in an index arena.
//!
//! Nodes own their children through the tree's arena and keep a parent
//! back-reference as a plain index, so child-to-parent navigation costs
//! nothing and ownership stays acyclic. There is no rebalancing: inserting
//! already sorted input degrades the tree to a linked list and every
//! `O(height)` operation to `O(n)`.
//!
//! Values that compare equal to an existing node are sent to the *right*
//! subtree on insert, while `find` returns the first (topmost) node that
//! compares equal. Duplicates are therefore allowed, but removing a
//! duplicated value removes exactly one matching node and which physical
//! node that is falls out of the descent order. This is a deliberate,
//! documented policy rather than full multi-set semantics.
//!
//! # Examples
//!
//! ```
//! use adts::bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(3);
//! tree.insert(1);
//! tree.insert(2);
//!
//! assert!(tree.contains(&2));
//!
//! // In-order iteration is ascending.
//! let values: Vec<_> = tree.iter().copied().collect();
//! assert_eq!(values, [1, 2, 3]);
//!
//! // Removing a value returns it.
//! assert_eq!(tree.remove(&3), Some(3));
//! assert_eq!(tree.remove(&3), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use crate::arena::{Arena, NodeId};

struct Node<T> {
    value: T,
    left: Option<NodeId>,
    right: Option<NodeId>,
    /// Back-reference for upward navigation. Never owning; the arena owns.
    parent: Option<NodeId>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent: None,
        }
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            left: self.left,
            right: self.right,
            parent: self.parent,
        }
    }
}

/// A Binary Search Tree. This can be used for inserting, finding, and
/// removing values, and supports sorted iteration and read-only node
/// navigation via [`NodeId`] handles.
#[derive(Clone)]
pub struct Tree<T> {
    arena: Arena<Node<T>>,
    root: Option<NodeId>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether the tree holds no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Removes every node, invalidating all outstanding handles.
    ///
    /// ```rust
    /// use adts::bst::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].iter().copied().collect();
    /// tree.clear();
    ///
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.root(), None);
    /// ```
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// The root node, if the tree is non-empty.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The left child of the given node.
    ///
    /// # Panics
    ///
    /// When `id` refers to a node that has since been removed.
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id).left
    }

    /// The right child of the given node.
    ///
    /// # Panics
    ///
    /// When `id` refers to a node that has since been removed.
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id).right
    }

    /// The parent of the given node. `None` for the root.
    ///
    /// # Panics
    ///
    /// When `id` refers to a node that has since been removed.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id).parent
    }

    /// The value stored in the given node.
    ///
    /// # Panics
    ///
    /// When `id` refers to a node that has since been removed.
    pub fn value(&self, id: NodeId) -> &T {
        &self.arena.get(id).value
    }

    /// Visits the tree in order (left subtree, node, right subtree),
    /// yielding values in ascending order. The traversal is lazy and keeps
    /// an explicit stack of pending nodes, so a degenerate (sorted-input)
    /// tree cannot overflow the call stack.
    ///
    /// Each call starts fresh from the root. The tree must not be mutated
    /// while an iterator is live; the borrow checker enforces this.
    ///
    /// # Examples
    ///
    /// ```
    /// use adts::bst::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 2, 5, 4].iter().copied().collect();
    /// let values: Vec<_> = tree.iter().copied().collect();
    ///
    /// assert_eq!(values, [1, 2, 3, 4, 5]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            tree: self,
            stack: Vec::new(),
        };
        iter.push_left_spine(self.root);
        iter
    }

    /// Rewires `parent`'s left link to `child`, keeping both directions of
    /// the parent/child links consistent: the displaced child (if any)
    /// loses its parent reference and the new child gains one.
    fn set_left(&mut self, parent: NodeId, child: Option<NodeId>) {
        let displaced = std::mem::replace(&mut self.arena.get_mut(parent).left, child);
        self.fix_up_links(parent, displaced, child);
    }

    /// Like [`Tree::set_left`] for the right link.
    fn set_right(&mut self, parent: NodeId, child: Option<NodeId>) {
        let displaced = std::mem::replace(&mut self.arena.get_mut(parent).right, child);
        self.fix_up_links(parent, displaced, child);
    }

    fn fix_up_links(&mut self, parent: NodeId, displaced: Option<NodeId>, child: Option<NodeId>) {
        if let Some(displaced) = displaced {
            if Some(displaced) != child {
                self.arena.get_mut(displaced).parent = None;
            }
        }
        if let Some(child) = child {
            self.arena.get_mut(child).parent = Some(parent);
        }
    }
}

impl<T: Ord> Tree<T> {
    /// Inserts the given value where it belongs, walking down from the
    /// root and attaching a new leaf at the first empty slot. Values less
    /// than a node go left; everything else, equal values included, goes
    /// right.
    ///
    /// Takes `O(height)` time and `O(1)` extra space.
    ///
    /// # Examples
    ///
    /// ```
    /// use adts::bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert!(tree.contains(&1));
    /// ```
    pub fn insert(&mut self, value: T) {
        let mut parent = match self.root {
            Some(root) => root,
            None => {
                self.root = Some(self.arena.alloc(Node::new(value)));
                return;
            }
        };

        loop {
            let node = self.arena.get(parent);
            let go_left = value < node.value;
            let next = if go_left { node.left } else { node.right };
            match next {
                Some(child) => parent = child,
                None => {
                    let new = self.arena.alloc(Node::new(value));
                    if go_left {
                        self.set_left(parent, Some(new));
                    } else {
                        self.set_right(parent, Some(new));
                    }
                    break;
                }
            }
        }

        if cfg!(debug_assertions) {
            let node = self.arena.get(parent);
            if let Some(left) = node.left {
                assert!(self.arena.get(left).value < node.value);
            }
            if let Some(right) = node.right {
                assert!(self.arena.get(right).value >= node.value);
            }
        }
    }

    /// Finds the first node holding a value equal to the given one. The
    /// descent goes left on strictly-less and right otherwise, so with
    /// duplicates this returns the topmost match on the search path.
    ///
    /// Takes `O(height)` time and `O(1)` space.
    ///
    /// # Examples
    ///
    /// ```
    /// use adts::bst::Tree;
    ///
    /// let tree: Tree<_> = [3, 0, 1, 2].iter().copied().collect();
    ///
    /// let node = tree.find(&1).unwrap();
    /// assert_eq!(tree.value(node), &1);
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<NodeId> {
        let mut next = self.root;
        while let Some(id) = next {
            let node = self.arena.get(id);
            next = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(id),
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Whether any node holds a value equal to the given one.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// The smallest value in the tree: the leftmost node from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use adts::bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 9].iter().copied().collect();
    /// assert_eq!(tree.min(), Some(&3));
    ///
    /// let empty = Tree::<i32>::new();
    /// assert_eq!(empty.min(), None);
    /// ```
    pub fn min(&self) -> Option<&T> {
        let root = self.root?;
        Some(&self.arena.get(self.min_in(root)).value)
    }

    /// Removes the first node found holding a value equal to the given one
    /// and returns its value. If no node matches, nothing happens.
    ///
    /// A node with two children is not unlinked directly: its value is
    /// replaced with the minimum of its right subtree (the in-order
    /// successor, which by construction has no left child) and that
    /// successor node is spliced out instead. A node with zero or one
    /// child is spliced out of its parent, with the surviving child's
    /// parent reference retargeted in the same step.
    ///
    /// # Examples
    ///
    /// ```
    /// use adts::bst::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].iter().copied().collect();
    ///
    /// assert_eq!(tree.remove(&2), Some(2));
    /// assert_eq!(tree.remove(&2), None);
    ///
    /// let values: Vec<_> = tree.iter().copied().collect();
    /// assert_eq!(values, [1, 3]);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let id = self.find(value)?;
        let node = self.arena.get(id);
        match (node.left, node.right) {
            (Some(_), Some(right)) => {
                let successor = self.min_in(right);
                let successor_value = self.splice(successor);
                Some(std::mem::replace(
                    &mut self.arena.get_mut(id).value,
                    successor_value,
                ))
            }
            _ => Some(self.splice(id)),
        }
    }

    /// The leftmost node of the subtree rooted at `id`.
    fn min_in(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.arena.get(id).left {
            id = left;
        }
        id
    }

    /// Unlinks a node with at most one child, replacing the parent's
    /// reference to it with its child (or nothing) and returning its
    /// value. Removing the root updates `self.root` instead of a parent
    /// link.
    fn splice(&mut self, id: NodeId) -> T {
        let node = self.arena.get(id);
        debug_assert!(node.left.is_none() || node.right.is_none());
        let child = node.left.or(node.right);
        let parent = node.parent;

        match parent {
            Some(parent) => {
                if self.arena.get(parent).left == Some(id) {
                    self.set_left(parent, child);
                } else {
                    self.set_right(parent, child);
                }
            }
            None => {
                self.root = child;
                if let Some(child) = child {
                    self.arena.get_mut(child).parent = None;
                }
            }
        }

        self.arena.free(id).value
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    /// Builds a tree by inserting each element in the order the source
    /// yields them. The final shape depends on that order; no
    /// canonicalization happens.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A lazy in-order traversal of a [`Tree`]. Created by [`Tree::iter`].
pub struct Iter<'a, T> {
    tree: &'a Tree<T>,
    /// Nodes whose left subtrees are exhausted, deepest first.
    stack: Vec<NodeId>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut next: Option<NodeId>) {
        while let Some(id) = next {
            self.stack.push(id);
            next = self.tree.arena.get(id).left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let tree = self.tree;
        let node = tree.arena.get(id);
        self.push_left_spine(node.right);
        Some(&node.value)
    }
}
