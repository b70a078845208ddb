//! A singly linked list storing its nodes in an index arena.
//!
//! The list owns the whole chain through its arena; `head` and `tail` are
//! both non-owning indices into it, which is what makes O(1) `append`
//! possible without a second owning pointer to the last node. Because the
//! chain is singly linked, `remove_tail` still costs a scan: only the walk
//! from the head can discover the new second-to-last node.
//!
//! # Examples
//!
//! ```
//! use adts::list::List;
//!
//! let mut list = List::new();
//! list.append(2);
//! list.append(3);
//! list.prepend(1);
//!
//! let values: Vec<_> = list.iter().copied().collect();
//! assert_eq!(values, [1, 2, 3]);
//!
//! assert_eq!(list.remove(&2), Some(2));
//! assert_eq!(list.remove(&2), None);
//! ```

use std::fmt;
use std::iter::FromIterator;

use crate::arena::{Arena, NodeId};

struct Node<T> {
    value: T,
    next: Option<NodeId>,
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            next: self.next,
        }
    }
}

/// A singly linked list with head and tail tracking. Supports O(1)
/// insertion at both ends, removal by value, and forward iteration.
#[derive(Clone)]
pub struct List<T> {
    arena: Arena<Node<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> List<T> {
    /// Generates a new, empty `List`.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: None,
            tail: None,
        }
    }

    /// The number of nodes in the list.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether the list holds no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Removes every node, invalidating all outstanding handles.
    ///
    /// ```rust
    /// use adts::list::List;
    ///
    /// let mut list: List<_> = ["a", "b"].iter().copied().collect();
    /// list.clear();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.head(), None);
    /// assert_eq!(list.tail(), None);
    /// ```
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    /// The first node, if the list is non-empty.
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// The last node. Absent exactly when [`List::head`] is absent.
    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    /// The node after the given one. `None` for the tail.
    ///
    /// # Panics
    ///
    /// When `id` refers to a node that has since been removed.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id).next
    }

    /// The value stored in the given node.
    ///
    /// # Panics
    ///
    /// When `id` refers to a node that has since been removed.
    pub fn value(&self, id: NodeId) -> &T {
        &self.arena.get(id).value
    }

    /// Adds a node to the beginning of the list in O(1). If the list was
    /// empty the new node becomes the tail too.
    ///
    /// # Examples
    ///
    /// ```
    /// use adts::list::List;
    ///
    /// let mut list = List::new();
    /// list.prepend(1);
    /// list.prepend(2);
    ///
    /// let values: Vec<_> = list.iter().copied().collect();
    /// assert_eq!(values, [2, 1]);
    /// ```
    pub fn prepend(&mut self, value: T) {
        let id = self.arena.alloc(Node {
            value,
            next: self.head,
        });
        self.head = Some(id);
        if self.tail.is_none() {
            self.tail = Some(id);
        }
    }

    /// Adds a node at the end of the list in O(1). If the list was empty
    /// the new node becomes the head too.
    ///
    /// # Examples
    ///
    /// ```
    /// use adts::list::List;
    ///
    /// let mut list = List::new();
    /// list.append(1);
    /// list.append(2);
    ///
    /// let values: Vec<_> = list.iter().copied().collect();
    /// assert_eq!(values, [1, 2]);
    /// ```
    pub fn append(&mut self, value: T) {
        let id = self.arena.alloc(Node { value, next: None });
        match self.tail {
            Some(tail) => self.arena.get_mut(tail).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    /// Removes the first node of the list in O(1) and returns its value.
    /// Removing from an empty list is a no-op returning `None`; removing
    /// the only node clears both head and tail.
    pub fn remove_head(&mut self) -> Option<T> {
        let head = self.head?;
        self.head = self.arena.get(head).next;
        if self.head.is_none() {
            self.tail = None;
        }
        Some(self.arena.free(head).value)
    }

    /// Removes the last node of the list and returns its value. This walks
    /// the chain from the head to find the new second-to-last node, so it
    /// is O(n), the price of a singly linked chain. Removing from an
    /// empty list is a no-op returning `None`.
    pub fn remove_tail(&mut self) -> Option<T> {
        let tail = self.tail?;
        if self.head == self.tail {
            self.head = None;
            self.tail = None;
            return Some(self.arena.free(tail).value);
        }

        let mut current = self.head.expect("Non-empty list has a head");
        while self.arena.get(current).next != Some(tail) {
            current = self
                .arena
                .get(current)
                .next
                .expect("Chain from head reaches the tail");
        }
        self.arena.get_mut(current).next = None;
        self.tail = Some(current);
        Some(self.arena.free(tail).value)
    }

    /// A lazy forward traversal of the values from head to tail. Each call
    /// starts fresh from the head. The list must not be mutated while an
    /// iterator is live; the borrow checker enforces this.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
        }
    }
}

impl<T: PartialEq> List<T> {
    /// Removes the first node holding a value equal to the given one in
    /// O(n) and returns its value. Later matches stay in the list.
    ///
    /// The empty-list and head cases are checked before the chain is ever
    /// dereferenced; only then does the scan start from the second node.
    /// Unlinking the last node also retargets the tail at its predecessor.
    ///
    /// # Examples
    ///
    /// ```
    /// use adts::list::List;
    ///
    /// let mut list: List<_> = [1, 2, 3].iter().copied().collect();
    ///
    /// assert_eq!(list.remove(&2), Some(2));
    /// assert_eq!(list.remove(&42), None);
    ///
    /// let values: Vec<_> = list.iter().copied().collect();
    /// assert_eq!(values, [1, 3]);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        // Head case first: an empty list must not reach the scan below,
        // which starts by dereferencing the head's next link.
        let head = self.head?;
        if self.arena.get(head).value == *value {
            return self.remove_head();
        }

        // General case: scan from the second node onward.
        let mut previous = head;
        while let Some(current) = self.arena.get(previous).next {
            if self.arena.get(current).value == *value {
                self.arena.get_mut(previous).next = self.arena.get(current).next;
                if self.tail == Some(current) {
                    self.tail = Some(previous);
                }
                return Some(self.arena.free(current).value);
            }
            previous = current;
        }
        None
    }

    /// Finds the first node holding a value equal to the given one by
    /// scanning from the head.
    ///
    /// # Examples
    ///
    /// ```
    /// use adts::list::List;
    ///
    /// let list: List<_> = ["a", "b"].iter().copied().collect();
    ///
    /// let node = list.find(&"b").unwrap();
    /// assert_eq!(list.value(node), &"b");
    /// assert_eq!(list.find(&"c"), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<NodeId> {
        let mut next = self.head;
        while let Some(id) = next {
            if self.arena.get(id).value == *value {
                return Some(id);
            }
            next = self.arena.get(id).next;
        }
        None
    }

    /// Whether any node holds a value equal to the given one.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }
}

impl<T> FromIterator<T> for List<T> {
    /// Builds a list by appending each element, so list order matches the
    /// source order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A lazy head-to-tail traversal of a [`List`]. Created by [`List::iter`].
pub struct Iter<'a, T> {
    list: &'a List<T>,
    current: Option<NodeId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let list = self.list;
        let node = list.arena.get(id);
        self.current = node.next;
        Some(&node.value)
    }
}
