//! A slot arena backing the linked structures in this crate.
//!
//! The [`bst`][crate::bst] and [`list`][crate::list] modules need nodes
//! that refer to each other in more than one direction (child and parent,
//! head and tail into the same chain). Instead of raw pointers, every
//! "pointer" here is an [`Option<NodeId>`]: an index into a growable
//! `Vec` of slots that the owning structure holds by value. Back-references
//! are then plain indices with no ownership at all, so there are no cycles
//! to break and nothing to double-free.
//!
//! Freed slots go onto an intrusive free list and are reused LIFO, so a
//! long-lived structure with lots of churn doesn't grow without bound.

use std::fmt;

/// A handle to a node inside one of this crate's structures.
///
/// Handles are only meaningful for the structure that produced them, and
/// only until that node is removed. A handle held across a removal may
/// afterwards denote a different, reused node; it is the caller's job not
/// to do that (the same precondition as iterating during mutation).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A slot either holds a live node or remembers the next free slot.
#[derive(Clone)]
enum Slot<T> {
    Occupied(T),
    Vacant(Option<NodeId>),
}

/// The arena itself. `len` counts occupied slots only.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Option<NodeId>,
    len: usize,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stores `value`, reusing the most recently freed slot if there is one.
    pub(crate) fn alloc(&mut self, value: T) -> NodeId {
        self.len += 1;
        match self.free {
            Some(id) => {
                let slot = std::mem::replace(&mut self.slots[id.index()], Slot::Occupied(value));
                match slot {
                    Slot::Vacant(next_free) => self.free = next_free,
                    Slot::Occupied(_) => panic!("Free list points at an occupied slot"),
                }
                id
            }
            None => {
                // u32 indices cap the arena at ~4 billion nodes, matching
                // `sonic-forest`-style index trees.
                assert!(self.slots.len() < u32::MAX as usize);
                let id = NodeId(self.slots.len() as u32);
                self.slots.push(Slot::Occupied(value));
                id
            }
        }
    }

    /// Removes the node behind `id` and returns its value. The slot is
    /// pushed onto the free list.
    pub(crate) fn free(&mut self, id: NodeId) -> T {
        let slot = std::mem::replace(&mut self.slots[id.index()], Slot::Vacant(self.free));
        match slot {
            Slot::Occupied(value) => {
                self.free = Some(id);
                self.len -= 1;
                value
            }
            Slot::Vacant(_) => panic!("Freeing an already vacant slot"),
        }
    }

    /// Drops every node and empties the free list. Outstanding handles
    /// are invalidated wholesale.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.len = 0;
    }

    pub(crate) fn get(&self, id: NodeId) -> &T {
        match &self.slots[id.index()] {
            Slot::Occupied(value) => value,
            Slot::Vacant(_) => panic!("Dereferencing a vacant slot"),
        }
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut T {
        match &mut self.slots[id.index()] {
            Slot::Occupied(value) => value,
            Slot::Vacant(_) => panic!("Dereferencing a vacant slot"),
        }
    }
}
