//! This crate exposes three classic pointer-linked data structures (a
//! Binary Search Tree, a singly linked list, and a character trie) built
//! on explicit ownership instead of a garbage collector.
//!
//! ## The node ownership model
//!
//! All three structures share one architectural problem: nodes that refer
//! to each other in more than one direction. A BST node points down at its
//! children but also back up at its parent. A list is reachable from both
//! its head and its tail. One of those references per pair can own; the
//! other must not, or the structure either leaks or double-frees.
//!
//! The [`bst`] and [`list`] modules solve this with an arena: every node
//! lives by value in a growable vector owned by the structure, and every
//! link, owning or not, is an index ([`NodeId`]) into it. Back-references
//! are then just more indices, with no lifetime of their own to manage.
//! The [`trie`] has no back-references at all, so its nodes simply own
//! their children directly.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree supports inserting, finding, and removing values.
//! Its defining invariants are:
//!
//! 1. For every node, all the nodes in its left subtree have a value less
//!    than its own value.
//! 2. For every node, all the nodes in its right subtree have a value not
//!    less than its own value (equal values go right).
//!
//! Searching takes `O(height)`, and in-order traversal (left subtree,
//! node, right subtree) yields values in ascending order. The tree here is
//! deliberately unbalanced: sorted insertion sequences degrade the height
//! to `O(n)`.
//!
//! ## Singly linked list
//!
//! [`list::List`] keeps head and tail handles into one owned chain, so
//! `prepend` and `append` are O(1) while removal by value and tail removal
//! are O(n) scans.
//!
//! ## Trie
//!
//! [`trie::Trie`] is a prefix tree keyed by single characters, one node
//! per path-prefix, supporting word insertion with optional associated
//! values, prefix suggestions, and membership tests.
//!
//! None of the structures is thread-safe, and none may be mutated while an
//! iterator over it is live. The borrow checker enforces the latter.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod arena;
pub mod bst;
pub mod list;
pub mod trie;

pub use arena::NodeId;
