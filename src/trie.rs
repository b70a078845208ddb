//! A character trie (prefix tree) with one node per path-prefix.
//!
//! Unlike the [`bst`][crate::bst] and [`list`][crate::list] structures,
//! trie nodes have no back-references, so plain ownership works: every
//! [`Node`] directly owns its children in insertion order.
//!
//! A node existing for a word is not the same as a value having been set
//! for it. [`Trie::contains`] answers the first question (the path
//! resolves), [`Trie::find`] the second, and `find` alone cannot tell "no
//! such word" apart from "word added without a value".
//!
//! # Examples
//!
//! ```
//! use adts::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.add("bye", Some(3));
//!
//! assert_eq!(trie.find("bye"), Some(&3));
//! assert_eq!(trie.find("by"), None);
//!
//! // The intermediate nodes exist even though no value was set on them.
//! assert!(trie.contains("by"));
//! assert!(!trie.contains("bio"));
//!
//! // One character away from "by" there's only "bye"'s final 'e'.
//! assert_eq!(trie.suggest_chars("by"), Some(vec!['e']));
//! ```

use thiserror::Error;

/// Errors from assembling trie nodes by hand. The high-level [`Trie`]
/// operations never hit these: they only ever create single-character
/// children that don't exist yet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A node key must be a single character (or the empty string, the
    /// root's marker).
    #[error("expected one character, received {0:?}")]
    KeyTooLong(String),
    /// Each node may hold at most one child per character.
    #[error("child {0:?} already exists")]
    DuplicateChild(char),
}

/// A node of a [`Trie`]: a single-character key, an optional associated
/// value, and owned children in insertion order.
#[derive(Debug, Clone)]
pub struct Node<V> {
    key: Option<char>,
    value: Option<V>,
    children: Vec<Node<V>>,
}

impl<V> Node<V> {
    /// Builds a node from a key of at most one character. The empty string
    /// maps to `None`, the marker the root node carries.
    ///
    /// # Examples
    ///
    /// ```
    /// use adts::trie::{Error, Node};
    ///
    /// let node = Node::new("a", Some("value"))?;
    /// assert_eq!(node.key(), Some('a'));
    ///
    /// let error = Node::<()>::new("alpha", None).unwrap_err();
    /// assert_eq!(error, Error::KeyTooLong("alpha".to_string()));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn new(key: &str, value: Option<V>) -> Result<Self, Error> {
        let mut chars = key.chars();
        let first = chars.next();
        if chars.next().is_some() {
            return Err(Error::KeyTooLong(key.to_string()));
        }
        Ok(Self {
            key: first,
            value,
            children: Vec::new(),
        })
    }

    fn from_char(key: char) -> Self {
        Self {
            key: Some(key),
            value: None,
            children: Vec::new(),
        }
    }

    /// This node's key character. `None` only for the empty-string marker.
    pub fn key(&self) -> Option<char> {
        self.key
    }

    /// The value associated with this exact node, if one was ever set.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Associates a value with this exact node, replacing any previous one.
    pub fn set_value(&mut self, value: Option<V>) {
        self.value = value;
    }

    /// Attaches a new child keyed by `key`. Fails if a child with that key
    /// already exists; the existing child is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use adts::trie::{Error, Node};
    ///
    /// let mut node = Node::new("a", None)?;
    /// node.insert_child('l', Some("original"))?;
    ///
    /// let error = node.insert_child('l', Some("overwrite")).unwrap_err();
    /// assert_eq!(error, Error::DuplicateChild('l'));
    /// assert_eq!(node.child('l').unwrap().value(), Some(&"original"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn insert_child(&mut self, key: char, value: Option<V>) -> Result<(), Error> {
        if self.has_child(key) {
            return Err(Error::DuplicateChild(key));
        }
        self.children.push(Node {
            key: Some(key),
            value,
            children: Vec::new(),
        });
        Ok(())
    }

    /// The child keyed by `key`, if present.
    pub fn child(&self, key: char) -> Option<&Self> {
        self.child_index(key).map(|index| &self.children[index])
    }

    /// The child keyed by `key`, mutably.
    pub fn child_mut(&mut self, key: char) -> Option<&mut Self> {
        self.child_index(key)
            .map(move |index| &mut self.children[index])
    }

    /// Whether a child keyed by `key` exists.
    pub fn has_child(&self, key: char) -> bool {
        self.child_index(key).is_some()
    }

    /// The keys of all immediate children, in the order the children were
    /// first inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use adts::trie::{Error, Node};
    ///
    /// let mut node = Node::<()>::new("a", None)?;
    /// assert_eq!(node.child_chars(), Vec::new());
    ///
    /// node.insert_child('l', None)?;
    /// node.insert_child('b', None)?;
    /// assert_eq!(node.child_chars(), vec!['l', 'b']);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn child_chars(&self) -> Vec<char> {
        self.children
            .iter()
            .filter_map(|child| child.key)
            .collect()
    }

    fn child_index(&self, key: char) -> Option<usize> {
        self.children
            .iter()
            .position(|child| child.key == Some(key))
    }
}

/// A trie keyed by single characters, optionally associating a value with
/// each added word.
#[derive(Debug, Clone)]
pub struct Trie<V> {
    root: Node<V>,
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Trie<V> {
    /// Generates a new trie holding only the empty-string root node.
    pub fn new() -> Self {
        Self {
            root: Node {
                key: None,
                value: None,
                children: Vec::new(),
            },
        }
    }

    /// The root node. Its key is the empty-string marker.
    pub fn root(&self) -> &Node<V> {
        &self.root
    }

    /// Adds a word, creating a node for every character of it that isn't
    /// already on a path from the root, then sets the terminal node's
    /// value. Re-adding a word replaces its value, including replacing it
    /// with `None`.
    ///
    /// Takes O(word length) child lookups.
    ///
    /// # Examples
    ///
    /// ```
    /// use adts::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.add("bye", Some(3));
    /// trie.add("bye", Some(4));
    ///
    /// assert_eq!(trie.find("bye"), Some(&4));
    /// ```
    pub fn add(&mut self, word: &str, value: Option<V>) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            let index = match node.child_index(ch) {
                Some(index) => index,
                None => {
                    node.children.push(Node::from_char(ch));
                    node.children.len() - 1
                }
            };
            node = &mut node.children[index];
        }
        node.value = value;
    }

    /// The characters that could follow the given prefix, in child
    /// insertion order.
    ///
    /// Returns `None` when the prefix itself doesn't resolve to a node;
    /// distinct from `Some(vec![])`, which means the prefix exists but
    /// nothing follows it.
    ///
    /// # Examples
    ///
    /// ```
    /// use adts::trie::Trie;
    ///
    /// let mut trie = Trie::<()>::new();
    /// trie.add("bye", None);
    ///
    /// assert_eq!(trie.suggest_chars("by"), Some(vec!['e']));
    /// assert_eq!(trie.suggest_chars("bye"), Some(vec![]));
    /// assert_eq!(trie.suggest_chars("bio"), None);
    /// ```
    pub fn suggest_chars(&self, prefix: &str) -> Option<Vec<char>> {
        self.node_at(prefix).map(Node::child_chars)
    }

    /// Whether the word resolves to a node: every character of it,
    /// including the last, has a node on the path from the root. The
    /// terminal node does not need to carry a value, so every prefix of an
    /// added word is itself "included".
    pub fn contains(&self, word: &str) -> bool {
        self.node_at(word).is_some()
    }

    /// The value associated with the word's terminal node. `None` both
    /// when the word doesn't resolve and when it resolves to a node that
    /// never had a value set; pair with [`Trie::contains`] to tell the two
    /// apart.
    ///
    /// # Examples
    ///
    /// ```
    /// use adts::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.add("bye", Some(3));
    ///
    /// assert_eq!(trie.find("bye"), Some(&3));
    /// assert_eq!(trie.find("by"), None);
    /// assert_eq!(trie.find("nope"), None);
    /// ```
    pub fn find(&self, word: &str) -> Option<&V> {
        self.node_at(word)?.value.as_ref()
    }

    /// Resolves the node reached by following each character of `word`
    /// from the root, or `None` as soon as a character has no child.
    fn node_at(&self, word: &str) -> Option<&Node<V>> {
        let mut node = &self.root;
        for ch in word.chars() {
            node = node.child(ch)?;
        }
        Some(node)
    }
}
