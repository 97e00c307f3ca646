//! Arena-based character trie.
//!
//! The trie stores word forms as paths from the root, sharing common
//! prefixes. Nodes live in a flat arena and refer to each other by `u32`
//! handles; each node keeps its children in a small sorted vector, so a
//! lookup step is a binary search over the node's edges rather than a hash
//! probe. This keeps per-node memory bounded for dictionaries with millions
//! of forms.

/// Handle of the root node in the arena.
const ROOT: u32 = 0;

/// A single trie node: sorted outgoing edges plus a terminal flag.
#[derive(Debug, Clone, Default)]
pub(crate) struct TrieNode {
    /// Outgoing edges, sorted by character.
    pub(crate) children: Vec<(char, u32)>,
    /// True when the path from the root to this node spells a stored form.
    pub(crate) terminal: bool,
}

impl TrieNode {
    fn child(&self, ch: char) -> Option<u32> {
        self.children
            .binary_search_by_key(&ch, |&(c, _)| c)
            .ok()
            .map(|i| self.children[i].1)
    }
}

/// A set of strings backed by an arena trie.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    /// Number of stored words (terminal nodes).
    words: u64,
}

impl Trie {
    /// Create an empty trie containing only the root node.
    pub fn new() -> Self {
        Trie {
            nodes: vec![TrieNode::default()],
            words: 0,
        }
    }

    /// Build a trie from an iterator of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Insert a word, returning whether it was newly added.
    ///
    /// Inserting a word that is already present is a no-op and returns
    /// `false`.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut current = ROOT;
        for ch in word.chars() {
            current = match self.nodes[current as usize].child(ch) {
                Some(next) => next,
                None => {
                    // Node handles are u32; the arena must stay addressable.
                    debug_assert!(self.nodes.len() < u32::MAX as usize);
                    let next = self.nodes.len() as u32;
                    self.nodes.push(TrieNode::default());
                    let node = &mut self.nodes[current as usize];
                    let pos = node
                        .children
                        .binary_search_by_key(&ch, |&(c, _)| c)
                        .unwrap_err();
                    node.children.insert(pos, (ch, next));
                    next
                }
            };
        }
        let node = &mut self.nodes[current as usize];
        if node.terminal {
            false
        } else {
            node.terminal = true;
            self.words += 1;
            true
        }
    }

    /// Check whether a word is stored in the trie.
    ///
    /// Runs in O(len(word)) and performs no allocation. Characters outside
    /// the stored edge set simply produce a miss.
    pub fn contains(&self, word: &str) -> bool {
        let mut current = ROOT;
        for ch in word.chars() {
            match self.nodes[current as usize].child(ch) {
                Some(next) => current = next,
                None => return false,
            }
        }
        self.nodes[current as usize].terminal
    }

    /// Number of stored words.
    pub fn len(&self) -> u64 {
        self.words
    }

    /// Check whether the trie stores no words.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of nodes in the arena, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Nodes in arena order, for the snapshot writer.
    pub(crate) fn nodes(&self) -> &[TrieNode] {
        &self.nodes
    }

    /// Rebuild a trie from raw arena parts, for the snapshot reader.
    ///
    /// The caller is responsible for having validated edge targets.
    pub(crate) fn from_parts(nodes: Vec<TrieNode>, words: u64) -> Self {
        debug_assert!(!nodes.is_empty());
        Trie { nodes, words }
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}
