use std::collections::BTreeMap;

/// Identifier of a trie node in its arena. The root is always
/// [`NodeId::ROOT`]; every other node is reachable from the root by exactly
/// one character path.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NodeId(pub usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);
}

#[derive(Clone, Debug, Default)]
struct TrieNode {
    children: BTreeMap<char, NodeId>,
    terminal: bool,
}

/// Prefix tree over `char` paths, stored as an arena of nodes.
///
/// Integer ids instead of owned child boxes keep lookups identity-free and
/// let callers (the trie walkthrough) key visual elements by node. Nodes are
/// never deleted; the structure only grows.
#[derive(Clone, Debug)]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    /// Insert `word`, creating nodes as needed and marking the final node
    /// terminal. Inserting the same word twice leaves the trie unchanged.
    pub fn insert(&mut self, word: &str) {
        let mut current = NodeId::ROOT;
        for ch in word.chars() {
            current = match self.child(current, ch) {
                Some(next) => next,
                None => self.add_child(current, ch),
            };
        }
        self.mark_terminal(current);
    }

    /// True iff `word` was inserted exactly (full path exists and ends on a
    /// terminal node). A miss is an ordinary `false`, never an error.
    pub fn search(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|node| self.is_terminal(node))
    }

    /// True iff some inserted word starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Follow the character path from the root; `None` as soon as a
    /// character has no child.
    pub fn walk(&self, path: &str) -> Option<NodeId> {
        let mut current = NodeId::ROOT;
        for ch in path.chars() {
            current = self.child(current, ch)?;
        }
        Some(current)
    }

    /// Child of `node` along `ch`, if present.
    pub fn child(&self, node: NodeId, ch: char) -> Option<NodeId> {
        self.nodes[node.0].children.get(&ch).copied()
    }

    /// Create (or return the existing) child of `node` along `ch`.
    pub fn add_child(&mut self, node: NodeId, ch: char) -> NodeId {
        if let Some(existing) = self.child(node, ch) {
            return existing;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(TrieNode::default());
        self.nodes[node.0].children.insert(ch, id);
        id
    }

    pub fn mark_terminal(&mut self, node: NodeId) {
        self.nodes[node.0].terminal = true;
    }

    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node.0].terminal
    }

    /// Total node count, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}
