use crate::document::DocId;
use std::collections::{HashMap, HashSet};

/// A node in the prefix tree arena.
#[derive(Debug, Clone, Default)]
struct Node {
    children: HashMap<char, usize>,
    terminal: bool,
    doc_ids: HashSet<DocId>,
}

/// Prefix tree over indexed words.
///
/// Nodes live in a flat arena and refer to their children by index; node 0 is
/// the root and represents the empty prefix. A node is terminal iff at least
/// one inserted word ends exactly there, and its id set is the union of every
/// document that inserted that word.
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    nodes: Vec<Node>,
    words: usize,
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            words: 0,
        }
    }

    /// Index `word` as appearing in document `doc_id`.
    ///
    /// Case-sensitive, idempotent per (word, id) pair, never fails.
    pub fn insert(&mut self, word: &str, doc_id: DocId) {
        let mut current = 0;
        for ch in word.chars() {
            current = match self.nodes[current].children.get(&ch).copied() {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[current].children.insert(ch, child);
                    child
                }
            };
        }

        let node = &mut self.nodes[current];
        if !node.terminal {
            node.terminal = true;
            self.words += 1;
        }
        node.doc_ids.insert(doc_id);
    }

    /// Walk the character path for `s`, returning the arena index of the node
    /// it ends at.
    fn walk(&self, s: &str) -> Option<usize> {
        let mut current = 0;
        for ch in s.chars() {
            current = *self.nodes[current].children.get(&ch)?;
        }
        Some(current)
    }

    /// Documents containing exactly `word`.
    ///
    /// Empty when the word was never inserted; prefixes of indexed words do
    /// not match.
    pub fn exact_lookup(&self, word: &str) -> HashSet<DocId> {
        match self.walk(word) {
            Some(idx) if self.nodes[idx].terminal => self.nodes[idx].doc_ids.clone(),
            _ => HashSet::new(),
        }
    }

    /// Every indexed word starting with `prefix`.
    ///
    /// Depth-first over the subtree below the prefix node, driven by an
    /// explicit work stack. Result order is unspecified; callers needing a
    /// stable order must sort.
    pub fn expand(&self, prefix: &str) -> Vec<String> {
        let start = match self.walk(prefix) {
            Some(idx) => idx,
            None => return Vec::new(),
        };

        let mut results = Vec::new();
        let mut stack = vec![(start, prefix.to_string())];

        while let Some((idx, word)) = stack.pop() {
            let node = &self.nodes[idx];
            if node.terminal {
                results.push(word.clone());
            }
            for (&ch, &child) in &node.children {
                let mut next = word.clone();
                next.push(ch);
                stack.push((child, next));
            }
        }

        results
    }

    /// Number of distinct indexed words.
    pub fn word_count(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}
