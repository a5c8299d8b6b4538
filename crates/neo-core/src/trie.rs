//! Character trie mapping NEO names to their database handles.

use std::collections::BTreeMap;

use crate::models::NeoId;

#[derive(Debug, Default, Clone)]
struct Node {
    children: BTreeMap<char, Node>,
    value: Option<NeoId>,
}

/// Exact-match lookup from NEO name to [`NeoId`].
///
/// Only full names are hits; a prefix of a stored name is not. Inserting a
/// name twice keeps the later handle.
#[derive(Debug, Default, Clone)]
pub struct NameTrie {
    root: Node,
    len: usize,
}

impl NameTrie {
    /// Create an empty trie.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a name, returning the handle it replaced, if any.
    pub fn insert(&mut self, name: &str, id: NeoId) -> Option<NeoId> {
        let mut node = &mut self.root;
        for ch in name.chars() {
            node = node.children.entry(ch).or_default();
        }
        let previous = node.value.replace(id);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Look up a name exactly.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<NeoId> {
        self.find(name)?.value
    }

    /// All stored names starting with `prefix`, in lexicographic order.
    #[must_use]
    pub fn names_with_prefix(&self, prefix: &str) -> Vec<(String, NeoId)> {
        let mut out = Vec::new();
        if let Some(node) = self.find(prefix) {
            let mut name = prefix.to_string();
            collect(node, &mut name, &mut out);
        }
        out
    }

    /// Number of stored names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the trie has no names.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn find(&self, key: &str) -> Option<&Node> {
        key.chars()
            .try_fold(&self.root, |node, ch| node.children.get(&ch))
    }
}

fn collect(node: &Node, name: &mut String, out: &mut Vec<(String, NeoId)>) {
    if let Some(id) = node.value {
        out.push((name.clone(), id));
    }
    for (&ch, child) in &node.children {
        name.push(ch);
        collect(child, name, out);
        name.pop();
    }
}

impl<'a> FromIterator<(&'a str, NeoId)> for NameTrie {
    fn from_iter<I: IntoIterator<Item = (&'a str, NeoId)>>(iter: I) -> Self {
        let mut trie = Self::new();
        for (name, id) in iter {
            trie.insert(name, id);
        }
        trie
    }
}
