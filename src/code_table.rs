use crate::bits::BitString;
use crate::tree::{HuffmanTree, Node, NodeKey};
use ahash::AHashMap as HashMap;
use log::{debug, trace};
use std::fmt::Debug;
use std::hash::Hash;

/// Bijection between symbols and their prefix-free codes.
///
/// Derived once from a tree and never mutated afterwards, so a table can be
/// shared freely between threads encoding independent inputs.
#[derive(Debug, Clone)]
pub struct CodeTable<T> {
    /// `(symbol, code)` sorted by code length, then code.
    entries: Vec<(T, BitString)>,
    by_symbol: HashMap<T, usize>,
    by_code: HashMap<BitString, usize>,
}

impl<T: Hash + Eq + Clone> CodeTable<T> {
    /// Code assigned to `symbol`.
    pub fn get(&self, symbol: &T) -> Option<&BitString> {
        self.by_symbol.get(symbol).map(|&i| &self.entries[i].1)
    }

    /// Symbol whose code is exactly `code`.
    pub fn symbol_for(&self, code: &BitString) -> Option<&T> {
        self.by_code.get(code).map(|&i| &self.entries[i].0)
    }

    pub fn contains(&self, symbol: &T) -> bool {
        self.by_symbol.contains_key(symbol)
    }

    /// Number of symbols in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of the longest code.
    pub fn max_code_len(&self) -> usize {
        self.entries.last().map_or(0, |(_, code)| code.len())
    }

    /// Iterates `(symbol, code)` pairs, shortest codes first.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &BitString)> + '_ {
        self.entries.iter().map(|(symbol, code)| (symbol, code))
    }
}

/// Assigns a code to every leaf of `tree`.
///
/// Walks depth-first, appending `0` when descending left and `1` when
/// descending right. A tree that is a single leaf gives its symbol the code
/// `0` so that every symbol costs at least one bit.
pub fn derive_code_table<T>(tree: &HuffmanTree<T>) -> CodeTable<T>
where
    T: Hash + Eq + Clone + Debug,
{
    let mut entries = Vec::new();

    if let Some(root) = tree.root() {
        if tree.is_single_leaf() {
            if let Some(Node::Leaf { symbol, .. }) = tree.node(root) {
                entries.push((symbol.clone(), BitString::from(vec![false])));
            }
        } else {
            let mut path = BitString::new();
            collect_codes(tree, root, &mut path, &mut entries);
        }
    }

    entries.sort_by(|(_, a), (_, b)| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

    let mut by_symbol = HashMap::with_capacity(entries.len());
    let mut by_code = HashMap::with_capacity(entries.len());
    for (i, (symbol, code)) in entries.iter().enumerate() {
        trace!("code {:?} -> {}", symbol, code);
        by_symbol.insert(symbol.clone(), i);
        by_code.insert(code.clone(), i);
    }

    let table = CodeTable {
        entries,
        by_symbol,
        by_code,
    };
    debug!(
        "derived {} codes, longest {} bits",
        table.len(),
        table.max_code_len()
    );
    table
}

fn collect_codes<T: Clone>(
    tree: &HuffmanTree<T>,
    key: NodeKey,
    path: &mut BitString,
    entries: &mut Vec<(T, BitString)>,
) {
    match tree.node(key) {
        Some(Node::Leaf { symbol, .. }) => entries.push((symbol.clone(), path.clone())),
        Some(Node::Internal { left, right, .. }) => {
            path.push(false);
            collect_codes(tree, *left, path, entries);
            path.pop();

            path.push(true);
            collect_codes(tree, *right, path, entries);
            path.pop();
        }
        None => {}
    }
}
