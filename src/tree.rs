use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use log::{debug, trace};
use slotmap::{DefaultKey, SlotMap};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

/// Handle to a node stored in a [`HuffmanTree`].
pub type NodeKey = DefaultKey;

/// A node of the Huffman tree.
///
/// Internal nodes own their children through keys into the tree's arena.
/// Each key is referenced by exactly one parent, so the arena holds a plain
/// owning tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<T> {
    /// A single input symbol and how often it occurs.
    Leaf { symbol: T, weight: usize },

    /// A merge of two subtrees; `weight` is the sum of both children.
    Internal {
        weight: usize,
        left: NodeKey,
        right: NodeKey,
    },
}

impl<T> Node<T> {
    pub fn weight(&self) -> usize {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// A Huffman prefix tree stored in a SlotMap arena.
///
/// Immutable once built. A default tree has no root and decodes nothing.
#[derive(Debug, Clone)]
pub struct HuffmanTree<T> {
    nodes: SlotMap<DefaultKey, Node<T>>,
    root: Option<NodeKey>,
}

impl<T> HuffmanTree<T> {
    /// Key of the root node, if the tree has one.
    pub fn root(&self) -> Option<NodeKey> {
        self.root
    }

    /// Looks up a node by key.
    pub fn node(&self, key: NodeKey) -> Option<&Node<T>> {
        self.nodes.get(key)
    }

    /// Total weight, equal to the length of the counted input.
    pub fn weight(&self) -> usize {
        self.root
            .and_then(|root| self.nodes.get(root))
            .map_or(0, Node::weight)
    }

    /// Number of leaves, one per distinct symbol.
    pub fn leaf_count(&self) -> usize {
        self.nodes.values().filter(|node| node.is_leaf()).count()
    }

    /// Returns true if the tree is a lone leaf.
    pub fn is_single_leaf(&self) -> bool {
        self.root
            .and_then(|root| self.nodes.get(root))
            .map_or(false, Node::is_leaf)
    }

    /// Length of the longest root-to-leaf path, in edges.
    pub fn depth(&self) -> usize {
        self.leaf_depths().map(|(_, depth)| depth).max().unwrap_or(0)
    }

    /// Total number of bits needed to encode the counted input.
    ///
    /// Sum of `weight * code length` over all leaves. A lone leaf counts
    /// one bit per occurrence, matching its one-bit code.
    pub fn weighted_path_length(&self) -> usize {
        self.leaf_depths()
            .map(|(weight, depth)| weight * depth.max(1))
            .sum()
    }

    /// Yields `(weight, depth)` for every leaf reachable from the root.
    fn leaf_depths(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let mut stack: Vec<(NodeKey, usize)> = self.root.map(|r| (r, 0)).into_iter().collect();
        std::iter::from_fn(move || {
            while let Some((key, depth)) = stack.pop() {
                match self.nodes.get(key)? {
                    Node::Leaf { weight, .. } => return Some((*weight, depth)),
                    Node::Internal { left, right, .. } => {
                        stack.push((*right, depth + 1));
                        stack.push((*left, depth + 1));
                    }
                }
            }
            None
        })
    }
}

impl<T> Default for HuffmanTree<T> {
    fn default() -> Self {
        Self {
            nodes: SlotMap::new(),
            root: None,
        }
    }
}

/// An entry in the builder's priority queue.
///
/// Ordered so that `BinaryHeap` pops the lowest weight first and, among
/// equal weights, the entry that was queued first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    weight: usize,
    seq: u64,
    key: NodeKey,
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Builds the Huffman tree for a frequency table.
///
/// Repeatedly merges the two lightest nodes until one remains. Leaves are
/// queued in the table's first-occurrence order and merged nodes after them;
/// ties on weight go to whichever node was queued first, and the first node
/// popped becomes the left child.
pub fn build_tree<T: Hash + Eq + Clone>(entries: &FrequencyTable<T>) -> Result<HuffmanTree<T>> {
    if entries.is_empty() {
        return Err(HuffmanError::EmptyAlphabet);
    }

    let mut nodes = SlotMap::with_capacity(2 * entries.len() - 1);
    let mut queue = BinaryHeap::with_capacity(entries.len());
    let mut seq = 0u64;

    for entry in entries {
        let key = nodes.insert(Node::Leaf {
            symbol: entry.symbol.clone(),
            weight: entry.count,
        });
        queue.push(Pending {
            weight: entry.count,
            seq,
            key,
        });
        seq += 1;
    }

    let mut root = None;
    while let Some(x) = queue.pop() {
        let Some(y) = queue.pop() else {
            root = Some(x.key);
            break;
        };

        let weight = x.weight + y.weight;
        trace!(
            "merge #{} (weight {}) + #{} (weight {}) -> #{} (weight {})",
            x.seq,
            x.weight,
            y.seq,
            y.weight,
            seq,
            weight
        );

        let key = nodes.insert(Node::Internal {
            weight,
            left: x.key,
            right: y.key,
        });
        queue.push(Pending { weight, seq, key });
        seq += 1;
    }

    let tree = HuffmanTree { nodes, root };
    debug!(
        "built tree with {} leaves, weight {}, depth {}",
        tree.leaf_count(),
        tree.weight(),
        tree.depth()
    );
    Ok(tree)
}
