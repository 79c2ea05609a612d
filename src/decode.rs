use crate::bits::BitString;
use crate::error::{MalformedEncoding, Result};
use crate::tree::{HuffmanTree, Node};

/// Reconstructs the symbol sequence encoded in `bits`.
///
/// Walks from the root one bit at a time, `0` to the left child and `1` to
/// the right, emitting a symbol and restarting at the root on every leaf.
/// Prefix-freedom makes each segment resolve to exactly one leaf.
///
/// A tree that is a single leaf has the one-bit code `0`; against such a tree
/// each bit decodes to one copy of the symbol, whatever its value.
pub fn decode<T: Clone>(bits: &BitString, tree: &HuffmanTree<T>) -> Result<Vec<T>> {
    let root = tree.root().ok_or(MalformedEncoding::EmptyTree)?;
    let root_node = tree.node(root).ok_or(MalformedEncoding::EmptyTree)?;

    if let Node::Leaf { symbol, .. } = root_node {
        return Ok(vec![symbol.clone(); bits.len()]);
    }

    let mut out = Vec::new();
    let mut current = root_node;
    let mut mid_code = false;

    for (offset, bit) in bits.iter().enumerate() {
        let next = match current {
            Node::Internal { left, right, .. } => {
                if bit {
                    *right
                } else {
                    *left
                }
            }
            // Leaves have no children to step into.
            Node::Leaf { .. } => return Err(MalformedEncoding::MissingChild { offset }.into()),
        };

        current = tree
            .node(next)
            .ok_or(MalformedEncoding::MissingChild { offset })?;

        match current {
            Node::Leaf { symbol, .. } => {
                out.push(symbol.clone());
                current = root_node;
                mid_code = false;
            }
            Node::Internal { .. } => mid_code = true,
        }
    }

    if mid_code {
        return Err(MalformedEncoding::Truncated {
            consumed: bits.len(),
        }
        .into());
    }

    Ok(out)
}
