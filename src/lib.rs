//! # Huffman - Optimal Prefix-Free Coding
//!
//! A Rust implementation of Huffman coding over arbitrary hashable symbols.
//!
//! The pipeline runs in one direction:
//! 1. **Frequency counting**: tally how often each distinct symbol occurs
//! 2. **Tree building**: greedily merge the two lightest nodes until one root remains
//! 3. **Code derivation**: label left edges `0` and right edges `1`; each leaf's path is its code
//! 4. **Encoding / decoding**: concatenate codes, or walk the tree bit by bit to undo it
//!
//! ## Example
//!
//! ```
//! use huffman_rs::{build_tree, compute_frequencies, decode, derive_code_table, encode};
//!
//! let input: Vec<char> = "aabbbcccc".chars().collect();
//!
//! let tree = build_tree(&compute_frequencies(input.iter().copied()))?;
//! let table = derive_code_table(&tree);
//!
//! let bits = encode(&input, &table)?;
//! assert_eq!(bits.to_string(), "10101111110000");
//! assert_eq!(decode(&bits, &tree)?, input);
//! # Ok::<(), huffman_rs::HuffmanError>(())
//! ```
//!
//! ## Determinism
//!
//! Equal weights are broken by queue order: leaves enter in the order their
//! symbols first appear in the input, merged nodes after them. The same input
//! always yields the same codes.

mod bits;
mod code_table;
mod codec;
mod decode;
mod encode;
mod error;
mod frequency;
mod tree;


pub use bits::BitString;
pub use code_table::{derive_code_table, CodeTable};
pub use codec::{CompressionStats, HuffmanCodec};
pub use decode::decode;
pub use encode::encode;
pub use error::{HuffmanError, MalformedEncoding, Result};
pub use frequency::{compute_frequencies, FrequencyEntry, FrequencyTable};
pub use tree::{build_tree, HuffmanTree, Node, NodeKey};
