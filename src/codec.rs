use crate::bits::BitString;
use crate::code_table::{derive_code_table, CodeTable};
use crate::decode::decode;
use crate::encode::encode;
use crate::error::{HuffmanError, Result};
use crate::frequency::{compute_frequencies, FrequencyTable};
use crate::tree::{build_tree, HuffmanTree};
use log::debug;
use std::fmt::Debug;
use std::hash::Hash;

/// A tree and its code table, built together from one input.
///
/// Both halves are read-only after construction. Submitting a new input
/// means building a new codec; nothing carries over from a previous one.
#[derive(Debug, Clone)]
pub struct HuffmanCodec<T> {
    tree: HuffmanTree<T>,
    table: CodeTable<T>,
}

impl<T: Hash + Eq + Clone + Debug> HuffmanCodec<T> {
    /// Counts `sequence`, builds its tree and derives the code table.
    pub fn new(sequence: &[T]) -> Result<Self> {
        Self::from_frequencies(&compute_frequencies(sequence.iter().cloned()))
    }

    /// Builds the tree and code table for precomputed frequencies.
    pub fn from_frequencies(frequencies: &FrequencyTable<T>) -> Result<Self> {
        let tree = build_tree(frequencies)?;
        let table = derive_code_table(&tree);
        Ok(Self { tree, table })
    }

    pub fn encode(&self, sequence: &[T]) -> Result<BitString> {
        encode(sequence, &self.table)
    }

    pub fn decode(&self, bits: &BitString) -> Result<Vec<T>> {
        decode(bits, &self.tree)
    }

    pub fn tree(&self) -> &HuffmanTree<T> {
        &self.tree
    }

    pub fn table(&self) -> &CodeTable<T> {
        &self.table
    }

    /// Size of `sequence` under this codec versus a fixed-width code.
    pub fn stats(&self, sequence: &[T]) -> Result<CompressionStats> {
        let mut encoded_bits = 0;
        for (position, symbol) in sequence.iter().enumerate() {
            let code = self
                .table
                .get(symbol)
                .ok_or(HuffmanError::UnknownSymbol { position })?;
            encoded_bits += code.len();
        }

        let stats = CompressionStats {
            input_length: sequence.len(),
            alphabet_size: self.table.len(),
            encoded_bits,
            fixed_width_bits: sequence.len() * fixed_width(self.table.len()),
        };
        debug!(
            "{} symbols: {} bits encoded vs {} fixed-width",
            stats.input_length, stats.encoded_bits, stats.fixed_width_bits
        );
        Ok(stats)
    }
}

impl HuffmanCodec<char> {
    /// Builds a codec over the characters of `text`.
    pub fn from_text(text: &str) -> Result<Self> {
        let chars: Vec<char> = text.chars().collect();
        Self::new(&chars)
    }

    pub fn encode_text(&self, text: &str) -> Result<BitString> {
        encode(&text.chars().collect::<Vec<_>>(), &self.table)
    }

    pub fn decode_text(&self, bits: &BitString) -> Result<String> {
        Ok(self.decode(bits)?.into_iter().collect())
    }
}

impl HuffmanCodec<u8> {
    /// Builds a codec over raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::new(bytes)
    }
}

/// Bits per symbol of the narrowest fixed-width code for `alphabet` symbols.
fn fixed_width(alphabet: usize) -> usize {
    if alphabet <= 2 {
        1
    } else {
        (usize::BITS - (alphabet - 1).leading_zeros()) as usize
    }
}

/// Statistics about the compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    /// Number of input symbols
    pub input_length: usize,
    /// Number of distinct symbols in the code table
    pub alphabet_size: usize,
    /// Length of the Huffman-encoded bit-string
    pub encoded_bits: usize,
    /// Length of the same input under a fixed-width code
    pub fixed_width_bits: usize,
}

impl CompressionStats {
    /// Returns encoded size as a percentage of the fixed-width size.
    pub fn compression_ratio(&self) -> f64 {
        if self.fixed_width_bits == 0 {
            0.0
        } else {
            (self.encoded_bits as f64 / self.fixed_width_bits as f64) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MalformedEncoding;

    #[test]
    fn test_fixed_width() {
        assert_eq!(fixed_width(1), 1);
        assert_eq!(fixed_width(2), 1);
        assert_eq!(fixed_width(3), 2);
        assert_eq!(fixed_width(4), 2);
        assert_eq!(fixed_width(5), 3);
        assert_eq!(fixed_width(256), 8);
        assert_eq!(fixed_width(257), 9);
    }

    #[test]
    fn test_text_roundtrip() {
        let text = "this is an example of a huffman tree";
        let codec = HuffmanCodec::from_text(text).unwrap();
        let bits = codec.encode_text(text).unwrap();
        assert_eq!(codec.decode_text(&bits).unwrap(), text);
    }

    #[test]
    fn test_bytes_roundtrip() {
        let data = b"\x00\x01\x01\xff\xff\xff";
        let codec = HuffmanCodec::from_bytes(data).unwrap();
        let bits = codec.encode(data).unwrap();
        assert_eq!(codec.decode(&bits).unwrap(), data.to_vec());
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(
            HuffmanCodec::from_text("").unwrap_err(),
            HuffmanError::EmptyAlphabet
        );
    }

    #[test]
    fn test_stats() {
        let text = "aabbbcccc";
        let codec = HuffmanCodec::from_text(text).unwrap();
        let chars: Vec<char> = text.chars().collect();
        let stats = codec.stats(&chars).unwrap();

        assert_eq!(stats.input_length, 9);
        assert_eq!(stats.alphabet_size, 3);
        assert_eq!(stats.encoded_bits, 14);
        assert_eq!(stats.encoded_bits, codec.tree().weighted_path_length());
        assert_eq!(stats.fixed_width_bits, 18);
        assert!(stats.compression_ratio() < 100.0);
    }

    #[test]
    fn test_stats_unknown_symbol() {
        let codec = HuffmanCodec::from_text("ab").unwrap();
        assert_eq!(
            codec.stats(&['a', 'z']).unwrap_err(),
            HuffmanError::UnknownSymbol { position: 1 }
        );
    }

    #[test]
    fn test_decode_with_foreign_bits() {
        let codec = HuffmanCodec::from_text("aabbbcccc").unwrap();
        let bits: BitString = "1".parse().unwrap();
        assert_eq!(
            codec.decode(&bits).unwrap_err(),
            HuffmanError::MalformedEncoding(MalformedEncoding::Truncated { consumed: 1 })
        );
    }
}
