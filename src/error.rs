use thiserror::Error;

/// Errors produced by the Huffman pipeline.
///
/// Every variant is a deterministic invariant violation: retrying the same
/// call with the same arguments always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HuffmanError {
    /// No symbols to build a tree from.
    #[error("cannot build a Huffman tree from an empty alphabet")]
    EmptyAlphabet,

    /// A symbol in the input has no entry in the code table.
    #[error("symbol at position {position} has no code in the table")]
    UnknownSymbol { position: usize },

    /// The bit-string does not decode against the supplied tree.
    #[error("malformed encoding: {0}")]
    MalformedEncoding(#[from] MalformedEncoding),
}

/// Reason a bit-string was rejected by the decoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedEncoding {
    /// Bits ran out before the walk reached a leaf.
    #[error("bit-string ended mid-code after {consumed} bits")]
    Truncated { consumed: usize },

    /// The walk stepped into a child the tree does not have.
    #[error("bit {offset} leads to a missing child")]
    MissingChild { offset: usize },

    /// There is no tree to walk.
    #[error("tree has no root")]
    EmptyTree,

    /// Textual bit-string contained something other than '0' or '1'.
    #[error("invalid bit digit {found:?} at offset {offset}")]
    InvalidDigit { offset: usize, found: char },
}

pub type Result<T> = std::result::Result<T, HuffmanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            HuffmanError::UnknownSymbol { position: 3 }.to_string(),
            "symbol at position 3 has no code in the table"
        );

        let err: HuffmanError = MalformedEncoding::Truncated { consumed: 5 }.into();
        assert_eq!(
            err.to_string(),
            "malformed encoding: bit-string ended mid-code after 5 bits"
        );
    }

    #[test]
    fn test_from_malformed() {
        let err = HuffmanError::from(MalformedEncoding::EmptyTree);
        assert!(matches!(
            err,
            HuffmanError::MalformedEncoding(MalformedEncoding::EmptyTree)
        ));
    }
}
