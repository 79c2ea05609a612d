use crate::error::MalformedEncoding;
use std::fmt;
use std::str::FromStr;

/// A sequence of bits, used both for single codes and for encoded output.
///
/// Displays as a string of '0' and '1' characters and parses back from one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    /// Creates an empty bit-string.
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Creates an empty bit-string with room for `capacity` bits.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    /// Appends one bit.
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Removes and returns the last bit.
    pub fn pop(&mut self) -> Option<bool> {
        self.bits.pop()
    }

    /// Appends every bit of `other`.
    pub fn extend_from(&mut self, other: &BitString) {
        self.bits.extend_from_slice(&other.bits);
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Iterates over the bits, `true` for 1.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Returns true if `prefix` is a prefix of this bit-string.
    pub fn starts_with(&self, prefix: &BitString) -> bool {
        self.bits.starts_with(&prefix.bits)
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }
}

impl From<Vec<bool>> for BitString {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl Extend<bool> for BitString {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        self.bits.extend(iter);
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BitString {
    type Err = MalformedEncoding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(offset, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(MalformedEncoding::InvalidDigit { offset, found }),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        let bits: BitString = "01101".parse().unwrap();
        assert_eq!(bits.len(), 5);
        assert_eq!(bits.to_string(), "01101");
        assert_eq!(
            bits.iter().collect::<Vec<_>>(),
            vec![false, true, true, false, true]
        );
    }

    #[test]
    fn test_parse_empty() {
        let bits: BitString = "".parse().unwrap();
        assert!(bits.is_empty());
        assert_eq!(bits.to_string(), "");
    }

    #[test]
    fn test_parse_rejects_other_digits() {
        let err = "0120".parse::<BitString>().unwrap_err();
        assert_eq!(
            err,
            MalformedEncoding::InvalidDigit {
                offset: 2,
                found: '2'
            }
        );
    }

    #[test]
    fn test_starts_with() {
        let code: BitString = "10".parse().unwrap();
        let longer: BitString = "1011".parse().unwrap();
        let other: BitString = "0011".parse().unwrap();

        assert!(longer.starts_with(&code));
        assert!(!other.starts_with(&code));
        assert!(code.starts_with(&code));
    }

    #[test]
    fn test_push_pop_extend() {
        let mut bits = BitString::new();
        bits.push(true);
        bits.push(false);
        assert_eq!(bits.pop(), Some(false));

        let tail: BitString = "011".parse().unwrap();
        bits.extend_from(&tail);
        assert_eq!(bits.to_string(), "1011");
    }
}
