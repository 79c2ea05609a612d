use crate::bits::BitString;
use crate::code_table::CodeTable;
use crate::error::{HuffmanError, Result};
use std::hash::Hash;

/// Concatenates the code of every symbol in `sequence`, in order.
///
/// Fails with `UnknownSymbol` on the first symbol the table has no code for;
/// nothing is returned for the symbols before it.
pub fn encode<'a, T, I>(sequence: I, table: &CodeTable<T>) -> Result<BitString>
where
    T: Hash + Eq + Clone + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut out = BitString::new();
    for (position, symbol) in sequence.into_iter().enumerate() {
        let code = table
            .get(symbol)
            .ok_or(HuffmanError::UnknownSymbol { position })?;
        out.extend_from(code);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code_table::derive_code_table;
    use crate::frequency::compute_frequencies;
    use crate::tree::build_tree;

    fn table_for(text: &str) -> CodeTable<char> {
        let tree = build_tree(&compute_frequencies(text.chars())).unwrap();
        derive_code_table(&tree)
    }

    #[test]
    fn test_encode_concatenates_codes() {
        let table = table_for("aabbbcccc");
        let input: Vec<char> = "abc".chars().collect();
        let bits = encode(&input, &table).unwrap();
        assert_eq!(bits.to_string(), "10110");
    }

    #[test]
    fn test_encoded_length_is_sum_of_code_lengths() {
        let text = "mississippi river";
        let table = table_for(text);
        let input: Vec<char> = text.chars().collect();

        let bits = encode(&input, &table).unwrap();
        let expected: usize = input.iter().map(|c| table.get(c).unwrap().len()).sum();
        assert_eq!(bits.len(), expected);
    }

    #[test]
    fn test_single_symbol_not_empty() {
        let table = table_for("aaaa");
        let input: Vec<char> = "aaaa".chars().collect();
        assert_eq!(encode(&input, &table).unwrap().to_string(), "0000");
    }

    #[test]
    fn test_unknown_symbol() {
        let table = table_for("abc");
        let input: Vec<char> = "abxa".chars().collect();
        assert_eq!(
            encode(&input, &table).unwrap_err(),
            HuffmanError::UnknownSymbol { position: 2 }
        );
    }

    #[test]
    fn test_empty_input_encodes_to_nothing() {
        let table = table_for("abc");
        let input: Vec<char> = Vec::new();
        assert!(encode(&input, &table).unwrap().is_empty());
    }
}
