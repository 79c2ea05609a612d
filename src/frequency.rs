use ahash::AHashMap as HashMap;
use log::debug;
use std::hash::Hash;

/// A symbol together with the number of times it occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry<T> {
    pub symbol: T,
    pub count: usize,
}

/// Occurrence counts for every distinct symbol of an input.
///
/// Entries keep the order in which their symbols first appeared. The tree
/// builder seeds its queue in this order, which makes equal-weight tie-breaks
/// reproducible across runs.
#[derive(Debug, Clone)]
pub struct FrequencyTable<T> {
    entries: Vec<FrequencyEntry<T>>,
    index: HashMap<T, usize>,
    total: usize,
}

impl<T: Hash + Eq + Clone> FrequencyTable<T> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            total: 0,
        }
    }

    /// Builds a table from explicit `(symbol, count)` pairs.
    ///
    /// Zero counts are skipped and repeated symbols have their counts summed,
    /// so every resulting entry has `count >= 1`.
    pub fn from_counts<I: IntoIterator<Item = (T, usize)>>(counts: I) -> Self {
        let mut table = Self::new();
        for (symbol, count) in counts {
            table.add(symbol, count);
        }
        table
    }

    /// Records one occurrence of `symbol`.
    pub fn push(&mut self, symbol: T) {
        self.add(symbol, 1);
    }

    fn add(&mut self, symbol: T, count: usize) {
        if count == 0 {
            return;
        }
        self.total += count;
        match self.index.get(&symbol) {
            Some(&slot) => self.entries[slot].count += count,
            None => {
                self.index.insert(symbol.clone(), self.entries.len());
                self.entries.push(FrequencyEntry { symbol, count });
            }
        }
    }

    /// Returns the count for `symbol`, if it occurred.
    pub fn get(&self, symbol: &T) -> Option<usize> {
        self.index.get(symbol).map(|&slot| self.entries[slot].count)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, equal to the length of the counted sequence.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Entries in first-occurrence order.
    pub fn entries(&self) -> &[FrequencyEntry<T>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrequencyEntry<T>> {
        self.entries.iter()
    }
}

impl<T: Hash + Eq + Clone> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Clone> Extend<T> for FrequencyTable<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for symbol in iter {
            self.push(symbol);
        }
    }
}

impl<T: Hash + Eq + Clone> FromIterator<T> for FrequencyTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<'a, T> IntoIterator for &'a FrequencyTable<T> {
    type Item = &'a FrequencyEntry<T>;
    type IntoIter = std::slice::Iter<'a, FrequencyEntry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Counts every distinct symbol of `sequence`.
pub fn compute_frequencies<T, I>(sequence: I) -> FrequencyTable<T>
where
    T: Hash + Eq + Clone,
    I: IntoIterator<Item = T>,
{
    let table: FrequencyTable<T> = sequence.into_iter().collect();
    debug!(
        "counted {} symbols over an alphabet of {}",
        table.total(),
        table.len()
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_sum_to_length() {
        let table = compute_frequencies("aabbbcccc".chars());
        assert_eq!(table.len(), 3);
        assert_eq!(table.total(), 9);
        assert_eq!(table.get(&'a'), Some(2));
        assert_eq!(table.get(&'b'), Some(3));
        assert_eq!(table.get(&'c'), Some(4));
        assert_eq!(table.get(&'z'), None);
    }

    #[test]
    fn test_first_occurrence_order() {
        let table = compute_frequencies("cabcab".chars());
        let order: Vec<char> = table.iter().map(|e| e.symbol).collect();
        assert_eq!(order, vec!['c', 'a', 'b']);
    }

    #[test]
    fn test_empty_sequence() {
        let table = compute_frequencies(Vec::<u8>::new());
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_non_alphanumeric_symbols_counted() {
        let table = compute_frequencies("a b!".chars());
        assert_eq!(table.len(), 4);
        assert_eq!(table.get(&' '), Some(1));
        assert_eq!(table.get(&'!'), Some(1));
    }

    #[test]
    fn test_from_counts_merges_and_skips_zero() {
        let table = FrequencyTable::from_counts(vec![('x', 2), ('y', 0), ('x', 3), ('z', 1)]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(&'x'), Some(5));
        assert_eq!(table.get(&'y'), None);
        assert_eq!(table.total(), 6);
    }
}
