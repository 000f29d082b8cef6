use std::collections::BTreeMap;

/// Occurrence count of every byte value seen in an input.
///
/// Only symbols that actually occur have an entry, so every count is
/// positive and the counts add up to the input length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<u8, usize>,
}

impl FrequencyTable {
    pub fn from_bytes(input: &[u8]) -> Self {
        let mut counts = BTreeMap::new();
        for &symbol in input {
            *counts.entry(symbol).or_default() += 1;
        }
        Self { counts }
    }

    pub fn get(&self, symbol: u8) -> Option<usize> {
        self.counts.get(&symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn abracadabra() {
        let table = FrequencyTable::from_bytes(b"abracadabra");
        let pairs: Vec<_> = table.iter().collect();
        assert_eq!(
            pairs,
            vec![(b'a', 5), (b'b', 2), (b'c', 1), (b'd', 1), (b'r', 2)]
        );
    }

    #[test]
    fn empty_input() {
        let table = FrequencyTable::from_bytes(b"");
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert_eq!(table.iter().count(), 0);
    }

    #[test_case(b"aaaa")]
    #[test_case(b"hello world")]
    #[test_case(b"\x00\xff\x00\x80\xff\xff" ; "non ascii")]
    fn counts_sum_to_length(input: &[u8]) {
        let table = FrequencyTable::from_bytes(input);
        assert_eq!(table.total(), input.len());
        assert!(table.iter().all(|(_, count)| count > 0));
    }

    #[test]
    fn absent_symbol() {
        let table = FrequencyTable::from_bytes(b"xyz");
        assert_eq!(table.get(b'x'), Some(1));
        assert_eq!(table.get(b'a'), None);
    }
}
