use std::collections::BTreeMap;

use log::debug;

use crate::bits::BitString;
use crate::tree::{HuffmanTree, Node, NodeType};

/// Symbol to code mapping read off a [`HuffmanTree`].
///
/// A code is the path from the root to the symbol's leaf, `0` for a left
/// step and `1` for a right step. Since only leaves carry codes the book is
/// prefix-free. A tree consisting of a single leaf gets the one-bit code `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBook {
    codes: BTreeMap<u8, BitString>,
}

impl CodeBook {
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();
        match tree.root() {
            None => {}
            Some(root) => match root.node_type() {
                NodeType::Leaf(symbol) => {
                    codes.insert(*symbol, BitString::from(vec![false]));
                }
                NodeType::Internal(..) => {
                    let mut path = BitString::new();
                    fill(root, &mut path, &mut codes);
                }
            },
        }

        debug!(
            "derived {} codes, longest {} bits",
            codes.len(),
            codes.values().map(BitString::len).max().unwrap_or(0)
        );

        Self { codes }
    }

    pub fn get(&self, symbol: u8) -> Option<&BitString> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitString)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }
}

fn fill(node: &Node, path: &mut BitString, codes: &mut BTreeMap<u8, BitString>) {
    match node.node_type() {
        NodeType::Leaf(symbol) => {
            codes.insert(*symbol, path.clone());
        }
        NodeType::Internal(left, right) => {
            path.push(false);
            fill(left, path, codes);
            path.pop();

            path.push(true);
            fill(right, path, codes);
            path.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::{RngCore, SeedableRng};

    use super::*;
    use crate::frequency::FrequencyTable;

    fn codes_of(input: &[u8]) -> Vec<(u8, String)> {
        let book = CodeBook::from_tree(&HuffmanTree::from_bytes(input));
        book.iter()
            .map(|(symbol, code)| (symbol, code.to_string()))
            .collect()
    }

    fn assert_prefix_free(book: &CodeBook) {
        for (a, code_a) in book.iter() {
            for (b, code_b) in book.iter() {
                if a != b {
                    assert!(
                        !code_b.starts_with(code_a),
                        "code {code_a} for {a} prefixes {code_b} for {b}"
                    );
                }
            }
        }
    }

    #[test]
    fn abracadabra_fixture() {
        let expected = vec![
            (b'a', "0".to_string()),
            (b'b', "110".to_string()),
            (b'c', "100".to_string()),
            (b'd', "101".to_string()),
            (b'r', "111".to_string()),
        ];
        assert_eq!(codes_of(b"abracadabra"), expected);
    }

    #[test]
    fn more_frequent_symbols_get_shorter_codes() {
        let input = b"abracadabra";
        let freqs = FrequencyTable::from_bytes(input);
        let book = CodeBook::from_tree(&HuffmanTree::from_frequencies(&freqs));
        for (a, code_a) in book.iter() {
            for (b, code_b) in book.iter() {
                if freqs.get(a) > freqs.get(b) {
                    assert!(code_a.len() <= code_b.len());
                }
            }
        }
    }

    #[test]
    fn empty_tree_empty_book() {
        let book = CodeBook::from_tree(&HuffmanTree::default());
        assert!(book.is_empty());
    }

    #[test]
    fn single_leaf_gets_one_bit() {
        assert_eq!(codes_of(b"zzzz"), vec![(b'z', "0".to_string())]);
    }

    #[test]
    fn random_inputs_are_covered_and_prefix_free() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let len = (rng.next_u32() % 500) as usize + 1;
            // Narrow alphabets give skewed distributions and plenty of ties.
            let alphabet = (rng.next_u32() % 255) + 1;
            let input: Vec<u8> = (0..len)
                .map(|_| (rng.next_u32() % alphabet) as u8)
                .collect();

            let freqs = FrequencyTable::from_bytes(&input);
            let book = CodeBook::from_tree(&HuffmanTree::from_frequencies(&freqs));

            assert_eq!(book.len(), freqs.len());
            assert!(freqs.iter().all(|(symbol, _)| book.get(symbol).is_some()));
            assert_prefix_free(&book);
        }
    }
}
