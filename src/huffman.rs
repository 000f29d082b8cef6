use log::debug;

use crate::bits::BitString;
use crate::codebook::CodeBook;
use crate::error::{DecodeError, EncodeError};
use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanTree, NodeType};

/// Frequencies, tree and code book derived from one input.
///
/// Encoding and decoding both go through the same tree instance, so the two
/// directions cannot drift apart.
#[derive(Debug, Clone, Default)]
pub struct Huffman {
    freqs: FrequencyTable,
    tree: HuffmanTree,
    codebook: CodeBook,
}

impl Huffman {
    pub fn from_bytes(input: &[u8]) -> Self {
        Self::from_frequencies(FrequencyTable::from_bytes(input))
    }

    pub fn from_frequencies(freqs: FrequencyTable) -> Self {
        let tree = HuffmanTree::from_frequencies(&freqs);
        let codebook = CodeBook::from_tree(&tree);
        Self {
            freqs,
            tree,
            codebook,
        }
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.freqs
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn codebook(&self) -> &CodeBook {
        &self.codebook
    }

    pub fn encode(&self, input: &[u8]) -> Result<BitString, EncodeError> {
        encode(input, &self.codebook)
    }

    pub fn decode(&self, encoded: &BitString) -> Result<Vec<u8>, DecodeError> {
        decode(encoded, &self.tree)
    }
}

/// Concatenate the code of every input byte.
///
/// Fails without producing any output if a byte has no code.
pub fn encode(input: &[u8], codebook: &CodeBook) -> Result<BitString, EncodeError> {
    let mut encoded = BitString::with_capacity(input.len());
    for &symbol in input {
        let code = codebook
            .get(symbol)
            .ok_or(EncodeError::SymbolNotEncodable(symbol))?;
        encoded.extend_from(code);
    }

    debug!("encoded {} bytes into {} bits", input.len(), encoded.len());
    Ok(encoded)
}

/// Walk the tree one bit at a time, emitting a symbol at every leaf.
pub fn decode(encoded: &BitString, tree: &HuffmanTree) -> Result<Vec<u8>, DecodeError> {
    let mut decoded = Vec::new();

    let Some(root) = tree.root() else {
        if !encoded.is_empty() {
            return Err(DecodeError::UnexpectedBit { position: 0 });
        }
        return Ok(decoded);
    };

    // A lone leaf has the code `0`, one bit per occurrence.
    if let NodeType::Leaf(symbol) = root.node_type() {
        for (position, bit) in encoded.iter().enumerate() {
            if bit {
                return Err(DecodeError::UnexpectedBit { position });
            }
            decoded.push(*symbol);
        }
        return Ok(decoded);
    }

    let mut current_node = root;
    let mut pending = 0;

    for bit in encoded.iter() {
        let NodeType::Internal(left, right) = current_node.node_type() else {
            unreachable!("walk resets to the root after every leaf");
        };
        current_node = if bit { &**right } else { &**left };
        pending += 1;

        if let NodeType::Leaf(symbol) = current_node.node_type() {
            decoded.push(*symbol);
            current_node = root;
            pending = 0;
        }
    }

    if pending > 0 {
        return Err(DecodeError::TruncatedStream {
            consumed: encoded.len(),
            pending,
        });
    }

    debug!("decoded {} bits into {} bytes", encoded.len(), decoded.len());
    Ok(decoded)
}

/// Size comparison between raw 8-bit bytes and their encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    pub original_bits: usize,
    pub encoded_bits: usize,
}

impl CompressionStats {
    pub fn new(input: &[u8], encoded: &BitString) -> Self {
        Self {
            original_bits: input.len() * 8,
            encoded_bits: encoded.len(),
        }
    }

    /// Encoded size as a fraction of the original, `None` for empty input.
    pub fn ratio(&self) -> Option<f64> {
        (self.original_bits > 0).then(|| self.encoded_bits as f64 / self.original_bits as f64)
    }
}
