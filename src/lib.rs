//! Minimum-redundancy (Huffman) prefix codes over bytes.
//!
//! Counting symbol frequencies, building the tree, reading the code book off
//! the tree, then encoding and decoding with that same tree:
//!
//! ```
//! use huffcode::Huffman;
//!
//! let input = b"abracadabra";
//! let huffman = Huffman::from_bytes(input);
//! let encoded = huffman.encode(input)?;
//! assert_eq!(encoded.len(), 23);
//! assert_eq!(huffman.decode(&encoded)?, input);
//! # Ok::<(), huffcode::Error>(())
//! ```

pub mod bits;
pub mod codebook;
pub mod error;
pub mod frequency;
pub mod huffman;
pub mod tree;

pub use bits::BitString;
pub use codebook::CodeBook;
pub use error::{BitParseError, DecodeError, EncodeError, Error};
pub use frequency::FrequencyTable;
pub use huffman::{CompressionStats, Huffman, decode, encode};
pub use tree::HuffmanTree;

/// Printable form of a symbol: the character itself when it is visible ASCII
/// or a space, hex otherwise.
pub fn symbol_label(symbol: u8) -> String {
    if symbol.is_ascii_graphic() || symbol == b' ' {
        (symbol as char).to_string()
    } else {
        format!("{symbol:#04x}")
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(b'a', "a" ; "letter")]
    #[test_case(b'~', "~" ; "punctuation")]
    #[test_case(b' ', " " ; "space")]
    #[test_case(b'\n', "0x0a" ; "newline")]
    #[test_case(0xff, "0xff" ; "high byte")]
    fn labels(symbol: u8, expected: &str) {
        assert_eq!(symbol_label(symbol), expected);
    }
}
