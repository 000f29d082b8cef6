use std::fmt;
use std::str::FromStr;

use crate::error::BitParseError;

/// An ordered run of bits, `false` for `0` and `true` for `1`.
///
/// Used both for a single symbol's code and for a whole encoded stream.
/// Prints as a string of ASCII `0`/`1` digits and parses back from one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn pop(&mut self) -> Option<bool> {
        self.bits.pop()
    }

    pub fn extend_from(&mut self, other: &BitString) {
        self.bits.extend_from_slice(&other.bits);
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    pub fn starts_with(&self, prefix: &BitString) -> bool {
        self.bits.starts_with(&prefix.bits)
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

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BitString {
    type Err = BitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, found)| match found {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(BitParseError { position, found }),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("" ; "empty")]
    #[test_case("0" ; "single zero")]
    #[test_case("1" ; "single one")]
    #[test_case("0110100" ; "mixed")]
    fn parse_then_print(text: &str) {
        let bits: BitString = text.parse().unwrap();
        assert_eq!(bits.len(), text.len());
        assert_eq!(bits.to_string(), text);
    }

    #[test]
    fn rejects_non_binary_digits() {
        let err = "012".parse::<BitString>().unwrap_err();
        assert_eq!(
            err,
            BitParseError {
                position: 2,
                found: '2'
            }
        );
    }

    #[test]
    fn prefix_check() {
        let code: BitString = "10".parse().unwrap();
        let longer: BitString = "101".parse().unwrap();
        assert!(longer.starts_with(&code));
        assert!(!code.starts_with(&longer));
        assert!(code.starts_with(&BitString::new()));
    }
}
