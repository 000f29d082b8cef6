/// Encoding failed; nothing was emitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("no code for symbol {0:#04x}")]
    SymbolNotEncodable(u8),
}

/// A malformed bit stream handed to the decoder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The stream ended part way down a code path.
    #[error("stream truncated after {consumed} bits ({pending} bits of an unfinished code)")]
    TruncatedStream { consumed: usize, pending: usize },

    /// No code path continues with this bit.
    #[error("bit at position {position} does not follow any code path")]
    UnexpectedBit { position: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid bit {found:?} at position {position}, expected '0' or '1'")]
pub struct BitParseError {
    pub position: usize,
    pub found: char,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Parse(#[from] BitParseError),
}
