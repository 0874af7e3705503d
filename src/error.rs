use thiserror::Error;

pub type Result<T, E = HuffmanError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HuffmanError {
    #[error("symbol {symbol} at position {position} has no code")]
    UnknownSymbol { symbol: String, position: usize },

    #[error("bitstream ended mid-code: {pending_bits} dangling bit(s) after {decoded} decoded symbol(s)")]
    TruncatedCode { decoded: usize, pending_bits: usize },

    #[error("no code matches the bits starting at offset {offset}")]
    UnmatchedCode { offset: usize },

    #[error("code table contains an empty code")]
    EmptyCode,

    #[error("code table assigns more than one code to a symbol")]
    DuplicateSymbol,

    #[error("code table is not prefix-free")]
    NotPrefixFree,

    #[error("invalid bit character {found:?} at position {position}")]
    InvalidBit { found: char, position: usize },

    #[error("packed bits claim {len} bits but only {capacity} are stored")]
    InvalidPackedBits { len: usize, capacity: usize },
}
