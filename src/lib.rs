//! Huffman coding of text and other symbol sequences.
//!
//! ```
//! let compressed = huffman_text::compress_text("abracadabra")?;
//! let text = huffman_text::decompress_text(&compressed.stream, &compressed.codes)?;
//! assert_eq!(text, "abracadabra");
//! # Ok::<(), huffman_text::HuffmanError>(())
//! ```

pub mod code;
pub mod codec;
pub mod error;
pub mod frequency;
pub mod stats;
pub mod stream;
pub mod tree;

mod packed;

pub use code::{CodeTable, ReverseCodeTable};
pub use codec::{decode, encode, Codec, CodecConfig};
pub use error::{HuffmanError, Result};
pub use frequency::FrequencyTable;
pub use stats::CompressionStats;
pub use stream::EncodedStream;
pub use tree::{HuffmanTree, Node};

use serde::{Deserialize, Serialize};
use std::hash::Hash;

pub fn huffman<Symbol: Hash + Eq + Clone>(
    symbols: impl IntoIterator<Item = Symbol>,
) -> Option<HuffmanTree<Symbol>> {
    HuffmanTree::from_frequencies(&FrequencyTable::from_symbols(symbols))
}

/// Builds the code table for `symbols`, along with the tree it was read
/// from. Empty input gives an empty table and no tree.
pub fn build_code_table<Symbol: Hash + Eq + Clone>(
    symbols: &[Symbol],
) -> (CodeTable<Symbol>, Option<HuffmanTree<Symbol>>) {
    match huffman(symbols.iter().cloned()) {
        Some(tree) => (tree.code_table(), Some(tree)),
        None => (CodeTable::default(), None),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compressed {
    pub stream: EncodedStream,
    pub codes: CodeTable<char>,
}

pub fn compress_text(text: &str) -> Result<Compressed> {
    let symbols: Vec<char> = text.chars().collect();
    let (codes, _) = build_code_table(&symbols);
    let stream = encode(&symbols, &codes)?;

    Ok(Compressed { stream, codes })
}

pub fn decompress_text(stream: &EncodedStream, codes: &CodeTable<char>) -> Result<String> {
    decode(stream, &codes.invert()).map(String::from_iter)
}
