use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::packed::PackedBits;
use bitvec::prelude::*;
use derivative::Derivative;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// Maps each symbol to its code: the path from the tree root to the
/// symbol's leaf, `0` for left and `1` for right.
///
/// A table is always prefix-free and never holds an empty code.
#[derive(Debug, Clone, Derivative, Serialize, Deserialize)]
#[derivative(
    Default(bound = ""),
    PartialEq(bound = "Symbol: Hash + Eq"),
    Eq(bound = "Symbol: Hash + Eq")
)]
#[serde(
    into = "SerializableCodeTable<Symbol>",
    try_from = "SerializableCodeTable<Symbol>",
    bound(
        serialize = "Symbol: Clone + Serialize",
        deserialize = "Symbol: Hash + Eq + Deserialize<'de>"
    )
)]
pub struct CodeTable<Symbol> {
    codes: HashMap<Symbol, BitBox>,
}

impl<Symbol> CodeTable<Symbol>
where
    Symbol: Hash + Eq,
{
    pub(crate) fn from_tree_codes(codes: HashMap<Symbol, BitBox>) -> Self {
        Self { codes }
    }

    /// Builds a table from explicit codes, checking that the result could
    /// have come from a Huffman tree walk.
    pub fn try_from_codes<I>(codes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Symbol, BitVec)>,
    {
        let mut table = HashMap::new();
        for (symbol, code) in codes {
            if code.is_empty() {
                return Err(HuffmanError::EmptyCode);
            }
            if table.insert(symbol, code.into_boxed_bitslice()).is_some() {
                return Err(HuffmanError::DuplicateSymbol);
            }
        }

        let all: Vec<&BitSlice> = table.values().map(|c| c.as_bitslice()).collect();
        for (i, a) in all.iter().enumerate() {
            if all[i + 1..]
                .iter()
                .any(|b| is_prefix(a, b) || is_prefix(b, a))
            {
                return Err(HuffmanError::NotPrefixFree);
            }
        }

        Ok(Self { codes: table })
    }

    pub fn get(&self, symbol: &Symbol) -> Option<&BitSlice> {
        self.codes.get(symbol).map(|c| c.as_bitslice())
    }

    /// Bits needed to encode an input with the given frequencies.
    pub fn encoded_len(&self, frequencies: &FrequencyTable<Symbol>) -> usize {
        frequencies
            .iter()
            .map(|(s, count)| count * self.get(s).map_or(0, |c| c.len()))
            .sum()
    }

    pub fn invert(&self) -> ReverseCodeTable<Symbol>
    where
        Symbol: Clone,
    {
        ReverseCodeTable::from(self)
    }
}

impl<Symbol> CodeTable<Symbol> {
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &BitSlice)> + '_ {
        self.codes.iter().map(|(s, c)| (s, c.as_bitslice()))
    }

    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(|c| c.len()).max().unwrap_or(0)
    }
}

fn is_prefix(prefix: &BitSlice, code: &BitSlice) -> bool {
    prefix.len() <= code.len() && code[..prefix.len()] == *prefix
}

/// Maps each code back to its symbol.
#[derive(Debug, Clone)]
pub struct ReverseCodeTable<Symbol> {
    symbols: HashMap<BitVec, Symbol>,
    max_code_len: usize,
}

impl<'a, Symbol> From<&'a CodeTable<Symbol>> for ReverseCodeTable<Symbol>
where
    Symbol: Clone,
{
    fn from(table: &'a CodeTable<Symbol>) -> Self {
        Self {
            symbols: table
                .codes
                .iter()
                .map(|(s, c)| (c.to_bitvec(), s.clone()))
                .collect(),
            max_code_len: table.max_code_len(),
        }
    }
}

impl<Symbol> ReverseCodeTable<Symbol> {
    pub fn get(&self, code: &BitVec) -> Option<&Symbol> {
        self.symbols.get(code)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Length of the longest code; a decode buffer that outgrows it can
    /// never match.
    pub fn max_code_len(&self) -> usize {
        self.max_code_len
    }
}

#[derive(Serialize, Deserialize)]
pub(crate) struct SerializableCodeTable<Symbol> {
    codes: Vec<(Symbol, PackedBits)>,
}

impl<Symbol> From<CodeTable<Symbol>> for SerializableCodeTable<Symbol> {
    fn from(other: CodeTable<Symbol>) -> Self {
        Self {
            codes: other
                .codes
                .into_iter()
                .map(|(s, c)| {
                    let packed = PackedBits::from(c.as_bitslice());
                    (s, packed)
                })
                .collect(),
        }
    }
}

impl<Symbol> TryFrom<SerializableCodeTable<Symbol>> for CodeTable<Symbol>
where
    Symbol: Hash + Eq,
{
    type Error = HuffmanError;

    fn try_from(other: SerializableCodeTable<Symbol>) -> Result<Self> {
        let codes = other
            .codes
            .into_iter()
            .map(|(s, packed)| Ok((s, packed.into_bitvec()?)))
            .collect::<Result<Vec<_>>>()?;

        Self::try_from_codes(codes)
    }
}
