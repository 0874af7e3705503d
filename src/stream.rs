use crate::error::{HuffmanError, Result};
use crate::packed::PackedBits;
use bitvec::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The concatenated codes of an encoded message.
///
/// Displays as (and parses from) a string of `0` and `1` characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "PackedBits", try_from = "PackedBits")]
pub struct EncodedStream {
    bits: BitVec,
}

impl EncodedStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_bitslice(&self) -> &BitSlice {
        &self.bits
    }

    pub fn into_bitvec(self) -> BitVec {
        self.bits
    }

    pub(crate) fn extend_from_bitslice(&mut self, code: &BitSlice) {
        self.bits.extend_from_bitslice(code);
    }
}

impl From<BitVec> for EncodedStream {
    fn from(bits: BitVec) -> Self {
        Self { bits }
    }
}

impl From<EncodedStream> for PackedBits {
    fn from(stream: EncodedStream) -> Self {
        PackedBits::from(stream.bits.as_bitslice())
    }
}

impl TryFrom<PackedBits> for EncodedStream {
    type Error = HuffmanError;

    fn try_from(packed: PackedBits) -> Result<Self> {
        packed.into_bitvec().map(Self::from)
    }
}

impl fmt::Display for EncodedStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits.iter().by_vals() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for EncodedStream {
    type Err = HuffmanError;

    fn from_str(s: &str) -> Result<Self> {
        let mut bits = BitVec::with_capacity(s.len());
        for (position, found) in s.chars().enumerate() {
            match found {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => return Err(HuffmanError::InvalidBit { found, position }),
            }
        }
        Ok(Self { bits })
    }
}
