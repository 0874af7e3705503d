use crate::error::{HuffmanError, Result};
use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

/// Serialized form of a bit sequence: the bit count plus the machine words
/// backing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct PackedBits {
    len: usize,
    words: Box<[usize]>,
}

impl PackedBits {
    pub(crate) fn into_bitvec(self) -> Result<BitVec> {
        let Self { len, words } = self;

        let capacity = words.len() * usize::BITS as usize;
        if len > capacity {
            return Err(HuffmanError::InvalidPackedBits { len, capacity });
        }

        let mut bv: BitVec = BitVec::from_vec(words.into_vec());
        bv.truncate(len);
        Ok(bv)
    }
}

impl From<&BitSlice> for PackedBits {
    fn from(bits: &BitSlice) -> Self {
        // copy into a fresh vector so the live bits start at word 0
        let mut owned: BitVec = BitVec::with_capacity(bits.len());
        owned.extend_from_bitslice(bits);

        Self {
            len: owned.len(),
            words: owned.into_vec().into_boxed_slice(),
        }
    }
}
