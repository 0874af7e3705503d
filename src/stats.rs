use crate::code::CodeTable;
use crate::frequency::FrequencyTable;
use serde::Serialize;
use std::hash::Hash;

/// Size figures for one compression run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompressionStats {
    pub symbols: usize,
    pub distinct: usize,
    pub encoded_bits: usize,
    /// Shannon entropy of the input in bits per symbol, the lower bound for
    /// the average code length.
    pub entropy: f64,
}

impl CompressionStats {
    pub fn new<Symbol>(frequencies: &FrequencyTable<Symbol>, codes: &CodeTable<Symbol>) -> Self
    where
        Symbol: Hash + Eq,
    {
        Self {
            symbols: frequencies.total(),
            distinct: frequencies.len(),
            encoded_bits: codes.encoded_len(frequencies),
            entropy: frequencies.entropy(),
        }
    }

    pub fn encoded_bytes(&self) -> usize {
        self.encoded_bits.div_ceil(8)
    }

    pub fn average_code_length(&self) -> f64 {
        if self.symbols == 0 {
            return 0.0;
        }
        self.encoded_bits as f64 / self.symbols as f64
    }

    /// Encoded size relative to storing every symbol in `bits_per_symbol`
    /// bits.
    pub fn ratio(&self, bits_per_symbol: usize) -> f64 {
        let original = self.symbols * bits_per_symbol;
        if original == 0 {
            return 0.0;
        }
        self.encoded_bits as f64 / original as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_code_table;

    #[test]
    fn figures_for_small_input() {
        let input: Vec<char> = "aabbbcc".chars().collect();
        let (codes, _) = build_code_table(&input);
        let stats = CompressionStats::new(&FrequencyTable::from_symbols(input), &codes);

        assert_eq!(stats.symbols, 7);
        assert_eq!(stats.distinct, 3);
        assert_eq!(stats.encoded_bits, 11);
        assert_eq!(stats.encoded_bytes(), 2);
        assert!((stats.ratio(8) - 11.0 / 56.0).abs() < 1e-12);
        assert!(stats.average_code_length() >= stats.entropy);
    }

    #[test]
    fn empty_input_has_zero_ratio() {
        let stats = CompressionStats::new::<u8>(&FrequencyTable::default(), &CodeTable::default());

        assert_eq!(stats.encoded_bytes(), 0);
        assert_eq!(stats.ratio(8), 0.0);
        assert_eq!(stats.average_code_length(), 0.0);
    }
}
