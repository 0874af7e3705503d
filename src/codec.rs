use crate::code::{CodeTable, ReverseCodeTable};
use crate::error::{HuffmanError, Result};
use crate::stream::EncodedStream;
use bitvec::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;
use std::num::NonZeroUsize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Report progress every this many symbols (encode) or bits (decode).
    /// The last unit is always reported.
    pub progress_interval: NonZeroUsize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            progress_interval: NonZeroUsize::MIN,
        }
    }
}

/// Encodes and decodes symbol sequences, reporting progress to an
/// optional observer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    fn report(&self, done: usize, total: usize, on_progress: &mut impl FnMut(usize, usize)) {
        if done % self.config.progress_interval.get() == 0 || done == total {
            on_progress(done, total);
        }
    }

    pub fn encode<Symbol, F>(
        &self,
        symbols: &[Symbol],
        codes: &CodeTable<Symbol>,
        mut on_progress: F,
    ) -> Result<EncodedStream>
    where
        Symbol: Hash + Eq + Debug,
        F: FnMut(usize, usize),
    {
        let mut out = EncodedStream::new();
        let total = symbols.len();

        for (position, s) in symbols.iter().enumerate() {
            let code = codes.get(s).ok_or_else(|| HuffmanError::UnknownSymbol {
                symbol: format!("{:?}", s),
                position,
            })?;
            out.extend_from_bitslice(code);
            self.report(position + 1, total, &mut on_progress);
        }

        tracing::debug!(symbols = total, bits = out.len(), "encoded");
        Ok(out)
    }

    pub fn decode<Symbol, F>(
        &self,
        stream: &EncodedStream,
        reverse: &ReverseCodeTable<Symbol>,
        mut on_progress: F,
    ) -> Result<Vec<Symbol>>
    where
        Symbol: Clone,
        F: FnMut(usize, usize),
    {
        let mut out = Vec::new();
        if stream.is_empty() || reverse.is_empty() {
            return Ok(out);
        }

        let total = stream.len();
        let mut cursor = BitVec::with_capacity(reverse.max_code_len());

        for (i, b) in stream.as_bitslice().iter().by_vals().enumerate() {
            cursor.push(b);
            if let Some(sym) = reverse.get(&cursor) {
                cursor.clear();
                out.push(sym.clone());
            } else if cursor.len() >= reverse.max_code_len() {
                let offset = i + 1 - cursor.len();
                tracing::debug!(offset, decoded = out.len(), "no code matches");
                return Err(HuffmanError::UnmatchedCode { offset });
            }
            self.report(i + 1, total, &mut on_progress);
        }

        if !cursor.is_empty() {
            tracing::debug!(
                decoded = out.len(),
                pending_bits = cursor.len(),
                "bitstream ended mid-code"
            );
            return Err(HuffmanError::TruncatedCode {
                decoded: out.len(),
                pending_bits: cursor.len(),
            });
        }

        tracing::debug!(bits = total, symbols = out.len(), "decoded");
        Ok(out)
    }
}

pub fn encode<Symbol>(symbols: &[Symbol], codes: &CodeTable<Symbol>) -> Result<EncodedStream>
where
    Symbol: Hash + Eq + Debug,
{
    Codec::default().encode(symbols, codes, |_, _| {})
}

pub fn decode<Symbol>(stream: &EncodedStream, reverse: &ReverseCodeTable<Symbol>) -> Result<Vec<Symbol>>
where
    Symbol: Clone,
{
    Codec::default().decode(stream, reverse, |_, _| {})
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(codes: &[(char, &str)]) -> CodeTable<char> {
        CodeTable::try_from_codes(codes.iter().map(|(s, c)| {
            let stream: EncodedStream = c.parse().unwrap();
            (*s, stream.into_bitvec())
        }))
        .unwrap()
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn encode_concatenates_codes() {
        let codes = table(&[('a', "0"), ('b', "10")]);
        let out = encode(&chars("ab"), &codes).unwrap();

        assert_eq!(out.to_string(), "010");
    }

    #[test]
    fn encode_unknown_symbol() {
        let codes = table(&[('a', "0"), ('b', "1")]);

        assert_eq!(
            encode(&chars("abc"), &codes),
            Err(HuffmanError::UnknownSymbol {
                symbol: "'c'".to_string(),
                position: 2
            })
        );
    }

    #[test]
    fn empty_inputs_are_not_errors() {
        let empty: CodeTable<char> = CodeTable::default();

        assert!(encode(&[], &empty).unwrap().is_empty());
        assert_eq!(decode(&EncodedStream::new(), &empty.invert()), Ok(vec![]));

        let codes = table(&[('a', "0")]);
        assert_eq!(decode(&EncodedStream::new(), &codes.invert()), Ok(vec![]));
        assert_eq!(decode(&"0101".parse().unwrap(), &empty.invert()), Ok(vec![]));
    }

    #[test]
    fn decode_reverses_encode() {
        let codes = table(&[('a', "0"), ('b', "10"), ('c', "11")]);
        let decoded = decode(&"0101100".parse().unwrap(), &codes.invert()).unwrap();

        assert_eq!(decoded, chars("abcaa"));
    }

    #[test]
    fn decode_truncated_stream() {
        let codes = table(&[('a', "0"), ('b', "10")]);

        assert_eq!(
            decode(&"01".parse().unwrap(), &codes.invert()),
            Err(HuffmanError::TruncatedCode {
                decoded: 1,
                pending_bits: 1
            })
        );
    }

    #[test]
    fn decode_unmatched_code() {
        // 11 is not a code and no longer code can start with it
        let codes = table(&[('a', "0"), ('b', "10")]);

        assert_eq!(
            decode(&"0110".parse().unwrap(), &codes.invert()),
            Err(HuffmanError::UnmatchedCode { offset: 1 })
        );
    }

    #[test]
    fn progress_reports_every_unit() {
        let codes = table(&[('a', "0"), ('b', "10")]);
        let codec = Codec::default();

        let mut seen = Vec::new();
        let out = codec
            .encode(&chars("aba"), &codes, |done, total| seen.push((done, total)))
            .unwrap();
        assert_eq!(seen, vec![(1, 3), (2, 3), (3, 3)]);

        seen.clear();
        codec
            .decode(&out, &codes.invert(), |done, total| seen.push((done, total)))
            .unwrap();
        assert_eq!(seen, vec![(1, 4), (2, 4), (3, 4), (4, 4)]);
    }

    #[test]
    fn progress_interval_always_reports_last() {
        let codes = table(&[('a', "0"), ('b', "1")]);
        let codec = Codec::new(CodecConfig {
            progress_interval: NonZeroUsize::new(2).unwrap(),
        });

        let mut seen = Vec::new();
        codec
            .encode(&chars("ababa"), &codes, |done, total| seen.push((done, total)))
            .unwrap();

        assert_eq!(seen, vec![(2, 5), (4, 5), (5, 5)]);
    }

    #[test]
    fn progress_does_not_change_output() {
        let codes = table(&[('a', "0"), ('b', "10"), ('c', "11")]);
        let input = chars("cabba");

        let quiet = encode(&input, &codes).unwrap();
        let mut calls = 0;
        let noisy = Codec::default()
            .encode(&input, &codes, |_, _| calls += 1)
            .unwrap();

        assert_eq!(quiet, noisy);
        assert_eq!(calls, input.len());
    }

    #[test]
    fn config_defaults_when_fields_missing() {
        let data = rmp_serde::to_vec_named(&std::collections::HashMap::<String, u8>::new()).unwrap();
        let config: CodecConfig = rmp_serde::from_slice(&data).unwrap();

        assert_eq!(config, CodecConfig::default());
        assert_eq!(config.progress_interval.get(), 1);
    }
}
