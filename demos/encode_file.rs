use huffman_text::{build_code_table, Codec, CodeTable, CodecConfig, EncodedStream};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::num::NonZeroUsize;
use tracing_subscriber::EnvFilter;

#[derive(Serialize, Deserialize)]
struct HuffmanSerialized {
    stream: EncodedStream,
    codes: CodeTable<u8>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let fp = env::args().nth(1).expect("Please provide path to input file as first argument.");

    let input_bytes = fs::read(fp).expect("First argument was not a valid filepath.");

    let codec = Codec::new(CodecConfig {
        progress_interval: NonZeroUsize::new(input_bytes.len() / 10 + 1).unwrap(),
    });

    // encode scope - save to file
    {
        let (codes, _) = build_code_table(&input_bytes);

        let stream = codec
            .encode(&input_bytes, &codes, |done, total| {
                tracing::info!(done, total, "encoding");
            })
            .unwrap();
        let packed = HuffmanSerialized { stream, codes };
        let data = rmp_serde::to_vec(&packed).unwrap();

        fs::write("encoded.mp", data).unwrap();
    }

    // decode scope - read from file
    {
        let file_data = fs::read("encoded.mp").unwrap();

        let packed: HuffmanSerialized = rmp_serde::from_slice(&file_data).unwrap();
        let decoded = codec
            .decode(&packed.stream, &packed.codes.invert(), |done, total| {
                tracing::info!(done, total, "decoding");
            })
            .unwrap();

        fs::write("decoded.txt", decoded).unwrap();
    }
}
