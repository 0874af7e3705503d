use huffman_text::{compress_text, decompress_text, CompressionStats, EncodedStream, FrequencyTable};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let s = "Hello my name is Sam!";
    let compressed = compress_text(s).unwrap();

    for (symbol, code) in compressed.codes.iter() {
        println!("{:?}: {}", symbol, EncodedStream::from(code.to_bitvec()));
    }
    println!("{}", compressed.stream);

    let stats = CompressionStats::new(&FrequencyTable::from_symbols(s.chars()), &compressed.codes);
    println!(
        "{} symbols -> {} bytes ({:.2}% of 8-bit text)",
        stats.symbols,
        stats.encoded_bytes(),
        stats.ratio(8) * 100.0
    );

    let dec = decompress_text(&compressed.stream, &compressed.codes);
    println!("{:?}", dec);
}
