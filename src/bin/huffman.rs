use clap::Parser;
use huffman_rs::{BitString, HuffmanCodec, HuffmanError};
use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::process::exit;

/// Builds a Huffman code for a string and shows the codes, the encoding and its decoding.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Huffman-code a string",
    long_about = "
    Counts the characters of INPUT, builds its Huffman tree and prints the code of
    every character, the encoded bit-string and the string decoded back from it.
    With --decode, decodes the given bit-string against the tree for INPUT instead."
)]
struct Args {
    /// String to build the code from
    #[clap()]
    input: String,

    /// Decode this bit-string of 0s and 1s using the code built from INPUT
    #[clap(short = 'd', long = "decode")]
    decode: Option<String>,

    /// Sets verbosity. -v0 is silent, -v5 traces every merge
    #[clap(short = 'v', default_value_t = 2)]
    v: u8,
}

fn level(v: u8) -> LevelFilter {
    match v {
        0 => LevelFilter::Off,
        1 => LevelFilter::Error,
        2 => LevelFilter::Warn,
        3 => LevelFilter::Info,
        4 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn run(args: &Args) -> Result<(), HuffmanError> {
    let codec = HuffmanCodec::from_text(&args.input)?;

    if let Some(raw) = &args.decode {
        let bits: BitString = raw.parse()?;
        println!("Decoded string: {}", codec.decode_text(&bits)?);
        return Ok(());
    }

    println!("Character Huffman Codes:");
    for (symbol, code) in codec.table().iter() {
        println!("{}: {}", symbol.escape_debug(), code);
    }

    let encoded = codec.encode_text(&args.input)?;
    let decoded = codec.decode_text(&encoded)?;
    println!();
    println!("Encoded string: {}", encoded);
    println!("Decoded string: {}", decoded);

    let chars: Vec<char> = args.input.chars().collect();
    let stats = codec.stats(&chars)?;
    println!();
    println!("=== Statistics ===");
    println!("Input symbols: {}", stats.input_length);
    println!("Alphabet size: {}", stats.alphabet_size);
    println!("Encoded bits: {}", stats.encoded_bits);
    println!("Fixed-width bits: {}", stats.fixed_width_bits);
    println!("Compression ratio: {:.2}%", stats.compression_ratio());
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(err) = TermLogger::init(
        level(args.v),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("logger unavailable: {}", err);
    }

    if args.input.is_empty() {
        eprintln!("Input string is empty; nothing to encode.");
        exit(1);
    }

    info!("coding {} characters", args.input.chars().count());
    if let Err(err) = run(&args) {
        error!("{}", err);
        eprintln!("Error: {}", err);
        exit(1);
    }
}
