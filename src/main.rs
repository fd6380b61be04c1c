use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use log::{error, info};

use text_huffman::{Document, HuffmanCoder, Summary};

struct Config {
    input: PathBuf,
    encoded_output: Option<PathBuf>,
}

impl Config {
    fn from_args(args: &[String]) -> Option<Self> {
        if args.len() > 3 {
            return None;
        }
        let input = args.get(1)?;
        Some(Self {
            input: PathBuf::from(input),
            encoded_output: args.get(2).map(PathBuf::from),
        })
    }
}

fn run(config: &Config) -> Result<bool, Box<dyn std::error::Error>> {
    let start_time = Instant::now();

    let document = Document::read(&config.input)?;
    let coder = HuffmanCoder::build(document)?;
    let summary = Summary::collect(&coder)?;

    info!("Coded {} in {:.2?}", config.input.display(), start_time.elapsed());
    println!("{}", summary);

    if let Some(path) = &config.encoded_output {
        info!("Writing encoded stream to {}", path.display());
        fs::write(path, summary.encoded.as_str())?;
    }

    Ok(summary.round_trip_ok())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(config) = Config::from_args(&args) else {
        let program = args.first().map_or("text-huffman", String::as_str);
        error!("Usage: {} <input_file> [encoded_output]", program);
        eprintln!("  <input_file>:     text file to encode and decode.");
        eprintln!("  [encoded_output]: Optional. Path to write the '0'/'1' stream to.");
        process::exit(1);
    };

    info!("--- Start ---");
    match run(&config) {
        Ok(true) => info!("Decoding successful, data matches original."),
        Ok(false) => {
            error!("Decoded message does not match the original!");
            process::exit(2);
        }
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
    info!("--- End ---");
}
