use std::env;
use std::process;

use anyhow::{Context, Result};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: huffenc <input file> <output file>");
        process::exit(2);
    }

    if let Err(err) = run(&args[1], &args[2]) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run(input: &str, output: &str) -> Result<()> {
    huffpack::encode_file(input, output)
        .with_context(|| format!("failed to compress {input} into {output}"))
}
