//! Tessella CLI - compose a tile mosaic from two images.
//!
//! This is a demonstration CLI for the tessella library. It takes two
//! already-downloaded images, derives the twelve transformed tiles and
//! writes the composed mosaic.

use anyhow::Context;
use tessella::prelude::*;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let mut inputs: Vec<String> = Vec::new();
    let mut output = DEFAULT_OUTPUT.to_string();
    let mut options = PipelineOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                match args.get(i) {
                    Some(path) => output = path.clone(),
                    None => {
                        eprintln!("Error: --output needs a path");
                        std::process::exit(1);
                    }
                }
            }
            "--shrink" => {
                i += 1;
                match args.get(i).and_then(|v| v.parse::<u32>().ok()) {
                    Some(factor) => options.shrink_factor = factor,
                    None => {
                        eprintln!("Error: --shrink needs a positive integer");
                        std::process::exit(1);
                    }
                }
            }
            "--intensity" => {
                i += 1;
                match args.get(i).and_then(|v| v.parse::<u8>().ok()) {
                    Some(value) => options.intensity = value,
                    None => {
                        eprintln!("Error: --intensity needs a value in 0..=255");
                        std::process::exit(1);
                    }
                }
            }
            "--sequential" => options.parallel = false,
            "help" | "--help" | "-h" => {
                print_usage(&args[0]);
                return;
            }
            other => inputs.push(other.to_string()),
        }
        i += 1;
    }

    if inputs.len() != 2 {
        eprintln!("Error: expected exactly two input images, got {}", inputs.len());
        print_usage(&args[0]);
        std::process::exit(1);
    }

    if let Err(err) = run(&inputs[0], &inputs[1], &output, &options) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn print_usage(program: &str) {
    println!("Usage: {program} <base-image> <backdrop-image> [options]");
    println!();
    println!("Options:");
    println!("  -o, --output <path>   Output file (default: {DEFAULT_OUTPUT})");
    println!("  --shrink <factor>     Shrink factor for the tiles (default: 5)");
    println!("  --intensity <0-255>   Filter/key threshold (default: 100)");
    println!("  --sequential          Derive tiles on one thread");
    println!("  -h, --help            Show this help message");
}

fn run(base: &str, backdrop: &str, output: &str, options: &PipelineOptions) -> anyhow::Result<()> {
    let base_img = codec::decode(base).with_context(|| format!("decoding {base}"))?;
    let backdrop_img =
        codec::decode(backdrop).with_context(|| format!("decoding {backdrop}"))?;

    let mosaic = pipeline::compose(&base_img, &backdrop_img, options, &mut rand::rng())
        .context("composing mosaic")?;

    codec::encode(&mosaic, output).with_context(|| format!("writing {output}"))?;
    println!(
        "Wrote {}x{} mosaic to {}",
        mosaic.width(),
        mosaic.height(),
        output
    );
    Ok(())
}
