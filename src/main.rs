//! Photo Entropy CLI
//!
//! Command-line demonstration of the extraction-and-validation
//! pipeline over synthetic noise captures.

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use photo_entropy::{
    codec, ChannelPolicy, FileConfig, ImageError, NoiseImage, Pipeline, StreamId,
};
use tracing::info;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "photo-entropy",
    version,
    about = "Extracts random bitstreams from photographic noise and certifies them"
)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Width of the generated source images in pixels.
    #[arg(long, default_value_t = 512)]
    width: u32,

    /// Height of the generated source images in pixels.
    #[arg(long, default_value_t = 512)]
    height: u32,

    /// Seed for deterministic source images (image B uses seed+1);
    /// OS entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Color channel to harvest: red, green, blue or alpha.
    #[arg(long)]
    channel: Option<ChannelPolicy>,

    /// Print the full per-window result logs.
    #[arg(long)]
    full_log: bool,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!("Photo Entropy Generator v{}", photo_entropy::VERSION);

    let mut config = match args.config {
        Some(ref path) => match FileConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config: {}", e);
                std::process::exit(1);
            }
        },
        None => FileConfig::default(),
    };

    // Command-line flags override the file configuration.
    if let Some(channel) = args.channel {
        config.pipeline.channel = channel;
    }
    if args.full_log {
        config.output.full_log = true;
    }

    info!(
        channel = %config.pipeline.channel,
        width = args.width,
        height = args.height,
        "generating source images"
    );

    let (image_a, image_b) = match generate_images(&args) {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("Failed to generate source images: {}", e);
            std::process::exit(1);
        }
    };

    let pipeline = Pipeline::new(config.pipeline.clone());
    let started = Instant::now();

    let output = match pipeline.run(&image_a.as_buffer(), &image_b.as_buffer()) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Pipeline failed: {}", e);
            std::process::exit(1);
        }
    };

    let elapsed = started.elapsed();
    let report = &output.report;

    println!("All FIPS-140-2 tests passed: {}", report.all_passed());
    println!();
    print!("{}", report.summary());
    println!();
    println!(
        "Stage totals: raw {} + {} bits, xored {} bits, extracted {} bits",
        report.bit_counts.raw_a,
        report.bit_counts.raw_b,
        report.bit_counts.xored,
        report.bit_counts.extracted
    );
    println!("Processing time: {:?}", elapsed);

    if config.output.preview_digits > 0 {
        println!();
        for (id, bits) in [
            (StreamId::RawA, &output.raw_a),
            (StreamId::RawB, &output.raw_b),
            (StreamId::Xored, &output.xored),
            (StreamId::Extracted, &output.extracted),
        ] {
            println!(
                "{id} (hex): {}",
                preview(&codec::to_hex(bits), config.output.preview_digits)
            );
        }
    }

    if config.output.full_log {
        for id in StreamId::ALL {
            println!();
            println!("==== {id} ====");
            println!("{}", report.result(id).log);
        }
    }
}

/// Generates the two source images, deterministically when seeded.
fn generate_images(args: &Args) -> Result<(NoiseImage, NoiseImage), ImageError> {
    match args.seed {
        Some(seed) => Ok((
            NoiseImage::from_seed(args.width, args.height, seed)?,
            NoiseImage::from_seed(args.width, args.height, seed.wrapping_add(1))?,
        )),
        None => Ok((
            NoiseImage::from_os_entropy(args.width, args.height)?,
            NoiseImage::from_os_entropy(args.width, args.height)?,
        )),
    }
}

/// Truncates a hex string for terminal display.
fn preview(hex: &str, digits: usize) -> String {
    if hex.len() <= digits {
        hex.to_string()
    } else {
        format!("{}... ({} digits)", &hex[..digits], hex.len())
    }
}
