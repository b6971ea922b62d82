//! Photo Entropy Library
//!
//! Extracts a random bitstream from two noisy photographic captures and
//! certifies its statistical quality against the FIPS 140-2 Power-Up
//! test battery.
//!
//! # Architecture
//!
//! The pipeline is a strict chain with a fan-out at the end:
//!
//! ```text
//! image A → lsb → raw-A ─┐
//!                        ├→ xor → von neumann → extracted
//! image B → lsb → raw-B ─┘
//!
//! raw-A, raw-B, xored, extracted → FIPS-140-2 battery (×4) → report
//! ```
//!
//! # Design Principles
//!
//! - **Fail-fast**: mismatched image resolutions abort before any
//!   extraction; nothing is cropped or padded
//! - **Merged run accounting**: the runs test tallies zeros and ones of
//!   the same length into one shared bucket, reproducing the tool this
//!   pipeline is compatible with rather than the 12-bucket variant
//! - **Deterministic join**: four validator results are consumed by
//!   value into exactly one report; there are no completion flags
//! - **No entropy claims**: passing the battery detects gross generator
//!   failure, it is not proof of entropy quality
//!
//! # Example
//!
//! ```
//! use photo_entropy::{NoiseImage, Pipeline, PipelineConfig};
//!
//! let pipeline = Pipeline::new(PipelineConfig::default());
//!
//! // Two independent synthetic captures of the same resolution.
//! let image_a = NoiseImage::from_seed(64, 64, 1).unwrap();
//! let image_b = NoiseImage::from_seed(64, 64, 2).unwrap();
//!
//! let output = pipeline
//!     .run(&image_a.as_buffer(), &image_b.as_buffer())
//!     .unwrap();
//!
//! // 4096 pixels are far below one 20,000-bit window, so the battery
//! // refuses to certify these streams.
//! assert!(!output.report.all_passed());
//! println!("{}", output.report.summary());
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod codec;
pub mod extraction;
pub mod image;
pub mod pipeline;
pub mod report;
pub mod validation;

// Re-export commonly used types at crate root
pub use codec::{BitString, CodecError};
pub use extraction::{ChannelPolicy, Combiner, LsbExtractor, VonNeumannExtractor};
pub use image::{ImageError, NoiseImage, PixelBuffer};
pub use pipeline::{FileConfig, Pipeline, PipelineConfig, PipelineError, PipelineOutput};
pub use report::{PipelineReport, ReportAggregator, StageBitCounts, StreamId};
pub use validation::{OverallResult, RandomnessValidator, WINDOW_BITS};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
