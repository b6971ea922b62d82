//! Pipeline orchestration.
//!
//! Wires the extraction chain to the validators and the report
//! aggregator: two pixel buffers in, four certified bitstreams and one
//! report out. Resolution mismatches fail before any extraction work.

mod config;
mod run;

pub use config::{ConfigError, FileConfig, OutputConfig, PipelineConfig};
pub use run::{Pipeline, PipelineError, PipelineOutput};
