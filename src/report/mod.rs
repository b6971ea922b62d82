//! Aggregation of per-stream verdicts into one pipeline report.

mod aggregate;

pub use aggregate::{PipelineReport, ReportAggregator, StageBitCounts, StreamId};
