//! Report assembly.
//!
//! The aggregator is a pure merge: it takes the four finished validator
//! results by value and produces the report exactly once. Ownership is
//! the join contract here. There are no completion flags to poll and no
//! way to assemble a report from a stream that has not been validated.

use std::fmt::Write as _;

use serde::Serialize;

use crate::validation::OverallResult;

/// Identifies one of the four validated streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StreamId {
    /// Bits extracted from source image A.
    RawA,
    /// Bits extracted from source image B.
    RawB,
    /// XOR combination of the two raw streams.
    Xored,
    /// Von Neumann output of the combined stream.
    Extracted,
}

impl StreamId {
    /// All four streams, in pipeline order.
    pub const ALL: [StreamId; 4] = [
        StreamId::RawA,
        StreamId::RawB,
        StreamId::Xored,
        StreamId::Extracted,
    ];

    /// Stable lowercase name used in summaries and logs.
    pub fn name(self) -> &'static str {
        match self {
            StreamId::RawA => "raw-a",
            StreamId::RawB => "raw-b",
            StreamId::Xored => "xored",
            StreamId::Extracted => "extracted",
        }
    }
}

impl std::fmt::Display for StreamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Bit counts of the four pipeline stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageBitCounts {
    /// Length of the stream extracted from image A.
    pub raw_a: usize,
    /// Length of the stream extracted from image B.
    pub raw_b: usize,
    /// Length of the XOR-combined stream.
    pub xored: usize,
    /// Length of the Von Neumann output.
    pub extracted: usize,
}

impl StageBitCounts {
    /// Bit count of one stream.
    pub fn get(&self, id: StreamId) -> usize {
        match id {
            StreamId::RawA => self.raw_a,
            StreamId::RawB => self.raw_b,
            StreamId::Xored => self.xored,
            StreamId::Extracted => self.extracted,
        }
    }
}

/// The four per-stream verdicts plus stage bit counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineReport {
    /// Battery verdict for the raw image-A stream.
    pub raw_a: OverallResult,
    /// Battery verdict for the raw image-B stream.
    pub raw_b: OverallResult,
    /// Battery verdict for the XOR-combined stream.
    pub xored: OverallResult,
    /// Battery verdict for the Von Neumann output stream.
    pub extracted: OverallResult,
    /// Stream lengths per stage.
    pub bit_counts: StageBitCounts,
}

impl PipelineReport {
    /// True iff all four streams passed the battery.
    pub fn all_passed(&self) -> bool {
        self.raw_a.passed && self.raw_b.passed && self.xored.passed && self.extracted.passed
    }

    /// The verdict for one stream.
    pub fn result(&self, id: StreamId) -> &OverallResult {
        match id {
            StreamId::RawA => &self.raw_a,
            StreamId::RawB => &self.raw_b,
            StreamId::Xored => &self.xored,
            StreamId::Extracted => &self.extracted,
        }
    }

    /// Renders a short per-stream overview for display collaborators.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        for id in StreamId::ALL {
            let result = self.result(id);
            let verdict = if result.passed { "passed" } else { "failed" };
            let bits = self.bit_counts.get(id);
            let _ = match result.insufficient {
                Some(_) => writeln!(out, "{id}: {verdict}, {bits} bits, too short to test"),
                None => writeln!(
                    out,
                    "{id}: {verdict}, {bits} bits, {}/{} windows",
                    result.windows_passed(),
                    result.windows.len()
                ),
            };
        }
        out
    }
}

/// Merges the four independent validator outcomes.
#[derive(Debug, Default)]
pub struct ReportAggregator;

impl ReportAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Assembles the report from the four finished results.
    ///
    /// Consuming the results by value means assembly happens exactly
    /// once, strictly after every validator has returned.
    pub fn assemble(
        &self,
        raw_a: OverallResult,
        raw_b: OverallResult,
        xored: OverallResult,
        extracted: OverallResult,
        bit_counts: StageBitCounts,
    ) -> PipelineReport {
        let report = PipelineReport {
            raw_a,
            raw_b,
            xored,
            extracted,
            bit_counts,
        };
        tracing::info!(all_passed = report.all_passed(), "pipeline report assembled");
        report
    }
}
