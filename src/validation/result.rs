//! Result types for the randomness test battery.

use serde::Serialize;

/// Computed statistic of a single sub-test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum TestStatistic {
    /// Number of ones counted by the monobit test.
    Monobit { ones: usize },
    /// Chi-square style statistic of the poker test.
    Poker { x: f64 },
    /// Run counts per length bucket 1 through 6+, zeros and ones merged.
    Runs { counts: [usize; 6] },
    /// Length of the longest run of identical bits.
    LongRuns { longest: usize },
}

/// Outcome of one sub-test over one 20,000-bit window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestResult {
    /// Short test name.
    pub name: &'static str,
    /// Whether the statistic fell inside the acceptance interval.
    pub passed: bool,
    /// The computed statistic.
    pub statistic: TestStatistic,
    /// Human-readable detail as it appears in the result log.
    pub message: String,
}

/// The four sub-test outcomes for one window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockResult {
    /// Zero-based window index within the stream.
    pub index: usize,
    /// Bit offset of the window start within the stream.
    pub start_bit: usize,
    /// Monobit, poker, runs and long-runs outcomes, in battery order.
    pub tests: [TestResult; 4],
}

impl BlockResult {
    /// True iff all four sub-tests passed.
    pub fn passed(&self) -> bool {
        self.tests.iter().all(|test| test.passed)
    }
}

/// Marker recorded when a stream was shorter than one window.
///
/// This is a reportable outcome, not an error: the battery refuses to
/// certify the stream, and the rest of the pipeline run is unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InsufficientEntropy {
    /// Bits supplied.
    pub available: usize,
    /// Bits one window requires.
    pub required: usize,
}

impl std::fmt::Display for InsufficientEntropy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Not enough entropy for randomness tests - {} bits out of {} bits required.",
            self.available, self.required
        )
    }
}

/// Verdict of the battery over one whole stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallResult {
    /// True iff every tested window passed every sub-test.
    pub passed: bool,
    /// Per-window detail, in stream order.
    pub windows: Vec<BlockResult>,
    /// Set when the stream was too short to test.
    pub insufficient: Option<InsufficientEntropy>,
    /// Plain-text result log.
    pub log: String,
}

impl OverallResult {
    /// Number of windows that passed all four sub-tests.
    pub fn windows_passed(&self) -> usize {
        self.windows.iter().filter(|block| block.passed()).count()
    }
}
