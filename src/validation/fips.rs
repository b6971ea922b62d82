//! The four FIPS-140-2 Power-Up sub-tests.
//!
//! Thresholds follow FIPS 140-2 section 4.9.1 with the Change Notice 1
//! intervals. They are fixed constants for this one profile; there is no
//! alternative test version. Run counting merges zeros and ones of the
//! same length into one shared bucket, matching the tool this pipeline
//! reproduces rather than the historical 12-bucket variant.

use std::fmt::Write as _;

use super::result::{TestResult, TestStatistic};

/// Bits per test window.
pub const WINDOW_BITS: usize = 20_000;

/// Monobit acceptance interval, exclusive bounds.
const MONOBIT_MIN: usize = 9_725;
const MONOBIT_MAX: usize = 10_275;

/// Poker acceptance interval, exclusive bounds.
const POKER_MIN: f64 = 2.16;
const POKER_MAX: f64 = 46.17;

/// Non-overlapping 4-bit segments per window.
const POKER_SEGMENTS: usize = WINDOW_BITS / 4;

/// Runs acceptance intervals, inclusive, for length buckets 1..=5 and 6+.
const RUNS_INTERVALS: [(usize, usize); 6] = [
    (2_315, 2_685),
    (1_114, 1_386),
    (527, 723),
    (240, 384),
    (103, 209),
    (103, 209),
];

/// A run of this many bits or more fails the long-runs test.
const LONG_RUN_LIMIT: usize = 26;

/// Runs the full battery over one window, in battery order.
pub fn evaluate_window(window: &[u8]) -> [TestResult; 4] {
    [
        monobit(window),
        poker(window),
        runs(window),
        long_runs(window),
    ]
}

/// Monobit test: the count of ones must sit near half the window.
pub fn monobit(window: &[u8]) -> TestResult {
    debug_assert_eq!(window.len(), WINDOW_BITS);

    let ones = window.iter().filter(|&&bit| bit == 1).count();
    let passed = ones > MONOBIT_MIN && ones < MONOBIT_MAX;

    TestResult {
        name: "monobit",
        passed,
        statistic: TestStatistic::Monobit { ones },
        message: format!(
            "The Monobit Test: The test is passed if {MONOBIT_MIN} < X < {MONOBIT_MAX}. \
             Test passed: {passed}. X = {ones}"
        ),
    }
}

/// Poker test: chi-square style check on 4-bit value frequencies.
pub fn poker(window: &[u8]) -> TestResult {
    debug_assert_eq!(window.len(), WINDOW_BITS);

    let mut frequency = [0usize; 16];
    for nibble in window.chunks_exact(4) {
        let value = nibble.iter().fold(0usize, |acc, &bit| (acc << 1) | bit as usize);
        frequency[value] += 1;
    }

    let sum: f64 = frequency.iter().map(|&f| (f * f) as f64).sum();
    let x = (16.0 / POKER_SEGMENTS as f64) * sum - POKER_SEGMENTS as f64;
    let passed = x > POKER_MIN && x < POKER_MAX;

    TestResult {
        name: "poker",
        passed,
        statistic: TestStatistic::Poker { x },
        message: format!(
            "The Poker Test: The test is passed if {POKER_MIN} < X < {POKER_MAX}. \
             Test passed: {passed}. X = {x:.2}"
        ),
    }
}

/// Runs test: counts of maximal runs per length bucket, both bit values
/// tallied into the same bucket, lengths of six or more clamped into the
/// final bucket.
pub fn runs(window: &[u8]) -> TestResult {
    debug_assert_eq!(window.len(), WINDOW_BITS);

    let mut counts = [0usize; 6];
    for run in window.chunk_by(|a, b| a == b) {
        counts[run.len().min(6) - 1] += 1;
    }

    let passed = counts
        .iter()
        .zip(RUNS_INTERVALS)
        .all(|(&count, (lo, hi))| count >= lo && count <= hi);

    let mut message = String::from(
        "The Runs Test: The test is passed if the number of runs that occur \
         (consecutive zeros or ones for lengths 1 through 6) is each within \
         the specified interval.",
    );
    for (bucket, (&count, (lo, hi))) in counts.iter().zip(RUNS_INTERVALS).enumerate() {
        let label = if bucket == 5 {
            "6+".to_string()
        } else {
            (bucket + 1).to_string()
        };
        let _ = write!(
            message,
            "\nRun length {label}: {lo} - {hi}. Test result: {count}"
        );
    }
    let _ = write!(message, "\nTests passed: {passed}.");

    TestResult {
        name: "runs",
        passed,
        statistic: TestStatistic::Runs { counts },
        message,
    }
}

/// Long-runs test: no maximal run may reach 26 bits.
pub fn long_runs(window: &[u8]) -> TestResult {
    debug_assert_eq!(window.len(), WINDOW_BITS);

    let longest = window
        .chunk_by(|a, b| a == b)
        .map(<[u8]>::len)
        .max()
        .unwrap_or(0);
    let passed = longest < LONG_RUN_LIMIT;

    TestResult {
        name: "long_runs",
        passed,
        statistic: TestStatistic::LongRuns { longest },
        message: format!(
            "The Long Runs Test: The test is passed if there are no runs of length \
             {LONG_RUN_LIMIT} or more (of either zeros or ones).\n\
             Length of longest run: {longest}. Test passed: {passed}."
        ),
    }
}
