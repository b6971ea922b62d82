//! Windowed certification of whole bitstreams.

use std::fmt::Write as _;

use crate::codec::BitString;

use super::fips::{self, WINDOW_BITS};
use super::result::{BlockResult, InsufficientEntropy, OverallResult};

/// Runs the FIPS-140-2 battery over every full 20,000-bit window of a
/// bitstream.
///
/// Windows are consecutive and non-overlapping; remainder bits after
/// the last full window are discarded untested. A stream shorter than
/// one window is refused outright, with no statistical work done.
#[derive(Debug, Default)]
pub struct RandomnessValidator;

impl RandomnessValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validates `input` and renders the plain-text result log.
    pub fn validate(&self, input: &BitString) -> OverallResult {
        if input.len() < WINDOW_BITS {
            let insufficient = InsufficientEntropy {
                available: input.len(),
                required: WINDOW_BITS,
            };
            tracing::warn!(
                bits = input.len(),
                required = WINDOW_BITS,
                "stream too short to certify"
            );

            return OverallResult {
                passed: false,
                windows: Vec::new(),
                insufficient: Some(insufficient),
                log: format!("All FIPS-140-2 tests passed: false\n\n{insufficient}"),
            };
        }

        let window_count = input.len() / WINDOW_BITS;
        let remainder = input.len() % WINDOW_BITS;
        if remainder > 0 {
            tracing::debug!(remainder, "discarding remainder bits after last full window");
        }

        let mut windows = Vec::with_capacity(window_count);
        let mut detail = String::new();
        let mut passed = true;

        for (index, window) in input.as_bits().chunks_exact(WINDOW_BITS).enumerate() {
            let start_bit = index * WINDOW_BITS;
            let block = BlockResult {
                index,
                start_bit,
                tests: fips::evaluate_window(window),
            };
            let block_passed = block.passed();
            passed = passed && block_passed;

            let _ = writeln!(
                detail,
                "Test results {} to {} bits. Tests passed: {block_passed}",
                start_bit + 1,
                start_bit + WINDOW_BITS
            );
            for test in &block.tests {
                let _ = writeln!(detail, "{}", test.message);
            }
            let _ = writeln!(detail);

            windows.push(block);
        }

        tracing::info!(
            windows = window_count,
            windows_passed = windows.iter().filter(|block| block.passed()).count(),
            passed,
            "randomness battery complete"
        );

        OverallResult {
            passed,
            windows,
            insufficient: None,
            log: format!("All FIPS-140-2 tests passed: {passed}\n\n{detail}"),
        }
    }
}
