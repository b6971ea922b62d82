//! FIPS-140-2 statistical certification.
//!
//! Implements the four-test Power-Up battery (monobit, poker, runs,
//! long runs) applied per 20,000-bit window, the windowing driver, and
//! the result types the report stage aggregates. Passing the battery
//! detects gross generator failure; it is not proof of entropy quality.

mod fips;
mod result;
mod validator;

pub use fips::WINDOW_BITS;
pub use result::{BlockResult, InsufficientEntropy, OverallResult, TestResult, TestStatistic};
pub use validator::RandomnessValidator;
