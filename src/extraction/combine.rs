//! XOR combination of the two source streams.

use crate::codec::{self, BitString, CodecError};

/// Combines two independently extracted bitstreams by bitwise XOR.
///
/// XOR of two independent noisy sources is at least as unpredictable as
/// the stronger of the two. Stream lengths are equal whenever the source
/// images share a resolution, which the pipeline verifies before
/// extraction; a mismatch reaching this stage is a wiring fault and
/// surfaces as [`CodecError::LengthMismatch`].
#[derive(Debug, Default)]
pub struct Combiner;

impl Combiner {
    pub fn new() -> Self {
        Self
    }

    /// XORs `a` and `b` position by position.
    pub fn combine(&self, a: &BitString, b: &BitString) -> Result<BitString, CodecError> {
        codec::xor(a, b)
    }
}
