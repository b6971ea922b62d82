//! Von Neumann bias removal.

use crate::codec::BitString;

/// The classic Von Neumann extractor.
///
/// Scans non-overlapping consecutive pairs left to right: `01` emits
/// `0`, `10` emits `1`, `00` and `11` are discarded. A trailing unpaired
/// bit is discarded. For independent input bits with any constant bias
/// the emitted bits are exactly unbiased, at the cost of keeping at most
/// a quarter of the input on average.
#[derive(Debug, Default)]
pub struct VonNeumannExtractor;

impl VonNeumannExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Debiases `input`, consuming each input bit exactly once.
    ///
    /// Emitted bits preserve the order of the pairs they came from.
    pub fn extract(&self, input: &BitString) -> BitString {
        let bits = input
            .as_bits()
            .chunks_exact(2)
            .filter_map(|pair| match (pair[0], pair[1]) {
                (0, 1) => Some(0),
                (1, 0) => Some(1),
                _ => None,
            })
            .collect();

        BitString::from_bits(bits)
    }
}
