//! Immutable bitstream type shared by all pipeline stages.

use super::CodecError;

/// An ordered sequence of bits.
///
/// Each pipeline stage produces exactly one `BitString` and the next stage
/// consumes it; the type exposes no mutating operations. The length is
/// explicit and load-bearing: XOR combination requires equal lengths, and
/// the randomness validator partitions on it.
///
/// Bits are stored one per byte with values `0` and `1`, matching the
/// canonical binary-character form the streams are exported in.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BitString {
    /// Bit values, each 0 or 1.
    bits: Vec<u8>,
}

impl BitString {
    /// Creates a bitstring from raw bit values.
    ///
    /// Every element must be `0` or `1`. Extraction and debiasing build
    /// their outputs through this constructor.
    pub fn from_bits(bits: Vec<u8>) -> Self {
        debug_assert!(
            bits.iter().all(|&b| b <= 1),
            "bit values must be 0 or 1"
        );
        Self { bits }
    }

    /// Parses a binary character string such as `"01101"`.
    ///
    /// Any character other than `0` or `1` indicates upstream corruption
    /// and fails with [`CodecError::InvalidBitCharacter`].
    pub fn parse(input: &str) -> Result<Self, CodecError> {
        let mut bits = Vec::with_capacity(input.len());
        for (position, character) in input.chars().enumerate() {
            match character {
                '0' => bits.push(0),
                '1' => bits.push(1),
                _ => {
                    return Err(CodecError::InvalidBitCharacter {
                        character,
                        position,
                    })
                }
            }
        }
        Ok(Self { bits })
    }

    /// Returns the bit values as a slice.
    #[inline]
    pub fn as_bits(&self) -> &[u8] {
        &self.bits
    }

    /// Returns the number of bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns true if the stream holds no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Counts the number of one bits.
    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b == 1).count()
    }

    /// Calculates bit bias as deviation from 0.5.
    ///
    /// Returns a value in [-0.5, 0.5] where 0.0 is unbiased.
    pub fn bias(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        (self.ones() as f64 / self.len() as f64) - 0.5
    }

    /// Renders the canonical binary character form, e.g. `"01101"`.
    pub fn to_binary_string(&self) -> String {
        self.bits.iter().map(|&b| if b == 1 { '1' } else { '0' }).collect()
    }
}

impl std::fmt::Debug for BitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitString")
            .field("bits", &self.bits.len())
            .field("ones", &self.ones())
            .field("bias", &format!("{:.4}", self.bias()))
            .finish()
    }
}
