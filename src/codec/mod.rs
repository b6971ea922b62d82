//! Bitstream primitives and conversions.
//!
//! This module provides the `BitString` type that every pipeline stage
//! produces and consumes, together with the low-level bit operations:
//! bitwise XOR, hexadecimal rendering and fixed-width padding helpers.

mod bits;
mod convert;

pub use bits::BitString;
pub use convert::{pad_binary, pad_hex_byte, to_hex, xor};

use thiserror::Error;

/// Errors raised by bitstream parsing and combination.
///
/// Both kinds indicate corrupted upstream data or a wiring fault and are
/// fatal for the pipeline invocation that hits them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// XOR operands of unequal length. Should never occur when both
    /// streams were extracted from images of identical resolution.
    #[error("cannot XOR bitstreams of different lengths ({left} and {right} bits)")]
    LengthMismatch {
        /// Length of the left operand in bits.
        left: usize,
        /// Length of the right operand in bits.
        right: usize,
    },

    /// A character other than `0` or `1` was found while parsing a
    /// binary character string.
    #[error("invalid bit character {character:?} at position {position}")]
    InvalidBitCharacter {
        /// The offending character.
        character: char,
        /// Zero-based position within the input string.
        position: usize,
    },
}
