//! Bitwise combination and radix conversions.
//!
//! These are the primitive operations the rest of the pipeline is built
//! from. All hexadecimal output is lowercase for consistency with the
//! export formats downstream tools expect.

use super::{BitString, CodecError};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Bitwise XOR of two bitstreams of equal length.
///
/// The length check is a defensive invariant: with correct upstream wiring
/// both operands were extracted from images of identical resolution, so a
/// mismatch means a wiring fault and fails with
/// [`CodecError::LengthMismatch`].
pub fn xor(a: &BitString, b: &BitString) -> Result<BitString, CodecError> {
    if a.len() != b.len() {
        return Err(CodecError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let bits = a
        .as_bits()
        .iter()
        .zip(b.as_bits())
        .map(|(&x, &y)| x ^ y)
        .collect();

    Ok(BitString::from_bits(bits))
}

/// Converts a bitstream to a lowercase hexadecimal string.
///
/// Bits are grouped into 4-bit nibbles left to right, the first bit of
/// each nibble being the most significant. A trailing group of fewer than
/// four bits is converted as the value of those bits alone, as if the
/// group were left-padded with zeros: `"11"` becomes `"3"`, not `"c"`.
/// The output therefore always has `ceil(len/4)` digits. Callers that
/// need byte-aligned hex should supply a bit length that is a multiple
/// of four.
pub fn to_hex(bits: &BitString) -> String {
    let mut output = String::with_capacity(bits.len().div_ceil(4));

    for nibble in bits.as_bits().chunks(4) {
        let value = nibble.iter().fold(0u8, |acc, &bit| (acc << 1) | bit);
        output.push(HEX_DIGITS[value as usize] as char);
    }

    output
}

/// Renders a non-negative integer in binary, left-zero-padded to `width`.
///
/// A value whose binary form is wider than `width` is returned unpadded
/// and untruncated.
pub fn pad_binary(value: u64, width: usize) -> String {
    format!("{value:0width$b}")
}

/// Renders a byte as exactly two lowercase hexadecimal digits.
pub fn pad_hex_byte(value: u8) -> String {
    format!("{value:02x}")
}
