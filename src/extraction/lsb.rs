//! Least-significant-bit harvesting from pixel data.
//!
//! Sensor noise concentrates in the lowest bit of each sample, so the
//! extractor keeps exactly one bit per pixel: the LSB of a single fixed
//! color channel, scanned row-major.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::BitString;
use crate::image::{PixelBuffer, BYTES_PER_PIXEL};

/// Color channel whose least significant bit is harvested.
///
/// The channel is pinned per deployment: a run uses one channel for
/// every pixel of every image, and extraction never branches on pixel
/// content. The default is `Red`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelPolicy {
    #[default]
    Red,
    Green,
    Blue,
    Alpha,
}

impl ChannelPolicy {
    /// Byte offset of this channel within an RGBA pixel.
    #[inline]
    pub fn offset(self) -> usize {
        match self {
            ChannelPolicy::Red => 0,
            ChannelPolicy::Green => 1,
            ChannelPolicy::Blue => 2,
            ChannelPolicy::Alpha => 3,
        }
    }

    /// Lowercase channel name, matching the config file spelling.
    pub fn name(self) -> &'static str {
        match self {
            ChannelPolicy::Red => "red",
            ChannelPolicy::Green => "green",
            ChannelPolicy::Blue => "blue",
            ChannelPolicy::Alpha => "alpha",
        }
    }
}

impl std::fmt::Display for ChannelPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a channel name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color channel {0:?}, expected red, green, blue or alpha")]
pub struct ParseChannelError(String);

impl std::str::FromStr for ChannelPolicy {
    type Err = ParseChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(ChannelPolicy::Red),
            "green" => Ok(ChannelPolicy::Green),
            "blue" => Ok(ChannelPolicy::Blue),
            "alpha" => Ok(ChannelPolicy::Alpha),
            _ => Err(ParseChannelError(s.to_string())),
        }
    }
}

/// Harvests one bit per pixel from a fixed color channel.
pub struct LsbExtractor {
    channel: ChannelPolicy,
}

impl LsbExtractor {
    pub fn new(channel: ChannelPolicy) -> Self {
        Self { channel }
    }

    /// Returns the pinned channel.
    #[inline]
    pub fn channel(&self) -> ChannelPolicy {
        self.channel
    }

    /// Extracts the LSB of the configured channel from every pixel.
    ///
    /// Single deterministic pass in row-major order; the output length
    /// equals the pixel count.
    pub fn extract(&self, image: &PixelBuffer<'_>) -> BitString {
        let offset = self.channel.offset();
        let bits = image
            .data()
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|pixel| pixel[offset] & 1)
            .collect();

        BitString::from_bits(bits)
    }
}

impl Default for LsbExtractor {
    fn default() -> Self {
        Self::new(ChannelPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Two pixels: (0x01, 0x02, 0x03, 0xff) and (0x10, 0x21, 0x32, 0xff).
    const DATA: [u8; 8] = [0x01, 0x02, 0x03, 0xff, 0x10, 0x21, 0x32, 0xff];

    #[test]
    fn test_extracts_one_bit_per_pixel() {
        let buffer = PixelBuffer::new(&DATA, 2, 1).unwrap();
        let bits = LsbExtractor::default().extract(&buffer);

        assert_eq!(bits.len(), buffer.pixel_count());
        // Red LSBs: 0x01 -> 1, 0x10 -> 0.
        assert_eq!(bits.as_bits(), &[1, 0]);
    }

    #[test]
    fn test_channel_selection() {
        let buffer = PixelBuffer::new(&DATA, 2, 1).unwrap();

        let green = LsbExtractor::new(ChannelPolicy::Green).extract(&buffer);
        assert_eq!(green.as_bits(), &[0, 1]);

        let blue = LsbExtractor::new(ChannelPolicy::Blue).extract(&buffer);
        assert_eq!(blue.as_bits(), &[1, 0]);

        let alpha = LsbExtractor::new(ChannelPolicy::Alpha).extract(&buffer);
        assert_eq!(alpha.as_bits(), &[1, 1]);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let buffer = PixelBuffer::new(&DATA, 1, 2).unwrap();
        let extractor = LsbExtractor::default();

        assert_eq!(extractor.extract(&buffer), extractor.extract(&buffer));
    }

    #[test]
    fn test_channel_parse() {
        assert_eq!("red".parse::<ChannelPolicy>().unwrap(), ChannelPolicy::Red);
        assert_eq!(
            "Blue".parse::<ChannelPolicy>().unwrap(),
            ChannelPolicy::Blue
        );
        assert!("luma".parse::<ChannelPolicy>().is_err());
    }

    #[test]
    fn test_channel_display_round_trip() {
        for channel in [
            ChannelPolicy::Red,
            ChannelPolicy::Green,
            ChannelPolicy::Blue,
            ChannelPolicy::Alpha,
        ] {
            assert_eq!(channel.to_string().parse::<ChannelPolicy>(), Ok(channel));
        }
    }
}
