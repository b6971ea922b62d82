//! Read-only view over RGBA pixel data.

use thiserror::Error;

/// Bytes per pixel in an RGBA buffer.
pub const BYTES_PER_PIXEL: usize = 4;

/// Errors raised when validating a pixel buffer against its claimed
/// dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },
    #[error("pixel buffer holds {actual} bytes but {width}x{height} RGBA requires {expected}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// A borrowed, read-only view over an RGBA pixel buffer.
///
/// Pixels are stored row-major, four bytes per pixel in R, G, B, A
/// order, the layout a canvas-style capture produces. Construction
/// validates the byte count against the dimensions, so every live view
/// is known to be well-formed. The view never owns the data; frame
/// acquisition stays with the caller.
#[derive(Clone, Copy)]
pub struct PixelBuffer<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> PixelBuffer<'a> {
    /// Creates a validated view over `data`.
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::ZeroDimension { width, height });
        }

        let expected = (width as usize) * (height as usize) * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(ImageError::SizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Builds a view from parts already known to satisfy the invariant.
    pub(crate) fn from_validated(data: &'a [u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * BYTES_PER_PIXEL
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// Returns the raw RGBA bytes.
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels (width * height).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

impl std::fmt::Debug for PixelBuffer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pixel_bytes", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_valid() {
        let data = vec![0u8; 2 * 3 * BYTES_PER_PIXEL];
        let buffer = PixelBuffer::new(&data, 2, 3).unwrap();

        assert_eq!(buffer.width(), 2);
        assert_eq!(buffer.height(), 3);
        assert_eq!(buffer.dimensions(), (2, 3));
        assert_eq!(buffer.pixel_count(), 6);
        assert_eq!(buffer.data().len(), 24);
    }

    #[test]
    fn test_buffer_rejects_zero_dimension() {
        assert_eq!(
            PixelBuffer::new(&[], 0, 3).unwrap_err(),
            ImageError::ZeroDimension { width: 0, height: 3 }
        );
        assert_eq!(
            PixelBuffer::new(&[], 2, 0).unwrap_err(),
            ImageError::ZeroDimension { width: 2, height: 0 }
        );
    }

    #[test]
    fn test_buffer_rejects_wrong_size() {
        let data = vec![0u8; 10];
        assert_eq!(
            PixelBuffer::new(&data, 2, 2).unwrap_err(),
            ImageError::SizeMismatch {
                width: 2,
                height: 2,
                expected: 16,
                actual: 10,
            }
        );
    }
}
