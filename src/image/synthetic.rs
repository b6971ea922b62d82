//! Deterministic synthetic image source.
//!
//! Generates RGBA buffers filled with ChaCha20 keystream noise. This is
//! demo and test scaffolding for exercising the pipeline without a real
//! optical source: the output is pseudorandom, NOT entropy, and reseeds
//! nothing. Two images from different seeds behave like two independent
//! noisy captures as far as the extraction stages are concerned.

use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

use super::{ImageError, PixelBuffer, BYTES_PER_PIXEL};

/// An owned synthetic RGBA image.
pub struct NoiseImage {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl NoiseImage {
    /// Generates a deterministic image from a 64-bit seed.
    ///
    /// The same seed and dimensions always produce the same bytes.
    pub fn from_seed(width: u32, height: u32, seed: u64) -> Result<Self, ImageError> {
        Self::fill(width, height, ChaCha20Rng::seed_from_u64(seed))
    }

    /// Generates an image keyed from the OS entropy source.
    pub fn from_os_entropy(width: u32, height: u32) -> Result<Self, ImageError> {
        let mut seed = [0u8; 32];
        rand_core::OsRng.fill_bytes(&mut seed);
        Self::fill(width, height, ChaCha20Rng::from_seed(seed))
    }

    fn fill(width: u32, height: u32, mut rng: ChaCha20Rng) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::ZeroDimension { width, height });
        }

        let mut data = vec![0u8; (width as usize) * (height as usize) * BYTES_PER_PIXEL];
        rng.fill_bytes(&mut data);

        // Canvas captures are fully opaque; the alpha byte carries no noise.
        for pixel in data.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel[3] = 0xff;
        }

        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the raw RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
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

    /// Returns a validated [`PixelBuffer`] view over this image.
    pub fn as_buffer(&self) -> PixelBuffer<'_> {
        PixelBuffer::from_validated(&self.data, self.width, self.height)
    }
}

impl std::fmt::Debug for NoiseImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pixel_bytes", &self.data.len())
            .finish()
    }
}
