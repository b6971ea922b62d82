//! Pixel buffer boundary types.
//!
//! The pipeline consumes image data but never acquires it: callers hand
//! in borrowed [`PixelBuffer`] views over RGBA bytes they own. The
//! [`NoiseImage`] source generates deterministic synthetic buffers for
//! demos and tests; it is not an entropy source.

mod pixel;
mod synthetic;

pub use pixel::{ImageError, PixelBuffer, BYTES_PER_PIXEL};
pub use synthetic::NoiseImage;
