//! Bounds-checked view over a caller-owned RGBA8 buffer.

use crate::error::TransformError;

/// Bytes per pixel in the interleaved `R, G, B, A` layout.
pub const CHANNELS: usize = 4;

/// A validated, mutable view of an 8-bit RGBA image, row-major.
///
/// Construction checks `buffer.len() == width × height × 4`, so every pixel
/// index below `width × height` is in bounds for the lifetime of the view.
#[derive(Debug)]
pub struct RgbaFrame<'a> {
    width: u32,
    height: u32,
    pixels: &'a mut [[u8; 4]],
}

impl<'a> RgbaFrame<'a> {
    /// Wrap `buffer` as a `width × height` RGBA frame.
    ///
    /// Fails with [`TransformError::DimensionOverflow`] when the byte count
    /// does not fit in `usize`, and with [`TransformError::BufferSizeMismatch`]
    /// when the buffer length differs from `width × height × 4`.
    pub fn new(buffer: &'a mut [u8], width: u32, height: u32) -> Result<Self, TransformError> {
        let expected = expected_len(width, height)?;
        if buffer.len() != expected {
            return Err(TransformError::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: buffer.len(),
            });
        }

        let pixels: &mut [[u8; 4]] = bytemuck::cast_slice_mut(buffer);
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels (`width × height`).
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Pixels in row-major order.
    pub fn pixels(&self) -> &[[u8; 4]] {
        &*self.pixels
    }

    /// Mutable pixels in row-major order.
    pub fn pixels_mut(&mut self) -> &mut [[u8; 4]] {
        &mut *self.pixels
    }
}

/// Byte length required for a `width × height` RGBA8 buffer.
pub fn expected_len(width: u32, height: u32) -> Result<usize, TransformError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or(TransformError::DimensionOverflow { width, height })
}
