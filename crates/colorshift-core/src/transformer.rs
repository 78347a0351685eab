//! `PixelTransformer` — owns the color shift parameters and grades RGBA buffers in place.

use parking_lot::RwLock;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::TransformError;
use crate::grading::sharpen::{EdgeMap, apply_edge_boost};
use crate::image::RgbaFrame;
use crate::transform::evaluate::{evaluate_transform, grade_pixel, normalize, store};
use crate::transform::params::TransformParams;

/// Pixel counts from one [`PixelTransformer::transform`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransformReport {
    /// Pixels whose color bytes were rewritten.
    pub graded: usize,
    /// Pixels left untouched by the saturation noise floor.
    pub skipped: usize,
}

/// Color shift service for one caller or session.
///
/// Parameters sit behind a read-write lock so a transformer can be shared
/// across threads. Each `transform` call copies the whole parameter set once
/// before touching pixels; a setter racing with a running transform only
/// affects later calls.
#[derive(Debug, Default)]
pub struct PixelTransformer {
    params: RwLock<TransformParams>,
}

impl PixelTransformer {
    /// Create a transformer with the default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transformer with an explicit parameter set.
    pub fn with_params(params: TransformParams) -> Self {
        Self {
            params: RwLock::new(params),
        }
    }

    /// Snapshot of the current parameters.
    pub fn params(&self) -> TransformParams {
        *self.params.read()
    }

    /// Replace every parameter at once.
    pub fn set_params(&self, params: TransformParams) {
        tracing::debug!(?params, "parameters replaced");
        *self.params.write() = params;
    }

    /// Replace the hue shift; takes effect on the next `transform` call.
    pub fn set_hue_shift(&self, hue_shift: f32) {
        tracing::debug!(hue_shift, "set hue shift");
        self.params.write().hue_shift = hue_shift;
    }

    /// Replace the contrast; takes effect on the next `transform` call.
    pub fn set_contrast(&self, contrast: f32) {
        tracing::debug!(contrast, "set contrast");
        self.params.write().contrast = contrast;
    }

    /// Replace the brightness; takes effect on the next `transform` call.
    pub fn set_brightness(&self, brightness: f32) {
        tracing::debug!(brightness, "set brightness");
        self.params.write().brightness = brightness;
    }

    /// Replace the saturation boost; takes effect on the next `transform` call.
    pub fn set_saturation_boost(&self, saturation_boost: f32) {
        tracing::debug!(saturation_boost, "set saturation boost");
        self.params.write().saturation_boost = saturation_boost;
    }

    /// Replace the edge boost strength; takes effect on the next `transform` call.
    pub fn set_sharpness(&self, sharpness: f32) {
        tracing::debug!(sharpness, "set sharpness");
        self.params.write().sharpness = sharpness;
    }

    /// Grade an interleaved RGBA8 buffer in place.
    ///
    /// `buffer.len()` must equal `width × height × 4`; anything else is
    /// rejected before a single byte is read. Alpha bytes are never touched.
    pub fn transform(
        &self,
        buffer: &mut [u8],
        width: u32,
        height: u32,
    ) -> Result<TransformReport, TransformError> {
        let mut frame = match RgbaFrame::new(buffer, width, height) {
            Ok(frame) => frame,
            Err(e) => {
                tracing::warn!("rejecting transform: {e}");
                return Err(e);
            }
        };

        let params = self.params();
        let graded = if params.sharpness == 0.0 {
            grade_all(frame.pixels_mut(), &params)
        } else {
            let edges = EdgeMap::compute(&frame);
            grade_all_sharpened(frame.pixels_mut(), &edges, &params)
        };

        let report = TransformReport {
            graded,
            skipped: frame.pixel_count() - graded,
        };
        tracing::debug!(
            width,
            height,
            graded = report.graded,
            skipped = report.skipped,
            "frame transformed"
        );
        Ok(report)
    }
}

#[cfg(feature = "parallel")]
fn grade_all(pixels: &mut [[u8; 4]], params: &TransformParams) -> usize {
    pixels
        .par_iter_mut()
        .map(|px| usize::from(grade_pixel(px, params)))
        .sum()
}

#[cfg(not(feature = "parallel"))]
fn grade_all(pixels: &mut [[u8; 4]], params: &TransformParams) -> usize {
    pixels
        .iter_mut()
        .map(|px| usize::from(grade_pixel(px, params)))
        .sum()
}

fn grade_sharpened(px: &mut [u8; 4], edge: f32, params: &TransformParams) -> usize {
    match evaluate_transform(normalize(px), params) {
        Some(rgb) => {
            store(px, apply_edge_boost(rgb, edge, params.sharpness));
            1
        }
        None => 0,
    }
}

#[cfg(feature = "parallel")]
fn grade_all_sharpened(pixels: &mut [[u8; 4]], edges: &EdgeMap, params: &TransformParams) -> usize {
    pixels
        .par_iter_mut()
        .enumerate()
        .map(|(i, px)| grade_sharpened(px, edges.at(i), params))
        .sum()
}

#[cfg(not(feature = "parallel"))]
fn grade_all_sharpened(pixels: &mut [[u8; 4]], edges: &EdgeMap, params: &TransformParams) -> usize {
    pixels
        .iter_mut()
        .enumerate()
        .map(|(i, px)| grade_sharpened(px, edges.at(i), params))
        .sum()
}
