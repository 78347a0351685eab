//! Edge boost: a 3×3 Laplacian edge term added on top of the graded color.
//!
//! # Formula
//! With `L(p) = |rgb(p)|` (Euclidean length of the normalized triple) and
//! clamp-to-edge sampling at the image border:
//! ```text
//!   edge = |8 × L(center) − Σ L(8 neighbors)|
//!   out  = clamp(graded + edge × sharpness × 0.1, 0, 1)
//! ```
//!
//! The edge map is always taken from the source pixels, before grading.

use crate::image::RgbaFrame;

/// Scale applied to `edge × sharpness` before it is added to each channel.
const EDGE_GAIN: f32 = 0.1;

/// Per-pixel Laplacian edge magnitudes of a frame, row-major.
#[derive(Debug, Clone)]
pub struct EdgeMap {
    edges: Vec<f32>,
}

impl EdgeMap {
    /// Compute the edge map of `frame` from its current pixel values.
    pub fn compute(frame: &RgbaFrame<'_>) -> Self {
        let width = frame.width() as usize;
        let height = frame.height() as usize;
        let pixels = frame.pixels();

        let lengths: Vec<f32> = pixels.iter().map(|px| rgb_length(*px)).collect();
        let sample = |x: isize, y: isize| -> f32 {
            let cx = x.clamp(0, width as isize - 1) as usize;
            let cy = y.clamp(0, height as isize - 1) as usize;
            lengths[cy * width + cx]
        };

        let mut edges = Vec::with_capacity(lengths.len());
        for y in 0..height as isize {
            for x in 0..width as isize {
                let mut neighbors = 0.0_f32;
                for dy in -1..=1 {
                    for dx in -1..=1 {
                        if dx != 0 || dy != 0 {
                            neighbors += sample(x + dx, y + dy);
                        }
                    }
                }
                edges.push((8.0 * sample(x, y) - neighbors).abs());
            }
        }

        Self { edges }
    }

    /// Edge magnitude at pixel index `index` (row-major).
    #[inline]
    pub fn at(&self, index: usize) -> f32 {
        self.edges[index]
    }
}

fn rgb_length(px: [u8; 4]) -> f32 {
    let r = px[0] as f32 / 255.0;
    let g = px[1] as f32 / 255.0;
    let b = px[2] as f32 / 255.0;
    (r * r + g * g + b * b).sqrt()
}

/// Add the scaled edge term to each channel and clamp.
///
/// `sharpness = 0.0` is a no-op.
pub fn apply_edge_boost(rgb: [f32; 3], edge: f32, sharpness: f32) -> [f32; 3] {
    let boost = edge * sharpness * EDGE_GAIN;
    rgb.map(|c| (c + boost).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Row-major index into a 3-pixel-wide test frame.
    fn idx(x: usize, y: usize) -> usize {
        y * 3 + x
    }

    #[test]
    fn test_flat_image_has_no_edges() {
        let mut buf = [40u8, 80, 120, 255].repeat(9);
        let frame = RgbaFrame::new(&mut buf, 3, 3).unwrap();
        let map = EdgeMap::compute(&frame);
        for i in 0..9 {
            assert_abs_diff_eq!(map.at(i), 0.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_isolated_bright_pixel_peaks_at_center() {
        let mut buf = [0u8, 0, 0, 255].repeat(9);
        buf[4 * 4..4 * 4 + 3].copy_from_slice(&[255, 255, 255]);
        let frame = RgbaFrame::new(&mut buf, 3, 3).unwrap();
        let map = EdgeMap::compute(&frame);

        let center = 3.0_f32.sqrt() * 8.0;
        assert_abs_diff_eq!(map.at(idx(1, 1)), center, epsilon = 1e-4);
        // Every border pixel sees the bright center exactly once.
        assert_abs_diff_eq!(map.at(idx(0, 0)), 3.0_f32.sqrt(), epsilon = 1e-4);
        assert_abs_diff_eq!(map.at(idx(2, 1)), 3.0_f32.sqrt(), epsilon = 1e-4);
    }

    #[test]
    fn test_single_pixel_frame_is_flat() {
        let mut buf = vec![200u8, 10, 10, 255];
        let frame = RgbaFrame::new(&mut buf, 1, 1).unwrap();
        let map = EdgeMap::compute(&frame);
        assert_abs_diff_eq!(map.at(0), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_zero_sharpness_is_identity() {
        let rgb = [0.2, 0.4, 0.6];
        assert_eq!(apply_edge_boost(rgb, 5.0, 0.0), rgb);
    }

    #[test]
    fn test_edge_boost_brightens_and_clamps() {
        let out = apply_edge_boost([0.2, 0.5, 0.95], 1.0, 1.0);
        assert_abs_diff_eq!(out[0], 0.3, epsilon = 1e-6);
        assert_abs_diff_eq!(out[1], 0.6, epsilon = 1e-6);
        assert_eq!(out[2], 1.0);
    }
}
