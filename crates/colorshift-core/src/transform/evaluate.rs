//! Core per-pixel evaluation — applies the full color shift to one RGBA pixel.

use crate::color::hsv::{hsv_to_rgb, rgb_to_hsv};
use crate::grading::sliders::{
    apply_contrast_brightness, below_noise_floor, boost_saturation, shift_hue, to_byte,
};
use crate::transform::params::TransformParams;

/// Apply the color shift to a normalized RGB triple.
///
/// Returns `None` when the pixel falls below the saturation noise floor and
/// must be left untouched. Otherwise the result is clamped to `[0, 1]`.
///
/// 1. RGB → HSV
/// 2. Skip if `s < 0.1`
/// 3. Hue shift with fold-and-clamp into `[0, 0.9]`
/// 4. Saturation boost, clamped to `[0, 1]`
/// 5. HSV → RGB
/// 6. Contrast around 0.5, brightness offset, clamp
pub fn evaluate_transform(rgb: [f32; 3], params: &TransformParams) -> Option<[f32; 3]> {
    let [h, s, v] = rgb_to_hsv(rgb);
    if below_noise_floor(s) {
        return None;
    }

    let h = shift_hue(h, params.hue_shift);
    let s = boost_saturation(s, params.saturation_boost);
    let shifted = hsv_to_rgb([h, s, v]);

    Some(apply_contrast_brightness(
        shifted,
        params.contrast,
        params.brightness,
    ))
}

/// Normalize the color channels of an RGBA pixel. Alpha is not read.
#[inline]
pub fn normalize(px: &[u8; 4]) -> [f32; 3] {
    [
        px[0] as f32 / 255.0,
        px[1] as f32 / 255.0,
        px[2] as f32 / 255.0,
    ]
}

/// Write normalized channels back into the color bytes of `px`. Alpha is not written.
#[inline]
pub fn store(px: &mut [u8; 4], rgb: [f32; 3]) {
    px[0] = to_byte(rgb[0]);
    px[1] = to_byte(rgb[1]);
    px[2] = to_byte(rgb[2]);
}

/// Grade one RGBA pixel in place. Returns `false` if it was skipped.
pub fn grade_pixel(px: &mut [u8; 4], params: &TransformParams) -> bool {
    match evaluate_transform(normalize(px), params) {
        Some(rgb) => {
            store(px, rgb);
            true
        }
        None => false,
    }
}
