//! Slider-based grading adjustments (hue shift, saturation boost, contrast, brightness).

/// Saturation below which a pixel is left untouched (noise reduction).
pub const NOISE_FLOOR: f32 = 0.1;

/// Highest hue reachable after the fold-and-clamp rule.
pub const HUE_CEILING: f32 = 0.9;

/// Gray level that contrast pivots around.
const CONTRAST_PIVOT: f32 = 0.5;

/// Whether a pixel with saturation `s` should skip grading.
#[inline]
pub fn below_noise_floor(s: f32) -> bool {
    s < NOISE_FLOOR
}

/// Shift a normalized hue and fold it back into `[0, HUE_CEILING]`.
///
/// Steps run in this exact order:
/// ```text
///   h = h + shift
///   if h > 1 { h = 1 − h }      // reflect, may go negative for large h
///   if h < 0 { h = 0 }
///   h = clamp(h, 0, 0.9)
/// ```
///
/// This is a reflection, not a circular wrap: `h = 1.5` lands on `0` rather
/// than `0.5`.
pub fn shift_hue(h: f32, shift: f32) -> f32 {
    let mut h = h + shift;
    if h > 1.0 {
        h = 1.0 - h;
    }
    if h < 0.0 {
        h = 0.0;
    }
    h.clamp(0.0, HUE_CEILING)
}

/// Scale saturation by `boost` and clamp to `[0, 1]`.
#[inline]
pub fn boost_saturation(s: f32, boost: f32) -> f32 {
    (s * boost).clamp(0.0, 1.0)
}

/// Apply contrast around mid-gray, then add brightness, then clamp.
///
/// ```text
/// out = clamp((in − 0.5) × contrast + 0.5 + brightness, 0, 1)
/// ```
///
/// `contrast = 1.0`, `brightness = 0.0` leave in-range values unchanged.
pub fn apply_contrast_brightness(rgb: [f32; 3], contrast: f32, brightness: f32) -> [f32; 3] {
    rgb.map(|c| ((c - CONTRAST_PIVOT) * contrast + CONTRAST_PIVOT + brightness).clamp(0.0, 1.0))
}

/// Quantize a normalized channel to a byte, truncating toward zero.
#[inline]
pub fn to_byte(c: f32) -> u8 {
    (c * 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_noise_floor_boundary() {
        assert!(below_noise_floor(0.0999));
        assert!(!below_noise_floor(NOISE_FLOOR));
        assert!(!below_noise_floor(0.5));
    }

    #[test]
    fn test_hue_shift_within_range_is_additive() {
        assert_abs_diff_eq!(shift_hue(0.2, 0.4), 0.6, epsilon = EPSILON);
    }

    #[test]
    fn test_hue_above_ceiling_is_clamped() {
        assert_abs_diff_eq!(shift_hue(0.5, 0.45), HUE_CEILING, epsilon = EPSILON);
        assert_abs_diff_eq!(shift_hue(1.0, 0.0), HUE_CEILING, epsilon = EPSILON);
    }

    #[test]
    fn test_hue_slightly_over_one_reflects_to_zero() {
        // 1.2 → 1 − 1.2 = −0.2 → 0
        assert_eq!(shift_hue(0.8, 0.4), 0.0);
    }

    #[test]
    fn test_hue_reflection_is_not_a_wrap() {
        // A circular wrap would give 0.5; the fold rule collapses to 0.
        assert_eq!(shift_hue(1.0, 0.5), 0.0);
    }

    #[test]
    fn test_negative_hue_clamps_to_zero() {
        assert_eq!(shift_hue(0.1, -0.3), 0.0);
    }

    #[test]
    fn test_saturation_boost_clamps() {
        assert_abs_diff_eq!(boost_saturation(0.5, 1.3), 0.65, epsilon = EPSILON);
        assert_eq!(boost_saturation(0.9, 1.3), 1.0);
        assert_eq!(boost_saturation(0.9, 0.0), 0.0);
        assert_eq!(boost_saturation(0.9, -1.0), 0.0);
    }

    #[test]
    fn test_contrast_at_pivot_only_adds_brightness() {
        let result = apply_contrast_brightness([0.5, 0.5, 0.5], 2.0, 0.05);
        for c in result {
            assert_abs_diff_eq!(c, 0.55, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_contrast_one_brightness_zero_is_identity() {
        let rgb = [0.3, 0.5, 0.7];
        let result = apply_contrast_brightness(rgb, 1.0, 0.0);
        for i in 0..3 {
            assert_abs_diff_eq!(result[i], rgb[i], epsilon = EPSILON);
        }
    }

    #[test]
    fn test_contrast_result_is_clamped() {
        assert_eq!(apply_contrast_brightness([0.0, 1.0, 0.9], 2.0, 0.05), [0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_to_byte_truncates() {
        assert_eq!(to_byte(1.0), 255);
        assert_eq!(to_byte(0.0), 0);
        assert_eq!(to_byte(0.35), 89);
        assert_eq!(to_byte(0.999), 254);
    }
}
