//! RGB ↔ HSV conversion with normalized hue.
//!
//! Both directions work on `[f32; 3]` triples with every component in `[0, 1]`.
//! Hue is normalized (a full turn is `1.0`), not expressed in degrees.
//!
//! # Formula
//! ```text
//!   max = max(r, g, b)      min = min(r, g, b)      Δ = max − min
//!
//!   v = max
//!   s = 0 if max == 0, else Δ / max
//!   h = 0                              if Δ == 0
//!       60 × (((g − b) / Δ) mod 6)     if max == r
//!       60 × ((b − r) / Δ + 2)         if max == g
//!       60 × ((r − g) / Δ + 4)         otherwise
//! ```
//!
//! Channel ties for the maximum resolve in `r → g → b` order using exact
//! float equality, so two inputs with identical bytes always land in the
//! same branch.

/// Degrees in a full hue turn.
const FULL_TURN: f32 = 360.0;

/// Width of one hue sector in degrees.
const SECTOR: f32 = 60.0;

/// Convert normalized RGB to normalized HSV.
///
/// Returns `[h, s, v]`, each in `[0, 1]` for inputs in `[0, 1]`.
pub fn rgb_to_hsv(rgb: [f32; 3]) -> [f32; 3] {
    let [r, g, b] = rgb;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    let mut h = if delta == 0.0 {
        0.0
    } else if max == r {
        SECTOR * (((g - b) / delta) % 6.0)
    } else if max == g {
        SECTOR * ((b - r) / delta + 2.0)
    } else {
        SECTOR * ((r - g) / delta + 4.0)
    };

    if h < 0.0 {
        h += FULL_TURN;
    }

    [h / FULL_TURN, s, v]
}

/// Convert normalized HSV back to RGB.
///
/// Output is not re-clamped; channels stay within float rounding of `[0, 1]`
/// for valid inputs.
///
/// The secondary component `x` is evaluated in `f64` and rounded to `f32`
/// once; rounding each step in `f32` flips the truncated byte for some pixels.
pub fn hsv_to_rgb(hsv: [f32; 3]) -> [f32; 3] {
    let [h, s, v] = hsv;
    let h = h * FULL_TURN;

    let c = v * s;
    let x = (f64::from(c) * (1.0 - (f64::from(h / SECTOR) % 2.0 - 1.0).abs())) as f32;
    let m = v - c;

    let [r1, g1, b1] = if (0.0..60.0).contains(&h) {
        [c, x, 0.0]
    } else if (60.0..120.0).contains(&h) {
        [x, c, 0.0]
    } else if (120.0..180.0).contains(&h) {
        [0.0, c, x]
    } else if (180.0..240.0).contains(&h) {
        [0.0, x, c]
    } else if (240.0..300.0).contains(&h) {
        [x, 0.0, c]
    } else {
        [c, 0.0, x]
    };

    [r1 + m, g1 + m, b1 + m]
}
