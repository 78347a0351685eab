//! Colorspace conversions.

pub mod hsv;

pub use hsv::{hsv_to_rgb, rgb_to_hsv};
