//! Colorshift Core — in-place HSV color shift for 8-bit RGBA buffers.
//!
//! Each pixel is converted to HSV, hue-shifted with a fold-and-clamp rule,
//! saturation-boosted, converted back, then contrast/brightness adjusted.
//! Near-gray pixels and alpha pass through untouched. No I/O, no GPU.

pub mod color;
pub mod error;
pub mod grading;
pub mod image;
pub mod transform;
pub mod transformer;

// Re-exports for convenience.
pub use error::{ParamsError, TransformError};
pub use image::RgbaFrame;
pub use transform::evaluate::evaluate_transform;
pub use transform::params::TransformParams;
pub use transformer::{PixelTransformer, TransformReport};
