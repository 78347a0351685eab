//! Error types for frame validation and parameter loading.

/// Rejection of a buffer handed to [`crate::PixelTransformer::transform`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    #[error(
        "invalid argument: buffer holds {actual} bytes, expected {expected} for a {width}x{height} RGBA frame"
    )]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("invalid argument: {width}x{height} RGBA frame size overflows usize")]
    DimensionOverflow { width: u32, height: u32 },
}

impl TransformError {
    /// Every variant is an invalid-argument rejection of the caller's input.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::BufferSizeMismatch { .. } | Self::DimensionOverflow { .. }
        )
    }
}

/// Failure while loading or saving [`crate::TransformParams`].
#[derive(Debug, thiserror::Error)]
pub enum ParamsError {
    #[error("preset JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}
