//! Scalar parameters that define the color shift.
//!
//! `TransformParams` is the whole contract between a host and the transform:
//! every setter writes one field here, and each `transform` call reads a
//! single snapshot of the struct.

use serde::{Deserialize, Serialize};

use crate::error::ParamsError;

/// Environment variable overriding [`TransformParams::hue_shift`].
pub const ENV_HUE_SHIFT: &str = "COLORSHIFT_HUE_SHIFT";
/// Environment variable overriding [`TransformParams::contrast`].
pub const ENV_CONTRAST: &str = "COLORSHIFT_CONTRAST";
/// Environment variable overriding [`TransformParams::brightness`].
pub const ENV_BRIGHTNESS: &str = "COLORSHIFT_BRIGHTNESS";
/// Environment variable overriding [`TransformParams::saturation_boost`].
pub const ENV_SATURATION_BOOST: &str = "COLORSHIFT_SATURATION_BOOST";
/// Environment variable overriding [`TransformParams::sharpness`].
pub const ENV_SHARPNESS: &str = "COLORSHIFT_SHARPNESS";

/// Color shift parameters. None of them are range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransformParams {
    /// Added to normalized hue before the fold-and-clamp rule. Default: 0.4.
    pub hue_shift: f32,
    /// Contrast multiplier around 0.5 gray. Default: 2.0.
    pub contrast: f32,
    /// Offset added after contrast. Default: 0.05.
    pub brightness: f32,
    /// Saturation multiplier. Default: 1.3.
    pub saturation_boost: f32,
    /// Edge boost strength. 0.0 = off (default).
    pub sharpness: f32,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            hue_shift: 0.4,
            contrast: 2.0,
            brightness: 0.05,
            saturation_boost: 1.3,
            sharpness: 0.0,
        }
    }
}

impl TransformParams {
    /// No hue shift, unit contrast, zero brightness, unit saturation.
    ///
    /// Tone is left alone, but graded pixels still have their hue folded
    /// into `[0, 0.9]`.
    pub const fn neutral() -> Self {
        Self {
            hue_shift: 0.0,
            contrast: 1.0,
            brightness: 0.0,
            saturation_boost: 1.0,
            sharpness: 0.0,
        }
    }

    /// Parse a JSON preset. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ParamsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize as a pretty-printed JSON preset.
    pub fn to_json(&self) -> Result<String, ParamsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Defaults overridden by any parseable `COLORSHIFT_*` environment variable.
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with an explicit variable lookup.
    ///
    /// Values that fail to parse as `f32` are logged and ignored.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut params = Self::default();
        for (key, field) in params.fields_mut() {
            let Some(raw) = lookup(key) else { continue };
            match raw.trim().parse::<f32>() {
                Ok(value) => *field = value,
                Err(_) => tracing::warn!("ignoring {key}={raw:?}: not a number"),
            }
        }
        params
    }

    /// Strict variant of [`from_env_with`](Self::from_env_with): the first
    /// unparseable value is an error.
    pub fn try_from_env_with(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ParamsError> {
        let mut params = Self::default();
        for (key, field) in params.fields_mut() {
            let Some(raw) = lookup(key) else { continue };
            match raw.trim().parse::<f32>() {
                Ok(value) => *field = value,
                Err(_) => return Err(ParamsError::InvalidValue { key, value: raw }),
            }
        }
        Ok(params)
    }

    fn fields_mut(&mut self) -> [(&'static str, &mut f32); 5] {
        [
            (ENV_HUE_SHIFT, &mut self.hue_shift),
            (ENV_CONTRAST, &mut self.contrast),
            (ENV_BRIGHTNESS, &mut self.brightness),
            (ENV_SATURATION_BOOST, &mut self.saturation_boost),
            (ENV_SHARPNESS, &mut self.sharpness),
        ]
    }
}
