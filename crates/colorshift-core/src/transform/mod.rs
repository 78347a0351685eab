//! Transform pipeline — parameter definitions and per-pixel evaluation.

pub mod evaluate;
pub mod params;
