//! Grading steps — hue/saturation/tone sliders and the edge boost pass.

pub mod sharpen;
pub mod sliders;
