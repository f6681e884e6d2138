//! Pen sample sources
//!
//! Turns text lines or a seeded random walk into timestamped samples
//! ready for [`crate::geometry::Stroke::from_samples`].

pub mod parse;
pub mod synthetic;

pub use parse::{parse_sample, read_samples};
pub use synthetic::synthesize_samples;
