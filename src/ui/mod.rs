//! User interface and presentation
//!
//! Presenters format strokes and their measurements for the inspector,
//! keeping text layout out of the geometry types.

pub mod presenters;
