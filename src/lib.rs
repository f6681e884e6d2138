//! Obrik pen geometry
//!
//! Screen-space geometry for Obrik, a free body diagram simulator driven by
//! pen input.
//!
//! # Overview
//!
//! The core is a chain of small value types: [`Point2D`] (a pixel position),
//! [`Point2DT`] (a position with a timestamp) and [`Point2DTV`] (a timestamped
//! position with the pen speed there). Each one embeds the previous by value.
//! On top of them sit angles, bounding boxes, strokes with derived pen
//! velocities, and dot/line shapes.
//!
//! # Modules
//!
//! - [`geometry`] - Points, angles, bounds, strokes and shapes
//! - [`capture`] - Parsing and synthesizing pen samples
//! - [`inspector`] - Load a stroke and report on it
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Text presentation of strokes
//! - [`cli`] - Argument parsing for the `obrik` binary
//!
//! # Example
//!
//! ```rust
//! use obrik::{Point2DT, Stroke};
//!
//! let stroke = Stroke::from_samples(&[
//!     Point2DT::new(0, 0, 0),
//!     Point2DT::new(3, 4, 1_000_000),
//!     Point2DT::new(6, 8, 2_000_000),
//! ])
//! .unwrap();
//! assert_eq!(stroke.get(1).unwrap().v(), 10.0);
//! ```

pub mod capture;
pub mod cli;
pub mod geometry;
pub mod inspector;
pub mod io;
pub mod ui;

// Re-export commonly used types
pub use geometry::{
    Angle, Bounds, Dot, GeometryError, GeometryResult, Line, Point2D, Point2DT, Point2DTV,
    RecognizedShape, Shape, Stroke,
};
pub use inspector::{Inspector, SampleSource};
