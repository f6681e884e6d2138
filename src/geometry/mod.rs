//! Screen geometry
//!
//! Integer pixel points, timestamped pen samples, and the angles, bounding
//! boxes, strokes and shapes built from them. All types are plain values.

pub mod angle;
pub mod bounds;
pub mod constants;
pub mod errors;
pub mod point;
pub mod shape;
pub mod stroke;

pub use angle::Angle;
pub use bounds::Bounds;
pub use errors::{GeometryError, GeometryResult};
pub use point::{Point2D, Point2DT, Point2DTV};
pub use shape::{find_dots, find_lines, Dot, Line, RecognizedShape, Shape};
pub use stroke::Stroke;
