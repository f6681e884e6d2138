//! Shapes built from pen strokes.
//!
//! A shape is only geometry: strokes plus their bounding box. Deciding what a
//! shape means in the simulation happens elsewhere.

use log::debug;

use super::bounds::Bounds;
use super::errors::{GeometryError, GeometryResult};
use super::point::Point2D;
use super::stroke::Stroke;

/// Behaviour shared by every shape.
pub trait Shape {
    /// The strokes that make up this shape.
    fn strokes(&self) -> &[Stroke];

    /// The bounding box of all the shape's strokes.
    fn bounds(&self) -> Bounds;
}

/// Strokes plus their precomputed bounds. Strokes are never empty.
#[derive(Debug, Clone, PartialEq)]
struct StrokeSet {
    strokes: Vec<Stroke>,
    bounds: Bounds,
}

impl StrokeSet {
    fn new(strokes: Vec<Stroke>) -> GeometryResult<Self> {
        let bounds = Bounds::from_strokes(&strokes).ok_or(GeometryError::NoStrokes)?;
        Ok(StrokeSet { strokes, bounds })
    }
}

/// A dot. Its location is the center of its bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    set: StrokeSet,
}

impl Dot {
    pub fn new(strokes: Vec<Stroke>) -> GeometryResult<Self> {
        let set = StrokeSet::new(strokes)?;
        debug!("dot at {} from {} strokes", set.bounds.center(), set.strokes.len());
        Ok(Dot { set })
    }

    pub fn center(&self) -> Point2D {
        self.set.bounds.center()
    }

    pub fn center_x(&self) -> i32 {
        self.center().x()
    }

    pub fn center_y(&self) -> i32 {
        self.center().y()
    }
}

impl Shape for Dot {
    fn strokes(&self) -> &[Stroke] {
        &self.set.strokes
    }

    fn bounds(&self) -> Bounds {
        self.set.bounds
    }
}

/// A line, running from the first sample of its first stroke to the last
/// sample of its last stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    set: StrokeSet,
    start: Point2D,
    end: Point2D,
}

impl Line {
    pub fn new(strokes: Vec<Stroke>) -> GeometryResult<Self> {
        let set = StrokeSet::new(strokes)?;
        let start = set
            .strokes
            .first()
            .and_then(Stroke::first)
            .map(|p| p.position())
            .ok_or(GeometryError::EmptyStroke)?;
        let end = set
            .strokes
            .last()
            .and_then(Stroke::last)
            .map(|p| p.position())
            .ok_or(GeometryError::EmptyStroke)?;
        debug!("line {} -> {}", start, end);
        Ok(Line { set, start, end })
    }

    pub fn start_point(&self) -> Point2D {
        self.start
    }

    pub fn end_point(&self) -> Point2D {
        self.end
    }

    /// Straight-line distance between the endpoints.
    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }
}

impl Shape for Line {
    fn strokes(&self) -> &[Stroke] {
        &self.set.strokes
    }

    fn bounds(&self) -> Bounds {
        self.set.bounds
    }
}

/// Any of the shapes this crate knows about.
#[derive(Debug, Clone, PartialEq)]
pub enum RecognizedShape {
    Dot(Dot),
    Line(Line),
}

impl Shape for RecognizedShape {
    fn strokes(&self) -> &[Stroke] {
        match self {
            RecognizedShape::Dot(dot) => dot.strokes(),
            RecognizedShape::Line(line) => line.strokes(),
        }
    }

    fn bounds(&self) -> Bounds {
        match self {
            RecognizedShape::Dot(dot) => dot.bounds(),
            RecognizedShape::Line(line) => line.bounds(),
        }
    }
}

impl From<Dot> for RecognizedShape {
    fn from(dot: Dot) -> Self {
        RecognizedShape::Dot(dot)
    }
}

impl From<Line> for RecognizedShape {
    fn from(line: Line) -> Self {
        RecognizedShape::Line(line)
    }
}

/// All the dots in `shapes`, in order.
pub fn find_dots(shapes: &[RecognizedShape]) -> Vec<&Dot> {
    shapes
        .iter()
        .filter_map(|s| match s {
            RecognizedShape::Dot(dot) => Some(dot),
            _ => None,
        })
        .collect()
}

/// All the lines in `shapes`, in order.
pub fn find_lines(shapes: &[RecognizedShape]) -> Vec<&Line> {
    shapes
        .iter()
        .filter_map(|s| match s {
            RecognizedShape::Line(line) => Some(line),
            _ => None,
        })
        .collect()
}
