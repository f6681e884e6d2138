use std::fmt;

use super::angle::Angle;
use super::errors::{GeometryError, GeometryResult};

/// A point on screen. Coordinates are integers because they address pixels.
/// X increases left-to-right, Y increases top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point2D {
    x: i32,
    y: i32,
}

impl Point2D {
    pub fn new(x: i32, y: i32) -> Self {
        Point2D { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: Point2D) -> f64 {
        let dx = (i64::from(self.x) - i64::from(other.x)) as f64;
        let dy = (i64::from(self.y) - i64::from(other.y)) as f64;
        dx.hypot(dy)
    }

    /// Direction to `other` in radians. 0 is directly to the right,
    /// PI/2 is directly above (smaller y on screen).
    pub fn angle_to(&self, other: Point2D) -> Angle {
        let dx = (i64::from(other.x) - i64::from(self.x)) as f64;
        let dy = (i64::from(self.y) - i64::from(other.y)) as f64;
        Angle::new(dy.atan2(dx))
    }

    /// Slope `m` of the line `y = mx + b` through both points.
    /// Returns `None` for a vertical line (equal x).
    pub fn slope_to(&self, other: Point2D) -> Option<f64> {
        let dx = i64::from(other.x) - i64::from(self.x);
        if dx == 0 {
            return None;
        }
        let dy = i64::from(other.y) - i64::from(self.y);
        Some(dy as f64 / dx as f64)
    }

    /// Component-wise midpoint, truncated toward zero.
    pub fn midpoint(&self, other: Point2D) -> Point2D {
        // The mean of two i32 values always fits back into an i32.
        let mid = |a: i32, b: i32| ((i64::from(a) + i64::from(b)) / 2) as i32;
        Point2D {
            x: mid(self.x, other.x),
            y: mid(self.y, other.y),
        }
    }
}

impl From<(i32, i32)> for Point2D {
    fn from((x, y): (i32, i32)) -> Self {
        Point2D { x, y }
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// A timestamped point.
/// The timestamp is whatever clock the caller samples; ordering is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point2DT {
    position: Point2D,
    t: i64,
}

impl Point2DT {
    pub fn new(x: i32, y: i32, t: i64) -> Self {
        Point2DT {
            position: Point2D::new(x, y),
            t,
        }
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    /// The time this point was created.
    pub fn t(&self) -> i64 {
        self.t
    }

    pub fn position(&self) -> Point2D {
        self.position
    }

    pub fn distance_to(&self, other: &Point2DT) -> f64 {
        self.position.distance_to(other.position)
    }
}

impl fmt::Display for Point2DT {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} @ {}", self.position, self.t)
    }
}

/// A pen sample: position, time, and the pen's speed there in pixels per second.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2DTV {
    timed: Point2DT,
    v: f64,
}

impl Point2DTV {
    pub fn new(x: i32, y: i32, t: i64, v: f64) -> Self {
        Point2DTV {
            timed: Point2DT::new(x, y, t),
            v,
        }
    }

    /// Like [`Point2DTV::new`], but refuses NaN or infinite velocities.
    pub fn try_new(x: i32, y: i32, t: i64, v: f64) -> GeometryResult<Self> {
        if !v.is_finite() {
            return Err(GeometryError::NonFiniteVelocity(v));
        }
        Ok(Self::new(x, y, t, v))
    }

    pub fn with_velocity(timed: Point2DT, v: f64) -> Self {
        Point2DTV { timed, v }
    }

    pub fn x(&self) -> i32 {
        self.timed.x()
    }

    pub fn y(&self) -> i32 {
        self.timed.y()
    }

    pub fn t(&self) -> i64 {
        self.timed.t()
    }

    /// Pen speed at this sample, in pixels per second.
    pub fn v(&self) -> f64 {
        self.v
    }

    pub fn position(&self) -> Point2D {
        self.timed.position()
    }

    pub fn timed(&self) -> Point2DT {
        self.timed
    }
}

impl From<Point2DT> for Point2DTV {
    fn from(timed: Point2DT) -> Self {
        Point2DTV::with_velocity(timed, 0.0)
    }
}

impl fmt::Display for Point2DTV {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} going {:.2} p/s", self.timed, self.v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn point_accessors() {
        let p = Point2D::new(3, 4);
        assert_eq!(p.x(), 3);
        assert_eq!(p.y(), 4);
    }

    #[test]
    fn timed_point_accessors() {
        let p = Point2DT::new(3, 4, 1000);
        assert_eq!(p.x(), 3);
        assert_eq!(p.y(), 4);
        assert_eq!(p.t(), 1000);
        assert_eq!(p.position(), Point2D::new(3, 4));
    }

    #[test]
    fn velocity_point_keeps_full_precision() {
        let p = Point2DTV::new(3, 4, 1000, 2.5);
        assert_eq!(p.v(), 2.5);
        assert_eq!(p.timed(), Point2DT::new(3, 4, 1000));
    }

    #[test]
    fn try_new_rejects_non_finite_velocity() {
        assert!(Point2DTV::try_new(0, 0, 0, f64::NAN).is_err());
        assert!(Point2DTV::try_new(0, 0, 0, f64::INFINITY).is_err());
        assert!(Point2DTV::try_new(0, 0, 0, -3.0).is_ok());
    }

    #[test]
    fn from_timed_point_has_zero_velocity() {
        let p: Point2DTV = Point2DT::new(1, 2, 3).into();
        assert_eq!(p.v(), 0.0);
        assert_eq!(p.t(), 3);
    }

    #[test]
    fn distance_3_4_5() {
        let a = Point2D::new(0, 0);
        let b = Point2D::new(3, 4);
        assert_eq!(a.distance_to(b), 5.0);
    }

    #[test]
    fn distance_does_not_overflow() {
        let a = Point2D::new(i32::MIN, i32::MIN);
        let b = Point2D::new(i32::MAX, i32::MIN);
        assert_eq!(a.distance_to(b), u32::MAX as f64);
    }

    #[test]
    fn angle_directions() {
        let origin = Point2D::new(10, 10);
        let right = origin.angle_to(Point2D::new(20, 10)).radians();
        let above = origin.angle_to(Point2D::new(10, 0)).radians();
        let left = origin.angle_to(Point2D::new(0, 10)).radians();
        let below = origin.angle_to(Point2D::new(10, 20)).radians();
        assert!(right.abs() < 1e-12);
        assert!((above - FRAC_PI_2).abs() < 1e-12);
        assert!((left - PI).abs() < 1e-12);
        assert!((below + FRAC_PI_2).abs() < 1e-12);
        assert_eq!(origin.angle_to(origin).radians(), 0.0);
    }

    #[test]
    fn slope_uses_float_division() {
        let a = Point2D::new(0, 0);
        assert_eq!(a.slope_to(Point2D::new(2, 1)), Some(0.5));
        assert_eq!(a.slope_to(Point2D::new(0, 7)), None);
    }

    #[test]
    fn midpoint_truncates_toward_zero() {
        let a = Point2D::new(0, 0);
        assert_eq!(a.midpoint(Point2D::new(3, -3)), Point2D::new(1, -1));
        let big = Point2D::new(i32::MAX, i32::MAX);
        assert_eq!(big.midpoint(big), big);
    }

    #[test]
    fn display_formats() {
        assert_eq!(Point2D::new(3, 4).to_string(), "(3,4)");
        assert_eq!(Point2DT::new(3, 4, 1000).to_string(), "(3,4) @ 1000");
        assert_eq!(
            Point2DTV::new(3, 4, 1000, 2.5).to_string(),
            "(3,4) @ 1000 going 2.50 p/s"
        );
    }
}
