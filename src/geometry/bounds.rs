use super::point::Point2D;
use super::stroke::Stroke;

/// An axis-aligned bounding box. Both corners are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    min: Point2D,
    max: Point2D,
}

impl Bounds {
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Bounds {
            min: Point2D::new(min_x, min_y),
            max: Point2D::new(max_x, max_y),
        }
    }

    /// Smallest box holding every point, or `None` if there are none.
    pub fn from_points<I>(points: I) -> Option<Bounds>
    where
        I: IntoIterator<Item = Point2D>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Bounds {
            min: first,
            max: first,
        };
        for p in iter {
            bounds.include(p);
        }
        Some(bounds)
    }

    /// Smallest box holding every sample of every stroke.
    pub fn from_strokes(strokes: &[Stroke]) -> Option<Bounds> {
        Bounds::from_points(
            strokes
                .iter()
                .flat_map(|s| s.iter().map(|p| p.position())),
        )
    }

    fn include(&mut self, p: Point2D) {
        self.min = Point2D::new(self.min.x().min(p.x()), self.min.y().min(p.y()));
        self.max = Point2D::new(self.max.x().max(p.x()), self.max.y().max(p.y()));
    }

    pub fn min(&self) -> Point2D {
        self.min
    }

    pub fn max(&self) -> Point2D {
        self.max
    }

    pub fn min_x(&self) -> i32 {
        self.min.x()
    }

    pub fn min_y(&self) -> i32 {
        self.min.y()
    }

    pub fn max_x(&self) -> i32 {
        self.max.x()
    }

    pub fn max_y(&self) -> i32 {
        self.max.y()
    }

    /// Horizontal extent, `max_x - min_x`.
    pub fn width(&self) -> i64 {
        i64::from(self.max.x()) - i64::from(self.min.x())
    }

    /// Vertical extent, `max_y - min_y`.
    pub fn height(&self) -> i64 {
        i64::from(self.max.y()) - i64::from(self.min.y())
    }

    pub fn center(&self) -> Point2D {
        self.min.midpoint(self.max)
    }

    pub fn contains(&self, p: Point2D) -> bool {
        (self.min.x()..=self.max.x()).contains(&p.x())
            && (self.min.y()..=self.max.y()).contains(&p.y())
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        let mut out = *self;
        out.include(other.min);
        out.include(other.max);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::Point2DT;

    #[test]
    fn from_points_finds_extremes() {
        let points = [
            Point2D::new(5, -2),
            Point2D::new(-1, 7),
            Point2D::new(3, 3),
        ];
        let b = Bounds::from_points(points).unwrap();
        assert_eq!(b, Bounds::new(-1, -2, 5, 7));
        assert_eq!(b.width(), 6);
        assert_eq!(b.height(), 9);
    }

    #[test]
    fn from_no_points_is_none() {
        assert!(Bounds::from_points(Vec::<Point2D>::new()).is_none());
        assert!(Bounds::from_strokes(&[]).is_none());
    }

    #[test]
    fn center_is_midpoint_of_corners() {
        let b = Bounds::new(0, 0, 10, 5);
        assert_eq!(b.center(), Point2D::new(5, 2));
    }

    #[test]
    fn contains_is_inclusive() {
        let b = Bounds::new(0, 0, 10, 10);
        assert!(b.contains(Point2D::new(0, 10)));
        assert!(b.contains(Point2D::new(5, 5)));
        assert!(!b.contains(Point2D::new(11, 5)));
        assert!(!b.contains(Point2D::new(5, -1)));
    }

    #[test]
    fn union_covers_both() {
        let a = Bounds::new(0, 0, 2, 2);
        let b = Bounds::new(5, -3, 6, 1);
        assert_eq!(a.union(&b), Bounds::new(0, -3, 6, 2));
    }

    #[test]
    fn from_strokes_spans_all_strokes() {
        let s1 = Stroke::from_samples(&[Point2DT::new(1, 1, 0), Point2DT::new(4, 2, 10)]).unwrap();
        let s2 = Stroke::from_samples(&[Point2DT::new(-3, 9, 20)]).unwrap();
        let b = Bounds::from_strokes(&[s1, s2]).unwrap();
        assert_eq!(b, Bounds::new(-3, 1, 4, 9));
    }
}
