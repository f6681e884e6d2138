use log::{debug, warn};

use super::bounds::Bounds;
use super::constants::TIMESTAMP_SCALE;
use super::errors::{GeometryError, GeometryResult};
use super::point::{Point2DT, Point2DTV};

/// One pen stroke: the samples recorded from pen-down to pen-up.
/// Every sample carries the pen speed estimated at that point.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Point2DTV>,
}

impl Stroke {
    /// Build a stroke from raw timestamped samples.
    ///
    /// Endpoints get velocity 0. Each interior sample gets the central
    /// difference `distance(prev, next) / ((t_next - t_prev) / TIMESTAMP_SCALE)`.
    /// A zero or negative time span gives velocity 0.
    pub fn from_samples(samples: &[Point2DT]) -> GeometryResult<Stroke> {
        let (first, last) = match (samples.first(), samples.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(GeometryError::EmptyStroke),
        };

        let mut points = Vec::with_capacity(samples.len());
        points.push(Point2DTV::from(first));
        for (i, window) in samples.windows(3).enumerate() {
            let (prev, here, next) = (window[0], window[1], window[2]);
            points.push(Point2DTV::with_velocity(here, central_speed(i + 1, prev, next)));
        }
        if samples.len() > 1 {
            points.push(Point2DTV::from(last));
        }

        debug!("built stroke with {} samples", points.len());
        Ok(Stroke { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&Point2DTV> {
        self.points.get(i)
    }

    pub fn first(&self) -> Option<&Point2DTV> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point2DTV> {
        self.points.last()
    }

    pub fn points(&self) -> &[Point2DTV] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point2DTV> {
        self.points.iter()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.points.iter().map(|p| p.position()))
    }

    /// Time between the first and last sample, in clock ticks.
    pub fn duration(&self) -> i64 {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => last.t() - first.t(),
            _ => 0,
        }
    }

    /// Sum of the distances between consecutive samples.
    pub fn path_length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| w[0].position().distance_to(w[1].position()))
            .sum()
    }

    pub fn max_speed(&self) -> f64 {
        self.points.iter().map(|p| p.v()).fold(0.0, f64::max)
    }

    /// Mean speed over interior samples; endpoints carry no estimate.
    pub fn mean_speed(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let interior = &self.points[1..self.points.len() - 1];
        interior.iter().map(|p| p.v()).sum::<f64>() / interior.len() as f64
    }
}

impl<'a> IntoIterator for &'a Stroke {
    type Item = &'a Point2DTV;
    type IntoIter = std::slice::Iter<'a, Point2DTV>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

fn central_speed(index: usize, prev: Point2DT, next: Point2DT) -> f64 {
    let span = next.t().saturating_sub(prev.t());
    if span <= 0 {
        warn!(
            "sample {} has non-increasing neighbour timestamps ({} -> {}), using speed 0",
            index,
            prev.t(),
            next.t()
        );
        return 0.0;
    }
    let seconds = span as f64 / TIMESTAMP_SCALE;
    next.distance_to(&prev) / seconds
}
