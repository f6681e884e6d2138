use std::f64::consts::PI;

/// A planar angle in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    pub fn new(radians: f64) -> Self {
        Angle { radians }
    }

    pub fn radians(&self) -> f64 {
        self.radians
    }

    /// The unsigned angle separating two directions, in [0, PI].
    pub fn angle_between(&self, other: Angle) -> Angle {
        let mut diff = (self.radians - other.radians).abs();
        if diff > PI {
            diff = 2.0 * PI - diff;
        }
        Angle::new(diff)
    }
}
