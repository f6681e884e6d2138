use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::constants::{SYNTHETIC_CANVAS, SYNTHETIC_MAX_STEP, SYNTHETIC_TICK_RANGE};
use crate::geometry::point::Point2DT;

/// Generate a wandering pen trace of `count` samples.
/// The same seed always yields the same trace. Timestamps strictly increase.
pub fn synthesize_samples(seed: u64, count: usize) -> Vec<Point2DT> {
    let mut rng = StdRng::seed_from_u64(seed);
    synthesize_with(&mut rng, count)
}

fn synthesize_with(rng: &mut StdRng, count: usize) -> Vec<Point2DT> {
    let mut samples = Vec::with_capacity(count);
    let mut x = rng.gen_range(0..SYNTHETIC_CANVAS);
    let mut y = rng.gen_range(0..SYNTHETIC_CANVAS);
    let mut t: i64 = 0;

    for _ in 0..count {
        samples.push(Point2DT::new(x, y, t));

        let step = -SYNTHETIC_MAX_STEP..=SYNTHETIC_MAX_STEP;
        x = (x + rng.gen_range(step.clone())).clamp(0, SYNTHETIC_CANVAS - 1);
        y = (y + rng.gen_range(step)).clamp(0, SYNTHETIC_CANVAS - 1);
        t += rng.gen_range(SYNTHETIC_TICK_RANGE.0..=SYNTHETIC_TICK_RANGE.1);
    }

    samples
}
