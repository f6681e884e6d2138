/// Divisor applied to a timestamp difference when estimating pen speed.
/// Matches the scale of the recorder's clock.
pub const TIMESTAMP_SCALE: f64 = 2e6;

/// Samples in a synthesized stroke when no count is given.
pub const DEFAULT_SYNTHETIC_POINTS: usize = 16;

/// Most samples a synthesized stroke may have.
pub const MAX_SYNTHETIC_POINTS: usize = 1_000_000;

/// Synthetic strokes start inside this square canvas (pixels).
pub const SYNTHETIC_CANVAS: i32 = 800;

/// Largest per-sample step of a synthetic stroke, in pixels per axis.
pub const SYNTHETIC_MAX_STEP: i32 = 12;

/// Clock ticks between synthetic samples lie in this range.
pub const SYNTHETIC_TICK_RANGE: (i64, i64) = (5_000, 20_000);
