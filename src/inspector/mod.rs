//! Stroke inspector
//!
//! Loads one stroke from a sample source, derives its velocities, and reports
//! the samples, bounds and speed summary. Backs the `obrik` binary.

use log::info;

use crate::capture::{read_samples, synthesize_samples};
use crate::geometry::errors::{GeometryError, GeometryResult};
use crate::geometry::stroke::Stroke;
use crate::io::{InputReader, OutputWriter};
use crate::ui::presenters::StrokePresenter;

/// Where the inspector gets its samples from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleSource {
    /// Read `x y t` lines from the input reader
    Input,
    /// Generate a seeded random trace of the given length
    Synthetic { seed: u64, points: usize },
}

pub struct Inspector<'a> {
    input: &'a mut dyn InputReader,
    output: &'a mut dyn OutputWriter,
}

impl<'a> Inspector<'a> {
    pub fn new(input: &'a mut dyn InputReader, output: &'a mut dyn OutputWriter) -> Self {
        Inspector { input, output }
    }

    /// Build the stroke described by `source`.
    pub fn load(&mut self, source: SampleSource) -> GeometryResult<Stroke> {
        let samples = match source {
            SampleSource::Input => read_samples(self.input)?,
            SampleSource::Synthetic { seed, points } => {
                info!("synthesizing {} samples with seed {}", points, seed);
                synthesize_samples(seed, points)
            }
        };
        if samples.is_empty() {
            return Err(GeometryError::InvalidInput("no samples given".to_string()));
        }
        Stroke::from_samples(&samples)
    }

    /// Load a stroke and print the full report.
    pub fn run(&mut self, source: SampleSource) -> GeometryResult<Stroke> {
        let stroke = self.load(source)?;
        info!("inspecting stroke of {} samples", stroke.len());

        StrokePresenter::show_samples(&stroke, self.output);
        self.output.writeln("");
        StrokePresenter::show_bounds(stroke.bounds(), self.output);
        StrokePresenter::show_summary(&stroke, self.output);
        Ok(stroke)
    }
}
