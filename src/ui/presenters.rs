use crate::geometry::bounds::Bounds;
use crate::geometry::stroke::Stroke;
use crate::io::OutputWriter;

pub struct StrokePresenter;

impl StrokePresenter {
    /// One line per sample, numbered from 0.
    pub fn show_samples(stroke: &Stroke, output: &mut dyn OutputWriter) {
        for (i, p) in stroke.iter().enumerate() {
            output.write(&format!("{:>4}  ", i));
            output.writeln(&p.to_string());
        }
    }

    pub fn show_bounds(bounds: Option<Bounds>, output: &mut dyn OutputWriter) {
        match bounds {
            Some(b) => output.writeln(&format!(
                "BOUNDS   {} .. {}  ({} x {}), CENTER {}",
                b.min(),
                b.max(),
                b.width(),
                b.height(),
                b.center()
            )),
            None => output.writeln("BOUNDS   (none)"),
        }
    }

    pub fn show_summary(stroke: &Stroke, output: &mut dyn OutputWriter) {
        output.writeln(&format!("{:<9}{}", "SAMPLES", stroke.len()));
        output.writeln(&format!("{:<9}{}", "DURATION", stroke.duration()));
        output.writeln(&format!("{:<9}{:.2} px", "LENGTH", stroke.path_length()));
        output.writeln(&format!("{:<9}{:.2} p/s", "MEAN", stroke.mean_speed()));
        output.writeln(&format!("{:<9}{:.2} p/s", "MAX", stroke.max_speed()));
    }
}
