use log::debug;

use crate::geometry::errors::{GeometryError, GeometryResult};
use crate::geometry::point::Point2DT;
use crate::io::InputReader;

/// Parse one sample line of the form `x y t`.
/// Fields may be separated by whitespace, commas, or both.
/// Returns `Ok(None)` for blank lines and `#` comments.
pub fn parse_sample(line: &str) -> GeometryResult<Option<Point2DT>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|f| !f.is_empty())
        .collect();
    if fields.len() != 3 {
        return Err(GeometryError::InvalidInput(format!(
            "expected `x y t`, got {} field(s) in {:?}",
            fields.len(),
            line
        )));
    }

    let x = fields[0].parse::<i32>()?;
    let y = fields[1].parse::<i32>()?;
    let t = fields[2].parse::<i64>()?;
    Ok(Some(Point2DT::new(x, y, t)))
}

/// Read samples until the input runs out.
/// Errors name the 1-based line that failed.
pub fn read_samples(input: &mut dyn InputReader) -> GeometryResult<Vec<Point2DT>> {
    let mut samples = Vec::new();
    let mut line_no = 0usize;

    while let Some(line) = input.read_line()? {
        line_no += 1;
        match parse_sample(&line) {
            Ok(Some(sample)) => samples.push(sample),
            Ok(None) => {}
            Err(GeometryError::ParseError(msg)) => {
                return Err(GeometryError::ParseError(format!("line {}: {}", line_no, msg)));
            }
            Err(GeometryError::InvalidInput(msg)) => {
                return Err(GeometryError::InvalidInput(format!("line {}: {}", line_no, msg)));
            }
            Err(e) => return Err(e),
        }
    }

    debug!("read {} samples from {} lines", samples.len(), line_no);
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::MockInput;

    #[test]
    fn parse_whitespace_and_commas() {
        assert_eq!(parse_sample("1 2 3").unwrap(), Some(Point2DT::new(1, 2, 3)));
        assert_eq!(parse_sample("  -4,5, 600 ").unwrap(), Some(Point2DT::new(-4, 5, 600)));
        assert_eq!(parse_sample("7\t8\t9").unwrap(), Some(Point2DT::new(7, 8, 9)));
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert_eq!(parse_sample("").unwrap(), None);
        assert_eq!(parse_sample("   ").unwrap(), None);
        assert_eq!(parse_sample("# x y t").unwrap(), None);
    }

    #[test]
    fn wrong_field_count_is_invalid_input() {
        assert!(matches!(parse_sample("1 2"), Err(GeometryError::InvalidInput(_))));
        assert!(matches!(parse_sample("1 2 3 4"), Err(GeometryError::InvalidInput(_))));
    }

    #[test]
    fn bad_number_is_parse_error() {
        assert!(matches!(parse_sample("1 two 3"), Err(GeometryError::ParseError(_))));
        assert!(matches!(parse_sample("1 2 3.5"), Err(GeometryError::ParseError(_))));
    }

    #[test]
    fn read_samples_until_eof() {
        let mut input = MockInput::new(vec!["# header", "0 0 0", "", "3 4 10"]);
        let samples = read_samples(&mut input).unwrap();
        assert_eq!(samples, vec![Point2DT::new(0, 0, 0), Point2DT::new(3, 4, 10)]);
    }

    #[test]
    fn read_samples_reports_line_number() {
        let mut input = MockInput::new(vec!["0 0 0", "oops"]);
        let err = read_samples(&mut input).unwrap_err();
        assert!(err.to_string().contains("line 2"), "{}", err);
    }
}
