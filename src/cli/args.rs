use crate::geometry::constants::{DEFAULT_SYNTHETIC_POINTS, MAX_SYNTHETIC_POINTS};
use crate::geometry::errors::{GeometryError, GeometryResult};
use crate::inspector::SampleSource;

pub const USAGE: &str = "\
Usage: obrik [OPTIONS] < samples.txt

Reads pen samples (`x y t` per line) from stdin, derives pen velocities,
and prints the stroke with its bounds and speed summary.

Options:
  -s, --seed <INT>    Synthesize a random stroke instead of reading stdin
  -n, --points <INT>  Samples in a synthesized stroke (default 16, max 1000000)
  -h, --help          Print help";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub seed: Option<u64>,
    pub points: usize,
    pub help: bool,
}

impl Args {
    pub fn source(&self) -> SampleSource {
        match self.seed {
            Some(seed) => SampleSource::Synthetic {
                seed,
                points: self.points,
            },
            None => SampleSource::Input,
        }
    }
}

/// Parse the process arguments.
pub fn parse() -> GeometryResult<Args> {
    parse_from(std::env::args().skip(1))
}

/// Parse an argument list that excludes the program name.
pub fn parse_from<I, S>(argv: I) -> GeometryResult<Args>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = Args {
        seed: None,
        points: DEFAULT_SYNTHETIC_POINTS,
        help: false,
    };
    let mut iter = argv.into_iter().map(Into::into);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" | "-s" => {
                let val = value_for(&arg, iter.next())?;
                args.seed = Some(val.parse::<u64>()?);
            }
            "--points" | "-n" => {
                let val = value_for(&arg, iter.next())?;
                args.points = val.parse::<usize>()?;
                if args.points > MAX_SYNTHETIC_POINTS {
                    return Err(GeometryError::InvalidInput(format!(
                        "--points must be at most {}, got {}",
                        MAX_SYNTHETIC_POINTS, args.points
                    )));
                }
            }
            "--help" | "-h" => args.help = true,
            other => {
                return Err(GeometryError::InvalidInput(format!(
                    "unknown argument: {}",
                    other
                )))
            }
        }
    }

    Ok(args)
}

fn value_for(flag: &str, value: Option<String>) -> GeometryResult<String> {
    value.ok_or_else(|| GeometryError::InvalidInput(format!("{} requires a value", flag)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_read_stdin() {
        let args = parse_from(Vec::<String>::new()).unwrap();
        assert_eq!(args.seed, None);
        assert_eq!(args.points, DEFAULT_SYNTHETIC_POINTS);
        assert_eq!(args.source(), SampleSource::Input);
    }

    #[test]
    fn seed_and_points_select_synthetic() {
        let args = parse_from(["--seed", "42", "-n", "8"]).unwrap();
        assert_eq!(
            args.source(),
            SampleSource::Synthetic {
                seed: 42,
                points: 8
            }
        );
    }

    #[test]
    fn points_above_limit_are_rejected() {
        let too_many = (MAX_SYNTHETIC_POINTS + 1).to_string();
        assert!(matches!(
            parse_from(["--seed", "1", "--points", too_many.as_str()]),
            Err(GeometryError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_from(["--seed", "1", "--points", "18446744073709551615"]),
            Err(GeometryError::InvalidInput(_))
        ));

        let at_limit = MAX_SYNTHETIC_POINTS.to_string();
        let args = parse_from(["-n", at_limit.as_str()]).unwrap();
        assert_eq!(args.points, MAX_SYNTHETIC_POINTS);
    }

    #[test]
    fn help_flag() {
        assert!(parse_from(["-h"]).unwrap().help);
    }

    #[test]
    fn errors() {
        assert!(matches!(parse_from(["--seed"]), Err(GeometryError::InvalidInput(_))));
        assert!(matches!(parse_from(["--seed", "abc"]), Err(GeometryError::ParseError(_))));
        assert!(matches!(parse_from(["--bogus"]), Err(GeometryError::InvalidInput(_))));
    }
}
