use std::fmt;

/// Errors raised while building geometry or reading pen samples
#[derive(Debug)]
pub enum GeometryError {
    /// A stroke needs at least one sample
    EmptyStroke,
    /// A shape needs at least one stroke
    NoStrokes,
    /// Velocity was NaN or infinite
    NonFiniteVelocity(f64),
    /// Failed to parse a sample or argument
    ParseError(String),
    /// Input was well-formed text but not usable
    InvalidInput(String),
    /// I/O error occurred
    IoError(std::io::Error),
}

/// Type alias for Results using GeometryError
pub type GeometryResult<T> = Result<T, GeometryError>;

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GeometryError::EmptyStroke => write!(f, "a stroke needs at least one sample"),
            GeometryError::NoStrokes => write!(f, "a shape needs at least one stroke"),
            GeometryError::NonFiniteVelocity(v) => {
                write!(f, "velocity must be finite, got {}", v)
            }
            GeometryError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            GeometryError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            GeometryError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for GeometryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeometryError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GeometryError {
    fn from(err: std::io::Error) -> Self {
        GeometryError::IoError(err)
    }
}

impl From<std::num::ParseIntError> for GeometryError {
    fn from(err: std::num::ParseIntError) -> Self {
        GeometryError::ParseError(err.to_string())
    }
}
