//! Custom error types for the guide line engine

use std::fmt;
use std::io;

/// Guide line error types
#[derive(Debug)]
pub enum GuideError {
    /// I/O error
    IoError(io::Error),
    /// Configuration could not be parsed
    ConfigError(String),
    /// Line length is not a positive finite number of meters
    InvalidLength(f64),
    /// Length limits are not finite or violate `0 < min <= max`
    InvalidLengthLimits(f64, f64),
    /// Heading is not a finite number of degrees
    InvalidHeading(f64),
    /// Color name or hex string is not recognized
    UnknownColor(String),
    /// Coordinate text could not be parsed or is out of range
    InvalidCoordinate(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for GuideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuideError::IoError(e) => write!(f, "I/O error: {}", e),
            GuideError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GuideError::InvalidLength(v) => write!(f, "Invalid line length: {} m (must be positive)", v),
            GuideError::InvalidLengthLimits(min, max) => write!(f, "Invalid length limits: {}..{} m", min, max),
            GuideError::InvalidHeading(v) => write!(f, "Invalid heading: {} deg", v),
            GuideError::UnknownColor(name) => write!(f, "Unknown line color: {}", name),
            GuideError::InvalidCoordinate(msg) => write!(f, "Invalid coordinate: {}", msg),
            GuideError::GenericError(msg) => write!(f, "Guide line error: {}", msg),
        }
    }
}

impl std::error::Error for GuideError {}

impl From<io::Error> for GuideError {
    fn from(error: io::Error) -> Self {
        GuideError::IoError(error)
    }
}

/// Result type for guide line operations
pub type GuideResult<T> = Result<T, GuideError>;

impl From<String> for GuideError {
    fn from(msg: String) -> Self {
        GuideError::GenericError(msg)
    }
}
