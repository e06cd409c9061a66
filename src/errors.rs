//! Custom error types for geodesic calculations

use std::fmt;
use std::io;

/// Errors raised while normalizing input or running a calculation
#[derive(Debug)]
pub enum GeoError {
    /// Point shape not recognized or latitude/longitude out of range
    InvalidPoint(String),
    /// Unit symbol not present in the conversion tables
    UnknownUnit(String),
    /// String does not match the sexagesimal pattern
    InvalidSexagesimal(String),
    /// Speed requested for a point without a timestamp
    MissingTimestamp,
    /// End timestamp is not after the start timestamp
    NonPositiveInterval { start: i64, end: i64 },
    /// Polygon with fewer than three vertices
    InvalidPolygon(usize),
    /// Operation needs at least one point
    EmptyPointSet,
    /// Operation name not present in the registry
    UnknownOperation(String),
    /// Wrong number or kind of arguments for an operation
    InvalidArguments(String),
    /// Malformed configuration
    ConfigError(String),
    /// I/O error
    IoError(io::Error),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::InvalidPoint(msg) => write!(f, "Invalid point: {}", msg),
            GeoError::UnknownUnit(unit) => write!(f, "Unknown unit for conversion: {}", unit),
            GeoError::InvalidSexagesimal(s) => write!(f, "Invalid sexagesimal value: {}", s),
            GeoError::MissingTimestamp => write!(f, "Point has no timestamp"),
            GeoError::NonPositiveInterval { start, end } => write!(
                f, "End time {} must be after start time {}", end, start
            ),
            GeoError::InvalidPolygon(n) => write!(
                f, "Polygon needs at least 3 vertices, got {}", n
            ),
            GeoError::EmptyPointSet => write!(f, "Point collection is empty"),
            GeoError::UnknownOperation(name) => write!(f, "Unknown operation: {}", name),
            GeoError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
            GeoError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GeoError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for GeoError {}

impl From<io::Error> for GeoError {
    fn from(error: io::Error) -> Self {
        GeoError::IoError(error)
    }
}

/// Result type for geodesic operations
pub type GeoResult<T> = Result<T, GeoError>;
