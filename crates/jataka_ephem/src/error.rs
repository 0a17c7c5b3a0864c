//! Error types for the ephemeris boundary.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Invalid birth input, rejected before any chart computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ValidationError {
    /// Latitude outside [-90, 90] degrees.
    InvalidLatitude(f64),
    /// Longitude outside [-180, 180] degrees.
    InvalidLongitude(f64),
    /// Unparseable date or time string.
    InvalidInstant(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLatitude(v) => write!(f, "latitude out of range [-90, 90]: {v}"),
            Self::InvalidLongitude(v) => write!(f, "longitude out of range [-180, 180]: {v}"),
            Self::InvalidInstant(s) => write!(f, "invalid birth instant: {s}"),
        }
    }
}

impl Error for ValidationError {}

/// Failure inside the ephemeris collaborator. Fatal for the request;
/// no partial chart is ever returned.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Required ephemeris data files are absent.
    MissingData(String),
    /// The birth instant is outside the data's supported range.
    OutOfRange(String),
    /// Any other computation failure.
    Computation(String),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingData(msg) => write!(f, "missing ephemeris data: {msg}"),
            Self::OutOfRange(msg) => write!(f, "epoch out of range: {msg}"),
            Self::Computation(msg) => write!(f, "ephemeris computation failed: {msg}"),
        }
    }
}

impl Error for EphemerisError {}
