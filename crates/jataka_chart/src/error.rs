//! Error type for chart assembly.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jataka_ephem::{EphemerisError, ValidationError};

/// Errors from chart assembly.
///
/// Either the input was rejected at the boundary or the ephemeris
/// collaborator failed; the chart math itself is total and cannot fail.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Invalid birth input.
    Validation(ValidationError),
    /// Ephemeris collaborator failure.
    Ephemeris(EphemerisError),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "validation error: {e}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
        }
    }
}

impl Error for ChartError {}

impl From<ValidationError> for ChartError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<EphemerisError> for ChartError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}
