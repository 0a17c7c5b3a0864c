//! Validated birth input: UTC instant plus geographic coordinates.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A birth event, validated at construction.
///
/// Timezone localization is the service layer's job; by the time a
/// `BirthInput` exists the instant is already UTC.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    /// Birth instant in UTC.
    pub birth_utc: DateTime<Utc>,
    /// Geographic latitude in degrees, [-90, 90].
    pub latitude_deg: f64,
    /// Geographic longitude in degrees, [-180, 180].
    pub longitude_deg: f64,
}

impl BirthInput {
    /// Build a birth input, rejecting out-of-range coordinates.
    pub fn new(
        birth_utc: DateTime<Utc>,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<Self, ValidationError> {
        if !latitude_deg.is_finite() || latitude_deg.abs() > 90.0 {
            return Err(ValidationError::InvalidLatitude(latitude_deg));
        }
        if !longitude_deg.is_finite() || longitude_deg.abs() > 180.0 {
            return Err(ValidationError::InvalidLongitude(longitude_deg));
        }
        Ok(Self {
            birth_utc,
            latitude_deg,
            longitude_deg,
        })
    }

    /// Build from the request-shaped date ("YYYY-MM-DD") and time
    /// ("HH:MM") fields, both already UTC.
    pub fn from_strings(
        date: &str,
        time: &str,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<Self, ValidationError> {
        let d = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidInstant(date.to_string()))?;
        let t = NaiveTime::parse_from_str(time, "%H:%M")
            .map_err(|_| ValidationError::InvalidInstant(time.to_string()))?;
        Self::new(d.and_time(t).and_utc(), latitude_deg, longitude_deg)
    }
}
