//! Shared angle utilities for chart calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Sidereal longitude from a tropical longitude and an ayanamsha value.
///
/// `sidereal = (tropical - ayanamsha) mod 360`. This is the only place
/// the tropical-to-sidereal correction lives; the ephemeris collaborator
/// supplies the ayanamsha but never applies it.
pub fn sidereal_from_tropical(tropical_deg: f64, ayanamsha_deg: f64) -> f64 {
    normalize_360(tropical_deg - ayanamsha_deg)
}
