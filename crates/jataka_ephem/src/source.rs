//! The `EphemerisSource` trait and its fixed-value implementation.

use serde::{Deserialize, Serialize};

use jataka_base::Graha;

use crate::birth::BirthInput;
use crate::error::EphemerisError;

/// Number of physically distinct bodies an ephemeris reports: the 7
/// classical planets plus the lunar node (Rahu). Ketu is never queried;
/// it is derived as Rahu + 180 downstream.
pub const EPHEMERIS_BODIES: usize = 8;

/// One ephemeris reading for a birth event.
///
/// The ascendant comes back tropical together with the ayanamsha; the
/// caller applies `(tropical - ayanamsha) mod 360` itself. Body
/// longitudes are already sidereal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EphemerisSample {
    /// Tropical ecliptic longitude of the ascendant, degrees.
    pub tropical_ascendant_deg: f64,
    /// Ayanamsha (tropical-to-sidereal offset), degrees.
    pub ayanamsha_deg: f64,
    /// Sidereal longitudes indexed by `Graha::index()` for the first
    /// 8 grahas (Surya..Shani, Rahu). No Ketu slot.
    pub body_longitudes_deg: [f64; EPHEMERIS_BODIES],
}

impl EphemerisSample {
    /// Sidereal longitude of a physically measured body.
    ///
    /// Returns None for Ketu, which has no slot of its own.
    pub fn body_longitude(&self, graha: Graha) -> Option<f64> {
        match graha {
            Graha::Ketu => None,
            _ => Some(self.body_longitudes_deg[graha.index() as usize]),
        }
    }
}

/// Provider of ephemeris samples. A real implementation wraps an
/// astronomical engine; tests and offline tools use [`FixedEphemeris`].
pub trait EphemerisSource {
    /// Sample the ephemeris for one birth event.
    fn sample(&self, birth: &BirthInput) -> Result<EphemerisSample, EphemerisError>;
}

/// A source that returns one precomputed sample regardless of the
/// birth event. Carries caller-supplied longitudes into the assembler;
/// also the test double.
#[derive(Debug, Clone, Copy)]
pub struct FixedEphemeris {
    sample: EphemerisSample,
}

impl FixedEphemeris {
    /// Wrap a precomputed sample.
    pub fn new(sample: EphemerisSample) -> Self {
        Self { sample }
    }
}

impl EphemerisSource for FixedEphemeris {
    fn sample(&self, _birth: &BirthInput) -> Result<EphemerisSample, EphemerisError> {
        Ok(self.sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample() -> EphemerisSample {
        EphemerisSample {
            tropical_ascendant_deg: 123.0,
            ayanamsha_deg: 23.85,
            body_longitudes_deg: [10.0, 40.0, 70.0, 100.0, 130.0, 160.0, 190.0, 220.0],
        }
    }

    #[test]
    fn body_longitude_by_graha() {
        let s = sample();
        assert_eq!(s.body_longitude(Graha::Surya), Some(10.0));
        assert_eq!(s.body_longitude(Graha::Shani), Some(190.0));
        assert_eq!(s.body_longitude(Graha::Rahu), Some(220.0));
    }

    #[test]
    fn ketu_has_no_slot() {
        assert_eq!(sample().body_longitude(Graha::Ketu), None);
    }

    #[test]
    fn fixed_source_echoes_sample() {
        let birth = BirthInput::new(Utc::now(), 0.0, 0.0).expect("valid birth");
        let source = FixedEphemeris::new(sample());
        let got = source.sample(&birth).expect("fixed source never fails");
        assert_eq!(got, sample());
    }
}
