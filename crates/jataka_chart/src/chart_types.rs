//! Types for house charts and lordship results.

use serde::{Serialize, Serializer};

use jataka_base::{Graha, Rashi, normalize_360};
use jataka_ephem::EphemerisSample;

/// Sidereal longitudes of all 9 grahas, indexed by `Graha::index()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrahaLongitudes {
    /// Degrees in [0, 360), one per graha.
    pub longitudes: [f64; 9],
}

impl GrahaLongitudes {
    /// Complete a 9-graha set from an ephemeris sample, deriving Ketu
    /// as `(Rahu + 180) mod 360`. This is the only place Ketu's
    /// longitude is ever produced.
    pub fn from_sample(sample: &EphemerisSample) -> Self {
        let mut longitudes = [0.0f64; 9];
        for (i, &lon) in sample.body_longitudes_deg.iter().enumerate() {
            longitudes[i] = normalize_360(lon);
        }
        let rahu = longitudes[Graha::Rahu.index() as usize];
        longitudes[Graha::Ketu.index() as usize] = normalize_360(rahu + 180.0);
        Self { longitudes }
    }

    /// Get the sidereal longitude for a specific graha.
    pub fn longitude(&self, graha: Graha) -> f64 {
        self.longitudes[graha.index() as usize]
    }
}

/// One slot in a house's occupant list: the ascendant marker or a graha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupant {
    Ascendant,
    Graha(Graha),
}

impl Occupant {
    /// Wire label: "Ascendant" or the graha's English name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ascendant => "Ascendant",
            Self::Graha(g) => g.english_name(),
        }
    }
}

impl Serialize for Occupant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A whole-sign house chart for one divisional system.
///
/// Invariants: house 1 always holds the ascendant marker, and the 9
/// grahas contribute exactly 9 occupancies across the 12 houses.
#[derive(Debug, Clone, PartialEq)]
pub struct BhavaChart {
    /// Division count this chart was built with (1 for D1, 9 for D9, ...).
    pub divisions: u16,
    /// 0-based rashi index of the lagna in this division.
    pub lagna_sign: u8,
    /// Occupant lists for houses 1-12 (index 0 = house 1).
    pub houses: [Vec<Occupant>; 12],
}

impl BhavaChart {
    /// Occupants of a house. `number` must be 1-12.
    pub fn house(&self, number: u8) -> &[Occupant] {
        debug_assert!((1..=12).contains(&number), "house number {number}");
        &self.houses[(number - 1) as usize]
    }

    /// 0-based rashi index occupying a house under the whole-sign
    /// scheme: house 1 carries the lagna sign, each next house the
    /// next sign. `number` must be 1-12.
    pub fn house_sign(&self, number: u8) -> Rashi {
        debug_assert!((1..=12).contains(&number), "house number {number}");
        Rashi::from_index((self.lagna_sign + number - 1) % 12)
    }

    /// Total graha occupancies across all houses (the ascendant marker
    /// is not counted).
    pub fn planet_count(&self) -> usize {
        self.houses
            .iter()
            .flatten()
            .filter(|o| matches!(o, Occupant::Graha(_)))
            .count()
    }
}

/// Where a house's ruling planet sits in the same chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LordPlacement {
    /// House number 1-12.
    House(u8),
    /// The ruler is absent from the chart. Degenerate but valid: it
    /// cannot occur for the seven classical rulers, since every graha
    /// is always placed.
    NotFound,
}

impl Serialize for LordPlacement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::House(h) => serializer.serialize_u8(*h),
            Self::NotFound => serializer.serialize_str("Not Found"),
        }
    }
}

/// Lordship resolution for one house.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HouseLordEntry {
    /// The sign occupying the house.
    pub rashi: Rashi,
    /// The sign's traditional ruler.
    pub lord: Graha,
    /// The house where the ruler currently sits.
    pub placement: LordPlacement,
}
