//! Multi-division chart assembly and the serializable result payload.
//!
//! One call samples the ephemeris, applies the sidereal correction to
//! the ascendant, derives Ketu, and builds chart + lordship output for
//! every requested divisional system. The planet-detail table (sign,
//! longitude, nakshatra, pada) is computed once from D1 longitudes and
//! shared across divisions; divisional charts never change a nakshatra.
//!
//! The whole pass is pure and deterministic: identical inputs produce
//! identical output, so there are no retries and no caching.

use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use jataka_base::{
    ALL_GRAHAS, Rashi, Varga, nakshatra_from_longitude, rashi_from_longitude,
    sidereal_from_tropical, varga_lagna_sign,
};
use jataka_ephem::{BirthInput, EphemerisSource};

use crate::bhava::build_chart;
use crate::chart_types::{BhavaChart, GrahaLongitudes, HouseLordEntry, LordPlacement};
use crate::error::ChartError;
use crate::lords::resolve_lords;

/// One divisional chart, shaped for the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionChart {
    /// English name of this division's lagna sign.
    pub ascendant: String,
    /// House number → occupant labels ("Ascendant" first in house 1).
    pub chart: BTreeMap<u8, Vec<String>>,
    /// House number → lordship entry.
    pub lords: BTreeMap<u8, LordDetail>,
}

/// Wire form of one house's lordship resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LordDetail {
    /// English name of the sign occupying the house.
    pub sign: String,
    /// English name of the ruling planet.
    pub lord: String,
    /// House number the ruler sits in, or "Not Found".
    pub lord_house: LordPlacement,
}

impl DivisionChart {
    fn from_parts(chart: &BhavaChart, lords: &[HouseLordEntry; 12]) -> Self {
        let mut chart_map = BTreeMap::new();
        for house in 1..=12u8 {
            let labels = chart
                .house(house)
                .iter()
                .map(|o| o.label().to_string())
                .collect();
            chart_map.insert(house, labels);
        }

        let mut lord_map = BTreeMap::new();
        for (i, entry) in lords.iter().enumerate() {
            lord_map.insert(
                i as u8 + 1,
                LordDetail {
                    sign: entry.rashi.english_name().to_string(),
                    lord: entry.lord.english_name().to_string(),
                    lord_house: entry.placement,
                },
            );
        }

        Self {
            ascendant: Rashi::from_index(chart.lagna_sign).english_name().to_string(),
            chart: chart_map,
            lords: lord_map,
        }
    }

    /// Occupant labels for one house. `number` must be 1-12.
    pub fn house(&self, number: u8) -> &[String] {
        debug_assert!((1..=12).contains(&number), "house number {number}");
        &self.chart[&number]
    }
}

/// Per-planet detail shared across all divisions, computed from D1
/// longitudes only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetDetail {
    /// English name of the D1 sign.
    pub sign: String,
    /// Sidereal longitude in degrees [0, 360).
    pub degree: f64,
    /// Nakshatra name.
    pub nakshatra: String,
    /// Degrees into the nakshatra [0, 13.333...).
    pub nak_deg: f64,
    /// Pada (quarter), 1-4.
    pub pada: u8,
}

/// Complete multi-division chart payload.
///
/// Serializes to the service contract: division labels ("d1", "d9", ...)
/// at the top level beside the shared `planets` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    /// Division label → chart.
    #[serde(flatten)]
    pub charts: BTreeMap<String, DivisionChart>,
    /// English planet name → detail record.
    pub planets: BTreeMap<String, PlanetDetail>,
}

impl ChartResult {
    /// Look up one division by its wire label.
    pub fn division(&self, label: &str) -> Option<&DivisionChart> {
        self.charts.get(label)
    }
}

/// Assemble charts for every requested divisional system.
///
/// Samples the ephemeris once, applies
/// `sidereal = (tropical - ayanamsha) mod 360` to the ascendant, and
/// derives Ketu from Rahu. Each division then gets its own lagna sign
/// (from the D1 ascendant longitude), house chart, and lordship table.
pub fn kundali_for_birth(
    source: &impl EphemerisSource,
    birth: &BirthInput,
    vargas: &[Varga],
) -> Result<ChartResult, ChartError> {
    let sample = source.sample(birth)?;
    let asc_sidereal =
        sidereal_from_tropical(sample.tropical_ascendant_deg, sample.ayanamsha_deg);
    let longitudes = GrahaLongitudes::from_sample(&sample);

    debug!(
        "assembling {} division chart(s), sidereal ascendant {asc_sidereal:.4} deg",
        vargas.len()
    );

    let mut charts = BTreeMap::new();
    for &varga in vargas {
        let lagna_sign = varga_lagna_sign(asc_sidereal, varga);
        let chart = build_chart(lagna_sign, &longitudes, varga.divisions());
        let lords = resolve_lords(&chart);
        charts.insert(
            varga.label().to_string(),
            DivisionChart::from_parts(&chart, &lords),
        );
    }

    Ok(ChartResult {
        charts,
        planets: planet_details(&longitudes),
    })
}

/// Per-planet sign/nakshatra table from D1 longitudes.
fn planet_details(longitudes: &GrahaLongitudes) -> BTreeMap<String, PlanetDetail> {
    let mut planets = BTreeMap::new();
    for graha in ALL_GRAHAS {
        let lon = longitudes.longitude(graha);
        let rashi = rashi_from_longitude(lon);
        let nak = nakshatra_from_longitude(lon);
        planets.insert(
            graha.english_name().to_string(),
            PlanetDetail {
                sign: rashi.rashi.english_name().to_string(),
                degree: lon,
                nakshatra: nak.nakshatra.name().to_string(),
                nak_deg: nak.degrees_in_nakshatra,
                pada: nak.pada,
            },
        );
    }
    planets
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jataka_base::Graha;
    use jataka_ephem::{EphemerisSample, FixedEphemeris};

    fn birth() -> BirthInput {
        BirthInput::new(Utc::now(), 19.3919, 72.8397).expect("valid birth")
    }

    fn fixed_source() -> FixedEphemeris {
        FixedEphemeris::new(EphemerisSample {
            // Sidereal ascendant = 120 - 24 = 96 deg → Karka (3)
            tropical_ascendant_deg: 120.0,
            ayanamsha_deg: 24.0,
            body_longitudes_deg: [135.0, 15.0, 45.0, 75.0, 105.0, 165.0, 195.0, 225.0],
        })
    }

    #[test]
    fn d1_ascendant_sign() {
        let result =
            kundali_for_birth(&fixed_source(), &birth(), &[Varga::Rashi]).expect("assembly");
        let d1 = result.division("d1").expect("d1 present");
        assert_eq!(d1.ascendant, "Cancer");
        assert_eq!(d1.house(1)[0], "Ascendant");
    }

    #[test]
    #[should_panic]
    fn division_house_out_of_range_rejected() {
        let result =
            kundali_for_birth(&fixed_source(), &birth(), &[Varga::Rashi]).expect("assembly");
        let _ = result.division("d1").expect("d1").house(13);
    }

    #[test]
    fn nine_placements_per_division() {
        let vargas = [Varga::Rashi, Varga::Saptamsha, Varga::Navamsha, Varga::Vimshamsha];
        let result = kundali_for_birth(&fixed_source(), &birth(), &vargas).expect("assembly");
        for varga in vargas {
            let division = result.division(varga.label()).expect(varga.label());
            let placements: usize = division
                .chart
                .values()
                .map(|v| v.iter().filter(|s| *s != "Ascendant").count())
                .sum();
            assert_eq!(placements, 9, "{}", varga.label());
        }
    }

    #[test]
    fn planets_table_has_all_nine() {
        let result =
            kundali_for_birth(&fixed_source(), &birth(), &[Varga::Rashi]).expect("assembly");
        assert_eq!(result.planets.len(), 9);
        for graha in ALL_GRAHAS {
            assert!(result.planets.contains_key(graha.english_name()));
        }
    }

    #[test]
    fn ketu_detail_opposes_rahu() {
        let result =
            kundali_for_birth(&fixed_source(), &birth(), &[Varga::Rashi]).expect("assembly");
        let rahu = &result.planets[Graha::Rahu.english_name()];
        let ketu = &result.planets[Graha::Ketu.english_name()];
        assert!((ketu.degree - (rahu.degree + 180.0) % 360.0).abs() < 1e-12);
    }

    #[test]
    fn assembly_is_idempotent() {
        let a = kundali_for_birth(&fixed_source(), &birth(), &[Varga::Navamsha]).expect("a");
        let b = kundali_for_birth(&fixed_source(), &birth(), &[Varga::Navamsha]).expect("b");
        assert_eq!(a, b);
    }

    #[test]
    fn lords_reference_real_houses() {
        let result =
            kundali_for_birth(&fixed_source(), &birth(), &[Varga::Rashi]).expect("assembly");
        let d1 = result.division("d1").expect("d1");
        for (house, detail) in &d1.lords {
            match detail.lord_house {
                LordPlacement::House(h) => {
                    assert!(
                        d1.house(h).iter().any(|s| *s == detail.lord),
                        "house {house}: {} not in house {h}",
                        detail.lord
                    );
                }
                LordPlacement::NotFound => panic!("house {house}: classical ruler missing"),
            }
        }
    }
}
