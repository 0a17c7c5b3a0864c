//! Whole-sign house chart construction.
//!
//! One sign equals one house: a graha whose divisional sign matches the
//! lagna sign lands in house 1, the next sign in house 2, and so on.
//! The same division count is applied to the lagna and to every graha,
//! so a chart is internally consistent for its divisional system.

use jataka_base::{ALL_GRAHAS, varga_sign};

use crate::chart_types::{BhavaChart, GrahaLongitudes, Occupant};

/// Build the whole-sign house chart for one divisional system.
///
/// `lagna_sign` is the 0-based divisional sign of the ascendant,
/// already computed with the same `divisions`. House 1 is seeded with
/// the ascendant marker; every graha is then placed at
/// `((varga_sign(lon, N) - lagna_sign) mod 12) + 1`.
///
/// Grahas are inserted in `ALL_GRAHAS` order, so occupant lists are
/// deterministic. Every graha is placed exactly once.
pub fn build_chart(lagna_sign: u8, longitudes: &GrahaLongitudes, divisions: u16) -> BhavaChart {
    let mut houses: [Vec<Occupant>; 12] = Default::default();
    houses[0].push(Occupant::Ascendant);

    for graha in ALL_GRAHAS {
        let sign = varga_sign(longitudes.longitude(graha), divisions);
        let house = ((sign as i16 - lagna_sign as i16).rem_euclid(12)) as usize;
        houses[house].push(Occupant::Graha(graha));
    }

    BhavaChart {
        divisions,
        lagna_sign,
        houses,
    }
}
