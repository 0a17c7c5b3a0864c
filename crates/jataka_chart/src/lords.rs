//! House lordship resolution.
//!
//! Each house's sign has a traditional ruler; the interesting question
//! is which house that ruler occupies in the same chart. A reverse
//! index (graha → house) is built once per chart, so resolving all 12
//! houses costs one pass over the occupants instead of 12 scans.

use jataka_base::rashi_lord;

use crate::chart_types::{BhavaChart, HouseLordEntry, LordPlacement, Occupant};

/// Build the graha → house reverse index for a chart, indexed by
/// `Graha::index()`. A slot is None only if that graha never appears
/// in the chart.
pub fn planet_house_index(chart: &BhavaChart) -> [Option<u8>; 9] {
    let mut index = [None; 9];
    for (house_idx, occupants) in chart.houses.iter().enumerate() {
        for occupant in occupants {
            if let Occupant::Graha(g) = occupant {
                let slot = &mut index[g.index() as usize];
                if slot.is_none() {
                    *slot = Some(house_idx as u8 + 1);
                }
            }
        }
    }
    index
}

/// Resolve the lord of every house and the house that lord occupies.
///
/// Index 0 of the result is house 1. An absent ruler resolves to
/// [`LordPlacement::NotFound`] rather than an error; with all 9 grahas
/// placed this never happens for the seven classical rulers.
pub fn resolve_lords(chart: &BhavaChart) -> [HouseLordEntry; 12] {
    let index = planet_house_index(chart);

    std::array::from_fn(|i| {
        let rashi = chart.house_sign(i as u8 + 1);
        let lord = rashi_lord(rashi);
        let placement = match index[lord.index() as usize] {
            Some(house) => LordPlacement::House(house),
            None => LordPlacement::NotFound,
        };
        HouseLordEntry {
            rashi,
            lord,
            placement,
        }
    })
}
