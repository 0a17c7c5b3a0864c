//! Varga (divisional chart) sign calculation.
//!
//! A varga chart divides each 30-degree rashi into N equal parts and
//! remaps every part onto the 12 signs cyclically:
//!
//! ```text
//! sign    = floor(lon / 30)
//! deg_in  = lon mod 30
//! width   = 30 / N
//! div_idx = floor(deg_in / width)
//! result  = (sign * N + div_idx) mod 12
//! ```
//!
//! One routine, parameterized by the division count, covers D1, D7, D9,
//! D20 and any other N. With N = 1 it degenerates to plain rashi
//! resolution (div_idx is always 0).

use crate::util::normalize_360;

/// The divisional chart systems served to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Varga {
    /// D1, the basic birth chart.
    Rashi,
    /// D7, Saptamsha.
    Saptamsha,
    /// D9, Navamsha.
    Navamsha,
    /// D20, Vimshamsha.
    Vimshamsha,
}

/// All served vargas in ascending division order.
pub const ALL_VARGAS: [Varga; 4] = [
    Varga::Rashi,
    Varga::Saptamsha,
    Varga::Navamsha,
    Varga::Vimshamsha,
];

impl Varga {
    /// Number of divisions per rashi.
    pub const fn divisions(self) -> u16 {
        match self {
            Self::Rashi => 1,
            Self::Saptamsha => 7,
            Self::Navamsha => 9,
            Self::Vimshamsha => 20,
        }
    }

    /// Lowercase wire label ("d1", "d7", "d9", "d20") used as the JSON
    /// key for this chart.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rashi => "d1",
            Self::Saptamsha => "d7",
            Self::Navamsha => "d9",
            Self::Vimshamsha => "d20",
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rashi => "D1_Rashi",
            Self::Saptamsha => "D7_Saptamsha",
            Self::Navamsha => "D9_Navamsha",
            Self::Vimshamsha => "D20_Vimshamsha",
        }
    }

    /// Reverse lookup from D-number code.
    pub fn from_code(code: u16) -> Option<Varga> {
        match code {
            1 => Some(Self::Rashi),
            7 => Some(Self::Saptamsha),
            9 => Some(Self::Navamsha),
            20 => Some(Self::Vimshamsha),
            _ => None,
        }
    }

    /// Reverse lookup from a wire label ("d9" or "D9").
    pub fn from_label(label: &str) -> Option<Varga> {
        let rest = label.strip_prefix(['d', 'D'])?;
        Varga::from_code(rest.parse().ok()?)
    }
}

/// Divisional sign (0-based rashi index) for a sidereal longitude.
///
/// A `divisions` of 0 is treated as 1, so the call is total over u16.
/// The division index is clamped to N-1 against floating point edges at
/// the top of a sign, mirroring the rashi-index clamp at 360. The
/// product is taken in u32: `11 * u16::MAX` does not fit in u16.
pub fn varga_sign(sidereal_lon_deg: f64, divisions: u16) -> u8 {
    let divisions = divisions.max(1);
    let lon = normalize_360(sidereal_lon_deg);
    let rashi_idx = ((lon / 30.0).floor() as u16).min(11);
    let deg_in_rashi = lon - rashi_idx as f64 * 30.0;
    let width = 30.0 / divisions as f64;
    let div_idx = ((deg_in_rashi / width).floor() as u16).min(divisions - 1);
    ((rashi_idx as u32 * divisions as u32 + div_idx as u32) % 12) as u8
}

/// Divisional sign for a labeled varga system.
pub fn varga_lagna_sign(sidereal_lon_deg: f64, varga: Varga) -> u8 {
    varga_sign(sidereal_lon_deg, varga.divisions())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rashi::rashi_from_longitude;

    #[test]
    fn all_vargas_codes_round_trip() {
        for v in ALL_VARGAS {
            assert_eq!(Varga::from_code(v.divisions()), Some(v));
            assert_eq!(Varga::from_label(v.label()), Some(v));
        }
    }

    #[test]
    fn from_label_uppercase() {
        assert_eq!(Varga::from_label("D9"), Some(Varga::Navamsha));
        assert_eq!(Varga::from_label("D20"), Some(Varga::Vimshamsha));
    }

    #[test]
    fn from_label_rejects_garbage() {
        assert_eq!(Varga::from_label("x9"), None);
        assert_eq!(Varga::from_label("d"), None);
        assert_eq!(Varga::from_label("d13"), None);
        assert_eq!(Varga::from_label(""), None);
    }

    #[test]
    fn d1_degenerates_to_rashi() {
        let mut lon = 0.0;
        while lon < 360.0 {
            assert_eq!(
                varga_sign(lon, 1),
                rashi_from_longitude(lon).rashi_index,
                "at {lon} deg"
            );
            lon += 0.73;
        }
    }

    #[test]
    fn d9_at_15_deg_is_simha() {
        // sign 0, deg_in 15, width 30/9, div_idx 4 → (0*9+4) % 12 = 4
        assert_eq!(varga_sign(15.0, 9), 4);
    }

    #[test]
    fn d9_first_navamsha_of_mesha() {
        assert_eq!(varga_sign(0.0, 9), 0);
        assert_eq!(varga_sign(3.0, 9), 0); // still within first 3deg20'
        assert_eq!(varga_sign(3.4, 9), 1);
    }

    #[test]
    fn d7_matches_hand_computation() {
        // 100 deg: sign 3, deg_in 10, width 30/7, div_idx floor(10*7/30)=2
        // → (3*7+2) % 12 = 23 % 12 = 11
        assert_eq!(varga_sign(100.0, 7), 11);
    }

    #[test]
    fn d20_matches_hand_computation() {
        // 47.3 deg: sign 1, deg_in 17.3, width 1.5, div_idx 11
        // → (20+11) % 12 = 7
        assert_eq!(varga_sign(47.3, 20), 7);
    }

    #[test]
    fn zero_divisions_degenerates_to_d1() {
        for lon in [0.0, 45.5, 123.456, 359.99] {
            assert_eq!(varga_sign(lon, 0), varga_sign(lon, 1), "at {lon}");
        }
    }

    #[test]
    fn large_division_counts_stay_in_range() {
        // 11 * 5958 already exceeds u16; the product must be widened.
        // 330 deg: sign 11, div_idx 0 → (11*5958) % 12 = 65538 % 12 = 6
        assert_eq!(varga_sign(330.0, 5958), 6);
        for &n in &[5958u16, 10800, u16::MAX] {
            let mut lon = 0.0;
            while lon < 360.0 {
                assert!(varga_sign(lon, n) < 12, "N={n} at {lon}");
                lon += 7.31;
            }
        }
    }

    #[test]
    fn varga_sign_always_in_range() {
        for &n in &[1u16, 2, 3, 7, 9, 12, 20, 30] {
            let mut lon = 0.0;
            while lon < 360.0 {
                assert!(varga_sign(lon, n) < 12, "N={n} at {lon}");
                lon += 0.19;
            }
        }
    }

    #[test]
    fn varga_sign_top_edge() {
        // 359.999... must clamp both rashi and division indices
        assert_eq!(varga_sign(359.999_999, 9), (11 * 9 + 8) % 12);
        assert_eq!(varga_sign(360.0, 9), 0);
    }

    #[test]
    fn varga_lagna_sign_delegates() {
        assert_eq!(varga_lagna_sign(15.0, Varga::Navamsha), varga_sign(15.0, 9));
        assert_eq!(varga_lagna_sign(15.0, Varga::Rashi), 0);
    }
}
