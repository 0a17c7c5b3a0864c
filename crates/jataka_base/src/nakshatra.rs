//! Nakshatra (lunar mansion) and pada resolution.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each. Each nakshatra has 4 padas (quarters) of
//! 3 deg 20'. Nakshatra placement depends only on the D1 longitude;
//! divisional charts never change it.

use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// The 27 nakshatras from Ashwini to Revati (uniform 13 deg 20' each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashirsha,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashirsha,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Name of the nakshatra. These are the wire spellings the chart
    /// output uses.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashirsha => "Mrigashirsha",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishta => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS
    }
}

/// Result of a nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

/// Determine nakshatra and pada from sidereal ecliptic longitude.
///
/// Each nakshatra spans 13 deg 20' (13.3333... deg). Each pada spans
/// 3 deg 20'. The top edge (longitude approaching 360) is clamped so the
/// index never exceeds 26 and the pada never exceeds 4.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let nak_idx = (lon / NAKSHATRA_SPAN).floor() as u8;
    let nak_idx = nak_idx.min(26);
    let degrees_in_nakshatra = lon - (nak_idx as f64) * NAKSHATRA_SPAN;
    let pada_idx = (degrees_in_nakshatra / PADA_SPAN).floor() as u8;
    let pada = pada_idx.min(3) + 1; // 1-based

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[nak_idx as usize],
        nakshatra_index: nak_idx,
        pada,
        degrees_in_nakshatra,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_nakshatras_count() {
        assert_eq!(ALL_NAKSHATRAS.len(), 27);
    }

    #[test]
    fn nakshatra_indices_sequential() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
        }
    }

    #[test]
    fn nakshatra_names_nonempty() {
        for n in ALL_NAKSHATRAS {
            assert!(!n.name().is_empty());
        }
    }

    #[test]
    fn nakshatra_span_correct() {
        assert!((NAKSHATRA_SPAN - 13.333_333_333_333_334).abs() < 1e-10);
        assert!((PADA_SPAN - 3.333_333_333_333_333_5).abs() < 1e-10);
    }

    #[test]
    fn nakshatra_at_0() {
        let info = nakshatra_from_longitude(0.0);
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.nakshatra_index, 0);
        assert_eq!(info.pada, 1);
        assert!(info.degrees_in_nakshatra.abs() < 1e-10);
    }

    #[test]
    fn nakshatra_all_boundaries() {
        for i in 0..27u8 {
            let lon = i as f64 * NAKSHATRA_SPAN;
            let info = nakshatra_from_longitude(lon);
            assert_eq!(info.nakshatra_index, i, "boundary at nakshatra {i}");
            assert_eq!(info.pada, 1, "pada at boundary of nakshatra {i}");
        }
    }

    #[test]
    fn nakshatra_padas() {
        let info = nakshatra_from_longitude(0.0);
        assert_eq!(info.pada, 1);

        let info = nakshatra_from_longitude(PADA_SPAN + 0.1);
        assert_eq!(info.pada, 2);

        let info = nakshatra_from_longitude(2.0 * PADA_SPAN + 0.1);
        assert_eq!(info.pada, 3);

        let info = nakshatra_from_longitude(3.0 * PADA_SPAN + 0.1);
        assert_eq!(info.pada, 4);
    }

    #[test]
    fn nakshatra_pada_range() {
        let mut lon = 0.0;
        while lon < 360.0 {
            let info = nakshatra_from_longitude(lon);
            assert!(info.nakshatra_index <= 26, "index at {lon}");
            assert!((1..=4).contains(&info.pada), "pada at {lon}");
            lon += 0.37;
        }
    }

    #[test]
    fn nakshatra_wrap() {
        let info = nakshatra_from_longitude(361.0);
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert!((info.degrees_in_nakshatra - 1.0).abs() < 1e-10);
    }

    #[test]
    fn nakshatra_negative() {
        // -1 -> 359 deg → Revati (starts at 346.667)
        let info = nakshatra_from_longitude(-1.0);
        assert_eq!(info.nakshatra, Nakshatra::Revati);
    }

    #[test]
    fn nakshatra_top_edge() {
        let info = nakshatra_from_longitude(359.99);
        assert_eq!(info.nakshatra, Nakshatra::Revati);
        assert_eq!(info.nakshatra_index, 26);
        assert_eq!(info.pada, 4);
    }

    #[test]
    fn nakshatra_mula() {
        // Mula is index 18, starts at 18*13.333 = 240 deg
        let info = nakshatra_from_longitude(245.0);
        assert_eq!(info.nakshatra, Nakshatra::Mula);
        assert_eq!(info.nakshatra_index, 18);
    }
}
