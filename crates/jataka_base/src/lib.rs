//! Pure-math building blocks for Vedic divisional charts.
//!
//! This crate provides:
//! - Rashi (zodiac sign) resolution from sidereal longitude
//! - Nakshatra (lunar mansion) and pada resolution
//! - Graha (planet) enum and rashi lordship table
//! - Generalized varga (divisional sign) arithmetic for any D-N chart
//!
//! All functions are total over f64 longitudes: inputs are normalized
//! to [0, 360) and boundary cases are clamped. Nothing here touches an
//! ephemeris or performs I/O.

pub mod graha;
pub mod nakshatra;
pub mod rashi;
pub mod util;
pub mod varga;

pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, rashi_lord, rashi_lord_by_index};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, Rashi, RashiInfo, rashi_from_longitude};
pub use util::{normalize_360, sidereal_from_tropical};
pub use varga::{ALL_VARGAS, Varga, varga_lagna_sign, varga_sign};
