//! Whole-sign house charts, house lords, and multi-division assembly.
//!
//! This crate turns one set of sidereal longitudes into the full chart
//! payload the service layer serves:
//! - [`bhava::build_chart`] places the ascendant marker and all 9 grahas
//!   into 12 whole-sign houses for any division count
//! - [`lords::resolve_lords`] finds each house's ruling planet and the
//!   house that ruler occupies
//! - [`kundali::kundali_for_birth`] orchestrates both across the
//!   requested divisional systems and produces the serializable
//!   [`kundali::ChartResult`]

pub mod bhava;
pub mod chart_types;
pub mod error;
pub mod kundali;
pub mod lords;

pub use bhava::build_chart;
pub use chart_types::{BhavaChart, GrahaLongitudes, HouseLordEntry, LordPlacement, Occupant};
pub use error::ChartError;
pub use kundali::{ChartResult, DivisionChart, PlanetDetail, kundali_for_birth};
pub use lords::{planet_house_index, resolve_lords};
