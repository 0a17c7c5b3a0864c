//! Ephemeris collaborator boundary for chart assembly.
//!
//! The chart engine never computes planetary positions itself. It asks
//! an [`EphemerisSource`] for one [`EphemerisSample`] per request: the
//! tropical ascendant longitude, the ayanamsha value, and sidereal
//! longitudes for the 8 physically distinct bodies (Sun through Saturn
//! plus the lunar node used for Rahu). Everything downstream (the
//! sidereal correction, Ketu derivation, sign/house/nakshatra math)
//! happens on the chart side of this boundary.
//!
//! Birth inputs are validated here, before any computation starts:
//! out-of-range coordinates or unparseable instants never reach the
//! core.

pub mod birth;
pub mod error;
pub mod source;

pub use birth::BirthInput;
pub use error::{EphemerisError, ValidationError};
pub use source::{EphemerisSample, EphemerisSource, FixedEphemeris};
