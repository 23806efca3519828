//! curbside-core: location and time-window support for the Curbside client
//!
//! The Curbside app is a location-based marketplace for free items. Most of
//! the app is UI glued to hosted services; this crate holds the parts with
//! actual logic:
//!
//! - Defensive decoding of stored location payloads (including the legacy
//!   double-encoded shape) into one canonical record
//! - A memoizing reverse-geocode cache so repeated lookups for the same
//!   rounded coordinate never hit the provider twice
//! - An optional pickup time window whose start/end can never cross
//!
//! ## Quick Start
//!
//! ```rust
//! use curbside_core::location::payload::{parse, RawLocation};
//! use curbside_core::timewindow::TimeRangeController;
//!
//! // Decode a stored payload into the canonical record
//! let raw = RawLocation::from(r#"{"coordinate":{"latitude":41.88,"longitude":-87.63}}"#);
//! let record = parse(raw).expect("valid payload");
//! assert_eq!(record.coordinate.latitude, 41.88);
//!
//! // Drive an optional pickup window
//! let mut controller = TimeRangeController::new();
//! controller.enable();
//! let window = controller.window().unwrap();
//! assert!(window.start < window.end);
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod geocode;
pub mod location;
pub mod timewindow;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use geocode::{AddressResult, GeocodeCache, ProviderAddress, ReverseGeocode};
pub use location::payload::RawLocation;
pub use location::{Coordinate, LocationRecord};
pub use timewindow::{TimeRangeController, TimeWindow};
