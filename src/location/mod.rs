//! Canonical location types
//!
//! Every consumer in the app works with `LocationRecord`; anything a storage
//! payload cannot be reduced to is treated as "no location" (see `payload`).

pub mod payload;

use crate::constants::geo::{LATITUDE_RANGE, LONGITUDE_RANGE};
use serde::{Deserialize, Serialize};

/// A geographic coordinate (latitude, longitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Validate that the coordinate is within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> crate::error::Result<()> {
        let (lat_min, lat_max) = LATITUDE_RANGE;
        if !self.latitude.is_finite() || self.latitude < lat_min || self.latitude > lat_max {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [{}, {}]",
                self.latitude, lat_min, lat_max
            )));
        }
        let (lng_min, lng_max) = LONGITUDE_RANGE;
        if !self.longitude.is_finite() || self.longitude < lng_min || self.longitude > lng_max {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [{}, {}]",
                self.longitude, lng_min, lng_max
            )));
        }
        Ok(())
    }

    /// Check validity without caring about the reason
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// The canonical, validated in-memory representation of a location
///
/// This is the one shape every screen and the persistence layer agree on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub coordinate: Coordinate,
}

impl LocationRecord {
    /// Create a record from an already-validated coordinate
    pub fn new(coordinate: Coordinate) -> Self {
        Self { coordinate }
    }
}
