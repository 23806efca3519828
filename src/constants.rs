//! Centralized constants for the curbside-core crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Geographic constants
pub mod geo {
    /// Decimal digits kept when quantizing a coordinate into a cache key.
    ///
    /// Six decimals is roughly 0.11 m of resolution: two coordinates that
    /// round to the same key are treated as the same place for geocoding.
    pub const CACHE_KEY_DECIMALS: usize = 6;

    /// Valid latitude range in degrees
    pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

    /// Valid longitude range in degrees
    pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);
}

/// External API endpoints
pub mod api {
    /// OpenStreetMap Nominatim geocoding API
    pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
}

/// Time window settings
pub mod time {
    /// Window length when the time picker is first enabled (end = start + this)
    pub const INITIAL_WINDOW_MINUTES: i64 = 60;

    /// Smallest gap kept between start and end when an edit is clamped
    pub const MIN_WINDOW_GAP_MINUTES: i64 = 1;
}
