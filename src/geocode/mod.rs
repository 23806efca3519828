//! Reverse geocoding
//!
//! Turns coordinates into human-readable addresses. The cache front-end
//! guarantees at most one provider call per distinct rounded location for
//! the lifetime of the process.

pub mod cache;
pub mod nominatim;

pub use cache::GeocodeCache;

use crate::error::Result;
use crate::location::Coordinate;
use serde::{Deserialize, Serialize};

/// Locality fields as returned by a geocoding provider
///
/// All fields optional; providers rarely fill every one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderAddress {
    /// Point-of-interest name (shop, building, landmark)
    pub name: Option<String>,
    /// Street name
    pub street: Option<String>,
    /// City or town
    pub city: Option<String>,
    /// State, province, or region
    pub region: Option<String>,
    /// Postal code
    pub postal_code: Option<String>,
}

/// A resolved, display-ready address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressResult {
    /// Comma-joined locality fields, blanks filtered, most specific first
    pub display_name: String,
    /// Postal code, empty string when the provider has none
    pub postal_code: String,
}

impl AddressResult {
    /// Build a display address from provider fields
    ///
    /// Priority order: point-of-interest name, street, city, region.
    pub fn from_provider(address: ProviderAddress) -> Self {
        let display_name = [address.name, address.street, address.city, address.region]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            display_name,
            postal_code: address.postal_code.unwrap_or_default(),
        }
    }
}

impl std::fmt::Display for AddressResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

/// Trait for reverse-geocoding providers
pub trait ReverseGeocode: Send + Sync {
    /// Look up the addresses at a coordinate
    ///
    /// Returns provider records best-match first; an empty vec means the
    /// provider had nothing for this location.
    fn reverse_geocode(
        &self,
        coordinate: Coordinate,
    ) -> impl std::future::Future<Output = Result<Vec<ProviderAddress>>> + Send;
}

/// Get the default reverse-geocoding provider
pub fn get_geocoder() -> nominatim::NominatimGeocoder {
    nominatim::NominatimGeocoder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_joins_in_priority_order() {
        let result = AddressResult::from_provider(ProviderAddress {
            name: Some("Wicker Park Fieldhouse".to_string()),
            street: Some("N Damen Ave".to_string()),
            city: Some("Chicago".to_string()),
            region: Some("Illinois".to_string()),
            postal_code: Some("60622".to_string()),
        });

        assert_eq!(
            result.display_name,
            "Wicker Park Fieldhouse, N Damen Ave, Chicago, Illinois"
        );
        assert_eq!(result.postal_code, "60622");
    }

    #[test]
    fn test_display_name_filters_missing_and_blank_fields() {
        let result = AddressResult::from_provider(ProviderAddress {
            name: None,
            street: Some("".to_string()),
            city: Some("Chicago".to_string()),
            region: Some("Illinois".to_string()),
            postal_code: None,
        });

        assert_eq!(result.display_name, "Chicago, Illinois");
        assert_eq!(result.postal_code, "");
    }

    #[test]
    fn test_address_result_display() {
        let result = AddressResult {
            display_name: "Chicago, Illinois".to_string(),
            postal_code: "60622".to_string(),
        };
        assert_eq!(format!("{}", result), "Chicago, Illinois");
    }

    #[test]
    fn test_address_result_serialization() {
        let result = AddressResult {
            display_name: "Chicago, Illinois".to_string(),
            postal_code: "60622".to_string(),
        };

        let json = serde_json::to_string(&result).unwrap();
        let parsed: AddressResult = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, result);
    }
}
