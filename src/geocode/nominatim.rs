//! Nominatim reverse-geocoding provider (OpenStreetMap)
//!
//! Uses the free Nominatim API.
//! Rate limit: 1 request per second (enforced by User-Agent requirement)

use crate::config::Config;
use crate::constants::api::NOMINATIM_URL;
use crate::error::{Error, Result};
use crate::geocode::{ProviderAddress, ReverseGeocode};
use crate::location::Coordinate;
use serde::Deserialize;

const USER_AGENT: &str = "curbside-core/0.1.0";

/// Nominatim reverse-geocoding provider
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: reqwest::Client,
    base_url: String,
}

/// Nominatim reverse response (format=jsonv2, addressdetails=1)
#[derive(Debug, Deserialize)]
struct NominatimReverseResult {
    name: Option<String>,
    address: Option<NominatimAddress>,
    /// Present instead of the other fields when nothing is at the coordinate
    error: Option<String>,
}

/// Address details object of a Nominatim response
#[derive(Debug, Default, Deserialize)]
struct NominatimAddress {
    road: Option<String>,
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    state: Option<String>,
    postcode: Option<String>,
}

impl NominatimGeocoder {
    /// Create a provider against the public Nominatim instance
    pub fn new() -> Self {
        Self::with_options(NOMINATIM_URL, USER_AGENT)
    }

    /// Create a provider from application config
    pub fn from_config(config: &Config) -> Self {
        Self::with_options(&config.geocoder.base_url, &config.geocoder.user_agent)
    }

    /// Create a provider against a specific endpoint (self-hosted or test)
    pub fn with_options(base_url: &str, user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for NominatimGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<NominatimReverseResult> for ProviderAddress {
    fn from(result: NominatimReverseResult) -> Self {
        let address = result.address.unwrap_or_default();
        // Nominatim reports exactly one of city/town/village per place
        let city = address.city.or(address.town).or(address.village);

        Self {
            name: result.name.filter(|n| !n.is_empty()),
            street: address.road,
            city,
            region: address.state,
            postal_code: address.postcode,
        }
    }
}

impl ReverseGeocode for NominatimGeocoder {
    async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<Vec<ProviderAddress>> {
        let url = format!(
            "{}/reverse?lat={}&lon={}&format=jsonv2&addressdetails=1",
            self.base_url, coordinate.latitude, coordinate.longitude
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Geocoding(format!("Nominatim request failed: {}", e)))?;

        if !response.status().is_success() {
            if response.status() == reqwest::StatusCode::NOT_FOUND {
                return Ok(Vec::new());
            }
            return Err(Error::Geocoding(format!(
                "Nominatim returned status: {}",
                response.status()
            )));
        }

        let result: NominatimReverseResult = response
            .json()
            .await
            .map_err(|e| Error::Geocoding(format!("Failed to parse Nominatim response: {}", e)))?;

        // "Unable to geocode" arrives as a 200 with an error body
        if result.error.is_some() {
            return Ok(Vec::new());
        }

        Ok(vec![ProviderAddress::from(result)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geocoder_creation() {
        let geocoder = NominatimGeocoder::new();
        assert!(format!("{:?}", geocoder).contains("NominatimGeocoder"));
        assert_eq!(geocoder.base_url, NOMINATIM_URL);
    }

    #[test]
    fn test_with_options_strips_trailing_slash() {
        let geocoder = NominatimGeocoder::with_options("http://localhost:8080/", "test/1.0");
        assert_eq!(geocoder.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_response_mapping() {
        let body = r#"{
            "name": "Wicker Park Fieldhouse",
            "address": {
                "road": "North Damen Avenue",
                "city": "Chicago",
                "state": "Illinois",
                "postcode": "60622"
            }
        }"#;

        let result: NominatimReverseResult = serde_json::from_str(body).unwrap();
        let address = ProviderAddress::from(result);

        assert_eq!(address.name.as_deref(), Some("Wicker Park Fieldhouse"));
        assert_eq!(address.street.as_deref(), Some("North Damen Avenue"));
        assert_eq!(address.city.as_deref(), Some("Chicago"));
        assert_eq!(address.region.as_deref(), Some("Illinois"));
        assert_eq!(address.postal_code.as_deref(), Some("60622"));
    }

    #[test]
    fn test_response_mapping_falls_back_to_town_then_village() {
        let body = r#"{
            "name": "",
            "address": { "town": "Galena", "state": "Illinois" }
        }"#;
        let result: NominatimReverseResult = serde_json::from_str(body).unwrap();
        let address = ProviderAddress::from(result);

        assert_eq!(address.name, None);
        assert_eq!(address.city.as_deref(), Some("Galena"));

        let body = r#"{
            "address": { "village": "Bishop Hill" }
        }"#;
        let result: NominatimReverseResult = serde_json::from_str(body).unwrap();
        let address = ProviderAddress::from(result);

        assert_eq!(address.city.as_deref(), Some("Bishop Hill"));
    }

    #[test]
    fn test_error_body_parses() {
        let body = r#"{"error": "Unable to geocode"}"#;
        let result: NominatimReverseResult = serde_json::from_str(body).unwrap();
        assert!(result.error.is_some());
        assert!(result.address.is_none());
    }
}
