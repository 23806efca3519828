//! Memoizing reverse-geocode cache
//!
//! Coordinates are quantized to a fixed-precision key; the first lookup for
//! a key goes to the provider, every later one is served from memory. The
//! store lives for the process lifetime and is never persisted.

use crate::constants::geo::CACHE_KEY_DECIMALS;
use crate::geocode::{AddressResult, ReverseGeocode};
use crate::location::Coordinate;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Quantize a coordinate into a cache key
///
/// Two coordinates that round to the same key are treated as the same place.
pub fn cache_key(coordinate: Coordinate) -> String {
    format!(
        "{:.prec$},{:.prec$}",
        coordinate.latitude,
        coordinate.longitude,
        prec = CACHE_KEY_DECIMALS
    )
}

/// Reverse-geocode cache over a provider
///
/// Single-writer: one instance is constructed per process and injected into
/// the screens that display addresses.
#[derive(Debug)]
pub struct GeocodeCache<G> {
    provider: G,
    store: HashMap<String, AddressResult>,
}

impl<G: ReverseGeocode> GeocodeCache<G> {
    /// Create a cache over the given provider
    pub fn new(provider: G) -> Self {
        Self {
            provider,
            store: HashMap::new(),
        }
    }

    /// Resolve a coordinate to a display address
    ///
    /// Cache hits return without touching the provider. Misses query the
    /// provider with the exact (unrounded) coordinate and memoize the result.
    /// Provider failures and empty results both come back as `None`: an
    /// address is a convenience, not a requirement, so neither is surfaced
    /// as an error. Empty results are not cached, so a transient empty
    /// response is retried on the next call.
    pub async fn resolve(&mut self, coordinate: Coordinate) -> Option<AddressResult> {
        let key = cache_key(coordinate);

        if let Some(hit) = self.store.get(&key) {
            debug!("geocode cache hit for {}", key);
            return Some(hit.clone());
        }

        debug!("geocode cache miss for {}", key);
        let records = match self.provider.reverse_geocode(coordinate).await {
            Ok(records) => records,
            Err(err) => {
                warn!("reverse geocoding failed for {}: {}", key, err);
                return None;
            }
        };

        let first = records.into_iter().next()?;
        let address = AddressResult::from_provider(first);
        self.store.insert(key, address.clone());
        Some(address)
    }

    /// Empty the cache
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Number of distinct rounded locations cached
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Resolve only if the coordinate is in range
    ///
    /// For callers holding a coordinate that never went through the payload
    /// parser.
    pub async fn resolve_checked(&mut self, coordinate: Coordinate) -> Option<AddressResult> {
        if !coordinate.is_valid() {
            return None;
        }
        self.resolve(coordinate).await
    }
}
