use super::service::{AutocompleteProvider, Geocoder, Geolocator};
use crate::sdk::error::ProviderError;
use crate::sdk::model::{LatLng, Place, Suggestion};

/// Stand-in used when no Google API key is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflinePlaces;

impl OfflinePlaces {
    fn unavailable() -> ProviderError {
        ProviderError::Unavailable("no maps API key configured".to_string())
    }
}

impl AutocompleteProvider for OfflinePlaces {
    fn predictions(&self, _query: &str, _country: &str) -> Result<Vec<Suggestion>, ProviderError> {
        Err(Self::unavailable())
    }

    fn place_details(&self, _place_id: &str) -> Result<Place, ProviderError> {
        Err(Self::unavailable())
    }
}

impl Geocoder for OfflinePlaces {
    fn reverse_geocode(&self, _at: LatLng) -> Result<String, ProviderError> {
        Err(Self::unavailable())
    }

    fn geocode(&self, _address: &str) -> Result<LatLng, ProviderError> {
        Err(Self::unavailable())
    }
}

/// Device position supplied by the host, e.g. from command-line flags.
/// `None` behaves like a denied permission prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedGeolocator {
    pub position: Option<LatLng>,
}

impl Geolocator for FixedGeolocator {
    fn current_position(&self) -> Result<LatLng, ProviderError> {
        self.position.ok_or(ProviderError::PermissionDenied)
    }
}
