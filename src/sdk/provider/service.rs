use super::backend::RouteSearchRequest;
use crate::sdk::error::{NetworkError, ProviderError};
use crate::sdk::model::{LatLng, Place, RouteOption, Suggestion};

pub trait AutocompleteProvider: Send + Sync {
    /// Predictions for a partial query, restricted to one country.
    fn predictions(&self, query: &str, country: &str) -> Result<Vec<Suggestion>, ProviderError>;

    /// Full geometry and address for a prediction.
    fn place_details(&self, place_id: &str) -> Result<Place, ProviderError>;
}

pub trait Geocoder: Send + Sync {
    fn reverse_geocode(&self, at: LatLng) -> Result<String, ProviderError>;

    fn geocode(&self, address: &str) -> Result<LatLng, ProviderError>;
}

pub trait Geolocator: Send + Sync {
    fn current_position(&self) -> Result<LatLng, ProviderError>;
}

pub trait RouteSearch: Send + Sync {
    fn search(&self, request: &RouteSearchRequest) -> Result<Vec<RouteOption>, NetworkError>;
}
