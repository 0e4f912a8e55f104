use super::service::{AutocompleteProvider, Geocoder};
use super::types::{AutocompleteResponse, DetailsResponse, GeocodeResponse};
use crate::sdk::error::ProviderError;
use crate::sdk::model::{LatLng, Place, Suggestion};
use crate::sdk::util::rate_limit::{wait_for_slot, Limiter};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

const DETAILS_FIELDS: &str = "place_id,geometry,name,formatted_address";

/// Places Autocomplete, Place Details and Geocoding over the Google Maps web
/// services.
pub struct GooglePlacesProvider {
    client: Client,
    api_key: String,
    base_url: String,
    limiter: Limiter,
}

impl GooglePlacesProvider {
    pub fn new(api_key: String, limiter: Limiter, timeout: Duration) -> Result<Self, ProviderError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            base_url: "https://maps.googleapis.com/maps/api".to_string(),
            limiter,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn get<T: DeserializeOwned>(&self, path: &str, params: &[(&str, &str)]) -> Result<T, ProviderError> {
        wait_for_slot(&self.limiter);
        let url = format!("{}/{}", self.base_url, path);
        log::debug!("[PROVIDER] GET {} {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()?;
        let text = response.text()?;

        serde_json::from_str(&text).map_err(|e| {
            log::error!("Failed to parse Google response. URL: {}\nError: {}. Body: {}", url, e, text);
            ProviderError::from(e)
        })
    }
}

fn status_error(status: String, message: Option<String>) -> ProviderError {
    ProviderError::Api {
        status,
        message: message.unwrap_or_default(),
    }
}

pub(crate) fn read_predictions(resp: AutocompleteResponse) -> Result<Vec<Suggestion>, ProviderError> {
    match resp.status.as_str() {
        "OK" => Ok(resp
            .predictions
            .into_iter()
            .map(|p| Suggestion {
                description: p.description,
                place_id: p.place_id,
            })
            .collect()),
        "ZERO_RESULTS" => Ok(Vec::new()),
        _ => Err(status_error(resp.status, resp.error_message)),
    }
}

pub(crate) fn read_details(resp: DetailsResponse, place_id: &str) -> Result<Place, ProviderError> {
    if resp.status != "OK" {
        return Err(status_error(resp.status, resp.error_message));
    }
    let result = resp
        .result
        .ok_or_else(|| ProviderError::NoResults(format!("place {}", place_id)))?;
    let location = result.geometry.location;
    Ok(Place {
        place_id: result.place_id.or_else(|| Some(place_id.to_string())),
        name: result.name,
        formatted_address: result.formatted_address,
        coordinates: LatLng::new(location.lat, location.lng),
    })
}

pub(crate) fn read_geocode(resp: GeocodeResponse, what: &str) -> Result<(String, LatLng), ProviderError> {
    match resp.status.as_str() {
        "OK" => {
            let first = resp
                .results
                .into_iter()
                .next()
                .ok_or_else(|| ProviderError::NoResults(what.to_string()))?;
            let location = first.geometry.location;
            Ok((first.formatted_address, LatLng::new(location.lat, location.lng)))
        }
        "ZERO_RESULTS" => Err(ProviderError::NoResults(what.to_string())),
        _ => Err(status_error(resp.status, resp.error_message)),
    }
}

impl AutocompleteProvider for GooglePlacesProvider {
    fn predictions(&self, query: &str, country: &str) -> Result<Vec<Suggestion>, ProviderError> {
        let components = format!("country:{}", country);
        let resp: AutocompleteResponse = self.get(
            "place/autocomplete/json",
            &[("input", query), ("components", components.as_str())],
        )?;
        read_predictions(resp)
    }

    fn place_details(&self, place_id: &str) -> Result<Place, ProviderError> {
        let resp: DetailsResponse = self.get(
            "place/details/json",
            &[("place_id", place_id), ("fields", DETAILS_FIELDS)],
        )?;
        read_details(resp, place_id)
    }
}

impl Geocoder for GooglePlacesProvider {
    fn reverse_geocode(&self, at: LatLng) -> Result<String, ProviderError> {
        let latlng = format!("{},{}", at.lat, at.lng);
        let resp: GeocodeResponse = self.get("geocode/json", &[("latlng", latlng.as_str())])?;
        read_geocode(resp, &latlng).map(|(address, _)| address)
    }

    fn geocode(&self, address: &str) -> Result<LatLng, ProviderError> {
        let resp: GeocodeResponse = self.get("geocode/json", &[("address", address)])?;
        read_geocode(resp, address).map(|(_, at)| at)
    }
}
