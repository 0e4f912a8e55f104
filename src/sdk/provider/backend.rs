use super::service::RouteSearch;
use crate::sdk::error::{BackendErrorPayload, NetworkError};
use crate::sdk::model::{Place, RouteOption};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSearchRequest {
    pub from: String,
    pub to: String,
    pub from_place_data: Option<Place>,
    pub to_place_data: Option<Place>,
}

#[derive(Deserialize)]
struct RouteSearchResponse {
    #[serde(default)]
    routes: Option<Vec<RouteOption>>,
}

/// Client for the route-search backend: one unauthenticated JSON POST.
pub struct RouteSearchClient {
    client: Client,
    url: String,
}

impl RouteSearchClient {
    pub fn new(url: String, timeout: Duration) -> Result<Self, NetworkError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            url,
        })
    }
}

/// Turns a raw backend reply into routes. Non-2xx and malformed JSON fail.
pub fn decode_routes(status: u16, body: &str) -> Result<Vec<RouteOption>, NetworkError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<BackendErrorPayload>(body)
            .ok()
            .map(|p| p.error);
        return Err(NetworkError::Http { status, message });
    }
    let response: RouteSearchResponse = serde_json::from_str(body)?;
    Ok(response.routes.unwrap_or_default())
}

impl RouteSearch for RouteSearchClient {
    fn search(&self, request: &RouteSearchRequest) -> Result<Vec<RouteOption>, NetworkError> {
        log::info!("Searching routes {:?} -> {:?}", request.from, request.to);
        let response = match self.client.post(&self.url).json(request).send() {
            Ok(resp) => resp,
            Err(e) => {
                log::error!("Failed to send POST request to backend. URL: {}\nError: {}", self.url, e);
                return Err(NetworkError::Request(e));
            }
        };

        let status = response.status().as_u16();
        let text = response.text()?;
        decode_routes(status, &text).map_err(|e| {
            log::error!("Route search failed. URL: {}\nError: {}. Body: {}", self.url, e, text);
            e
        })
    }
}
