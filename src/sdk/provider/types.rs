use serde::Deserialize;

// --- Google Maps web service payloads ---

#[derive(Deserialize, Debug)]
pub struct AutocompleteResponse {
    pub status: String,
    #[serde(default)]
    pub predictions: Vec<Prediction>,
    pub error_message: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct Prediction {
    pub description: String,
    pub place_id: String,
}

#[derive(Deserialize, Debug)]
pub struct DetailsResponse {
    pub status: String,
    pub result: Option<DetailsResult>,
    pub error_message: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct DetailsResult {
    pub place_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub formatted_address: String,
    pub geometry: Geometry,
}

#[derive(Deserialize, Debug)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    pub error_message: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct GeocodeResult {
    pub formatted_address: String,
    pub geometry: Geometry,
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct Geometry {
    pub location: Location,
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}
