use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A geocoded location attached to the origin or destination slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub place_id: Option<String>,
    pub name: String,
    pub formatted_address: String,
    pub coordinates: LatLng,
}

impl Place {
    pub const CURRENT_LOCATION: &'static str = "Current Location";

    /// Place used for the device position, before or after reverse geocoding.
    pub fn current_location(coordinates: LatLng, address: Option<&str>) -> Self {
        Self {
            place_id: None,
            name: Self::CURRENT_LOCATION.to_string(),
            formatted_address: address.unwrap_or(Self::CURRENT_LOCATION).to_string(),
            coordinates,
        }
    }
}

/// One autocomplete prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub description: String,
    pub place_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSegment {
    #[serde(rename = "type", default, deserialize_with = "display_string")]
    pub kind: String,
    #[serde(default, deserialize_with = "display_string")]
    pub distance: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
}

/// One candidate itinerary as the backend describes it. Fields are kept as
/// display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteOption {
    #[serde(default, deserialize_with = "display_string")]
    pub bus_name: String,
    #[serde(default, deserialize_with = "display_string")]
    pub fare: String,
    #[serde(default, deserialize_with = "display_string")]
    pub arrival: String,
    #[serde(default, deserialize_with = "display_string")]
    pub duration: String,
    #[serde(default, deserialize_with = "display_string")]
    pub departure_in: String,
    #[serde(default)]
    pub plan: Vec<PlanSegment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub next_buses: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "optional_display_string")]
    pub transfers: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "optional_display_string")]
    pub walking_distance: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_display(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Int(n) => n.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

fn display_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_display)
        .unwrap_or_default())
}

fn optional_display_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_display))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn route_option_accepts_backend_shape() {
        let value = json!({
            "bus_name": "12 - Palayam",
            "departure_in": 7,
            "next_buses": ["19 minutes", "31 minutes"],
            "arrival": "05:40 PM",
            "duration": "0h 42m",
            "transfers": "0",
            "fare": "₹18",
            "walking_distance": "250m",
            "plan": [
                { "type": "walk", "distance": "250m" },
                { "type": "bus", "distance": "8km", "route_number": "12", "from": "A", "to": "B", "operator": "KSRTC" }
            ]
        });
        let route: RouteOption = serde_json::from_value(value).unwrap();
        assert_eq!(route.departure_in, "7");
        assert_eq!(route.plan.len(), 2);
        assert_eq!(route.plan[0].kind, "walk");
        assert_eq!(route.plan[1].operator.as_deref(), Some("KSRTC"));
        assert_eq!(route.transfers.as_deref(), Some("0"));
    }

    #[test]
    fn route_option_tolerates_missing_optional_fields() {
        let route: RouteOption = serde_json::from_value(json!({ "bus_name": "Bus 42A" })).unwrap();
        assert_eq!(route.fare, "");
        assert!(route.plan.is_empty());
        assert!(route.transfers.is_none());
    }

    #[test]
    fn place_serializes_with_wire_names() {
        let place = Place::current_location(LatLng::new(11.25, 75.78), None);
        let value = serde_json::to_value(&place).unwrap();
        assert_eq!(value["place_id"], serde_json::Value::Null);
        assert_eq!(value["formatted_address"], "Current Location");
        assert_eq!(value["coordinates"]["lng"], 75.78);
    }
}
