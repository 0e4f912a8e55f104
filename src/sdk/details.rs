use super::model::{LatLng, RouteOption};
use super::navigation::Screen;
use super::provider::Geocoder;
use super::search::reduce::DEFAULT_CENTER;

pub const DETAILS_ZOOM: u8 = 13;
pub const UNAVAILABLE_TEXT: &str = "No bus or place data found.";

/// The details screen for one chosen route.
#[derive(Debug, Clone, PartialEq)]
pub enum BusDetailsView {
    Unavailable,
    Ready {
        route: RouteOption,
        place_full: String,
        map_center: LatLng,
        /// Destination marker, when the address could be geocoded.
        marker: Option<LatLng>,
    },
}

impl BusDetailsView {
    pub fn from_screen(screen: &Screen, geocoder: &dyn Geocoder) -> Self {
        let Screen::BusDetails {
            route: Some(route),
            place_full: Some(place_full),
        } = screen
        else {
            return BusDetailsView::Unavailable;
        };

        let marker = match geocoder.geocode(place_full) {
            Ok(at) => Some(at),
            Err(err) => {
                log::warn!("Could not centre details map on {:?}: {}", place_full, err);
                None
            }
        };
        BusDetailsView::Ready {
            route: route.clone(),
            place_full: place_full.clone(),
            map_center: marker.unwrap_or(DEFAULT_CENTER),
            marker,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        match self {
            BusDetailsView::Unavailable => vec![UNAVAILABLE_TEXT.to_string()],
            BusDetailsView::Ready { route, place_full, .. } => vec![
                route.bus_name.clone(),
                format!("Destination: {}", place_full),
                format!("Duration: {}", route.duration),
                format!("Departure: {}", departure_text(&route.departure_in)),
                format!("Fare: {}", route.fare),
            ],
        }
    }
}

/// "5" reads as "Departs in 5 mins"; anything else is shown verbatim.
pub fn departure_text(departure_in: &str) -> String {
    match departure_in.trim().parse::<u32>() {
        Ok(minutes) => format!("Departs in {} mins", minutes),
        Err(_) => departure_in.to_string(),
    }
}
