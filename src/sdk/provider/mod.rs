pub mod backend;
pub mod google;
pub mod offline;
pub mod service;
pub mod types;

pub use backend::{RouteSearchClient, RouteSearchRequest};
pub use google::GooglePlacesProvider;
pub use offline::{FixedGeolocator, OfflinePlaces};
pub use service::{AutocompleteProvider, Geocoder, Geolocator, RouteSearch};
