pub mod sdk;

pub use sdk::autocomplete::PlaceInput;
pub use sdk::chat::{extract_place_name, ChatSequencer};
pub use sdk::config::AppConfig;
pub use sdk::error::{BusFinderError, NetworkError, ProviderError};
pub use sdk::model::{LatLng, Place, RouteOption};
pub use sdk::search::{reduce, SearchShell, SearchState};
