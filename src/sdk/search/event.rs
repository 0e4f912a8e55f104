use super::state::{LocateReason, Slot};
use crate::sdk::error::{NetworkError, ProviderError};
use crate::sdk::model::{LatLng, Place, RouteOption};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Carries the overlay generation it was scheduled for.
    CloseOverlay(u64),
    ExpireNotification(u64),
}

/// Inputs to the search screen: user gestures and provider replies.
#[derive(Debug)]
pub enum Event {
    MapReady,
    CollapsedFieldFocused,
    /// A click anywhere outside the search area.
    ClickOutside,
    OriginEdited(String),
    DestinationEdited(String),
    UseMyLocation,
    GeolocationResolved {
        reason: LocateReason,
        result: Result<LatLng, ProviderError>,
    },
    ReverseGeocoded {
        reason: LocateReason,
        result: Result<String, ProviderError>,
    },
    PlaceSelected {
        slot: Slot,
        place: Place,
    },
    Submit,
    RoutesLoaded {
        ticket: u64,
        result: Result<Vec<RouteOption>, NetworkError>,
    },
    RouteClicked(usize),
    Confirm,
    BackToMap,
    BottomSheetClicked,
    TimerFired(Timer),
}
