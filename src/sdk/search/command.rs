use super::event::Timer;
use super::map::Bounds;
use super::state::{LocateReason, Slot};
use crate::sdk::model::LatLng;
use crate::sdk::notify::Notification;
use crate::sdk::provider::RouteSearchRequest;

/// Side effects the reducer asks the host shell to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    InitMap { center: LatLng, zoom: u8 },
    SetView { center: LatLng, zoom: u8 },
    ShowMarker { slot: Slot, position: LatLng, color: &'static str },
    DrawLine { from: LatLng, to: LatLng, color: &'static str },
    RemoveLine,
    FitBounds { bounds: Bounds, padding_px: u32 },
    RequestGeolocation { reason: LocateReason },
    ReverseGeocode { reason: LocateReason, at: LatLng },
    FetchRoutes { ticket: u64, request: RouteSearchRequest },
    ShowNotification(Notification),
    DismissNotification(u64),
    ScheduleTimer { after_ms: u64, timer: Timer },
    InitJourneyMap { center: LatLng, zoom: u8 },
}
