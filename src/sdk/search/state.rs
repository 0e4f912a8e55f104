use crate::sdk::model::{LatLng, Place, RouteOption};
use crate::sdk::notify::NotificationStack;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Collapsed,
    Expanded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BottomSheet {
    Collapsed,
    Expanded,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Origin,
    Destination,
}

impl Slot {
    pub fn marker_color(self) -> &'static str {
        match self {
            Slot::Origin => "#34a853",
            Slot::Destination => "#ea4335",
        }
    }
}

/// Why a geolocation request was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocateReason {
    /// Silent attempt while the map starts up.
    Startup,
    /// The "use my location" action.
    UserRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    Idle,
    Loading,
    Loaded(Vec<RouteOption>),
    Empty,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteLine {
    pub from: LatLng,
    pub to: LatLng,
}

#[derive(Debug, Clone)]
pub struct SearchState {
    pub mode: SearchMode,
    pub overlay: OverlayState,
    pub bottom_sheet: BottomSheet,
    pub origin_text: String,
    pub destination_text: String,
    pub origin_placeholder: Option<String>,
    pub current_location: Option<LatLng>,
    pub current_address: Option<String>,
    pub origin_place: Option<Place>,
    pub destination_place: Option<Place>,
    pub origin_marker: Option<LatLng>,
    pub destination_marker: Option<LatLng>,
    pub route_line: Option<RouteLine>,
    pub results: ResultsView,
    pub selected: Option<usize>,
    pub pending_fetch: Option<u64>,
    pub notifications: NotificationStack,
    pub journey_visible: bool,
    pub journey_map_initialized: bool,
    /// Bumped whenever the overlay is opened by a search or closed.
    pub overlay_generation: u64,
    pub(crate) next_ticket: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            mode: SearchMode::Collapsed,
            overlay: OverlayState::Closed,
            bottom_sheet: BottomSheet::Collapsed,
            origin_text: String::new(),
            destination_text: String::new(),
            origin_placeholder: None,
            current_location: None,
            current_address: None,
            origin_place: None,
            destination_place: None,
            origin_marker: None,
            destination_marker: None,
            route_line: None,
            results: ResultsView::Idle,
            selected: None,
            pending_fetch: None,
            notifications: NotificationStack::default(),
            journey_visible: false,
            journey_map_initialized: false,
            overlay_generation: 0,
            next_ticket: 0,
        }
    }
}

impl SearchState {
    /// Submit needs a destination; the origin may stay empty.
    pub fn can_submit(&self) -> bool {
        !self.destination_text.trim().is_empty()
    }

    pub fn confirm_visible(&self) -> bool {
        self.overlay == OverlayState::Open && self.selected.is_some()
    }

    pub fn selected_route(&self) -> Option<&RouteOption> {
        match (&self.results, self.selected) {
            (ResultsView::Loaded(routes), Some(i)) if self.overlay == OverlayState::Open => routes.get(i),
            _ => None,
        }
    }

    pub fn marker(&self, slot: Slot) -> Option<LatLng> {
        match slot {
            Slot::Origin => self.origin_marker,
            Slot::Destination => self.destination_marker,
        }
    }
}
