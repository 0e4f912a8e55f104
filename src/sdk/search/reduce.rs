use super::command::Command;
use super::event::{Event, Timer};
use super::map::Bounds;
use super::state::{BottomSheet, LocateReason, OverlayState, ResultsView, RouteLine, SearchMode, SearchState, Slot};
use crate::sdk::model::{LatLng, Place};
use crate::sdk::notify::{NotificationKind, NOTIFICATION_LIFETIME_MS};
use crate::sdk::provider::RouteSearchRequest;

pub const DEFAULT_CENTER: LatLng = LatLng { lat: 20.5937, lng: 78.9629 };
pub const DEFAULT_ZOOM: u8 = 5;
pub const LOCATED_ZOOM: u8 = 15;
pub const LINE_COLOR: &str = "#3182ce";
pub const FIT_PADDING_PX: u32 = 100;
pub const OVERLAY_CLOSE_DELAY_MS: u64 = 1200;
pub const JOURNEY_CENTER: LatLng = LatLng { lat: 11.2541, lng: 75.7810 };
pub const JOURNEY_ZOOM: u8 = 15;

pub const MSG_NO_LOCATION: &str = "Could not get your location.";
pub const MSG_NO_ADDRESS: &str = "Could not get address for your location.";
pub const MSG_ROUTES_FAILED: &str = "Failed to load routes. Please check your connection.";
pub const MSG_TRIP_CONFIRMED: &str = "Trip confirmed!";
pub const INLINE_LOADING: &str = "Finding routes...";
pub const INLINE_EMPTY: &str = "No routes found for this journey.";
pub const INLINE_FAILED: &str = "Failed to load routes. Please try again.";

/// Applies one event to the search screen and returns the side effects the
/// host must carry out, in order.
pub fn reduce(state: &mut SearchState, event: Event) -> Vec<Command> {
    match event {
        Event::MapReady => vec![
            Command::InitMap {
                center: DEFAULT_CENTER,
                zoom: DEFAULT_ZOOM,
            },
            Command::RequestGeolocation {
                reason: LocateReason::Startup,
            },
        ],
        Event::CollapsedFieldFocused => {
            expand(state);
            Vec::new()
        }
        Event::ClickOutside => {
            if state.mode == SearchMode::Expanded && state.overlay == OverlayState::Closed {
                collapse(state);
            }
            Vec::new()
        }
        Event::OriginEdited(text) => {
            state.origin_text = text;
            Vec::new()
        }
        Event::DestinationEdited(text) => {
            state.destination_text = text;
            Vec::new()
        }
        Event::UseMyLocation => vec![Command::RequestGeolocation {
            reason: LocateReason::UserRequest,
        }],
        Event::GeolocationResolved { reason, result } => match result {
            Ok(at) => located(state, reason, at),
            Err(err) => {
                log::warn!("Geolocation failed ({:?}): {}", reason, err);
                match reason {
                    LocateReason::Startup => Vec::new(),
                    LocateReason::UserRequest => notify(state, NotificationKind::Error, MSG_NO_LOCATION),
                }
            }
        },
        Event::ReverseGeocoded { reason, result } => match result {
            Ok(address) => {
                state.origin_text.clear();
                state.origin_placeholder = Some(format!("current location - {}", address));
                let located_at = state
                    .origin_place
                    .as_ref()
                    .filter(|p| is_current_location(p))
                    .map(|p| p.coordinates);
                if let Some(at) = located_at {
                    state.origin_place = Some(Place::current_location(at, Some(address.as_str())));
                }
                state.current_address = Some(address);
                log::debug!("Origin filled from {:?} location", reason);
                Vec::new()
            }
            Err(err) => {
                log::warn!("Reverse geocoding failed: {}", err);
                notify(state, NotificationKind::Error, MSG_NO_ADDRESS)
            }
        },
        Event::PlaceSelected { slot, place } => {
            let at = place.coordinates;
            log::info!("{:?} place selected: {}", slot, place.formatted_address);
            match slot {
                Slot::Origin => state.origin_place = Some(place),
                Slot::Destination => state.destination_place = Some(place),
            }
            let mut commands = place_marker(state, slot, at);
            if slot == Slot::Destination && state.route_line.is_none() {
                commands.push(Command::SetView {
                    center: at,
                    zoom: LOCATED_ZOOM,
                });
            }
            commands
        }
        Event::Submit => submit(state),
        Event::RoutesLoaded { ticket, result } => {
            if state.overlay != OverlayState::Open || state.pending_fetch != Some(ticket) {
                log::debug!("Ignoring route response for ticket {}", ticket);
                return Vec::new();
            }
            state.pending_fetch = None;
            state.selected = None;
            match result {
                Ok(routes) if routes.is_empty() => {
                    state.results = ResultsView::Empty;
                    Vec::new()
                }
                Ok(routes) => {
                    log::info!("Loaded {} routes", routes.len());
                    state.results = ResultsView::Loaded(routes);
                    Vec::new()
                }
                Err(err) => {
                    log::error!("Error fetching routes: {}", err);
                    state.results = ResultsView::Failed(INLINE_FAILED.to_string());
                    notify(state, NotificationKind::Error, MSG_ROUTES_FAILED)
                }
            }
        }
        Event::RouteClicked(index) => {
            if state.overlay == OverlayState::Open {
                if let ResultsView::Loaded(routes) = &state.results {
                    if index < routes.len() {
                        state.selected = Some(index);
                    }
                }
            }
            Vec::new()
        }
        Event::Confirm => confirm(state),
        Event::BackToMap => {
            close_overlay(state);
            Vec::new()
        }
        Event::BottomSheetClicked => {
            state.bottom_sheet = match state.bottom_sheet {
                BottomSheet::Collapsed => BottomSheet::Expanded,
                _ => BottomSheet::Collapsed,
            };
            Vec::new()
        }
        Event::TimerFired(Timer::CloseOverlay(generation)) => {
            if state.overlay == OverlayState::Open && state.overlay_generation == generation {
                close_overlay(state);
            } else {
                log::debug!("Ignoring close timer for overlay generation {}", generation);
            }
            Vec::new()
        }
        Event::TimerFired(Timer::ExpireNotification(id)) => {
            if state.notifications.expire(id) {
                vec![Command::DismissNotification(id)]
            } else {
                Vec::new()
            }
        }
    }
}

fn expand(state: &mut SearchState) {
    state.mode = SearchMode::Expanded;
    state.bottom_sheet = BottomSheet::Hidden;
}

fn collapse(state: &mut SearchState) {
    state.mode = SearchMode::Collapsed;
    state.bottom_sheet = BottomSheet::Collapsed;
}

fn is_current_location(place: &Place) -> bool {
    place.place_id.is_none() && place.name == Place::CURRENT_LOCATION
}

fn located(state: &mut SearchState, reason: LocateReason, at: LatLng) -> Vec<Command> {
    state.current_location = Some(at);
    if reason == LocateReason::UserRequest {
        state.origin_place = Some(Place::current_location(at, state.current_address.as_deref()));
    }
    let mut commands = vec![
        Command::SetView {
            center: at,
            zoom: LOCATED_ZOOM,
        },
        Command::ReverseGeocode { reason, at },
    ];
    commands.extend(place_marker(state, Slot::Origin, at));
    commands
}

/// Moves a slot's marker, then keeps the connecting line in step: drawn
/// (and the view fitted) with both markers, removed otherwise.
fn place_marker(state: &mut SearchState, slot: Slot, at: LatLng) -> Vec<Command> {
    match slot {
        Slot::Origin => state.origin_marker = Some(at),
        Slot::Destination => state.destination_marker = Some(at),
    }
    let mut commands = vec![Command::ShowMarker {
        slot,
        position: at,
        color: slot.marker_color(),
    }];

    match (state.origin_marker, state.destination_marker) {
        (Some(from), Some(to)) => {
            if state.route_line.take().is_some() {
                commands.push(Command::RemoveLine);
            }
            state.route_line = Some(RouteLine { from, to });
            commands.push(Command::DrawLine {
                from,
                to,
                color: LINE_COLOR,
            });
            commands.push(Command::FitBounds {
                bounds: Bounds::around(from, to),
                padding_px: FIT_PADDING_PX,
            });
        }
        _ => {
            if state.route_line.take().is_some() {
                commands.push(Command::RemoveLine);
            }
        }
    }
    commands
}

fn submit(state: &mut SearchState) -> Vec<Command> {
    if !state.can_submit() {
        return Vec::new();
    }
    state.next_ticket += 1;
    let ticket = state.next_ticket;
    state.overlay = OverlayState::Open;
    state.bottom_sheet = BottomSheet::Hidden;
    state.results = ResultsView::Loading;
    state.selected = None;
    state.pending_fetch = Some(ticket);
    state.overlay_generation += 1;

    let request = RouteSearchRequest {
        from: state.origin_text.trim().to_string(),
        to: state.destination_text.trim().to_string(),
        from_place_data: state.origin_place.clone(),
        to_place_data: state.destination_place.clone(),
    };
    vec![Command::FetchRoutes { ticket, request }]
}

fn confirm(state: &mut SearchState) -> Vec<Command> {
    if state.selected_route().is_none() {
        return Vec::new();
    }
    let mut commands = notify(state, NotificationKind::Success, MSG_TRIP_CONFIRMED);
    commands.push(Command::ScheduleTimer {
        after_ms: OVERLAY_CLOSE_DELAY_MS,
        timer: Timer::CloseOverlay(state.overlay_generation),
    });
    state.journey_visible = true;
    if !state.journey_map_initialized {
        state.journey_map_initialized = true;
        commands.push(Command::InitJourneyMap {
            center: JOURNEY_CENTER,
            zoom: JOURNEY_ZOOM,
        });
    }
    commands
}

/// Closing never cancels an in-flight fetch; its reply is ignored instead.
fn close_overlay(state: &mut SearchState) {
    state.overlay = OverlayState::Closed;
    state.pending_fetch = None;
    state.selected = None;
    state.overlay_generation += 1;
    expand(state);
}

fn notify(state: &mut SearchState, kind: NotificationKind, message: &str) -> Vec<Command> {
    let note = state.notifications.push(kind, message);
    let id = note.id;
    vec![
        Command::ShowNotification(note),
        Command::ScheduleTimer {
            after_ms: NOTIFICATION_LIFETIME_MS,
            timer: Timer::ExpireNotification(id),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::error::{NetworkError, ProviderError};
    use crate::sdk::model::RouteOption;
    use pretty_assertions::assert_eq;

    fn place(name: &str, lat: f64, lng: f64) -> Place {
        Place {
            place_id: Some(format!("pid-{}", name)),
            name: name.to_string(),
            formatted_address: format!("{}, Kerala", name),
            coordinates: LatLng::new(lat, lng),
        }
    }

    fn route(name: &str) -> RouteOption {
        serde_json::from_value(serde_json::json!({ "bus_name": name, "fare": "₹20" })).unwrap()
    }

    fn expanded_with_destination() -> SearchState {
        let mut state = SearchState::default();
        reduce(&mut state, Event::CollapsedFieldFocused);
        reduce(&mut state, Event::DestinationEdited("Palayam".into()));
        state
    }

    fn submitted(state: &mut SearchState) -> u64 {
        match reduce(state, Event::Submit).as_slice() {
            [Command::FetchRoutes { ticket, .. }] => *ticket,
            other => panic!("expected fetch, got {:?}", other),
        }
    }

    fn loaded(names: &[&str]) -> SearchState {
        let mut state = expanded_with_destination();
        let ticket = submitted(&mut state);
        reduce(
            &mut state,
            Event::RoutesLoaded {
                ticket,
                result: Ok(names.iter().map(|n| route(n)).collect()),
            },
        );
        state
    }

    fn notifications(commands: &[Command]) -> Vec<String> {
        commands
            .iter()
            .filter_map(|c| match c {
                Command::ShowNotification(n) => Some(n.message.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn map_ready_centres_on_india_and_locates() {
        let mut state = SearchState::default();
        assert_eq!(
            reduce(&mut state, Event::MapReady),
            vec![
                Command::InitMap { center: DEFAULT_CENTER, zoom: 5 },
                Command::RequestGeolocation { reason: LocateReason::Startup },
            ]
        );
    }

    #[test]
    fn focus_expands_and_outside_click_collapses() {
        let mut state = SearchState::default();
        assert_eq!(state.mode, SearchMode::Collapsed);
        reduce(&mut state, Event::CollapsedFieldFocused);
        assert_eq!(state.mode, SearchMode::Expanded);
        assert_eq!(state.bottom_sheet, BottomSheet::Hidden);
        reduce(&mut state, Event::ClickOutside);
        assert_eq!(state.mode, SearchMode::Collapsed);
        assert_eq!(state.bottom_sheet, BottomSheet::Collapsed);
    }

    #[test]
    fn outside_click_ignored_while_overlay_open() {
        let mut state = expanded_with_destination();
        submitted(&mut state);
        reduce(&mut state, Event::ClickOutside);
        assert_eq!(state.mode, SearchMode::Expanded);
        assert_eq!(state.overlay, OverlayState::Open);
    }

    #[test]
    fn submit_needs_destination_only() {
        let mut state = SearchState::default();
        reduce(&mut state, Event::OriginEdited("Kozhikode".into()));
        assert!(!state.can_submit());
        assert!(reduce(&mut state, Event::Submit).is_empty());
        assert_eq!(state.overlay, OverlayState::Closed);

        reduce(&mut state, Event::OriginEdited(String::new()));
        reduce(&mut state, Event::DestinationEdited("  ".into()));
        assert!(!state.can_submit());
        reduce(&mut state, Event::DestinationEdited("Palayam".into()));
        assert!(state.can_submit());
    }

    #[test]
    fn submit_carries_text_and_place_data() {
        let mut state = expanded_with_destination();
        let dest = place("Palayam", 11.25, 75.78);
        reduce(&mut state, Event::PlaceSelected { slot: Slot::Destination, place: dest.clone() });
        reduce(&mut state, Event::DestinationEdited(" Palayam ".into()));
        let commands = reduce(&mut state, Event::Submit);
        assert_eq!(
            commands,
            vec![Command::FetchRoutes {
                ticket: 1,
                request: RouteSearchRequest {
                    from: String::new(),
                    to: "Palayam".into(),
                    from_place_data: None,
                    to_place_data: Some(dest),
                },
            }]
        );
        assert_eq!(state.results, ResultsView::Loading);
        assert_eq!(state.bottom_sheet, BottomSheet::Hidden);
    }

    #[test]
    fn markers_and_line() {
        let mut state = SearchState::default();
        let a = place("Origin", 11.25, 75.78);
        let b = place("Dest", 11.0, 76.0);

        let only_dest = reduce(&mut state, Event::PlaceSelected { slot: Slot::Destination, place: b.clone() });
        assert!(!only_dest.iter().any(|c| matches!(c, Command::DrawLine { .. })));
        assert!(state.route_line.is_none());

        let mut origin_only = SearchState::default();
        let cmds = reduce(&mut origin_only, Event::PlaceSelected { slot: Slot::Origin, place: a.clone() });
        assert_eq!(
            cmds,
            vec![Command::ShowMarker { slot: Slot::Origin, position: a.coordinates, color: "#34a853" }]
        );
        assert!(origin_only.route_line.is_none());

        let both = reduce(&mut state, Event::PlaceSelected { slot: Slot::Origin, place: a.clone() });
        let lines: Vec<_> = both
            .iter()
            .filter_map(|c| match c {
                Command::DrawLine { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect();
        assert_eq!(lines, vec![(a.coordinates, b.coordinates)]);
        let bounds = both
            .iter()
            .find_map(|c| match c {
                Command::FitBounds { bounds, padding_px } => Some((*bounds, *padding_px)),
                _ => None,
            })
            .unwrap();
        assert!(bounds.0.contains(a.coordinates) && bounds.0.contains(b.coordinates));
        assert_eq!(bounds.1, 100);
        assert_eq!(
            state.route_line,
            Some(RouteLine { from: a.coordinates, to: b.coordinates })
        );
    }

    #[test]
    fn moving_a_marker_redraws_single_line() {
        let mut state = SearchState::default();
        reduce(&mut state, Event::PlaceSelected { slot: Slot::Origin, place: place("A", 1.0, 1.0) });
        reduce(&mut state, Event::PlaceSelected { slot: Slot::Destination, place: place("B", 2.0, 2.0) });
        let cmds = reduce(&mut state, Event::PlaceSelected { slot: Slot::Destination, place: place("C", 3.0, 3.0) });
        assert_eq!(cmds.iter().filter(|c| **c == Command::RemoveLine).count(), 1);
        assert_eq!(cmds.iter().filter(|c| matches!(c, Command::DrawLine { .. })).count(), 1);
        assert_eq!(state.route_line.map(|l| l.to), Some(LatLng::new(3.0, 3.0)));
    }

    #[test]
    fn use_my_location_success_fills_origin() {
        let mut state = expanded_with_destination();
        assert_eq!(
            reduce(&mut state, Event::UseMyLocation),
            vec![Command::RequestGeolocation { reason: LocateReason::UserRequest }]
        );
        let here = LatLng::new(11.26, 75.77);
        let cmds = reduce(
            &mut state,
            Event::GeolocationResolved { reason: LocateReason::UserRequest, result: Ok(here) },
        );
        assert!(cmds.contains(&Command::ReverseGeocode { reason: LocateReason::UserRequest, at: here }));
        assert!(cmds.contains(&Command::ShowMarker { slot: Slot::Origin, position: here, color: "#34a853" }));
        assert_eq!(state.origin_place.as_ref().map(|p| p.formatted_address.as_str()), Some("Current Location"));

        reduce(
            &mut state,
            Event::ReverseGeocoded { reason: LocateReason::UserRequest, result: Ok("MG Road, Kozhikode".into()) },
        );
        assert_eq!(state.origin_text, "");
        assert_eq!(state.origin_placeholder.as_deref(), Some("current location - MG Road, Kozhikode"));
        assert_eq!(
            state.origin_place.as_ref().map(|p| p.formatted_address.as_str()),
            Some("MG Road, Kozhikode")
        );
    }

    #[test]
    fn geolocation_denied_notifies_and_keeps_state() {
        let mut state = expanded_with_destination();
        let before = format!("{:?}", (state.origin_place.clone(), state.origin_marker, state.current_location));
        let cmds = reduce(
            &mut state,
            Event::GeolocationResolved { reason: LocateReason::UserRequest, result: Err(ProviderError::PermissionDenied) },
        );
        assert_eq!(notifications(&cmds), vec![MSG_NO_LOCATION.to_string()]);
        let after = format!("{:?}", (state.origin_place.clone(), state.origin_marker, state.current_location));
        assert_eq!(before, after);

        let silent = reduce(
            &mut state,
            Event::GeolocationResolved { reason: LocateReason::Startup, result: Err(ProviderError::PermissionDenied) },
        );
        assert!(silent.is_empty());
    }

    #[test]
    fn reverse_geocode_failure_notifies() {
        let mut state = SearchState::default();
        let cmds = reduce(
            &mut state,
            Event::ReverseGeocoded { reason: LocateReason::Startup, result: Err(ProviderError::NoResults("x".into())) },
        );
        assert_eq!(notifications(&cmds), vec![MSG_NO_ADDRESS.to_string()]);
        assert!(state.origin_placeholder.is_none());
    }

    #[test]
    fn routes_render_loaded_or_empty() {
        let state = loaded(&["Bus 1", "Bus 2"]);
        assert!(matches!(&state.results, ResultsView::Loaded(r) if r.len() == 2));
        assert_eq!(state.pending_fetch, None);

        let empty = loaded(&[]);
        assert_eq!(empty.results, ResultsView::Empty);
    }

    #[test]
    fn fetch_failure_shows_inline_error_and_notification() {
        let mut state = expanded_with_destination();
        let ticket = submitted(&mut state);
        let cmds = reduce(
            &mut state,
            Event::RoutesLoaded {
                ticket,
                result: Err(NetworkError::Http { status: 502, message: None }),
            },
        );
        assert_eq!(state.results, ResultsView::Failed(INLINE_FAILED.to_string()));
        assert_eq!(notifications(&cmds), vec![MSG_ROUTES_FAILED.to_string()]);
        assert!(cmds.contains(&Command::ScheduleTimer {
            after_ms: 4000,
            timer: Timer::ExpireNotification(1)
        }));
    }

    #[test]
    fn late_response_after_close_is_ignored() {
        let mut state = expanded_with_destination();
        let ticket = submitted(&mut state);
        reduce(&mut state, Event::BackToMap);
        assert_eq!(state.overlay, OverlayState::Closed);
        assert_eq!(state.mode, SearchMode::Expanded);

        let cmds = reduce(&mut state, Event::RoutesLoaded { ticket, result: Ok(vec![route("Late")]) });
        assert!(cmds.is_empty());
        assert_eq!(state.results, ResultsView::Loading);
    }

    #[test]
    fn superseded_response_is_ignored() {
        let mut state = expanded_with_destination();
        let first = submitted(&mut state);
        let second = submitted(&mut state);
        reduce(&mut state, Event::RoutesLoaded { ticket: first, result: Ok(vec![route("Old")]) });
        assert_eq!(state.results, ResultsView::Loading);
        reduce(&mut state, Event::RoutesLoaded { ticket: second, result: Ok(vec![route("New")]) });
        assert!(matches!(&state.results, ResultsView::Loaded(r) if r[0].bus_name == "New"));
    }

    #[test]
    fn selection_is_exclusive_and_cleared_on_rerender() {
        let mut state = loaded(&["A", "B", "C"]);
        reduce(&mut state, Event::RouteClicked(0));
        reduce(&mut state, Event::RouteClicked(2));
        assert_eq!(state.selected, Some(2));
        assert!(state.confirm_visible());
        reduce(&mut state, Event::RouteClicked(9));
        assert_eq!(state.selected, Some(2));

        let ticket = submitted(&mut state);
        assert_eq!(state.selected, None);
        reduce(&mut state, Event::RoutesLoaded { ticket, result: Ok(vec![route("D")]) });
        assert_eq!(state.selected, None);
        assert!(!state.confirm_visible());
    }

    #[test]
    fn confirm_without_selection_is_noop() {
        let mut state = loaded(&["A"]);
        assert!(reduce(&mut state, Event::Confirm).is_empty());
        assert_eq!(state.overlay, OverlayState::Open);
        assert!(state.notifications.current().is_none());
        assert!(!state.journey_visible);
    }

    #[test]
    fn confirm_notifies_schedules_close_and_inits_journey_once() {
        let mut state = loaded(&["A", "B"]);
        reduce(&mut state, Event::RouteClicked(1));
        let cmds = reduce(&mut state, Event::Confirm);
        assert_eq!(notifications(&cmds), vec![MSG_TRIP_CONFIRMED.to_string()]);
        let generation = state.overlay_generation;
        assert!(cmds.contains(&Command::ScheduleTimer {
            after_ms: 1200,
            timer: Timer::CloseOverlay(generation)
        }));
        assert!(cmds.contains(&Command::InitJourneyMap { center: JOURNEY_CENTER, zoom: 15 }));
        assert!(state.journey_visible);

        reduce(&mut state, Event::TimerFired(Timer::CloseOverlay(generation)));
        assert_eq!(state.overlay, OverlayState::Closed);
        assert_eq!(state.selected, None);

        // second trip in the same page load
        let ticket = submitted(&mut state);
        reduce(&mut state, Event::RoutesLoaded { ticket, result: Ok(vec![route("C")]) });
        reduce(&mut state, Event::RouteClicked(0));
        let again = reduce(&mut state, Event::Confirm);
        assert!(!again.iter().any(|c| matches!(c, Command::InitJourneyMap { .. })));
    }

    #[test]
    fn close_timer_from_earlier_trip_leaves_new_search_open() {
        let mut state = loaded(&["A"]);
        reduce(&mut state, Event::RouteClicked(0));
        let cmds = reduce(&mut state, Event::Confirm);
        let timer = cmds
            .iter()
            .find_map(|c| match c {
                Command::ScheduleTimer { timer: t @ Timer::CloseOverlay(_), .. } => Some(*t),
                _ => None,
            })
            .unwrap();

        reduce(&mut state, Event::BackToMap);
        let ticket = submitted(&mut state);
        reduce(&mut state, Event::TimerFired(timer));
        assert_eq!(state.overlay, OverlayState::Open);
        assert_eq!(state.pending_fetch, Some(ticket));

        reduce(&mut state, Event::RoutesLoaded { ticket, result: Ok(vec![route("Next")]) });
        assert!(matches!(&state.results, ResultsView::Loaded(r) if r[0].bus_name == "Next"));
    }

    #[test]
    fn notification_expiry_only_for_current() {
        let mut state = SearchState::default();
        reduce(&mut state, Event::GeolocationResolved { reason: LocateReason::UserRequest, result: Err(ProviderError::PermissionDenied) });
        reduce(&mut state, Event::ReverseGeocoded { reason: LocateReason::UserRequest, result: Err(ProviderError::PermissionDenied) });
        assert!(reduce(&mut state, Event::TimerFired(Timer::ExpireNotification(1))).is_empty());
        assert_eq!(
            reduce(&mut state, Event::TimerFired(Timer::ExpireNotification(2))),
            vec![Command::DismissNotification(2)]
        );
        assert!(state.notifications.current().is_none());
    }

    #[test]
    fn bottom_sheet_toggles() {
        let mut state = SearchState::default();
        reduce(&mut state, Event::BottomSheetClicked);
        assert_eq!(state.bottom_sheet, BottomSheet::Expanded);
        reduce(&mut state, Event::BottomSheetClicked);
        assert_eq!(state.bottom_sheet, BottomSheet::Collapsed);
    }
}
