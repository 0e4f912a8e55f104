use std::collections::VecDeque;

use super::command::Command;
use super::event::{Event, Timer};
use super::map::MapSurface;
use super::reduce::reduce;
use super::state::SearchState;
use crate::sdk::notify::{Notification, NotificationKind};
use crate::sdk::provider::{Geocoder, Geolocator, RouteSearch};
use crate::sdk::scheduler::Scheduler;

/// Runs the search reducer against real collaborators. Provider calls are
/// blocking; their replies are fed back as events before `dispatch` returns.
pub struct SearchShell<'a, M: MapSurface> {
    state: SearchState,
    map: M,
    routes: &'a dyn RouteSearch,
    geocoder: &'a dyn Geocoder,
    geolocator: &'a dyn Geolocator,
    timers: Scheduler<Timer>,
    now: u64,
    shown: Vec<Notification>,
}

impl<'a, M: MapSurface> SearchShell<'a, M> {
    pub fn new(
        map: M,
        routes: &'a dyn RouteSearch,
        geocoder: &'a dyn Geocoder,
        geolocator: &'a dyn Geolocator,
    ) -> Self {
        Self {
            state: SearchState::default(),
            map,
            routes,
            geocoder,
            geolocator,
            timers: Scheduler::new(),
            now: 0,
            shown: Vec::new(),
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    /// Every notification raised so far, oldest first.
    pub fn notifications_shown(&self) -> &[Notification] {
        &self.shown
    }

    pub fn dispatch(&mut self, event: Event) {
        let mut queue = VecDeque::from([event]);
        while let Some(event) = queue.pop_front() {
            for command in reduce(&mut self.state, event) {
                if let Some(follow_up) = self.execute(command) {
                    queue.push_back(follow_up);
                }
            }
        }
    }

    /// Moves the clock forward and fires every timer that came due.
    pub fn advance(&mut self, ms: u64) {
        let target = self.now + ms;
        while let Some(due) = self.timers.next_due().filter(|due| *due <= target) {
            self.now = due;
            for timer in self.timers.advance_to(due) {
                self.dispatch(Event::TimerFired(timer));
            }
        }
        self.now = target;
    }

    fn execute(&mut self, command: Command) -> Option<Event> {
        match command {
            Command::InitMap { center, zoom } => self.map.init(center, zoom),
            Command::SetView { center, zoom } => self.map.set_view(center, zoom),
            Command::ShowMarker { slot, position, color } => self.map.show_marker(slot, position, color),
            Command::DrawLine { from, to, color } => self.map.draw_line(from, to, color),
            Command::RemoveLine => self.map.remove_line(),
            Command::FitBounds { bounds, padding_px } => self.map.fit_bounds(bounds, padding_px),
            Command::InitJourneyMap { center, zoom } => self.map.init_journey_map(center, zoom),
            Command::RequestGeolocation { reason } => {
                return Some(Event::GeolocationResolved {
                    reason,
                    result: self.geolocator.current_position(),
                });
            }
            Command::ReverseGeocode { reason, at } => {
                return Some(Event::ReverseGeocoded {
                    reason,
                    result: self.geocoder.reverse_geocode(at),
                });
            }
            Command::FetchRoutes { ticket, request } => {
                return Some(Event::RoutesLoaded {
                    ticket,
                    result: self.routes.search(&request),
                });
            }
            Command::ShowNotification(note) => {
                match note.kind {
                    NotificationKind::Success => log::info!("[NOTICE] {}", note.message),
                    NotificationKind::Error => log::warn!("[NOTICE] {}", note.message),
                }
                self.shown.push(note);
            }
            Command::DismissNotification(id) => log::debug!("Notification {} dismissed", id),
            Command::ScheduleTimer { after_ms, timer } => self.timers.schedule(self.now + after_ms, timer),
        }
        None
    }
}
