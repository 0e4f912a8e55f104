//! Screens of the chat app and the session-scoped state passed between them.

use super::model::RouteOption;

pub const FIRST_SCREEN_FADE_MS: u64 = 400;

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    First,
    Chat { destination: String },
    BusDetails { route: Option<RouteOption>, place_full: Option<String> },
}

/// Browser-session storage. Lives as long as the host process.
#[derive(Debug, Default)]
pub struct SessionStore {
    arrived_via_search: bool,
}

impl SessionStore {
    pub fn mark_arrived_via_search(&mut self) {
        self.arrived_via_search = true;
    }

    /// Reads and clears the one-shot flag.
    pub fn take_arrived_via_search(&mut self) -> bool {
        std::mem::take(&mut self.arrived_via_search)
    }
}

/// Delayed navigation requested by a screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub after_ms: u64,
    pub to: Screen,
}

/// The search screen in front of the chat.
#[derive(Debug)]
pub struct FirstScreen {
    pub place: String,
    pub input_visible: bool,
}

impl Default for FirstScreen {
    fn default() -> Self {
        Self {
            place: String::new(),
            input_visible: true,
        }
    }
}

impl FirstScreen {
    pub fn on_change(&mut self, value: &str) {
        self.place = value.to_string();
    }

    /// Commits a destination. Blank values are ignored; otherwise the input
    /// fades out, the one-shot flag is set and the chat opens after the fade.
    pub fn on_enter(&mut self, value: &str, session: &mut SessionStore) -> Option<Transition> {
        if value.trim().is_empty() {
            return None;
        }
        self.input_visible = false;
        session.mark_arrived_via_search();
        log::debug!("Destination committed: {}", value);
        Some(Transition {
            after_ms: FIRST_SCREEN_FADE_MS,
            to: Screen::Chat {
                destination: value.to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_is_one_shot() {
        let mut session = SessionStore::default();
        assert!(!session.take_arrived_via_search());
        session.mark_arrived_via_search();
        assert!(session.take_arrived_via_search());
        assert!(!session.take_arrived_via_search());
    }

    #[test]
    fn blank_enter_is_ignored() {
        let mut screen = FirstScreen::default();
        let mut session = SessionStore::default();
        assert_eq!(screen.on_enter("   ", &mut session), None);
        assert!(screen.input_visible);
        assert!(!session.take_arrived_via_search());
    }

    #[test]
    fn enter_navigates_to_chat_after_fade() {
        let mut screen = FirstScreen::default();
        let mut session = SessionStore::default();
        let transition = screen.on_enter("Palayam, Kozhikode", &mut session).unwrap();
        assert_eq!(transition.after_ms, 400);
        assert_eq!(
            transition.to,
            Screen::Chat {
                destination: "Palayam, Kozhikode".into()
            }
        );
        assert!(!screen.input_visible);
        assert!(session.take_arrived_via_search());
    }
}
