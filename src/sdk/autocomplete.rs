//! Text field controller backed by an address-autocomplete provider.

use super::error::ProviderError;
use super::model::Suggestion;
use super::provider::AutocompleteProvider;

pub const BLUR_GRACE_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    ArrowUp,
    ArrowDown,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEffect {
    /// The field value changed (typed or filled from a suggestion).
    Changed(String),
    /// The user committed a value.
    Commit(String),
    /// Ask the provider for predictions; answer with `on_suggestions`.
    Request { ticket: u64, query: String, country: String },
    /// Call `blur_elapsed(token)` after the delay.
    ScheduleClose { token: u64, after_ms: u64 },
}

#[derive(Debug, Clone)]
pub struct PlaceInput {
    value: String,
    suggestions: Vec<Suggestion>,
    open: bool,
    highlighted: Option<usize>,
    latest_ticket: u64,
    blur_token: u64,
    country: String,
    provider_available: bool,
}

impl PlaceInput {
    pub fn new(initial: &str, country: &str, provider_available: bool) -> Self {
        Self {
            value: initial.to_string(),
            suggestions: Vec::new(),
            open: false,
            highlighted: None,
            latest_ticket: 0,
            blur_token: 0,
            country: country.to_string(),
            provider_available,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Whether the floating list is on screen.
    pub fn is_list_visible(&self) -> bool {
        self.open && !self.suggestions.is_empty()
    }

    /// A keystroke changed the field to `text`.
    pub fn input(&mut self, text: &str) -> Vec<InputEffect> {
        self.value = text.to_string();
        self.open = true;
        self.highlighted = None;
        // Any reply still in flight is for older text now.
        self.latest_ticket += 1;

        let mut effects = vec![InputEffect::Changed(self.value.clone())];
        if self.value.is_empty() || !self.provider_available {
            self.suggestions.clear();
        } else {
            effects.push(InputEffect::Request {
                ticket: self.latest_ticket,
                query: self.value.clone(),
                country: self.country.clone(),
            });
        }
        effects
    }

    /// Provider reply for `ticket`. Returns false when the reply was stale and
    /// ignored.
    pub fn on_suggestions(&mut self, ticket: u64, result: Result<Vec<Suggestion>, ProviderError>) -> bool {
        if ticket != self.latest_ticket {
            log::debug!("Dropping stale suggestions for ticket {} (latest {})", ticket, self.latest_ticket);
            return false;
        }
        match result {
            Ok(list) => self.suggestions = list,
            Err(err) => {
                log::warn!("Autocomplete failed: {}", err);
                self.suggestions.clear();
            }
        }
        if self.highlighted.is_some_and(|i| i >= self.suggestions.len()) {
            self.highlighted = None;
        }
        true
    }

    pub fn key(&mut self, key: Key) -> Vec<InputEffect> {
        let len = self.suggestions.len();
        match key {
            Key::Enter => match self.highlighted {
                Some(index) if self.is_list_visible() => self.commit_suggestion(index),
                _ => vec![InputEffect::Commit(self.value.clone())],
            },
            Key::ArrowDown if self.is_list_visible() => {
                self.highlighted = Some(match self.highlighted {
                    Some(i) if i + 1 < len => i + 1,
                    _ => 0,
                });
                Vec::new()
            }
            Key::ArrowUp if self.is_list_visible() => {
                self.highlighted = Some(match self.highlighted {
                    Some(i) if i > 0 => i - 1,
                    _ => len - 1,
                });
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    pub fn click(&mut self, index: usize) -> Vec<InputEffect> {
        if index >= self.suggestions.len() {
            return Vec::new();
        }
        self.commit_suggestion(index)
    }

    pub fn hover(&mut self, index: usize) {
        if index < self.suggestions.len() {
            self.highlighted = Some(index);
        }
    }

    pub fn focus(&mut self) {
        self.blur_token += 1;
        if !self.suggestions.is_empty() {
            self.open = true;
        }
    }

    pub fn blur(&mut self) -> Vec<InputEffect> {
        self.blur_token += 1;
        vec![InputEffect::ScheduleClose {
            token: self.blur_token,
            after_ms: BLUR_GRACE_MS,
        }]
    }

    pub fn blur_elapsed(&mut self, token: u64) {
        if token == self.blur_token {
            self.open = false;
        }
    }

    /// Runs one `Request` effect synchronously against `provider`.
    pub fn fulfil(&mut self, provider: &dyn AutocompleteProvider, effect: &InputEffect) -> bool {
        match effect {
            InputEffect::Request { ticket, query, country } => {
                let result = provider.predictions(query, country);
                self.on_suggestions(*ticket, result)
            }
            _ => false,
        }
    }

    fn commit_suggestion(&mut self, index: usize) -> Vec<InputEffect> {
        let Some(chosen) = self.suggestions.get(index) else {
            return Vec::new();
        };
        let description = chosen.description.clone();
        self.value = description.clone();
        self.open = false;
        self.suggestions.clear();
        self.highlighted = None;
        self.latest_ticket += 1;
        vec![InputEffect::Changed(description.clone()), InputEffect::Commit(description)]
    }
}
