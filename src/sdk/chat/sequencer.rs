use std::collections::BTreeSet;

use super::timeline::{build_timeline, BotLine, ChatScript, Cue, DisclosureStep, INLINE_RESULT_CAP};
use super::typewriter::{Typewriter, TYPING_INTERVAL_MS};
use crate::sdk::model::RouteOption;
use crate::sdk::navigation::{Screen, SessionStore};
use crate::sdk::scheduler::Scheduler;

/// What changed on the chat view during one tick.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatUpdate {
    Revealed(DisclosureStep),
    Hidden(DisclosureStep),
    Typed { line: BotLine, text: String },
    ScrollToLatest,
}

/// Plays the scripted chat for one visit to the chat view.
#[derive(Debug)]
pub struct ChatSequencer {
    script: ChatScript,
    results: Vec<RouteOption>,
    animate: bool,
    started: bool,
    torn_down: bool,
    revealed: BTreeSet<DisclosureStep>,
    cues: Scheduler<(u64, Cue)>,
    acknowledge: Typewriter,
    instruct: Typewriter,
}

impl ChatSequencer {
    /// Enters the chat view. The one-shot "arrived via search" flag is read
    /// (and cleared) here and nowhere else.
    pub fn enter(session: &mut SessionStore, destination: &str, results: Vec<RouteOption>) -> Self {
        let animate = session.take_arrived_via_search();
        log::debug!("Entering chat for {:?}, animate={}", destination, animate);
        let script = ChatScript::new(destination, results.len());
        Self {
            acknowledge: Typewriter::new(script.acknowledge.clone(), TYPING_INTERVAL_MS),
            instruct: Typewriter::new(script.instruct.clone(), TYPING_INTERVAL_MS),
            script,
            results,
            animate,
            started: false,
            torn_down: false,
            revealed: BTreeSet::new(),
            cues: Scheduler::new(),
        }
    }

    /// Starts playback at `now`. Without animation every step is revealed in
    /// this call with its full text.
    pub fn start(&mut self, now: u64) -> Vec<ChatUpdate> {
        if self.started || self.torn_down {
            return Vec::new();
        }
        self.started = true;

        if !self.animate {
            self.acknowledge.complete();
            self.instruct.complete();
            let mut updates = Vec::new();
            for step in DisclosureStep::ALL {
                let visible = match step {
                    DisclosureStep::TypingIndicator => false,
                    DisclosureStep::MoreResultsPrompt => self.script.has_more(),
                    _ => true,
                };
                if visible && self.revealed.insert(step) {
                    updates.push(ChatUpdate::Revealed(step));
                }
            }
            updates.push(ChatUpdate::ScrollToLatest);
            return updates;
        }

        for (offset, cue) in build_timeline(&self.script) {
            let due = now + offset;
            self.cues.schedule(due, (due, cue));
        }
        Vec::new()
    }

    pub fn tick(&mut self, now: u64) -> Vec<ChatUpdate> {
        if self.torn_down || !self.started {
            return Vec::new();
        }
        let mut updates = Vec::new();
        let mut changed = false;

        for (due, cue) in self.cues.advance_to(now) {
            match cue {
                Cue::Show(step) => {
                    if self.revealed.insert(step) {
                        changed = true;
                        updates.push(ChatUpdate::Revealed(step));
                    }
                    if let DisclosureStep::BotMessage(line) = step {
                        self.typewriter_mut(line).start(due);
                    }
                }
                Cue::Hide(step) => {
                    if self.revealed.remove(&step) {
                        changed = true;
                        updates.push(ChatUpdate::Hidden(step));
                    }
                }
            }
        }

        for line in [BotLine::Acknowledge, BotLine::Instruct] {
            let typewriter = self.typewriter_mut(line);
            if typewriter.advance(now) {
                updates.push(ChatUpdate::Typed {
                    line,
                    text: typewriter.visible().to_string(),
                });
            }
        }

        if changed {
            updates.push(ChatUpdate::ScrollToLatest);
        }
        updates
    }

    /// Cancels pending reveals and typing. Later ticks are no-ops.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.cues.cancel_all();
        self.acknowledge.cancel();
        self.instruct.cancel();
        log::debug!("Chat torn down with {} revealed steps", self.revealed.len());
    }

    /// Earliest time at which `tick` has something to do.
    pub fn next_wakeup(&self, now: u64) -> Option<u64> {
        if self.torn_down {
            return None;
        }
        let typing = [&self.acknowledge, &self.instruct]
            .iter()
            .any(|t| t.is_running())
            .then_some(now + TYPING_INTERVAL_MS);
        match (self.cues.next_due(), typing) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.started && self.cues.is_empty() && !self.acknowledge.is_running() && !self.instruct.is_running()
    }

    pub fn is_animated(&self) -> bool {
        self.animate
    }

    pub fn is_revealed(&self, step: DisclosureStep) -> bool {
        self.revealed.contains(&step)
    }

    pub fn user_message(&self) -> &str {
        &self.script.user_message
    }

    /// Bot text as currently shown (typed so far, or whole when not animated).
    pub fn bot_text(&self, line: BotLine) -> &str {
        match line {
            BotLine::Acknowledge => self.acknowledge.visible(),
            BotLine::Instruct => self.instruct.visible(),
        }
    }

    pub fn visible_results(&self) -> &[RouteOption] {
        let cap = self.results.len().min(INLINE_RESULT_CAP);
        &self.results[..cap]
    }

    pub fn has_more_results(&self) -> bool {
        self.script.has_more()
    }

    /// Opens the details view for one of the inline results.
    pub fn select_result(&mut self, index: usize) -> Option<Screen> {
        if !self.is_revealed(DisclosureStep::ResultList) {
            return None;
        }
        let route = self.visible_results().get(index)?.clone();
        self.teardown();
        Some(Screen::BusDetails {
            route: Some(route),
            place_full: Some(self.script.user_message.clone()),
        })
    }

    pub fn back(&mut self) -> Screen {
        self.teardown();
        Screen::First
    }

    fn typewriter_mut(&mut self, line: BotLine) -> &mut Typewriter {
        match line {
            BotLine::Acknowledge => &mut self.acknowledge,
            BotLine::Instruct => &mut self.instruct,
        }
    }
}
