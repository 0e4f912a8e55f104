use super::place_name::display_place_name;
use super::typewriter::TYPING_INTERVAL_MS;

pub const USER_MESSAGE_AT_MS: u64 = 200;
pub const FIRST_BOT_MESSAGE_AT_MS: u64 = 700;
pub const INLINE_RESULT_CAP: usize = 3;

pub const INSTRUCT_TEXT: &str = "Click on a bus route to see more information.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BotLine {
    Acknowledge,
    Instruct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DisclosureStep {
    UserMessage,
    BotMessage(BotLine),
    TypingIndicator,
    ResultList,
    MoreResultsPrompt,
    BackAffordance,
}

impl DisclosureStep {
    pub const ALL: [DisclosureStep; 7] = [
        DisclosureStep::UserMessage,
        DisclosureStep::BotMessage(BotLine::Acknowledge),
        DisclosureStep::TypingIndicator,
        DisclosureStep::ResultList,
        DisclosureStep::MoreResultsPrompt,
        DisclosureStep::BotMessage(BotLine::Instruct),
        DisclosureStep::BackAffordance,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Show(DisclosureStep),
    Hide(DisclosureStep),
}

/// The texts of one chat run.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatScript {
    pub user_message: String,
    pub acknowledge: String,
    pub instruct: String,
    pub result_count: usize,
}

impl ChatScript {
    pub fn new(destination: &str, result_count: usize) -> Self {
        Self {
            user_message: destination.to_string(),
            acknowledge: format!("alright I see you want to go to {}", display_place_name(destination)),
            instruct: INSTRUCT_TEXT.to_string(),
            result_count,
        }
    }

    pub fn has_more(&self) -> bool {
        self.result_count > INLINE_RESULT_CAP
    }

    pub fn bot_text(&self, line: BotLine) -> &str {
        match line {
            BotLine::Acknowledge => &self.acknowledge,
            BotLine::Instruct => &self.instruct,
        }
    }

    /// Time at which the acknowledgement has finished typing.
    pub fn t1(&self) -> u64 {
        FIRST_BOT_MESSAGE_AT_MS + self.acknowledge.chars().count() as u64 * TYPING_INTERVAL_MS
    }
}

/// Offsets of every cue for the animated play, in firing order.
pub fn build_timeline(script: &ChatScript) -> Vec<(u64, Cue)> {
    let t1 = script.t1();
    let mut timeline = vec![
        (USER_MESSAGE_AT_MS, Cue::Show(DisclosureStep::UserMessage)),
        (FIRST_BOT_MESSAGE_AT_MS, Cue::Show(DisclosureStep::BotMessage(BotLine::Acknowledge))),
        (t1 + 300, Cue::Show(DisclosureStep::TypingIndicator)),
        (t1 + 1300, Cue::Hide(DisclosureStep::TypingIndicator)),
        (t1 + 1400, Cue::Show(DisclosureStep::ResultList)),
    ];
    let tail = if script.has_more() {
        timeline.push((t1 + 1800, Cue::Show(DisclosureStep::MoreResultsPrompt)));
        t1 + 2200
    } else {
        t1 + 1800
    };
    timeline.push((tail, Cue::Show(DisclosureStep::BotMessage(BotLine::Instruct))));
    timeline.push((tail + 400, Cue::Show(DisclosureStep::BackAffordance)));
    timeline
}
