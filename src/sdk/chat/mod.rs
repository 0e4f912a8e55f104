//! Staged disclosure of the chat screen.

pub mod place_name;
pub mod sample;
pub mod sequencer;
pub mod timeline;
pub mod typewriter;

pub use place_name::{display_place_name, extract_place_name};
pub use sequencer::{ChatSequencer, ChatUpdate};
pub use timeline::{build_timeline, BotLine, ChatScript, Cue, DisclosureStep};
pub use typewriter::Typewriter;
