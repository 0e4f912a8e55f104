//! Map search screen: collapsed/expanded search bar, origin and destination
//! slots, the route overlay and trip confirmation.

pub mod command;
pub mod event;
pub mod map;
pub mod reduce;
pub mod shell;
pub mod state;

pub use command::Command;
pub use event::{Event, Timer};
pub use map::{Bounds, LogMap, MapSurface};
pub use reduce::reduce;
pub use shell::SearchShell;
pub use state::{BottomSheet, LocateReason, OverlayState, ResultsView, SearchMode, SearchState, Slot};
