pub mod autocomplete;
pub mod chat;
pub mod config;
pub mod details;
pub mod error;
pub mod model;
pub mod navigation;
pub mod notify;
pub mod provider;
pub mod scheduler;
pub mod search;
pub mod util;
