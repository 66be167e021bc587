//! Core types: query windows, normalized events, deny-list

pub mod denylist;
pub mod event;
pub mod time;

pub use denylist::SummaryDenyList;
pub use event::NormalizedEvent;
pub use time::{TimeWindow, midnight_in};
