//! CalendarProvider trait, raw event model, and the Google implementation.
//!
//! Raw events come off the wire with inconsistent time representation
//! (instant vs. calendar date); the normalization pipeline resolves them
//! into [`calsweep_core::NormalizedEvent`] values with concrete instants:
//!
//! ```text
//! Google Calendar API
//!         │
//!         ▼
//!   GoogleCalendar ── CalendarProvider
//!         │
//!         ▼
//!      RawEvent
//!         │
//!         ▼ normalize_events()
//!   NormalizedEvent
//! ```

pub mod error;
pub mod google;
pub mod normalize;
pub mod provider;
pub mod raw_event;
pub mod token;

// Re-export main types at crate root
pub use error::{ProviderError, ProviderErrorCode, ProviderResult};
pub use normalize::{normalize_event, normalize_events};
pub use provider::{BoxFuture, CalendarProvider};
pub use raw_event::{RawEvent, RawEventTime};
pub use token::{FileToken, StaticToken, TokenSource};
