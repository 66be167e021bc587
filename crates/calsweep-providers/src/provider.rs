//! CalendarProvider trait definition.

use std::future::Future;
use std::pin::Pin;

use calsweep_core::TimeWindow;

use crate::error::ProviderResult;
use crate::raw_event::RawEvent;

/// A boxed future for async trait methods.
///
/// Boxed futures keep the trait object-safe, so the query service can hold
/// a `&dyn CalendarProvider` and tests can substitute doubles.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The abstraction over the calendar backend.
///
/// Implementations must request results pre-expanded (recurring instances
/// flattened to concrete occurrences) and pre-sorted by start time
/// ascending; the query service relies on that ordering rather than sorting
/// locally. Authentication is resolved per call; implementations hold no
/// credential state of their own.
pub trait CalendarProvider: Send + Sync {
    /// Returns the name of this provider (e.g. "google").
    fn name(&self) -> &str;

    /// Lists events whose times fall within `window`.
    ///
    /// # Errors
    ///
    /// Returns a `ProviderError` on missing authentication, network
    /// failures, or unparseable responses. No retry is attempted.
    fn list_events(&self, window: TimeWindow) -> BoxFuture<'_, ProviderResult<Vec<RawEvent>>>;

    /// Deletes a single event by id.
    ///
    /// # Errors
    ///
    /// Deleting an id that no longer exists surfaces the provider's
    /// not-found error unchanged.
    fn delete_event<'a>(&'a self, event_id: &'a str) -> BoxFuture<'a, ProviderResult<()>>;
}
