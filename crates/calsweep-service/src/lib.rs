//! Query and deletion operations over a calendar provider.

pub mod query;

pub use query::EventQueryService;
