//! teemup-core — event extraction from embedded Meetup page state.
//!
//! A Meetup listing page is server rendered and ships its Apollo client
//! cache inside a `<script id="__NEXT_DATA__">` tag. This crate locates that
//! blob, decodes it, and projects a list of normalised events out of the flat
//! `"Kind:id"` entity store.
//!
//! # Pipeline
//!
//! ```text
//! markup ──► locate ──► decode ──► EntityIndex ──► project ──► Vec<NormalizedEvent>
//!                                      │
//!                                      └──► normalize_venue
//! ```
//!
//! Every stage is synchronous and pure; nothing is cached between calls.

pub mod config;
pub mod entity;
pub mod error;
pub mod markup;
pub mod projector;
pub mod state;
pub mod types;
pub mod venue;

pub use config::Config;
pub use entity::{CompositeKey, Entity, EntityIndex, EntityView, Ref};
pub use error::{ParseError, ParseResult};
pub use projector::Parser;
pub use types::{EntityKind, NormalizedEvent, NormalizedVenue};
pub use venue::normalize_venue;

/// Extract every active event from a raw listing page using the default
/// [`Config`].
pub fn parse(markup: &str) -> ParseResult<Vec<NormalizedEvent>> {
    Parser::default().parse(markup)
}

/// Extract every active event from an already decoded `__NEXT_DATA__` state
/// object using the default [`Config`].
pub fn parse_next_state(state: &serde_json::Value) -> ParseResult<Vec<NormalizedEvent>> {
    Parser::default().parse_next_state(state)
}
