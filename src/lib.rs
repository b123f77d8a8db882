//! teemup — event listings from Meetup pages.
//!
//! This crate re-exports the extraction pipeline of [`teemup_core`] so that
//! integration tests and embedders can depend on a single crate.
//!
//! # Architecture
//!
//! ```text
//! MarkupLocator ──► StateDecoder ──► EntityIndex ──► EventProjector
//!                                                        │
//!                                                        └──► VenueNormalizer
//! ```
//!
//! Fetching the page is left to the caller; [`parse`] takes the markup as a
//! string and [`parse_next_state`] takes the decoded `__NEXT_DATA__` object.

pub use teemup_core::config::{self, Config};
pub use teemup_core::entity::{self, CompositeKey, Entity, EntityIndex, EntityView, Ref};
pub use teemup_core::error::{ParseError, ParseResult};
pub use teemup_core::markup::locate_state_script;
pub use teemup_core::projector::{parse_instant, EventRecord, Parser};
pub use teemup_core::state::decode_state;
pub use teemup_core::types::{EntityKind, NormalizedEvent, NormalizedVenue};
pub use teemup_core::venue::{normalize_venue, normalize_venue_with, ONLINE_VENUE_NAME};

/// Extract every active event from a listing page.
///
/// ```no_run
/// let html = std::fs::read_to_string("page.html")?;
/// for event in teemup::parse(&html)? {
///     println!("{} @ {}", event.title, event.starts_at);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse(markup: &str) -> ParseResult<Vec<NormalizedEvent>> {
    teemup_core::parse(markup)
}

/// Extract every active event from an already decoded state object.
pub fn parse_next_state(state: &serde_json::Value) -> ParseResult<Vec<NormalizedEvent>> {
    teemup_core::parse_next_state(state)
}
