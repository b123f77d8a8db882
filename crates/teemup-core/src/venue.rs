//! Venue normalizer.
//!
//! Missing keys, `null` and `""` all collapse to `None`. A venue that is only
//! the "Online event" placeholder (no address, city, state or country)
//! collapses to no venue at all.

use serde_json::Value;

use crate::entity::RawRecord;
use crate::types::NormalizedVenue;

/// Placeholder venue name Meetup uses for online-only events.
pub const ONLINE_VENUE_NAME: &str = "Online event";

/// Normalise a raw venue record with the default online placeholder name.
pub fn normalize_venue(raw: Option<&RawRecord>) -> Option<NormalizedVenue> {
    normalize_venue_with(raw, ONLINE_VENUE_NAME)
}

/// Normalise a raw venue record, treating `online_name` (any case) as the
/// online placeholder.
pub fn normalize_venue_with(raw: Option<&RawRecord>, online_name: &str) -> Option<NormalizedVenue> {
    let raw = raw?;
    let venue = NormalizedVenue {
        name: text_field(raw, "name"),
        address: text_field(raw, "address"),
        city: text_field(raw, "city"),
        state: text_field(raw, "state"),
        country: text_field(raw, "country"),
    };

    let placeholder = venue
        .name
        .as_deref()
        .is_some_and(|name| name.to_lowercase() == online_name.to_lowercase());
    if placeholder && venue.has_no_location() {
        return None;
    }
    Some(venue)
}

fn text_field(raw: &RawRecord, key: &str) -> Option<String> {
    match raw.get(key)? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
