//! Domain-specific assertion macros for teemup harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! output invariant was violated.

/// Assert that a `NormalizedEvent` serialises to exactly the public key set.
///
/// ```rust
/// assert_event_keys!(events[0]);
/// ```
#[macro_export]
macro_rules! assert_event_keys {
    ($event:expr) => {{
        let event: &teemup::NormalizedEvent = &$event;
        let value = serde_json::to_value(event).unwrap();
        let mut keys: Vec<&str> = value
            .as_object()
            .expect("event serialises to an object")
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        pretty_assertions::assert_eq!(
            keys,
            vec!["description", "ends_at", "group_name", "starts_at", "title", "url", "venue"],
            "event key set changed: {:?}",
            event.title
        );
    }};
}

/// Assert that a `NormalizedVenue` serialises to exactly the public key set.
#[macro_export]
macro_rules! assert_venue_keys {
    ($venue:expr) => {{
        let venue: &teemup::NormalizedVenue = &$venue;
        let value = serde_json::to_value(venue).unwrap();
        let mut keys: Vec<&str> = value
            .as_object()
            .expect("venue serialises to an object")
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        pretty_assertions::assert_eq!(keys, vec!["address", "city", "country", "name", "state"]);
    }};
}

/// Assert the invariants every emitted event must satisfy: non-empty title
/// and URL, a start not after its end, and both instants serialising with an
/// explicit offset.
#[macro_export]
macro_rules! assert_well_formed {
    ($event:expr) => {{
        let event: &teemup::NormalizedEvent = &$event;
        assert!(!event.title.is_empty(), "empty title: {:?}", event);
        assert!(!event.url.is_empty(), "empty url: {:?}", event);
        assert!(
            event.starts_at <= event.ends_at,
            "event ends before it starts: {:?}",
            event
        );
        for instant in [event.starts_at.to_rfc3339(), event.ends_at.to_rfc3339()] {
            let offset = &instant[instant.len() - 6..];
            assert!(
                offset.starts_with('+') || offset.starts_with('-'),
                "instant {instant:?} has no offset"
            );
        }
    }};
}
