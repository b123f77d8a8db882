//! Core types for teemup-core.
//!
//! This module defines the normalised records handed back to callers: the
//! [`NormalizedEvent`], its optional [`NormalizedVenue`], and the
//! [`EntityKind`] discriminant used to select entities from the store.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// A normalised event projected from one active `Event` entity.
///
/// Serialises to exactly the keys `title`, `url`, `description`,
/// `starts_at`, `ends_at`, `venue` and `group_name`; absent values become
/// `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedEvent {
    pub title: String,
    /// Public event page (`eventUrl` in the store).
    pub url: String,
    pub description: String,
    /// Start instant, carrying the offset found in the source string.
    pub starts_at: DateTime<FixedOffset>,
    /// End instant, carrying the offset found in the source string.
    pub ends_at: DateTime<FixedOffset>,
    /// `None` when the event has no venue or only the online placeholder.
    pub venue: Option<NormalizedVenue>,
    pub group_name: Option<String>,
}

/// A physical venue. Empty or missing fields are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedVenue {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl NormalizedVenue {
    /// True when none of the location fields carry a value.
    pub fn has_no_location(&self) -> bool {
        self.address.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.country.is_none()
    }
}

/// Entity kinds the projector cares about, keyed by `__typename`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Event,
    Venue,
    Group,
}

impl EntityKind {
    /// The `__typename` value identifying this kind in the store.
    pub fn typename(self) -> &'static str {
        match self {
            EntityKind::Event => "Event",
            EntityKind::Venue => "Venue",
            EntityKind::Group => "Group",
        }
    }

    pub fn from_typename(typename: &str) -> Option<Self> {
        match typename {
            "Event" => Some(EntityKind::Event),
            "Venue" => Some(EntityKind::Venue),
            "Group" => Some(EntityKind::Group),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.typename())
    }
}
