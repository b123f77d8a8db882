//! Event projector — the single pass from entity store to normalised events.
//!
//! Raw `Event` records are validated into an [`EventRecord`] at one seam;
//! everything downstream works on typed values. Projection is all or
//! nothing: the first malformed event or dangling reference aborts the call.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_json::Value;

use crate::config::Config;
use crate::entity::{EntityIndex, EntityView, RawRecord, Ref};
use crate::error::{ParseError, ParseResult};
use crate::markup::locate_state_script;
use crate::state::decode_state;
use crate::types::{EntityKind, NormalizedEvent};
use crate::venue::normalize_venue_with;

/// ISO-8601 forms tried after RFC 3339. `%#z` takes `+01:00`, `+0100` and
/// `+01`; every form still requires an offset.
const ISO_8601_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y%m%dT%H%M%S%#z",
];

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// A configured extractor. Holds no per-call state, so one instance can be
/// shared freely.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: Config,
}

impl Parser {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Locate, decode and project the state embedded in `markup`.
    pub fn parse(&self, markup: &str) -> ParseResult<Vec<NormalizedEvent>> {
        let raw = locate_state_script(markup, &self.config.markup.state_selector)?;
        let state = decode_state(&raw)?;
        self.parse_next_state(&state)
    }

    /// Project an already decoded state object.
    pub fn parse_next_state(&self, state: &Value) -> ParseResult<Vec<NormalizedEvent>> {
        let index = EntityIndex::from_state(state, &self.config.state.entity_store_path)?;
        self.project(&index)
    }

    /// Emit one [`NormalizedEvent`] per active event, in store order.
    pub fn project(&self, index: &EntityIndex<'_>) -> ParseResult<Vec<NormalizedEvent>> {
        let events = index.select(EntityKind::Event);
        let venues = index.select(EntityKind::Venue);
        let groups = index.select(EntityKind::Group);
        tracing::debug!(
            entities = index.len(),
            events = events.len(),
            venues = venues.len(),
            groups = groups.len(),
            "projecting entity store"
        );

        let active = &self.config.events.active_status;
        let projected = events
            .iter()
            .filter(|(key, raw)| {
                let status = raw.get("status").and_then(Value::as_str);
                let keep = status == Some(active.as_str());
                if !keep {
                    tracing::trace!(key, ?status, "skipping inactive event");
                }
                keep
            })
            .map(|(key, raw)| self.project_event(key, raw, &venues, &groups))
            .collect::<ParseResult<Vec<_>>>()?;

        tracing::debug!(emitted = projected.len(), "projected events");
        Ok(projected)
    }

    fn project_event(
        &self,
        key: &str,
        raw: &RawRecord,
        venues: &EntityView<'_>,
        groups: &EntityView<'_>,
    ) -> ParseResult<NormalizedEvent> {
        let event = EventRecord::from_raw(key, raw)?;

        let venue = match &event.venue {
            Some(reference) => {
                let raw_venue = venues.resolve(key, "venue", reference)?;
                normalize_venue_with(Some(raw_venue), &self.config.events.online_venue_name)
            }
            None => None,
        };

        let group_name = match &event.group {
            Some(reference) => match groups.resolve(key, "group", reference) {
                Ok(group) => group.get("name").and_then(Value::as_str).map(str::to_string),
                Err(err) if !self.config.events.strict_group_refs => {
                    tracing::warn!(%err, "ignoring dangling group reference");
                    None
                }
                Err(err) => return Err(err),
            },
            None => None,
        };

        Ok(NormalizedEvent {
            title: event.title.to_string(),
            url: event.url.to_string(),
            description: event.description.to_string(),
            starts_at: event.starts_at,
            ends_at: event.ends_at,
            venue,
            group_name,
        })
    }
}

// ---------------------------------------------------------------------------
// EventRecord
// ---------------------------------------------------------------------------

/// A validated `Event` record, borrowing its text from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord<'a> {
    pub title: &'a str,
    pub url: &'a str,
    pub description: &'a str,
    pub starts_at: DateTime<FixedOffset>,
    pub ends_at: DateTime<FixedOffset>,
    pub venue: Option<Ref>,
    pub group: Option<Ref>,
}

impl<'a> EventRecord<'a> {
    pub fn from_raw(key: &str, raw: &'a RawRecord) -> ParseResult<Self> {
        Ok(Self {
            title: required_str(key, raw, "title")?,
            url: required_str(key, raw, "eventUrl")?,
            description: required_str(key, raw, "description")?,
            starts_at: parse_instant(key, "dateTime", required_str(key, raw, "dateTime")?)?,
            ends_at: parse_instant(key, "endTime", required_str(key, raw, "endTime")?)?,
            venue: optional_ref(key, raw, "venue")?,
            group: optional_ref(key, raw, "group")?,
        })
    }
}

fn required_str<'a>(key: &str, raw: &'a RawRecord, field: &str) -> ParseResult<&'a str> {
    match raw.get(field) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(Value::Null) | None => Err(ParseError::malformed_event(key, field, "is missing")),
        Some(_) => Err(ParseError::malformed_event(key, field, "is not a string")),
    }
}

fn optional_ref(key: &str, raw: &RawRecord, field: &str) -> ParseResult<Option<Ref>> {
    match raw.get(field) {
        Some(Value::Null) | None => Ok(None),
        Some(value) => Ref::deserialize(value)
            .map(Some)
            .map_err(|err| {
                ParseError::malformed_event(key, field, format!("is not a reference: {err}"))
            }),
    }
}

/// Parse an ISO-8601 timestamp that carries an explicit offset. Strings
/// without one are rejected; no zone is ever assumed.
pub fn parse_instant(key: &str, field: &str, text: &str) -> ParseResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(text)
        .or_else(|err| {
            ISO_8601_FORMATS
                .iter()
                .find_map(|format| DateTime::parse_from_str(text, format).ok())
                .ok_or(err)
        })
        .map_err(|err| {
            ParseError::malformed_event(
                key,
                field,
                format!("is not an ISO-8601 timestamp with offset ({text:?}: {err})"),
            )
        })
}
