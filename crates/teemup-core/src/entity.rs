//! Entity index — typed views over the flat Apollo cache dump.
//!
//! The store maps composite keys (`"Venue:27152599"`) to raw records. Each
//! record is classified once into an [`Entity`] variant by its `__typename`;
//! references between records are plain `{"__ref": "<key>"}` objects resolved
//! through [`EntityView::resolve`].

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{ParseError, ParseResult};
use crate::types::EntityKind;

/// A raw entity record as found in the store.
pub type RawRecord = Map<String, Value>;

const TYPENAME: &str = "__typename";

// ---------------------------------------------------------------------------
// Composite keys and references
// ---------------------------------------------------------------------------

/// A `"Kind:id"` store key split into its two halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeKey<'a> {
    pub kind: &'a str,
    pub id: &'a str,
}

impl<'a> CompositeKey<'a> {
    /// Split on the first `:`. Keys without one (e.g. `ROOT_QUERY`) yield
    /// `None`.
    pub fn parse(key: &'a str) -> Option<Self> {
        let (kind, id) = key.split_once(':')?;
        Some(Self { kind, id })
    }
}

impl std::fmt::Display for CompositeKey<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// A reference field: `{"__ref": "Venue:27152599"}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ref {
    #[serde(rename = "__ref")]
    pub key: String,
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// One store record, tagged by the kinds the projector understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entity<'a> {
    Event(&'a RawRecord),
    Venue(&'a RawRecord),
    Group(&'a RawRecord),
    /// Any other typename, or a value that is not a record at all.
    Other,
}

impl<'a> Entity<'a> {
    pub fn classify(value: &'a Value) -> Self {
        let Some(record) = value.as_object() else {
            return Entity::Other;
        };
        let kind = record
            .get(TYPENAME)
            .and_then(Value::as_str)
            .and_then(EntityKind::from_typename);
        match kind {
            Some(EntityKind::Event) => Entity::Event(record),
            Some(EntityKind::Venue) => Entity::Venue(record),
            Some(EntityKind::Group) => Entity::Group(record),
            None => Entity::Other,
        }
    }

    pub fn kind(&self) -> Option<EntityKind> {
        match self {
            Entity::Event(_) => Some(EntityKind::Event),
            Entity::Venue(_) => Some(EntityKind::Venue),
            Entity::Group(_) => Some(EntityKind::Group),
            Entity::Other => None,
        }
    }

    pub fn record(&self) -> Option<&'a RawRecord> {
        match *self {
            Entity::Event(r) | Entity::Venue(r) | Entity::Group(r) => Some(r),
            Entity::Other => None,
        }
    }
}

// ---------------------------------------------------------------------------
// EntityIndex
// ---------------------------------------------------------------------------

/// Classified entries of the flat store, in store iteration order.
#[derive(Debug, Clone)]
pub struct EntityIndex<'a> {
    entries: Vec<(&'a str, Entity<'a>)>,
}

impl<'a> EntityIndex<'a> {
    /// Walk `path` from the decoded state down to the entity store.
    pub fn from_state(state: &'a Value, path: &[String]) -> ParseResult<Self> {
        let mut node = state;
        for segment in path {
            node = node
                .get(segment)
                .ok_or_else(|| ParseError::missing_path(path, segment.as_str()))?;
        }
        let store = node.as_object().ok_or_else(|| {
            ParseError::missing_path(path, path.last().map(String::as_str).unwrap_or(""))
        })?;
        Ok(Self::from_store(store))
    }

    pub fn from_store(store: &'a Map<String, Value>) -> Self {
        let entries = store
            .iter()
            .map(|(key, value)| (key.as_str(), Entity::classify(value)))
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entities(&self) -> impl Iterator<Item = (&'a str, Entity<'a>)> + '_ {
        self.entries.iter().copied()
    }

    /// All records whose `__typename` is `kind`, keys preserved.
    pub fn select(&self, kind: EntityKind) -> EntityView<'a> {
        let entries: Vec<(&'a str, &'a RawRecord)> = self
            .entries
            .iter()
            .filter(|(_, entity)| entity.kind() == Some(kind))
            .filter_map(|(key, entity)| entity.record().map(|r| (*key, r)))
            .collect();
        let positions = entries
            .iter()
            .enumerate()
            .map(|(i, (key, _))| (*key, i))
            .collect();
        EntityView {
            kind,
            entries,
            positions,
        }
    }
}

// ---------------------------------------------------------------------------
// EntityView
// ---------------------------------------------------------------------------

/// Records of a single kind with keyed lookup.
#[derive(Debug, Clone)]
pub struct EntityView<'a> {
    kind: EntityKind,
    entries: Vec<(&'a str, &'a RawRecord)>,
    positions: HashMap<&'a str, usize>,
}

impl<'a> EntityView<'a> {
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a RawRecord)> + '_ {
        self.entries.iter().copied()
    }

    pub fn get(&self, key: &str) -> Option<&'a RawRecord> {
        self.positions.get(key).map(|&i| self.entries[i].1)
    }

    /// Resolve `reference`, found in field `field` of entity `from`.
    pub fn resolve(&self, from: &str, field: &str, reference: &Ref) -> ParseResult<&'a RawRecord> {
        self.get(&reference.key)
            .ok_or_else(|| ParseError::dangling(from, field, reference.key.as_str()))
    }
}
