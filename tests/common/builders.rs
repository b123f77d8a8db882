//! Test builders — ergonomic constructors for raw store entities.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They produce `serde_json::Value`s shaped like the Apollo
//! cache entries found in `__APOLLO_STATE__`.

use serde_json::{json, Map, Value};

// ---------------------------------------------------------------------------
// EventBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for raw `Event` entities.
///
/// # Example
///
/// ```rust
/// let event = EventBuilder::new("304008256")
///     .title("PyData Prague #23")
///     .venue("Venue:1")
///     .group("Group:5")
///     .build();
/// ```
pub struct EventBuilder {
    fields: Map<String, Value>,
}

impl EventBuilder {
    pub fn new(id: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("__typename".into(), json!("Event"));
        fields.insert("id".into(), json!(id));
        fields.insert("title".into(), json!(format!("Event {id}")));
        fields.insert(
            "eventUrl".into(),
            json!(format!("https://www.meetup.com/pydata-prague/events/{id}/")),
        );
        fields.insert("description".into(), json!("An evening of talks."));
        fields.insert("dateTime".into(), json!("2024-11-07T18:00:00+01:00"));
        fields.insert("endTime".into(), json!("2024-11-07T21:00:00+01:00"));
        fields.insert("status".into(), json!("ACTIVE"));
        fields.insert("venue".into(), Value::Null);
        fields.insert("group".into(), Value::Null);
        Self { fields }
    }

    pub fn title(self, title: &str) -> Self {
        self.set("title", json!(title))
    }

    pub fn status(self, status: &str) -> Self {
        self.set("status", json!(status))
    }

    pub fn starts(self, date_time: &str) -> Self {
        self.set("dateTime", json!(date_time))
    }

    pub fn ends(self, end_time: &str) -> Self {
        self.set("endTime", json!(end_time))
    }

    pub fn venue(self, key: &str) -> Self {
        self.set("venue", json!({ "__ref": key }))
    }

    pub fn group(self, key: &str) -> Self {
        self.set("group", json!({ "__ref": key }))
    }

    pub fn set(mut self, field: &str, value: Value) -> Self {
        self.fields.insert(field.to_string(), value);
        self
    }

    pub fn without(mut self, field: &str) -> Self {
        self.fields.remove(field);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

// ---------------------------------------------------------------------------
// Venue / group helpers
// ---------------------------------------------------------------------------

/// A raw `Venue` entity with the given name and location fields.
pub fn venue(name: &str, address: &str, city: &str, state: &str, country: &str) -> Value {
    json!({
        "__typename": "Venue",
        "name": name,
        "address": address,
        "city": city,
        "state": state,
        "country": country,
    })
}

/// A raw `Group` entity.
pub fn group(name: &str) -> Value {
    json!({ "__typename": "Group", "name": name })
}

// ---------------------------------------------------------------------------
// StoreBuilder
// ---------------------------------------------------------------------------

/// Assembles entities into a full `__NEXT_DATA__` state object.
#[derive(Default)]
pub struct StoreBuilder {
    store: Map<String, Value>,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entity(mut self, key: &str, value: Value) -> Self {
        self.store.insert(key.to_string(), value);
        self
    }

    /// Just the flat entity store.
    pub fn store(self) -> Value {
        Value::Object(self.store)
    }

    /// The store wrapped at `props.pageProps.__APOLLO_STATE__`.
    pub fn build(self) -> Value {
        json!({ "props": { "pageProps": { "__APOLLO_STATE__": self.store() } } })
    }
}
