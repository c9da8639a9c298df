//! Entity snapshot — the state of one entity as the host reports it on a
//! refresh.
//!
//! Snapshots are owned by the host; the card only ever borrows them for the
//! duration of a render.

mod attribute_value;
mod state;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use attribute_value::AttributeValue;
pub use state::EntityState;

/// UTC timestamp used for `last_changed` / `last_updated`.
pub type Timestamp = DateTime<Utc>;

/// Attribute key carrying the entity's own icon.
pub const ATTR_ICON: &str = "icon";
/// Attribute key carrying the entity's display name.
pub const ATTR_FRIENDLY_NAME: &str = "friendly_name";

/// Snapshot of one entity: a state label plus free-form attributes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub state: EntityState,
    #[serde(default)]
    pub attributes: HashMap<String, AttributeValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_changed: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<Timestamp>,
}

impl EntitySnapshot {
    /// Create a snapshot in the given state with no attributes.
    #[must_use]
    pub fn new(state: impl Into<EntityState>) -> Self {
        Self {
            state: state.into(),
            ..Self::default()
        }
    }

    /// Builder-style attribute setter.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// A string attribute, or `None` when missing or not a string.
    #[must_use]
    pub fn attribute_str(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(AttributeValue::as_str)
    }

    /// The reported `icon` attribute.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.attribute_str(ATTR_ICON)
    }

    /// The reported `friendly_name` attribute.
    #[must_use]
    pub fn friendly_name(&self) -> Option<&str> {
        self.attribute_str(ATTR_FRIENDLY_NAME)
    }

    /// Move to `new_state`, bumping `last_updated` and, when the state
    /// actually differs, `last_changed`.
    pub fn update_state(&mut self, new_state: EntityState, at: Timestamp) {
        if self.state != new_state {
            self.state = new_state;
            self.last_changed = Some(at);
        }
        self.last_updated = Some(at);
    }
}
