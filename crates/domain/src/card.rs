//! Card value objects — configuration, registration descriptor and the
//! display model derived on every render.

use serde::{Deserialize, Serialize};

use crate::entity::EntitySnapshot;
use crate::error::ConfigParseError;
use crate::id::EntityId;

/// Icon shown when neither the configuration nor the entity provides one.
pub const FALLBACK_ICON: &str = "mdi:power-plug";

/// Configuration of a switch card, as persisted by the host.
///
/// Only `entity`, `icon` and `name` are interpreted. The host's generic card
/// fields (`type`, layout keys, …) are carried through untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SwitchCardConfig {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SwitchCardConfig {
    /// A configuration targeting `entity` with no overrides.
    #[must_use]
    pub fn for_entity(entity: impl Into<EntityId>) -> Self {
        Self {
            entity: Some(entity.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Decode a host-supplied configuration object.
    ///
    /// Only the structural shape is checked; an empty or unknown `entity`
    /// is accepted here and surfaces later as an empty render.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigParseError`] when `value` is not an object or a
    /// recognised field has the wrong type.
    pub fn from_json(value: serde_json::Value) -> Result<Self, ConfigParseError> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Registration metadata announced to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDescriptor {
    #[serde(rename = "type")]
    pub card_type: String,
    pub name: String,
    pub description: String,
}

/// What the state indicator shows. Derived per render, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayModel {
    pub icon: String,
    pub name: Option<String>,
    pub value: String,
    pub active: bool,
}

impl DisplayModel {
    /// Derive the display model from the configuration and the entity's
    /// current snapshot.
    ///
    /// Precedence, first present value wins:
    /// - icon: configured icon, entity `icon` attribute, [`FALLBACK_ICON`]
    /// - name: configured name, entity `friendly_name` attribute
    ///
    /// `active` is set only for the exact label `on`.
    #[must_use]
    pub fn derive(config: &SwitchCardConfig, snapshot: &EntitySnapshot) -> Self {
        let icon = config
            .icon
            .as_deref()
            .or_else(|| snapshot.icon())
            .unwrap_or(FALLBACK_ICON)
            .to_string();
        let name = config
            .name
            .as_deref()
            .or_else(|| snapshot.friendly_name())
            .map(str::to_string);
        let value = snapshot.state.as_str().to_string();
        let active = snapshot.state.is_on();

        Self {
            icon,
            name,
            value,
            active,
        }
    }
}
