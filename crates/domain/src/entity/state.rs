//! Entity state — the raw state label the host reports for an entity.

use serde::{Deserialize, Serialize};

/// State label of an entity.
///
/// The well-known labels get their own variants; anything else the host
/// reports is kept verbatim in [`Other`](Self::Other). Matching is exact
/// and case-sensitive: `"On"` is not [`On`](Self::On).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityState {
    On,
    Off,
    #[default]
    Unknown,
    Unavailable,
    Other(String),
}

impl EntityState {
    /// The label exactly as the host reports it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Unknown => "unknown",
            Self::Unavailable => "unavailable",
            Self::Other(label) => label,
        }
    }

    /// Whether the entity is `on`.
    #[must_use]
    pub fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }

    /// The state a `toggle` service leads to: `on` becomes `off`, anything
    /// else becomes `on`.
    #[must_use]
    pub fn toggled(&self) -> Self {
        match self {
            Self::On => Self::Off,
            _ => Self::On,
        }
    }
}

impl From<String> for EntityState {
    fn from(label: String) -> Self {
        match label.as_str() {
            "on" => Self::On,
            "off" => Self::Off,
            "unknown" => Self::Unknown,
            "unavailable" => Self::Unavailable,
            _ => Self::Other(label),
        }
    }
}

impl From<&str> for EntityState {
    fn from(label: &str) -> Self {
        Self::from(label.to_string())
    }
}

impl From<EntityState> for String {
    fn from(state: EntityState) -> Self {
        match state {
            EntityState::Other(label) => label,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for EntityState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
