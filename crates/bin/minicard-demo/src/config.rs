//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `minicard.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use minicard_app::switch_card::{CUSTOM_CARD_TYPE, SwitchCard};
use minicard_domain::card::SwitchCardConfig;
use minicard_domain::entity::{ATTR_FRIENDLY_NAME, ATTR_ICON, EntitySnapshot};
use minicard_domain::states::HostStates;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Card options.
    pub card: CardConfig,
    /// Virtual host seed data.
    pub host: HostConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Switch card options. Without an `entity`, a stub configuration is
/// derived from the host's entities.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub entity: Option<String>,
    pub icon: Option<String>,
    pub name: Option<String>,
}

/// Entities the virtual host starts with, in order.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub entities: Vec<EntitySeed>,
}

/// One seeded entity.
#[derive(Debug, Clone, Deserialize)]
pub struct EntitySeed {
    pub entity_id: String,
    #[serde(default = "default_seed_state")]
    pub state: String,
    #[serde(default)]
    pub friendly_name: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

fn default_seed_state() -> String {
    "off".to_string()
}

impl Config {
    /// Load configuration from `minicard.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("minicard.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("MINICARD_ENTITY") {
            self.card.entity = Some(val);
        }
        if let Some(val) = lookup("MINICARD_ICON") {
            self.card.icon = Some(val);
        }
        if let Some(val) = lookup("MINICARD_NAME") {
            self.card.name = Some(val);
        }
        if let Some(val) = lookup("MINICARD_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = std::collections::HashSet::new();
        for seed in &self.host.entities {
            if seed.entity_id.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "host entity_id must not be empty".to_string(),
                ));
            }
            if !seen.insert(seed.entity_id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "host entity {} is declared twice",
                    seed.entity_id
                )));
            }
        }
        Ok(())
    }

    /// The host's initial state mapping, in declaration order.
    #[must_use]
    pub fn host_states(&self) -> HostStates {
        self.host
            .entities
            .iter()
            .map(|seed| (seed.entity_id.as_str(), seed.snapshot()))
            .collect()
    }

    /// The card configuration: the configured entity, or a stub picked from
    /// `states`, with the icon/name overrides applied either way.
    #[must_use]
    pub fn card_config(&self, states: &HostStates) -> SwitchCardConfig {
        let mut config = match &self.card.entity {
            Some(entity) => SwitchCardConfig {
                card_type: Some(CUSTOM_CARD_TYPE.to_string()),
                ..SwitchCardConfig::for_entity(entity.as_str())
            },
            None => SwitchCard::get_stub_config(states),
        };
        config.icon.clone_from(&self.card.icon);
        config.name.clone_from(&self.card.name);
        config
    }
}

impl EntitySeed {
    fn snapshot(&self) -> EntitySnapshot {
        let mut snapshot = EntitySnapshot::new(self.state.as_str());
        if let Some(name) = &self.friendly_name {
            snapshot = snapshot.with_attribute(ATTR_FRIENDLY_NAME, name.as_str());
        }
        if let Some(icon) = &self.icon {
            snapshot = snapshot.with_attribute(ATTR_ICON, icon.as_str());
        }
        snapshot
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        let seed = |entity_id: &str, state: &str, name: &str| EntitySeed {
            entity_id: entity_id.to_string(),
            state: state.to_string(),
            friendly_name: Some(name.to_string()),
            icon: None,
        };
        Self {
            entities: vec![
                seed("light.living_room", "on", "Living Room"),
                seed("switch.kitchen", "off", "Kitchen"),
                seed("switch.fan", "on", "Fan"),
            ],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "minicard_demo=info,minicard=info,minicard_adapter_virtual=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use minicard_domain::id::EntityId;
    use std::collections::HashMap;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert!(config.card.entity.is_none());
        assert_eq!(config.host.entities.len(), 3);
        assert!(config.logging.filter.contains("minicard_demo=info"));
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.host.entities.len(), 3);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [card]
            entity = 'switch.heater'
            icon = 'mdi:radiator'
            name = 'Heater'

            [[host.entities]]
            entity_id = 'switch.heater'
            state = 'on'
            friendly_name = 'Bathroom heater'

            [[host.entities]]
            entity_id = 'sensor.temperature'
            state = '21.5'
            icon = 'mdi:thermometer'

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.card.entity.as_deref(), Some("switch.heater"));
        assert_eq!(config.card.icon.as_deref(), Some("mdi:radiator"));
        assert_eq!(config.host.entities.len(), 2);
        assert_eq!(config.host.entities[1].icon.as_deref(), Some("mdi:thermometer"));
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_default_seed_state_to_off() {
        let toml = "
            [[host.entities]]
            entity_id = 'switch.a'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.host.entities[0].state, "off");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.host.entities.len(), 3);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_apply_overrides_with_rust_log_last() {
        let env: HashMap<&str, &str> = [
            ("MINICARD_ENTITY", "switch.fan"),
            ("MINICARD_NAME", "Ceiling fan"),
            ("MINICARD_LOG", "warn"),
            ("RUST_LOG", "trace"),
        ]
        .into_iter()
        .collect();
        let mut config = Config::default();

        config.apply_overrides(|key| env.get(key).map(ToString::to_string));

        assert_eq!(config.card.entity.as_deref(), Some("switch.fan"));
        assert_eq!(config.card.name.as_deref(), Some("Ceiling fan"));
        assert_eq!(config.card.icon, None);
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_reject_empty_entity_id() {
        let mut config = Config::default();
        config.host.entities[0].entity_id = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_duplicate_entity_id() {
        let mut config = Config::default();
        let dup = config.host.entities[1].clone();
        config.host.entities.push(dup);
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_seed_states_in_declaration_order() {
        let states = Config::default().host_states();
        let ids: Vec<&str> = states.ids().map(EntityId::as_str).collect();
        assert_eq!(ids, vec!["light.living_room", "switch.kitchen", "switch.fan"]);
        let kitchen = states.get(&EntityId::new("switch.kitchen")).unwrap();
        assert_eq!(kitchen.friendly_name(), Some("Kitchen"));
    }

    #[test]
    fn should_stub_card_from_first_switch() {
        let config = Config::default();
        let card = config.card_config(&config.host_states());
        assert_eq!(card.entity, Some(EntityId::new("switch.kitchen")));
        assert_eq!(card.card_type.as_deref(), Some("custom:mui-switch-card"));
    }

    #[test]
    fn should_apply_overrides_to_configured_card() {
        let mut config = Config::default();
        config.card.entity = Some("switch.fan".to_string());
        config.card.icon = Some("mdi:fan".to_string());

        let card = config.card_config(&config.host_states());

        assert_eq!(card.entity, Some(EntityId::new("switch.fan")));
        assert_eq!(card.icon.as_deref(), Some("mdi:fan"));
        assert_eq!(card.name, None);
    }

    #[test]
    fn should_set_card_type_on_configured_and_stub_cards() {
        let stub = Config::default();
        let mut configured = Config::default();
        configured.card.entity = Some("switch.fan".to_string());

        let from_stub = stub.card_config(&stub.host_states());
        let from_entity = configured.card_config(&configured.host_states());

        assert_eq!(from_entity.card_type.as_deref(), Some("custom:mui-switch-card"));
        assert_eq!(from_entity.card_type, from_stub.card_type);
    }
}
