//! Virtual device behaviour, selected by entity domain.
//!
//! Only switches react to service calls; entities of any other domain are
//! plain state holders.

mod switch;

use minicard_domain::entity::EntityState;
use minicard_domain::id::EntityId;
use minicard_domain::service::SWITCH_DOMAIN;

/// Behaviour attached to a seeded entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VirtualDevice {
    Switch,
    Passive,
}

impl VirtualDevice {
    /// Pick the behaviour for `entity_id` from its domain.
    #[must_use]
    pub fn for_entity(entity_id: &EntityId) -> Self {
        if entity_id.is_domain(SWITCH_DOMAIN) {
            Self::Switch
        } else {
            Self::Passive
        }
    }

    /// Whether this device serves calls addressed to `domain`.
    #[must_use]
    pub fn serves(self, domain: &str) -> bool {
        match self {
            Self::Switch => domain == SWITCH_DOMAIN,
            Self::Passive => false,
        }
    }

    /// The state resulting from `service`, or `None` if unsupported.
    #[must_use]
    pub fn handle_service(self, service: &str, current: &EntityState) -> Option<EntityState> {
        match self {
            Self::Switch => switch::handle_service(service, current),
            Self::Passive => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_pick_switch_for_switch_domain() {
        let device = VirtualDevice::for_entity(&EntityId::new("switch.fan"));
        assert_eq!(device, VirtualDevice::Switch);
        assert!(device.serves("switch"));
        assert!(!device.serves("light"));
    }

    #[test]
    fn should_treat_other_domains_as_passive() {
        let device = VirtualDevice::for_entity(&EntityId::new("sensor.temperature"));
        assert_eq!(device, VirtualDevice::Passive);
        assert_eq!(device.handle_service("toggle", &EntityState::Off), None);
    }
}
