//! Service call — a command sent to the host's service channel.
//!
//! Examples: `switch.toggle`, `switch.turn_on`, `light.turn_off`.

use serde::{Deserialize, Serialize};

use crate::id::EntityId;

/// Domain handling switch entities.
pub const SWITCH_DOMAIN: &str = "switch";
/// Flip a switch.
pub const SERVICE_TOGGLE: &str = "toggle";
/// Switch on.
pub const SERVICE_TURN_ON: &str = "turn_on";
/// Switch off.
pub const SERVICE_TURN_OFF: &str = "turn_off";

/// Payload of a service call targeting one entity.
///
/// `entity_id` is optional: a card without configuration still dispatches,
/// with the target left absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<EntityId>,
}

/// A fully addressed service call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCall {
    pub domain: String,
    pub service: String,
    pub data: ServiceData,
}

impl ServiceCall {
    /// Build a call for `domain.service` targeting `entity_id`.
    #[must_use]
    pub fn new(
        domain: impl Into<String>,
        service: impl Into<String>,
        entity_id: Option<EntityId>,
    ) -> Self {
        Self {
            domain: domain.into(),
            service: service.into(),
            data: ServiceData { entity_id },
        }
    }

    /// `switch.toggle` for `entity_id`.
    #[must_use]
    pub fn switch_toggle(entity_id: Option<EntityId>) -> Self {
        Self::new(SWITCH_DOMAIN, SERVICE_TOGGLE, entity_id)
    }
}

impl std::fmt::Display for ServiceCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.domain, self.service)?;
        if let Some(entity_id) = &self.data.entity_id {
            write!(f, "({entity_id})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_switch_toggle() {
        let call = ServiceCall::switch_toggle(Some(EntityId::new("switch.kitchen")));
        assert_eq!(call.domain, "switch");
        assert_eq!(call.service, "toggle");
        assert_eq!(call.data.entity_id, Some(EntityId::new("switch.kitchen")));
    }

    #[test]
    fn should_serialize_payload_with_entity_id() {
        let call = ServiceCall::switch_toggle(Some(EntityId::new("switch.kitchen")));
        let json = serde_json::to_value(&call).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "domain": "switch",
                "service": "toggle",
                "data": {"entity_id": "switch.kitchen"}
            })
        );
    }

    #[test]
    fn should_omit_absent_entity_id() {
        let call = ServiceCall::switch_toggle(None);
        let json = serde_json::to_value(&call.data).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn should_display_dotted_name_with_target() {
        let call = ServiceCall::switch_toggle(Some(EntityId::new("switch.fan")));
        assert_eq!(call.to_string(), "switch.toggle(switch.fan)");
        assert_eq!(ServiceCall::switch_toggle(None).to_string(), "switch.toggle");
    }
}
