//! Virtual switch — responds to `turn_on`, `turn_off`, `toggle`.

use minicard_domain::entity::EntityState;
use minicard_domain::service::{SERVICE_TOGGLE, SERVICE_TURN_OFF, SERVICE_TURN_ON};

/// The state a switch moves to for `service`, or `None` if the service is
/// not one a switch understands.
#[must_use]
pub fn handle_service(service: &str, current: &EntityState) -> Option<EntityState> {
    match service {
        SERVICE_TURN_ON => Some(EntityState::On),
        SERVICE_TURN_OFF => Some(EntityState::Off),
        SERVICE_TOGGLE => Some(current.toggled()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_turn_on_when_service_called() {
        assert_eq!(handle_service("turn_on", &EntityState::Off), Some(EntityState::On));
    }

    #[test]
    fn should_turn_off_when_service_called() {
        assert_eq!(handle_service("turn_off", &EntityState::On), Some(EntityState::Off));
    }

    #[test]
    fn should_toggle_from_off_to_on() {
        assert_eq!(handle_service("toggle", &EntityState::Off), Some(EntityState::On));
    }

    #[test]
    fn should_toggle_from_on_to_off() {
        assert_eq!(handle_service("toggle", &EntityState::On), Some(EntityState::Off));
    }

    #[test]
    fn should_toggle_unavailable_to_on() {
        assert_eq!(
            handle_service("toggle", &EntityState::Unavailable),
            Some(EntityState::On)
        );
    }

    #[test]
    fn should_ignore_unknown_service() {
        assert_eq!(handle_service("reboot", &EntityState::Off), None);
    }
}
