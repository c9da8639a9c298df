//! # minicard-adapter-virtual
//!
//! Virtual host that stands in for the dashboard's state store and command
//! channel, for demos and tests.
//!
//! ## Behaviour
//!
//! | Domain | Services | Effect |
//! |--------|----------|--------|
//! | `switch` | `turn_on` / `turn_off` / `toggle` | Updates the entity's state label |
//! | anything else | none | State is only changed through [`VirtualHost::upsert`] |
//!
//! Service calls are queued by [`ChannelServiceCaller`] and applied when the
//! host drains its queue with [`VirtualHost::process_pending`], mirroring a
//! real host where state changes arrive on a later refresh.
//!
//! ## Dependency rule
//!
//! Depends on `minicard-app` (port traits) and `minicard-domain` only.

mod devices;
mod dispatcher;

use chrono::Utc;
use tokio::sync::mpsc;

use minicard_app::ports::StateSource;
use minicard_domain::entity::{ATTR_FRIENDLY_NAME, EntitySnapshot, EntityState};
use minicard_domain::error::NotFoundError;
use minicard_domain::id::EntityId;
use minicard_domain::service::ServiceCall;
use minicard_domain::states::HostStates;

use devices::VirtualDevice;

pub use dispatcher::ChannelServiceCaller;

/// In-process host: ordered state store plus a queue of pending service calls.
#[derive(Debug)]
pub struct VirtualHost {
    states: HostStates,
    sender: mpsc::UnboundedSender<ServiceCall>,
    receiver: mpsc::UnboundedReceiver<ServiceCall>,
}

impl Default for VirtualHost {
    fn default() -> Self {
        Self::new(HostStates::new())
    }
}

impl VirtualHost {
    /// Create a host seeded with `states`.
    #[must_use]
    pub fn new(states: HostStates) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            states,
            sender,
            receiver,
        }
    }

    /// Seed a switch entity with a display name.
    #[must_use]
    pub fn with_switch(
        mut self,
        entity_id: impl Into<EntityId>,
        friendly_name: &str,
        state: impl Into<EntityState>,
    ) -> Self {
        let snapshot =
            EntitySnapshot::new(state).with_attribute(ATTR_FRIENDLY_NAME, friendly_name);
        self.upsert(entity_id, snapshot);
        self
    }

    /// A service caller feeding this host's queue.
    #[must_use]
    pub fn dispatcher(&self) -> ChannelServiceCaller {
        ChannelServiceCaller::new(self.sender.clone())
    }

    /// Insert or replace an entity snapshot.
    pub fn upsert(&mut self, entity_id: impl Into<EntityId>, snapshot: EntitySnapshot) {
        let entity_id = entity_id.into();
        tracing::debug!(entity = %entity_id, state = %snapshot.state, "upserting entity");
        self.states.insert(entity_id, snapshot);
    }

    /// Current snapshot of `entity_id`.
    #[must_use]
    pub fn get(&self, entity_id: &EntityId) -> Option<&EntitySnapshot> {
        self.states.get(entity_id)
    }

    /// Apply every queued service call, returning how many changed an entity.
    pub fn process_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(call) = self.receiver.try_recv() {
            match self.handle_service_call(&call) {
                Ok(true) => applied += 1,
                Ok(false) => tracing::debug!(%call, "service call ignored"),
                Err(err) => tracing::warn!(%call, error = %err, "service call failed"),
            }
        }
        applied
    }

    /// Apply one service call.
    ///
    /// Returns `Ok(false)` when the call has no target or the targeted
    /// entity does not serve the requested domain/service.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] when the targeted entity does not exist.
    pub fn handle_service_call(&mut self, call: &ServiceCall) -> Result<bool, NotFoundError> {
        let Some(entity_id) = call.data.entity_id.as_ref() else {
            return Ok(false);
        };
        let snapshot = self.states.get_mut(entity_id).ok_or_else(|| NotFoundError {
            entity: "Entity",
            id: entity_id.to_string(),
        })?;

        let device = VirtualDevice::for_entity(entity_id);
        if !device.serves(&call.domain) {
            return Ok(false);
        }
        let Some(new_state) = device.handle_service(&call.service, &snapshot.state) else {
            return Ok(false);
        };

        tracing::info!(entity = %entity_id, from = %snapshot.state, to = %new_state, "state changed");
        snapshot.update_state(new_state, Utc::now());
        Ok(true)
    }
}

impl StateSource for VirtualHost {
    fn states(&self) -> Option<&HostStates> {
        Some(&self.states)
    }
}
