//! Card registry — the list of custom cards announced to the host.
//!
//! The hosting application builds one registry during startup and registers
//! each card exactly once. Nothing registers itself at load time.

use minicard_domain::card::CardDescriptor;
use minicard_domain::error::RegistryError;

/// Registered card descriptors, in registration order.
#[derive(Debug, Default)]
pub struct CardRegistry {
    cards: Vec<CardDescriptor>,
}

impl CardRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Announce a card to the host.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AlreadyRegistered`] if a card with the same
    /// `type` was registered before; the registry is left unchanged.
    pub fn register_card(&mut self, descriptor: CardDescriptor) -> Result<(), RegistryError> {
        if self.get(&descriptor.card_type).is_some() {
            return Err(RegistryError::AlreadyRegistered(descriptor.card_type));
        }
        tracing::debug!(card_type = %descriptor.card_type, "registering card");
        self.cards.push(descriptor);
        Ok(())
    }

    /// Look up a registered card by type.
    #[must_use]
    pub fn get(&self, card_type: &str) -> Option<&CardDescriptor> {
        self.cards.iter().find(|card| card.card_type == card_type)
    }

    /// All registered cards.
    #[must_use]
    pub fn cards(&self) -> &[CardDescriptor] {
        &self.cards
    }
}
