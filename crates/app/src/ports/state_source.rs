//! State source port — the host connection as seen by the card.

use minicard_domain::states::HostStates;

/// Provides the host's current state mapping.
///
/// `None` means no host connection is available yet.
pub trait StateSource {
    fn states(&self) -> Option<&HostStates>;
}

impl StateSource for HostStates {
    fn states(&self) -> Option<&HostStates> {
        Some(self)
    }
}

impl StateSource for Option<HostStates> {
    fn states(&self) -> Option<&HostStates> {
        self.as_ref()
    }
}

impl<T: StateSource + ?Sized> StateSource for &T {
    fn states(&self) -> Option<&HostStates> {
        (**self).states()
    }
}
