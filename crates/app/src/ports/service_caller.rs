//! Service caller port — the host's command channel.

use minicard_domain::error::DispatchError;
use minicard_domain::service::ServiceCall;

/// Dispatches service calls to the host.
///
/// Dispatch is synchronous and fire-and-forget: returning `Ok` means the
/// call was handed to the host, not that it was executed. Any resulting
/// state change reaches the card through a later refresh.
pub trait ServiceCaller {
    /// Hand `call` to the host's command channel.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] if the channel could not accept the call.
    fn call_service(&self, call: ServiceCall) -> Result<(), DispatchError>;
}

impl<T: ServiceCaller + ?Sized> ServiceCaller for &T {
    fn call_service(&self, call: ServiceCall) -> Result<(), DispatchError> {
        (**self).call_service(call)
    }
}
