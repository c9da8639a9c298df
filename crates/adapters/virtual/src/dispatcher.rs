//! Channel-backed service dispatcher.

use tokio::sync::mpsc;

use minicard_app::ports::ServiceCaller;
use minicard_domain::error::DispatchError;
use minicard_domain::service::ServiceCall;

/// [`ServiceCaller`] that queues calls on an unbounded tokio channel.
///
/// Sending never blocks; the call is queued before `call_service` returns
/// and is applied whenever the host drains its queue.
#[derive(Debug, Clone)]
pub struct ChannelServiceCaller {
    sender: mpsc::UnboundedSender<ServiceCall>,
}

impl ChannelServiceCaller {
    pub(crate) fn new(sender: mpsc::UnboundedSender<ServiceCall>) -> Self {
        Self { sender }
    }
}

impl ServiceCaller for ChannelServiceCaller {
    fn call_service(&self, call: ServiceCall) -> Result<(), DispatchError> {
        self.sender
            .send(call)
            .map_err(|_| DispatchError::ChannelClosed)
    }
}
