//! HTTP service caller wrapping `gloo-net` for calls to `/api/services/*`.

use gloo_net::http::Request;
use leptos::task::spawn_local;
use minicard_app::ports::ServiceCaller;
use minicard_domain::error::DispatchError;
use minicard_domain::service::ServiceCall;

/// URL of the endpoint serving `domain.service`.
fn service_url(call: &ServiceCall) -> String {
    format!("/api/services/{}/{}", call.domain, call.service)
}

/// [`ServiceCaller`] posting each call to the host's HTTP API.
///
/// The request runs on a spawned task; the outcome is only logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpServiceCaller;

impl ServiceCaller for HttpServiceCaller {
    fn call_service(&self, call: ServiceCall) -> Result<(), DispatchError> {
        let request = Request::post(&service_url(&call))
            .json(&call.data)
            .map_err(|err| DispatchError::Transport(err.to_string()))?;

        spawn_local(async move {
            match request.send().await {
                Ok(resp) if resp.ok() => {}
                Ok(resp) => {
                    leptos::logging::warn!("service call {call} rejected: HTTP {}", resp.status());
                }
                Err(err) => leptos::logging::warn!("service call {call} failed: {err}"),
            }
        });
        Ok(())
    }
}
