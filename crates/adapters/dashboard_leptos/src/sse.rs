//! SSE client module for subscribing to `/api/states/stream`.
//!
//! Each message carries the host's full state mapping; the latest one is
//! exposed as a Leptos signal.

use leptos::prelude::*;
use minicard_domain::states::HostStates;
use wasm_bindgen::prelude::*;
use web_sys::{EventSource, MessageEvent};

/// Guard that closes the `EventSource` connection on drop (if connected).
pub struct SseConnection {
    source: Option<EventSource>,
    _on_message: Option<Closure<dyn FnMut(MessageEvent)>>,
    _on_error: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

impl Drop for SseConnection {
    fn drop(&mut self) {
        if let Some(source) = &self.source {
            source.close();
        }
    }
}

/// Subscribe to the host state stream.
///
/// The signal stays `None` until the first snapshot arrives, which the card
/// treats as "no host connection". If the `EventSource` cannot be created
/// the signal never leaves `None` and the guard is inert.
pub fn use_host_states() -> (ReadSignal<Option<HostStates>>, SseConnection) {
    let (states, set_states) = signal(None::<HostStates>);

    let inert = |states| {
        (
            states,
            SseConnection {
                source: None,
                _on_message: None,
                _on_error: None,
            },
        )
    };

    let source = match EventSource::new("/api/states/stream") {
        Ok(s) => s,
        Err(err) => {
            leptos::logging::warn!("failed to create EventSource: {err:?}");
            return inert(states);
        }
    };

    let on_message = Closure::<dyn FnMut(MessageEvent)>::new(move |msg: MessageEvent| {
        if let Some(data) = msg.data().as_string() {
            match serde_json::from_str::<HostStates>(&data) {
                Ok(snapshot) => set_states.set(Some(snapshot)),
                Err(err) => leptos::logging::warn!("failed to parse state snapshot: {err}"),
            }
        }
    });

    let on_error = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        leptos::logging::warn!("state stream error, browser will reconnect");
    });

    let listeners = source
        .add_event_listener_with_callback("message", on_message.as_ref().unchecked_ref())
        .and_then(|()| {
            source.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
        });
    if let Err(err) = listeners {
        leptos::logging::warn!("failed to attach state stream listeners: {err:?}");
        source.close();
        return inert(states);
    }

    let conn = SseConnection {
        source: Some(source),
        _on_message: Some(on_message),
        _on_error: Some(on_error),
    };

    (states, conn)
}
