//! # minicard-adapter-dashboard-leptos
//!
//! Draws the switch card in the browser and wires its click to the host's
//! HTTP service endpoint.
//!
//! Host state arrives through a server-sent events stream; every snapshot
//! triggers a re-render of the card.

use leptos::prelude::*;
use minicard_domain::card::SwitchCardConfig;

pub mod api;
mod components;
pub mod sse;

pub use components::{StateItem, SwitchCardView};

/// Root component: one switch card fed by the live state stream.
#[component]
pub fn App(
    /// Card configuration as persisted by the host.
    config: SwitchCardConfig,
) -> impl IntoView {
    let (states, connection) = sse::use_host_states();
    // closing the stream is tied to the app's owner
    let connection = StoredValue::new_local(Some(connection));
    on_cleanup(move || connection.update_value(|conn| drop(conn.take())));

    view! { <SwitchCardView config states=states/> }
}

/// Mount [`App`] on `<body>` with the given configuration.
pub fn mount(config: SwitchCardConfig) {
    mount_to_body(move || view! { <App config/> });
}
