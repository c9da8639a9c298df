//! Switch card component.

use leptos::prelude::*;
use minicard_app::switch_card::{Rendered, STYLES, SwitchCard};
use minicard_domain::card::SwitchCardConfig;
use minicard_domain::states::HostStates;

use super::StateItem;
use crate::api::HttpServiceCaller;

/// Switch card bound to the live host state.
///
/// Re-renders on every state snapshot; draws nothing until the host is
/// connected and the configured entity exists. The card carries its own
/// stylesheet so the active accent applies wherever it is mounted.
#[component]
pub fn SwitchCardView(
    /// Card configuration.
    config: SwitchCardConfig,
    /// Latest host state mapping; `None` while disconnected.
    #[prop(into)]
    states: Signal<Option<HostStates>>,
) -> impl IntoView {
    let mut card = SwitchCard::new();
    card.set_config(config);
    let card = StoredValue::new(card);

    let on_click = move |_| card.with_value(|card| card.click_handler(&HttpServiceCaller));

    move || match states.with(|states| card.with_value(|card| card.render(states))) {
        Rendered::Empty => ().into_any(),
        Rendered::Card(view) => view! {
            <style>{STYLES}</style>
            <div class="ha-card mui-switch-card" on:click=on_click>
                <StateItem model=view.item/>
            </div>
        }
        .into_any(),
    }
}
