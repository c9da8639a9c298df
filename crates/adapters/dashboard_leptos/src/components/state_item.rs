//! State item component: icon, name and raw state of one entity.

use leptos::prelude::*;
use minicard_domain::card::DisplayModel;

/// A labelled state indicator. `active` switches on the accent colour.
#[component]
pub fn StateItem(
    /// Derived display attributes.
    model: DisplayModel,
) -> impl IntoView {
    let DisplayModel {
        icon,
        name,
        value,
        active,
    } = model;

    view! {
        <div class="mui-state-item" class:active=active>
            <span class="state-icon" data-icon=icon></span>
            <div class="state-text">
                {name.map(|name| view! { <span class="state-name">{name}</span> })}
                <span class="state-value">{value}</span>
            </div>
        </div>
    }
}
