//! Switch card — shows the on/off state of a switch entity and toggles it
//! on click.
//!
//! The card owns nothing but its configuration. Host state and the host's
//! command channel are passed in on every call, so every operation can be
//! exercised without a running host.

use std::fmt;

use minicard_domain::card::{CardDescriptor, DisplayModel, SwitchCardConfig};
use minicard_domain::error::RegistryError;
use minicard_domain::id::EntityId;
use minicard_domain::service::{SWITCH_DOMAIN, ServiceCall};
use minicard_domain::states::HostStates;

use crate::ports::{ServiceCaller, StateSource};
use crate::registry::CardRegistry;

/// Card type announced in the registry.
pub const CARD_TYPE: &str = "mui-switch-card";
/// Card type written into stub configurations (custom cards are prefixed).
pub const CUSTOM_CARD_TYPE: &str = "custom:mui-switch-card";
/// Element name of the configuration editor.
pub const EDITOR_ELEMENT: &str = "mui-switch-card-editor";
/// Height of the card in dashboard rows.
pub const CARD_SIZE: u32 = 1;

/// Stylesheet for the rendered card: a pointer cursor on the container and
/// the accent colour on an active state item.
pub const STYLES: &str = "\
.mui-switch-card {
  cursor: pointer;
}
.mui-state-item {
  --color-active: 0, 0, 255;
}
.mui-state-item.active {
  color: rgb(var(--color-active));
}
";

/// Registration metadata of the switch card.
#[must_use]
pub fn descriptor() -> CardDescriptor {
    CardDescriptor {
        card_type: CARD_TYPE.to_string(),
        name: "Minimalist Switch Card".to_string(),
        description: "Card for switch entity".to_string(),
    }
}

/// Register the switch card with the host's registry.
///
/// Meant to be called once from the hosting application's startup.
///
/// # Errors
///
/// Returns [`RegistryError::AlreadyRegistered`] when called a second time on
/// the same registry.
pub fn register(registry: &mut CardRegistry) -> Result<(), RegistryError> {
    registry.register_card(descriptor())
}

/// Output of a render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Nothing is drawn: no configuration, no host, or an unknown entity.
    Empty,
    /// A clickable container wrapping one state item.
    Card(CardView),
}

impl Rendered {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The display model, when something is drawn.
    #[must_use]
    pub fn model(&self) -> Option<&DisplayModel> {
        match self {
            Self::Empty => None,
            Self::Card(view) => Some(&view.item),
        }
    }
}

/// The configured visual: a clickable `ha-card` wrapping a `mui-state-item`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub item: DisplayModel,
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Card(view) => view.fmt(f),
        }
    }
}

impl fmt::Display for CardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let item = &self.item;
        write!(f, "<ha-card clickable><mui-state-item icon={:?}", item.icon)?;
        if let Some(name) = &item.name {
            write!(f, " name={name:?}")?;
        }
        write!(f, " value={:?}", item.value)?;
        if item.active {
            f.write_str(" active")?;
        }
        f.write_str("></mui-state-item></ha-card>")
    }
}

/// The switch card component.
#[derive(Debug, Default)]
pub struct SwitchCard {
    config: Option<SwitchCardConfig>,
}

impl SwitchCard {
    /// A card awaiting its first configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current configuration, if any.
    #[must_use]
    pub fn config(&self) -> Option<&SwitchCardConfig> {
        self.config.as_ref()
    }

    /// Replace the configuration wholesale. No validation happens here.
    pub fn set_config(&mut self, config: SwitchCardConfig) {
        tracing::debug!(
            entity = config.entity.as_ref().map(EntityId::as_str),
            "switch card configured"
        );
        self.config = Some(config);
    }

    /// Build a starter configuration pointing at the first `switch.*`
    /// entity in the host's iteration order.
    ///
    /// With no switch entities the stub has no `entity`, which renders empty.
    #[must_use]
    pub fn get_stub_config(states: &HostStates) -> SwitchCardConfig {
        let entity = states.ids().find(|id| id.is_domain(SWITCH_DOMAIN)).cloned();
        SwitchCardConfig {
            card_type: Some(CUSTOM_CARD_TYPE.to_string()),
            entity,
            ..SwitchCardConfig::default()
        }
    }

    /// Element name of the configuration editor for this card.
    #[must_use]
    pub fn config_element() -> &'static str {
        EDITOR_ELEMENT
    }

    /// Height in dashboard rows; always [`CARD_SIZE`].
    #[must_use]
    pub fn get_card_size(&self) -> u32 {
        CARD_SIZE
    }

    /// Toggle the configured switch.
    ///
    /// Sends exactly one `switch.toggle` through `caller` before returning.
    /// Without a configuration the call still goes out with no target.
    /// Dispatch failures are logged and otherwise dropped; the card's state
    /// only changes when the host pushes a new snapshot.
    pub fn click_handler(&self, caller: &impl ServiceCaller) {
        let entity_id = self.config.as_ref().and_then(|config| config.entity.clone());
        let call = ServiceCall::switch_toggle(entity_id);
        tracing::debug!(%call, "switch card clicked");
        if let Err(err) = caller.call_service(call) {
            tracing::warn!(error = %err, "unable to dispatch switch toggle");
        }
    }

    /// Render against the host's current state.
    #[must_use]
    pub fn render(&self, host: &impl StateSource) -> Rendered {
        match (&self.config, host.states()) {
            (Some(config), Some(states)) => render_display(config, states),
            _ => Rendered::Empty,
        }
    }
}

/// Pure render of `config` against `states`.
///
/// An entity missing from `states` (or no entity configured at all) renders
/// empty, the same as a missing configuration.
#[must_use]
pub fn render_display(config: &SwitchCardConfig, states: &HostStates) -> Rendered {
    let Some(snapshot) = config.entity.as_ref().and_then(|id| states.get(id)) else {
        return Rendered::Empty;
    };
    Rendered::Card(CardView {
        item: DisplayModel::derive(config, snapshot),
    })
}
