//! # minicard-demo — switch card demo
//!
//! Composition root that wires the switch card to the virtual host.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Initialise logging
//! - Register the card with a fresh registry (once, at startup)
//! - Seed the virtual host and configure the card
//! - Drive one render → click → refresh → render cycle and print the markup
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no card logic belongs here.

mod config;

use minicard_adapter_virtual::VirtualHost;
use minicard_app::registry::CardRegistry;
use minicard_app::switch_card::{self, SwitchCard};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Registration
    let mut registry = CardRegistry::new();
    switch_card::register(&mut registry)?;
    for card in registry.cards() {
        tracing::info!(card_type = %card.card_type, name = %card.name, "card registered");
    }

    // Host
    let states = config.host_states();
    let card_config = config.card_config(&states);
    let mut host = VirtualHost::new(states);
    let dispatcher = host.dispatcher();

    // Card
    let mut card = SwitchCard::new();
    if card_config.entity.is_none() {
        tracing::warn!("no switch entity available, the card will render empty");
    }
    card.set_config(card_config);

    println!("{}", card.render(&host));
    card.click_handler(&dispatcher);
    let applied = host.process_pending();
    tracing::info!(applied, "host refreshed");
    println!("{}", card.render(&host));

    Ok(())
}
