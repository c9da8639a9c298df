//! # minicard-app
//!
//! Application layer — the switch card itself plus **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** the host side must implement:
//!   - `ServiceCaller` — dispatch a service call (fire-and-forget)
//!   - `StateSource` — expose the host's current state mapping, if connected
//! - Provide the **`SwitchCard`** component: configuration, stub configuration,
//!   sizing, rendering and click handling
//! - Provide the **card registry** the host application fills once at startup
//!
//! ## Dependency rule
//! Depends on `minicard-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod registry;
pub mod switch_card;
