//! Port definitions — traits that the host side implements.
//!
//! Ports are the boundaries between the card and the dashboard host. They
//! are defined here so both the card and the adapters can depend on them
//! without creating circular dependencies.

pub mod service_caller;
pub mod state_source;

pub use service_caller::ServiceCaller;
pub use state_source::StateSource;
