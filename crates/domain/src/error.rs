//! Error types used across the workspace.
//!
//! Each concern defines its own typed error; callers match on the one
//! relevant to the operation they invoked.

/// A referenced entity does not exist in the host's state mapping.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// The host's command channel refused a service call.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("service channel closed")]
    ChannelClosed,
    #[error("transport error: {0}")]
    Transport(String),
}

/// Card registration failed.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("card type {0:?} is already registered")]
    AlreadyRegistered(String),
}

/// A card configuration could not be decoded.
#[derive(Debug, thiserror::Error)]
#[error("failed to decode card configuration")]
pub struct ConfigParseError(#[from] pub serde_json::Error);
