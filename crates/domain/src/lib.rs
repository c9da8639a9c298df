//! # minicard-domain
//!
//! Pure domain model for the minicard switch card.
//!
//! ## Responsibilities
//! - Foundational types: entity identifiers, error conventions
//! - Define **entity snapshots** (state label + attributes) as the host reports them
//! - Define the host's ordered **state mapping**
//! - Define the **card configuration**, **display model** and registration descriptor
//! - Define **service calls** (`switch.toggle`, …) emitted by the card
//! - Contain the pure derivations (icon/name precedence, active flag)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod card;
pub mod error;
pub mod id;

pub mod entity;
pub mod service;
pub mod states;
