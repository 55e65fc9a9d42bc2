//! Recurring obligations: templates, daily regeneration, scheduling.
//!
//! A completed instance of a still-active template spawns its next
//! occurrence at the following local midnight (or at startup, whichever
//! comes first). Completed instances are never deleted; history accumulates
//! as an append-only series of instances. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
