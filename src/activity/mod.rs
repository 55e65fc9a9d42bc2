//! Append-only activity history.
//!
//! Every status change and regeneration leaves one record here. Writes are
//! best-effort: the log describes operations, it never gates them.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
