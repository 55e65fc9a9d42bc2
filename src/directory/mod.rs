//! Member directory: profiles and departments.
//!
//! Departments group member profiles; profiles carry the assignee display
//! data the board joins by id. Removing a department is refused while any
//! profile still references it. The module follows hexagonal architecture:
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
