//! Kanban board: cards, columns, and the drag-to-move workflow.
//!
//! Dropping a card on a column runs the status state machine: the move is
//! written to the collection matching the card's variant, the completion
//! timestamp follows the status, and one history record is appended
//! best-effort. The module follows hexagonal architecture:
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
