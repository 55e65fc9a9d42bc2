//! Quadro: team task-board workflow core.
//!
//! This crate implements the workflow engine behind a team/task dashboard:
//! kanban status transitions, drag-and-drop orchestration, recurring-task
//! regeneration, and realtime view refreshes, all over swappable storage
//! adapters.
//!
//! # Architecture
//!
//! Quadro follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, database)
//!
//! # Modules
//!
//! - [`board`]: Kanban cards, the status state machine, and drag-and-drop
//! - [`recurrence`]: Recurring templates and the midnight regeneration sweep
//! - [`activity`]: Append-only history of what happened to which card
//! - [`directory`]: Member profiles and departments
//! - [`feed`]: Change notifications and the view refresh bridge

pub mod activity;
pub mod board;
pub mod directory;
pub mod feed;
pub mod recurrence;
