//! Orchestration services for the kanban board.

pub mod catalog;
pub mod drag;
pub mod transition;

pub use catalog::{
    CreateTaskRequest, TaskCatalogError, TaskCatalogResult, TaskCreatedDetails, TaskService,
};
pub use drag::{DragController, DragEffect, DropEffect, DropOutcome};
pub use transition::{StatusChangeDetails, StatusTransitionService, TransitionReport};
