//! Kanban drag-and-drop core with optimistic client-side task synchronization
//!
//! This crate implements the stateful heart of a task-management UI: a
//! cached, owner-scoped task store that reconciles against a persistence
//! collaborator after every mutation, a pure view projection over search and
//! facet filters, a pointer-drag state machine for the kanban board, and the
//! dispatcher that turns a completed drop into at most one status change.
//!
//! ## Overview
//!
//! - **Store owns the list** - all reads are snapshots, all writes go through
//!   `create` / `update` / `delete`, each success triggers a full re-fetch
//! - **Projection is pure** - filtering never mutates, caches, or observes
//!   anything beyond its inputs
//! - **Drags are ephemeral** - a session holds a task id and a hover target,
//!   nothing else, and dies with the gesture
//! - **One mutation per gesture** - the dispatcher resolves column and card
//!   targets to a status and skips idempotent drops
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use taskdeck_board::{
//!     CreateTask, Dashboard, InMemoryRepository, Point, Session, TaskStore,
//!     TracingNotifier, UserId,
//! };
//!
//! # async fn example() -> taskdeck_board::Result<()> {
//! let session = Arc::new(Session::signed_in(UserId::from("alice")));
//! let store = TaskStore::new(
//!     session,
//!     Arc::new(InMemoryRepository::new()),
//!     Arc::new(TracingNotifier),
//! );
//! let mut dashboard = Dashboard::new(store);
//!
//! let task = dashboard.on_create(CreateTask::new("Buy milk")).await?;
//!
//! // Lift the card and drop it on the completed column
//! dashboard.pointer_down(&task.id, Point::new(0.0, 0.0));
//! dashboard.pointer_move(Point::new(12.0, 0.0));
//! dashboard.drag_over(Some("completed"));
//! dashboard.release().await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod session;
pub mod types;

// Component modules
pub mod board;
pub mod dashboard;
pub mod dispatch;
pub mod drag;
pub mod notify;
pub mod repository;
pub mod store;
pub mod view;

pub use board::{BoardColumn, BoardView, Column, COLUMNS};
pub use dashboard::Dashboard;
pub use dispatch::{complete_drop, resolve, Resolution};
pub use drag::{DragManager, DragState, DropEvent, Point, ACTIVATION_DISTANCE};
pub use error::{BoardError, Result};
pub use notify::{MemoryNotifier, Notification, Notifier, Severity, TracingNotifier};
pub use repository::{InMemoryRepository, TaskInsert, TaskPatch, TaskRepository};
pub use session::Session;
pub use store::{CreateTask, TaskStore, UpdateTask};
pub use types::{Priority, Status, Task, TaskId, UserId, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
pub use view::{project, PriorityFilter, StatusFilter, TaskFilter, ViewMode};
