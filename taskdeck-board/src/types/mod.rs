//! Core types for the board engine

mod ids;
mod task;

// Re-export all types
pub use ids::{TaskId, UserId};
pub use task::{Priority, Status, Task, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
