//! Status transition dispatcher
//!
//! Resolves a completed drop into a target status and, when warranted,
//! issues the single status-change mutation through the task store.

use crate::drag::DropEvent;
use crate::error::Result;
use crate::store::{TaskStore, UpdateTask};
use crate::types::{Status, Task, TaskId};

/// Outcome of resolving a drop target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing to do: unknown target, vanished task, or same-status drop
    NoOp,
    /// Move the dragged task to this status
    Move(Status),
}

/// Resolve a drop target against the current task snapshot.
///
/// The column check runs before the task check: a column's own id never
/// collides with a task id in practice, but the column is authoritative
/// when it matches. Dropping a task onto its own column, onto a card in
/// its own column, or onto anything unrecognized is a no-op.
pub fn resolve(tasks: &[Task], dragged: &TaskId, target: &str) -> Resolution {
    let Some(task) = tasks.iter().find(|t| &t.id == dragged) else {
        // Dragged task vanished mid-gesture (e.g. deleted concurrently)
        return Resolution::NoOp;
    };

    if let Some(status) = Status::from_column_id(target) {
        return transition(task.status, status);
    }

    if let Some(over) = tasks.iter().find(|t| t.id.as_str() == target) {
        return transition(task.status, over.status);
    }

    Resolution::NoOp
}

fn transition(current: Status, target: Status) -> Resolution {
    if current == target {
        Resolution::NoOp
    } else {
        Resolution::Move(target)
    }
}

/// Complete a drop: resolve it and issue at most one mutation.
/// Returns the updated task when a move happened, `None` on a no-op.
pub async fn complete_drop(store: &TaskStore, drop: DropEvent) -> Result<Option<Task>> {
    match resolve(&store.list(), &drop.task_id, &drop.target) {
        Resolution::NoOp => {
            tracing::debug!(task_id = %drop.task_id, target = %drop.target, "drop resolved to no-op");
            Ok(None)
        }
        Resolution::Move(status) => store
            .update(UpdateTask::status_change(drop.task_id, status))
            .await
            .map(Some),
    }
}
