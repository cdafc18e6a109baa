//! Board grouping - the three fixed columns
//!
//! Columns are not persisted entities; they are a view-time grouping of the
//! projected tasks by status. Pure presentation support, no mutation logic.

use crate::types::{Status, Task};

/// A fixed board column definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// The column id, which is the status wire name
    pub id: &'static str,
    /// The display title
    pub title: &'static str,
    /// The status this column owns
    pub status: Status,
}

/// The three fixed columns in board order
pub const COLUMNS: [Column; 3] = [
    Column {
        id: "pending",
        title: "Pending",
        status: Status::Pending,
    },
    Column {
        id: "in_progress",
        title: "In Progress",
        status: Status::InProgress,
    },
    Column {
        id: "completed",
        title: "Completed",
        status: Status::Completed,
    },
];

/// One column together with the tasks currently in it
#[derive(Debug, Clone, PartialEq)]
pub struct BoardColumn {
    pub column: Column,
    pub tasks: Vec<Task>,
}

/// The rendered board: projected tasks grouped into the three columns
#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    pub columns: [BoardColumn; 3],
}

impl BoardView {
    /// Group tasks by status, preserving the input order within each column
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let columns = COLUMNS.map(|column| BoardColumn {
            column,
            tasks: tasks
                .iter()
                .filter(|t| t.status == column.status)
                .cloned()
                .collect(),
        });
        Self { columns }
    }

    /// The column owning the given status
    pub fn column(&self, status: Status) -> &BoardColumn {
        self.columns
            .iter()
            .find(|c| c.column.status == status)
            .expect("all three statuses have a column")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserId;

    #[test]
    fn test_column_ids_match_status_wire_names() {
        for column in COLUMNS {
            assert_eq!(column.id, column.status.column_id());
            assert_eq!(Status::from_column_id(column.id), Some(column.status));
        }
    }

    #[test]
    fn test_grouping_preserves_order() {
        let owner = UserId::from("alice");
        let tasks = vec![
            Task::new(owner.clone(), "One"),
            Task::new(owner.clone(), "Two").with_status(Status::Completed),
            Task::new(owner, "Three"),
        ];

        let board = BoardView::from_tasks(&tasks);
        let pending: Vec<&str> = board
            .column(Status::Pending)
            .tasks
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(pending, vec!["One", "Three"]);
        assert_eq!(board.column(Status::Completed).tasks.len(), 1);
        assert!(board.column(Status::InProgress).tasks.is_empty());
    }
}
