//! View projection - pure filtering of the task list
//!
//! A task is included iff the search text matches title or description
//! (case-insensitive substring, empty matches everything) AND the status
//! filter matches AND the priority filter matches. The projection is a pure
//! function: no caching, no side effects, inputs never mutated.

use crate::types::{Priority, Status, Task};

/// Status facet: everything, or one status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    fn matches(&self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => task.status == *status,
        }
    }
}

/// Priority facet: everything, or one priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    fn matches(&self, task: &Task) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(priority) => task.priority == *priority,
        }
    }
}

/// Transient filter state owned by the view layer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskFilter {
    pub search: String,
    pub status: StatusFilter,
    pub priority: PriorityFilter,
}

impl TaskFilter {
    /// An empty filter that includes every task
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Restrict to one status
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = StatusFilter::Only(status);
        self
    }

    /// Restrict to one priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = PriorityFilter::Only(priority);
        self
    }

    /// Whether a single task passes all three facets
    pub fn matches(&self, task: &Task) -> bool {
        task.matches_search(&self.search.to_lowercase())
            && self.status.matches(task)
            && self.priority.matches(task)
    }
}

/// How the projected tasks are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    List,
    #[default]
    Kanban,
}

/// Project the task list through the filter, preserving input order
pub fn project(tasks: &[Task], filter: &TaskFilter) -> Vec<Task> {
    let needle = filter.search.to_lowercase();
    tasks
        .iter()
        .filter(|task| {
            task.matches_search(&needle)
                && filter.status.matches(task)
                && filter.priority.matches(task)
        })
        .cloned()
        .collect()
}
