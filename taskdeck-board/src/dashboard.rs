//! Dashboard - the surface the presentation layer talks to
//!
//! Ties the store, the filter state, the view mode, and the drag machine
//! together. The view layer renders from `filtered_tasks()` / `board()` and
//! feeds gestures back in; the dashboard guarantees that edit, delete, and
//! status-change callbacks are only dispatched for ids present in the
//! current store snapshot.

use crate::dispatch::complete_drop;
use crate::drag::{DragManager, DragState, Point};
use crate::error::Result;
use crate::store::{CreateTask, TaskStore, UpdateTask};
use crate::types::{Status, Task, TaskId};
use crate::view::{project, TaskFilter, ViewMode};
use crate::BoardView;

/// Per-session view controller over a [`TaskStore`]
pub struct Dashboard {
    store: TaskStore,
    filter: TaskFilter,
    view_mode: ViewMode,
    drag: DragManager,
}

impl Dashboard {
    /// Create a dashboard over a store. The kanban view is the default.
    pub fn new(store: TaskStore) -> Self {
        Self {
            store,
            filter: TaskFilter::new(),
            view_mode: ViewMode::default(),
            drag: DragManager::new(),
        }
    }

    /// The underlying store
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    // =========================================================================
    // Filter and view state
    // =========================================================================

    /// Current filter state
    pub fn filter(&self) -> &TaskFilter {
        &self.filter
    }

    /// Replace the free-text search
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    /// Replace the status facet
    pub fn set_status_filter(&mut self, status: crate::view::StatusFilter) {
        self.filter.status = status;
    }

    /// Replace the priority facet
    pub fn set_priority_filter(&mut self, priority: crate::view::PriorityFilter) {
        self.filter.priority = priority;
    }

    /// Current view mode
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Switch between list and kanban presentation
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// The projected (filtered) tasks, recomputed synchronously
    pub fn filtered_tasks(&self) -> Vec<Task> {
        project(&self.store.list(), &self.filter)
    }

    /// The projected tasks grouped into the three board columns
    pub fn board(&self) -> BoardView {
        BoardView::from_tasks(&self.filtered_tasks())
    }

    // =========================================================================
    // Drag gesture plumbing
    // =========================================================================

    /// Drag state for highlighting the lifted card
    pub fn drag_state(&self) -> &DragState {
        self.drag.state()
    }

    /// Current candidate drop target for highlighting
    pub fn hover_target(&self) -> Option<&str> {
        self.drag.hover_target()
    }

    /// Pointer pressed on a card. Ignored for ids absent from the snapshot.
    pub fn pointer_down(&mut self, task_id: &TaskId, at: Point) {
        if self.store.find(task_id).is_some() {
            self.drag.pointer_down(task_id.clone(), at);
        }
    }

    /// Pointer moved; returns true when this move lifted the card
    pub fn pointer_move(&mut self, to: Point) -> bool {
        self.drag.pointer_move(to)
    }

    /// Pointer moved over a candidate drop target (or none)
    pub fn drag_over(&mut self, target: Option<&str>) {
        self.drag.drag_over(target);
    }

    /// Pointer released: finish the gesture and dispatch at most one
    /// status-change mutation. Returns the moved task, if any.
    pub async fn release(&mut self) -> Result<Option<Task>> {
        match self.drag.release() {
            Some(drop) => complete_drop(&self.store, drop).await,
            None => Ok(None),
        }
    }

    // =========================================================================
    // Callbacks invoked by the presentation layer
    // =========================================================================

    /// Create a task from form input
    pub async fn on_create(&self, input: CreateTask) -> Result<Task> {
        self.store.create(input).await
    }

    /// Fetch the freshest copy of a task for form prefill.
    /// Returns `None` for ids no longer in the snapshot.
    pub fn on_edit(&self, id: &TaskId) -> Option<Task> {
        self.store.find(id)
    }

    /// Apply edited form fields to a task. Silently ignored for ids
    /// absent from the snapshot.
    pub async fn on_update(&self, input: UpdateTask) -> Result<Option<Task>> {
        if self.store.find(&input.id).is_none() {
            return Ok(None);
        }
        self.store.update(input).await.map(Some)
    }

    /// Move a task to a new status, e.g. from a card's status menu.
    /// Silently ignored for ids absent from the snapshot.
    pub async fn on_status_change(&self, id: &TaskId, status: Status) -> Result<Option<Task>> {
        self.on_update(UpdateTask::status_change(id.clone(), status)).await
    }

    /// Delete a task. Returns false (without touching the store) for ids
    /// absent from the snapshot.
    pub async fn on_delete(&self, id: &TaskId) -> Result<bool> {
        if self.store.find(id).is_none() {
            return Ok(false);
        }
        self.store.delete(id).await.map(|()| true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::MemoryNotifier;
    use crate::repository::InMemoryRepository;
    use crate::session::Session;
    use crate::types::UserId;
    use crate::view::StatusFilter;
    use std::sync::Arc;

    fn setup() -> (Arc<MemoryNotifier>, Dashboard) {
        let session = Arc::new(Session::signed_in(UserId::from("alice")));
        let repo = Arc::new(InMemoryRepository::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let store = TaskStore::new(session, repo, notifier.clone());
        (notifier, Dashboard::new(store))
    }

    #[tokio::test]
    async fn test_filtered_tasks_follow_filter_state() {
        let (_notifier, mut dashboard) = setup();
        dashboard.on_create(CreateTask::new("Buy milk")).await.unwrap();
        dashboard
            .on_create(CreateTask::new("Ship release").with_status(Status::Completed))
            .await
            .unwrap();

        assert_eq!(dashboard.filtered_tasks().len(), 2);

        dashboard.set_status_filter(StatusFilter::Only(Status::Completed));
        let filtered = dashboard.filtered_tasks();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Ship release");

        dashboard.set_search("milk");
        assert!(dashboard.filtered_tasks().is_empty());
    }

    #[tokio::test]
    async fn test_board_groups_filtered_tasks() {
        let (_notifier, dashboard) = setup();
        dashboard.on_create(CreateTask::new("One")).await.unwrap();
        dashboard
            .on_create(CreateTask::new("Two").with_status(Status::InProgress))
            .await
            .unwrap();

        let board = dashboard.board();
        assert_eq!(board.column(Status::Pending).tasks.len(), 1);
        assert_eq!(board.column(Status::InProgress).tasks.len(), 1);
        assert!(board.column(Status::Completed).tasks.is_empty());
    }

    #[tokio::test]
    async fn test_pointer_down_ignores_unknown_ids() {
        let (_notifier, mut dashboard) = setup();
        dashboard.pointer_down(&TaskId::from("ghost"), Point::new(0.0, 0.0));
        assert!(!dashboard.pointer_move(Point::new(100.0, 100.0)));
        assert_eq!(dashboard.drag_state(), &DragState::Idle);
    }

    #[tokio::test]
    async fn test_callbacks_ignore_absent_ids() {
        let (notifier, dashboard) = setup();
        let ghost = TaskId::from("ghost");

        assert!(dashboard.on_edit(&ghost).is_none());
        assert_eq!(
            dashboard.on_status_change(&ghost, Status::Completed).await.unwrap(),
            None
        );
        assert!(!dashboard.on_delete(&ghost).await.unwrap());

        // No mutation reached the store, so no notifications either
        assert!(notifier.drain().is_empty());
    }

    #[tokio::test]
    async fn test_on_delete_present_id() {
        let (_notifier, dashboard) = setup();
        let task = dashboard.on_create(CreateTask::new("Task")).await.unwrap();
        assert!(dashboard.on_delete(&task.id).await.unwrap());
        assert!(dashboard.filtered_tasks().is_empty());
    }
}
