//! TaskStore - the cached, owner-scoped task list and its three mutation paths
//!
//! The store is the single shared mutable resource of the core. Reads during
//! a render are snapshot reads of the in-memory cache; all writes funnel
//! through `create` / `update` / `delete`. Each successful mutation triggers
//! a full re-fetch so the cache reconciles against the repository rather than
//! trusting its own optimistic copy.
//!
//! Concurrent mutations on the *same* id are deliberately not coalesced: the
//! last one to resolve determines the observed state. See DESIGN.md.

use crate::error::{BoardError, Result};
use crate::notify::{Notification, Notifier};
use crate::repository::{TaskInsert, TaskPatch, TaskRepository};
use crate::session::Session;
use crate::types::{Priority, Status, Task, TaskId, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
use std::sync::{Arc, RwLock};

/// Create a new task
#[derive(Debug, Clone)]
pub struct CreateTask {
    /// The task title (required, 1-200 characters after trimming)
    pub title: String,
    /// Detailed description (up to 1000 characters)
    pub description: Option<String>,
    /// Initial status (defaults to pending)
    pub status: Option<Status>,
    /// Initial priority (defaults to medium)
    pub priority: Option<Priority>,
}

impl CreateTask {
    /// Create a new CreateTask input with just a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: None,
            priority: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the initial status
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the initial priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Validate field bounds, producing field-level messages
    pub fn validate(&self) -> Result<()> {
        validate_title(self.title.trim())?;
        if let Some(description) = &self.description {
            validate_description(description.trim())?;
        }
        Ok(())
    }

    fn into_insert(self, owner: crate::types::UserId) -> TaskInsert {
        TaskInsert {
            owner,
            title: self.title.trim().to_string(),
            description: self
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(String::from),
            status: self.status.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
        }
    }
}

/// Update an existing task. `None` fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateTask {
    /// The task id to update
    pub id: TaskId,
    /// New title
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New status - the only path used by drag-and-drop status changes
    pub status: Option<Status>,
    /// New priority
    pub priority: Option<Priority>,
}

impl UpdateTask {
    /// Create an empty update for the given task
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            status: None,
            priority: None,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Shorthand for the status-only update a completed drop issues
    pub fn status_change(id: impl Into<TaskId>, status: Status) -> Self {
        Self::new(id).with_status(status)
    }

    /// Validate field bounds for the fields that are present
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            validate_title(title.trim())?;
        }
        if let Some(description) = &self.description {
            validate_description(description.trim())?;
        }
        Ok(())
    }

    fn into_patch(self) -> TaskPatch {
        TaskPatch {
            title: self.title.map(|t| t.trim().to_string()),
            // An emptied description is simply not sent, matching the
            // upstream wire contract (fields are never cleared to absent).
            description: self
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(String::from),
            status: self.status,
            priority: self.priority,
        }
    }
}

fn validate_title(title: &str) -> Result<()> {
    if title.is_empty() {
        return Err(BoardError::validation("title", "Title is required"));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(BoardError::validation("title", "Title too long"));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<()> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(BoardError::validation("description", "Description too long"));
    }
    Ok(())
}

/// The authoritative, cached task list for the current session
pub struct TaskStore {
    session: Arc<Session>,
    repository: Arc<dyn TaskRepository>,
    notifier: Arc<dyn Notifier>,
    cache: RwLock<Vec<Task>>,
}

impl TaskStore {
    /// Create a store over the given session, repository, and notifier.
    /// The cache starts empty until the first successful `refresh`.
    pub fn new(
        session: Arc<Session>,
        repository: Arc<dyn TaskRepository>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            session,
            repository,
            notifier,
            cache: RwLock::new(Vec::new()),
        }
    }

    /// The session this store is scoped to
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Snapshot of the cached tasks, most recently created first
    pub fn list(&self) -> Vec<Task> {
        self.cache.read().expect("store lock poisoned").clone()
    }

    /// Look up a single task in the current snapshot
    pub fn find(&self, id: &TaskId) -> Option<Task> {
        self.cache
            .read()
            .expect("store lock poisoned")
            .iter()
            .find(|t| &t.id == id)
            .cloned()
    }

    /// Re-fetch the owner's tasks and replace the cache wholesale.
    /// A signed-out session yields an empty list rather than an error.
    pub async fn refresh(&self) -> Result<()> {
        let Some(owner) = self.session.current_user() else {
            self.cache.write().expect("store lock poisoned").clear();
            return Ok(());
        };

        let mut tasks = self.repository.fetch_tasks(&owner).await?;
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        *self.cache.write().expect("store lock poisoned") = tasks;
        Ok(())
    }

    /// Create a task. On success, notifies and reconciles the cache; on
    /// failure, notifies once and leaves the cache untouched.
    pub async fn create(&self, input: CreateTask) -> Result<Task> {
        let result = self.create_inner(input).await;
        match &result {
            Ok(task) => {
                tracing::debug!(id = %task.id, "task created");
                self.notifier.notify(Notification::success(
                    "Task created",
                    "Your task has been added.",
                ));
                self.reconcile().await;
            }
            Err(err) => self.notify_failure(err),
        }
        result
    }

    async fn create_inner(&self, input: CreateTask) -> Result<Task> {
        input.validate()?;
        let owner = self.session.require_user()?;
        self.repository.insert_task(input.into_insert(owner)).await
    }

    /// Merge fields into an existing task. The only mutation path used by
    /// status changes.
    pub async fn update(&self, input: UpdateTask) -> Result<Task> {
        let id = input.id.clone();
        let result = self.update_inner(input).await;
        match &result {
            Ok(task) => {
                tracing::debug!(id = %task.id, "task updated");
                self.notifier.notify(Notification::success(
                    "Task updated",
                    "Your changes have been saved.",
                ));
                self.reconcile().await;
            }
            Err(err) => {
                self.notify_failure(err);
                self.drop_if_vanished(&id, err);
            }
        }
        result
    }

    async fn update_inner(&self, input: UpdateTask) -> Result<Task> {
        input.validate()?;
        let id = input.id.clone();
        self.repository.patch_task(&id, input.into_patch()).await
    }

    /// Delete a task by id
    pub async fn delete(&self, id: &TaskId) -> Result<()> {
        let result = self.repository.remove_task(id).await;
        match &result {
            Ok(()) => {
                tracing::debug!(id = %id, "task deleted");
                self.notifier.notify(Notification::success(
                    "Task deleted",
                    "The task has been removed.",
                ));
                self.reconcile().await;
            }
            Err(err) => {
                self.notify_failure(err);
                self.drop_if_vanished(id, err);
            }
        }
        result
    }

    /// Post-success reconciliation. A failed re-fetch keeps the previous
    /// snapshot; the next successful mutation or explicit refresh repairs it.
    async fn reconcile(&self) {
        if let Err(err) = self.refresh().await {
            tracing::warn!(error = %err, "reconciliation fetch failed; keeping prior snapshot");
        }
    }

    fn notify_failure(&self, err: &BoardError) {
        tracing::warn!(error = %err, "mutation failed");
        self.notifier.notify(Notification::error(err.to_string()));
    }

    /// A not-found failure means the record vanished underneath us, e.g.
    /// deleted by a concurrent action. Drop it from the local view.
    fn drop_if_vanished(&self, id: &TaskId, err: &BoardError) {
        if matches!(err, BoardError::TaskNotFound { .. }) {
            self.cache
                .write()
                .expect("store lock poisoned")
                .retain(|t| &t.id != id);
        }
    }
}
