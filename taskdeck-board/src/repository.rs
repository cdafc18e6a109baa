//! TaskRepository - the persistence collaborator seam
//!
//! The repository owns server-assigned identity and timestamps. The core
//! treats every returned record as authoritative and reconciles its cache
//! against it; it never patches records locally.

use crate::error::{BoardError, Result};
use crate::types::{Priority, Status, Task, TaskId, UserId};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::RwLock;

/// Fields for inserting a new task. Identity and timestamps are assigned by
/// the repository, never by the caller.
#[derive(Debug, Clone)]
pub struct TaskInsert {
    pub owner: UserId,
    pub title: String,
    pub description: Option<String>,
    pub status: Status,
    pub priority: Priority,
}

/// Partial fields for patching an existing task. `None` means "leave
/// unchanged"; there is no way to clear a field back to absent, matching
/// the upstream wire contract.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
}

impl TaskPatch {
    /// A patch that only changes the status
    pub fn status(status: Status) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

/// Async interface to the task-persistence collaborator
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Fetch all tasks for an owner, most recently created first
    async fn fetch_tasks(&self, owner: &UserId) -> Result<Vec<Task>>;

    /// Insert a task, returning the fully-populated record
    async fn insert_task(&self, fields: TaskInsert) -> Result<Task>;

    /// Patch a task by id, returning the updated record
    async fn patch_task(&self, id: &TaskId, fields: TaskPatch) -> Result<Task>;

    /// Remove a task by id
    async fn remove_task(&self, id: &TaskId) -> Result<()>;
}

/// In-memory repository backing tests, demos, and offline hosts.
///
/// Assigns ULID ids and UTC timestamps the way the real backend does, and
/// scopes fetches by owner.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    tasks: RwLock<Vec<Task>>,
    #[cfg(any(test, feature = "test-support"))]
    fail_next: RwLock<Option<String>>,
    #[cfg(any(test, feature = "test-support"))]
    fail_next_fetch: RwLock<Option<String>>,
}

impl InMemoryRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with existing records
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: RwLock::new(tasks),
            #[cfg(any(test, feature = "test-support"))]
            fail_next: RwLock::new(None),
            #[cfg(any(test, feature = "test-support"))]
            fail_next_fetch: RwLock::new(None),
        }
    }

    /// Arrange for the next repository call to fail with a transport error
    #[cfg(any(test, feature = "test-support"))]
    pub fn fail_next_with(&self, message: impl Into<String>) {
        *self.fail_next.write().expect("repository lock poisoned") = Some(message.into());
    }

    /// Arrange for the next `fetch_tasks` call specifically to fail with a
    /// transport error, leaving mutations untouched
    #[cfg(any(test, feature = "test-support"))]
    pub fn fail_next_fetch_with(&self, message: impl Into<String>) {
        *self.fail_next_fetch.write().expect("repository lock poisoned") = Some(message.into());
    }

    fn take_fetch_failure(&self) -> Result<()> {
        #[cfg(any(test, feature = "test-support"))]
        if let Some(message) = self
            .fail_next_fetch
            .write()
            .expect("repository lock poisoned")
            .take()
        {
            return Err(BoardError::transport(message));
        }
        Ok(())
    }

    fn take_failure(&self) -> Result<()> {
        #[cfg(any(test, feature = "test-support"))]
        if let Some(message) = self
            .fail_next
            .write()
            .expect("repository lock poisoned")
            .take()
        {
            return Err(BoardError::transport(message));
        }
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for InMemoryRepository {
    async fn fetch_tasks(&self, owner: &UserId) -> Result<Vec<Task>> {
        self.take_failure()?;
        self.take_fetch_failure()?;
        let tasks = self.tasks.read().expect("repository lock poisoned");
        let mut owned: Vec<Task> = tasks.iter().filter(|t| &t.owner == owner).cloned().collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn insert_task(&self, fields: TaskInsert) -> Result<Task> {
        self.take_failure()?;
        let now = Utc::now();
        let task = Task {
            id: TaskId::new(),
            owner: fields.owner,
            title: fields.title,
            description: fields.description,
            status: fields.status,
            priority: fields.priority,
            created_at: now,
            updated_at: now,
        };
        self.tasks
            .write()
            .expect("repository lock poisoned")
            .push(task.clone());
        Ok(task)
    }

    async fn patch_task(&self, id: &TaskId, fields: TaskPatch) -> Result<Task> {
        self.take_failure()?;
        let mut tasks = self.tasks.write().expect("repository lock poisoned");
        let task = tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| BoardError::task_not_found(id.as_str()))?;

        if let Some(title) = fields.title {
            task.title = title;
        }
        if let Some(description) = fields.description {
            task.description = Some(description);
        }
        if let Some(status) = fields.status {
            task.status = status;
        }
        if let Some(priority) = fields.priority {
            task.priority = priority;
        }
        task.updated_at = Utc::now();

        Ok(task.clone())
    }

    async fn remove_task(&self, id: &TaskId) -> Result<()> {
        self.take_failure()?;
        let mut tasks = self.tasks.write().expect("repository lock poisoned");
        let before = tasks.len();
        tasks.retain(|t| &t.id != id);
        if tasks.len() == before {
            return Err(BoardError::task_not_found(id.as_str()));
        }
        Ok(())
    }
}
