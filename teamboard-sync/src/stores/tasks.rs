/// Task store
///
/// Owns the task list of one team. The team id is supplied by the caller as
/// a value (typically the team selected in the team store) and can be
/// rebound at any time; the store is deliberately decoupled from the team
/// store itself.
///
/// # Resynchronization
///
/// Every successful mutation triggers a full re-fetch through [`TaskStore::resync`]
/// instead of patching the cached list. A freshly created task therefore
/// appears only after the resync resolves. The explicit `resync` seam exists
/// so an optimistic-merge strategy could replace it later without touching
/// the mutation call sites.
///
/// # Status workflow
///
/// Statuses move freely between `todo`, `doing`, and `done`; the board
/// offers all three destinations from any card, so no transition is
/// rejected.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use teamboard_sync::backend::mock::MockStore;
/// use teamboard_sync::identity::{CurrentUser, StaticIdentity};
/// use teamboard_sync::notify::TracingNotifier;
/// use teamboard_sync::stores::tasks::{NewTaskInput, TaskStore};
/// use uuid::Uuid;
///
/// # async fn example() {
/// let mut store = TaskStore::new(
///     Arc::new(MockStore::new()),
///     Arc::new(StaticIdentity::signed_in(CurrentUser::new(Uuid::new_v4()))),
///     Arc::new(TracingNotifier),
///     Some(Uuid::new_v4()),
/// );
///
/// store.fetch_tasks().await;
/// store
///     .create_task(NewTaskInput {
///         title: "Ship report".to_string(),
///         ..Default::default()
///     })
///     .await;
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;
use validator::Validate;

use teamboard_shared::error::{SyncError, SyncResult};
use teamboard_shared::models::task::{NewTask, Task, TaskPatch, TaskPriority, TaskStatus};

use crate::backend::RemoteStore;
use crate::identity::IdentityProvider;
use crate::notify::{Notice, Notifier};

/// Caller-facing input for creating a task
///
/// The owning team and the creator are not part of this shape; the store
/// fills them in from its bound scope and the current identity. Validation
/// of the title is the caller's job (`validate()` is provided for that); the
/// store itself only applies its silent blank-title precondition.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewTaskInput {
    /// Task title
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Priority (defaults to medium)
    #[serde(default)]
    pub priority: TaskPriority,

    /// Optional assignee (unvalidated against the team roster)
    pub assigned_to: Option<Uuid>,

    /// Optional due date
    pub due_date: Option<DateTime<Utc>>,
}

/// State store for one team's tasks
pub struct TaskStore {
    /// Remote store backend
    backend: Arc<dyn RemoteStore>,

    /// Current-user source
    identity: Arc<dyn IdentityProvider>,

    /// Sink for success and failure notices
    notifier: Arc<dyn Notifier>,

    /// Team scope; `None` suspends fetching and creation
    team_id: Option<Uuid>,

    /// Tasks of the bound team, newest-created first
    tasks: Vec<Task>,

    /// True until the first fetch resolves
    loading: bool,
}

impl TaskStore {
    /// Creates a store bound to an optional team scope
    pub fn new(
        backend: Arc<dyn RemoteStore>,
        identity: Arc<dyn IdentityProvider>,
        notifier: Arc<dyn Notifier>,
        team_id: Option<Uuid>,
    ) -> Self {
        TaskStore {
            backend,
            identity,
            notifier,
            team_id,
            tasks: Vec::new(),
            loading: true,
        }
    }

    /// The bound team scope, if any
    pub fn team_id(&self) -> Option<Uuid> {
        self.team_id
    }

    /// Tasks of the bound team, newest-created first
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// True until the first task fetch has resolved
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Rebinds the team scope
    ///
    /// A change to `Some` re-fetches immediately; the previous team's tasks
    /// are discarded when that fetch resolves, not eagerly. Rebinding to
    /// `None` issues no fetch and keeps the last list, mirroring the
    /// observed behavior this layer preserves.
    pub async fn set_team(&mut self, team_id: Option<Uuid>) {
        let changed = self.team_id != team_id;
        self.team_id = team_id;
        if changed && self.team_id.is_some() {
            self.fetch_tasks().await;
        }
    }

    /// Loads every task of the bound team
    ///
    /// Replaces `tasks` wholesale on success, each row carrying the assignee
    /// and creator display projections. Without a bound team this is a
    /// silent no-op apart from `loading` resolving to false.
    pub async fn fetch_tasks(&mut self) {
        let result = self.try_fetch_tasks().await;
        self.loading = false;
        self.report(result);
    }

    async fn try_fetch_tasks(&mut self) -> SyncResult<()> {
        let team_id = self.require_team()?;
        let tasks = self.backend.list_tasks(team_id).await?;
        debug!(%team_id, count = tasks.len(), "Fetched tasks");
        self.tasks = tasks;
        Ok(())
    }

    /// Creates a task in the bound team
    ///
    /// Silent no-op without a signed-in user, without a bound team, or with
    /// a blank title. `team_id` and `created_by` always come from the store
    /// scope and the identity; callers cannot override them. Status starts
    /// at `todo`. On success the list is resynced; there is no optimistic
    /// local insert.
    pub async fn create_task(&mut self, input: NewTaskInput) {
        match self.try_create_task(input).await {
            Ok(()) => {
                self.notifier
                    .notify(Notice::success("Task created successfully!"));
                self.resync().await;
            }
            Err(err) => self.report(Err(err)),
        }
    }

    async fn try_create_task(&mut self, input: NewTaskInput) -> SyncResult<()> {
        let user = self
            .identity
            .current_user()
            .ok_or(SyncError::Validation("no signed-in user"))?;
        let team_id = self.require_team()?;
        if input.title.trim().is_empty() {
            return Err(SyncError::Validation("task title is empty"));
        }

        self.backend
            .insert_task(NewTask {
                title: input.title,
                description: input.description,
                priority: input.priority,
                team_id,
                assigned_to: input.assigned_to,
                created_by: user.id,
                due_date: input.due_date,
            })
            .await
    }

    /// Applies a partial update to one task
    ///
    /// The store does not validate which fields a caller may change; any
    /// combination of the patchable fields is accepted and last write wins
    /// at the remote store. On success the list is resynced.
    pub async fn update_task(&mut self, task_id: Uuid, patch: TaskPatch) {
        match self.backend.update_task(task_id, patch).await {
            Ok(()) => {
                self.notifier
                    .notify(Notice::success("Task updated successfully!"));
                self.resync().await;
            }
            Err(err) => self.report(Err(err)),
        }
    }

    /// Deletes one task
    ///
    /// On success the list is resynced; the deleted task disappears when the
    /// re-fetch resolves.
    pub async fn delete_task(&mut self, task_id: Uuid) {
        match self.backend.delete_task(task_id).await {
            Ok(()) => {
                self.notifier
                    .notify(Notice::success("Task deleted successfully!"));
                self.resync().await;
            }
            Err(err) => self.report(Err(err)),
        }
    }

    /// Tasks with the given status, relative order preserved
    ///
    /// Pure in-memory view over the cached list; this is the primitive the
    /// board uses to partition cards into columns.
    pub fn tasks_by_status(&self, status: TaskStatus) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == status).collect()
    }

    /// Full task re-fetch after a mutation, in lieu of incremental merge
    pub async fn resync(&mut self) {
        self.fetch_tasks().await;
    }

    fn require_team(&self) -> SyncResult<Uuid> {
        self.team_id.ok_or(SyncError::Validation("no team bound"))
    }

    /// Routes an operation outcome: remote failures become error notices,
    /// validation failures stay silent.
    fn report(&self, result: SyncResult<()>) {
        match result {
            Ok(()) => {}
            Err(SyncError::Validation(what)) => {
                debug!("Skipped operation: {}", what);
            }
            Err(err) => self.notifier.notify(Notice::error(err.notice_message())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_input_validates_title() {
        let blank = NewTaskInput::default();
        assert!(blank.validate().is_err());

        let ok = NewTaskInput {
            title: "Ship report".to_string(),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_new_task_input_defaults() {
        let input = NewTaskInput::default();
        assert_eq!(input.priority, TaskPriority::Medium);
        assert!(input.assigned_to.is_none());
        assert!(input.due_date.is_none());
    }
}
