/// Remote store contract
///
/// The stores depend on this trait instead of a concrete database client so
/// they can be driven against PostgreSQL in production and an in-memory
/// backend in tests. Every method is a single attempt: the synchronization
/// layer performs no retries, and a failure surfaces as
/// [`SyncError::Remote`](teamboard_shared::error::SyncError).
///
/// # Contract
///
/// - List operations return fetch-time snapshots ordered by `created_at`
///   descending (rosters are unordered), with display profiles joined in.
/// - `list_teams` returns only the teams the given user is a member of.
/// - Writes return the affected row where the caller needs it (team
///   creation) and nothing otherwise; the stores re-fetch after every
///   mutation instead of patching their cache.

use async_trait::async_trait;
use uuid::Uuid;

use teamboard_shared::error::SyncResult;
use teamboard_shared::models::membership::{NewTeamMember, TeamMember};
use teamboard_shared::models::task::{NewTask, Task, TaskPatch};
use teamboard_shared::models::team::{NewTeam, Team};

/// Typed operations over the remote relational store
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Lists the teams visible to one user, newest-created first
    async fn list_teams(&self, user_id: Uuid) -> SyncResult<Vec<Team>>;

    /// Inserts a team and returns the stored row
    async fn insert_team(&self, new: NewTeam) -> SyncResult<Team>;

    /// Lists the membership roster of one team, profiles joined in
    async fn list_team_members(&self, team_id: Uuid) -> SyncResult<Vec<TeamMember>>;

    /// Inserts a membership row
    ///
    /// Fails on a duplicate (team_id, user_id) pair.
    async fn insert_membership(&self, new: NewTeamMember) -> SyncResult<()>;

    /// Lists every task of one team, newest-created first, profiles joined in
    async fn list_tasks(&self, team_id: Uuid) -> SyncResult<Vec<Task>>;

    /// Inserts a task; status starts at `todo`
    async fn insert_task(&self, new: NewTask) -> SyncResult<()>;

    /// Applies a partial update to one task, last write wins
    async fn update_task(&self, task_id: Uuid, patch: TaskPatch) -> SyncResult<()>;

    /// Deletes one task
    async fn delete_task(&self, task_id: Uuid) -> SyncResult<()>;
}
