/// In-memory mock backend for tests and demos
///
/// Implements the remote store contract over plain vectors behind a mutex.
/// Useful for:
/// - Driving the stores in tests without a database
/// - Demonstrating the synchronization flow
///
/// # Failure injection
///
/// Any operation can be made to fail with [`MockStore::fail_on`]; the failure
/// is reported as a remote error with a stable message so tests can assert
/// on exactly what the notification sink received. Call counts per operation
/// are recorded so tests can also assert that a precondition no-op never
/// reached the backend.
///
/// # Timestamps
///
/// Rows receive strictly increasing `created_at` values from an internal
/// sequence, so "newest-created first" ordering is deterministic even when
/// many rows are seeded within one millisecond.
///
/// # Example
///
/// ```
/// use teamboard_sync::backend::mock::{MockOp, MockStore};
/// use teamboard_sync::backend::RemoteStore;
/// use uuid::Uuid;
///
/// # async fn example() {
/// let backend = MockStore::new();
/// backend.fail_on(MockOp::ListTasks);
///
/// let err = backend.list_tasks(Uuid::new_v4()).await.unwrap_err();
/// assert!(err.is_remote());
/// assert_eq!(backend.calls(MockOp::ListTasks), 1);
/// # }
/// ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use uuid::Uuid;

use teamboard_shared::error::{SyncError, SyncResult};
use teamboard_shared::models::membership::{NewTeamMember, TeamMember};
use teamboard_shared::models::profile::Profile;
use teamboard_shared::models::task::{NewTask, Task, TaskPatch, TaskStatus};
use teamboard_shared::models::team::{NewTeam, Team};

use crate::backend::remote::RemoteStore;

/// Operations the mock can count and fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockOp {
    /// `list_teams`
    ListTeams,

    /// `insert_team`
    InsertTeam,

    /// `list_team_members`
    ListTeamMembers,

    /// `insert_membership`
    InsertMembership,

    /// `list_tasks`
    ListTasks,

    /// `insert_task`
    InsertTask,

    /// `update_task`
    UpdateTask,

    /// `delete_task`
    DeleteTask,
}

impl MockOp {
    /// Stable name used in injected failure messages
    pub fn as_str(&self) -> &'static str {
        match self {
            MockOp::ListTeams => "list_teams",
            MockOp::InsertTeam => "insert_team",
            MockOp::ListTeamMembers => "list_team_members",
            MockOp::InsertMembership => "insert_membership",
            MockOp::ListTasks => "list_tasks",
            MockOp::InsertTask => "insert_task",
            MockOp::UpdateTask => "update_task",
            MockOp::DeleteTask => "delete_task",
        }
    }
}

/// Mutable tables and bookkeeping behind one lock
#[derive(Debug, Default)]
struct Inner {
    teams: Vec<Team>,
    members: Vec<TeamMember>,
    tasks: Vec<Task>,
    profiles: HashMap<Uuid, Profile>,
    failures: HashSet<MockOp>,
    calls: HashMap<MockOp, usize>,
    seq: i64,
}

impl Inner {
    /// Next strictly increasing timestamp
    fn next_timestamp(&mut self) -> DateTime<Utc> {
        self.seq += 1;
        // Fixed base keeps the values stable across test runs.
        DateTime::from_timestamp(1_700_000_000 + self.seq, 0)
            .unwrap_or_else(Utc::now)
    }

    /// Records the call and returns the injected failure, if armed
    fn enter(&mut self, op: MockOp) -> SyncResult<()> {
        *self.calls.entry(op).or_insert(0) += 1;
        if self.failures.contains(&op) {
            return Err(SyncError::Remote(format!(
                "injected failure: {}",
                op.as_str()
            )));
        }
        Ok(())
    }
}

/// In-memory remote store
#[derive(Debug, Default)]
pub struct MockStore {
    inner: Mutex<Inner>,
}

impl MockStore {
    /// Creates an empty mock store
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every future call to `op` fail with an injected remote error
    pub fn fail_on(&self, op: MockOp) {
        self.inner.lock().unwrap().failures.insert(op);
    }

    /// Clears all injected failures
    pub fn clear_failures(&self) {
        self.inner.lock().unwrap().failures.clear();
    }

    /// How many times `op` has been called, failed calls included
    pub fn calls(&self, op: MockOp) -> usize {
        *self.inner.lock().unwrap().calls.get(&op).unwrap_or(&0)
    }

    /// Registers a display profile joined into later fetches
    pub fn set_profile(&self, user_id: Uuid, profile: Profile) {
        self.inner.lock().unwrap().profiles.insert(user_id, profile);
    }

    /// Seeds a team row directly, bypassing call counting
    pub fn seed_team(&self, new: NewTeam) -> Team {
        let mut inner = self.inner.lock().unwrap();
        let now = inner.next_timestamp();
        let team = Team {
            id: Uuid::new_v4(),
            name: new.name,
            description: new.description,
            created_by: new.created_by,
            created_at: now,
            updated_at: now,
        };
        inner.teams.push(team.clone());
        team
    }

    /// Seeds a membership row directly, bypassing call counting
    pub fn seed_member(&self, new: NewTeamMember) -> TeamMember {
        let mut inner = self.inner.lock().unwrap();
        let joined_at = inner.next_timestamp();
        let member = TeamMember {
            id: Uuid::new_v4(),
            team_id: new.team_id,
            user_id: new.user_id,
            role: new.role,
            joined_at,
            profile: inner.profiles.get(&new.user_id).cloned(),
        };
        inner.members.push(member.clone());
        member
    }

    /// Seeds a task row directly, bypassing call counting
    pub fn seed_task(&self, new: NewTask) -> Task {
        let mut inner = self.inner.lock().unwrap();
        let now = inner.next_timestamp();
        let task = Task {
            id: Uuid::new_v4(),
            title: new.title,
            description: new.description,
            status: TaskStatus::Todo,
            priority: new.priority,
            team_id: new.team_id,
            assigned_to: new.assigned_to,
            created_by: new.created_by,
            due_date: new.due_date,
            created_at: now,
            updated_at: now,
            assigned_user: new
                .assigned_to
                .and_then(|id| inner.profiles.get(&id).cloned()),
            creator: inner.profiles.get(&new.created_by).cloned(),
        };
        inner.tasks.push(task.clone());
        task
    }

    /// Snapshot of the stored tasks, unordered
    pub fn stored_tasks(&self) -> Vec<Task> {
        self.inner.lock().unwrap().tasks.clone()
    }

    /// Snapshot of the stored teams, unordered
    ///
    /// Unlike `list_teams` this ignores membership visibility, which lets
    /// tests observe the orphaned team row left behind when the second step
    /// of team creation fails.
    pub fn stored_teams(&self) -> Vec<Team> {
        self.inner.lock().unwrap().teams.clone()
    }
}

#[async_trait]
impl RemoteStore for MockStore {
    async fn list_teams(&self, user_id: Uuid) -> SyncResult<Vec<Team>> {
        let mut inner = self.inner.lock().unwrap();
        inner.enter(MockOp::ListTeams)?;

        let visible: HashSet<Uuid> = inner
            .members
            .iter()
            .filter(|m| m.user_id == user_id)
            .map(|m| m.team_id)
            .collect();

        let mut teams: Vec<Team> = inner
            .teams
            .iter()
            .filter(|t| visible.contains(&t.id))
            .cloned()
            .collect();
        teams.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(teams)
    }

    async fn insert_team(&self, new: NewTeam) -> SyncResult<Team> {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.enter(MockOp::InsertTeam)?;
        }
        Ok(self.seed_team(new))
    }

    async fn list_team_members(&self, team_id: Uuid) -> SyncResult<Vec<TeamMember>> {
        let mut inner = self.inner.lock().unwrap();
        inner.enter(MockOp::ListTeamMembers)?;

        Ok(inner
            .members
            .iter()
            .filter(|m| m.team_id == team_id)
            .cloned()
            .collect())
    }

    async fn insert_membership(&self, new: NewTeamMember) -> SyncResult<()> {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.enter(MockOp::InsertMembership)?;

            let duplicate = inner
                .members
                .iter()
                .any(|m| m.team_id == new.team_id && m.user_id == new.user_id);
            if duplicate {
                return Err(SyncError::Remote(
                    "duplicate membership for (team_id, user_id)".to_string(),
                ));
            }
        }
        self.seed_member(new);
        Ok(())
    }

    async fn list_tasks(&self, team_id: Uuid) -> SyncResult<Vec<Task>> {
        let mut inner = self.inner.lock().unwrap();
        inner.enter(MockOp::ListTasks)?;

        let mut tasks: Vec<Task> = inner
            .tasks
            .iter()
            .filter(|t| t.team_id == team_id)
            .cloned()
            .collect();
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tasks)
    }

    async fn insert_task(&self, new: NewTask) -> SyncResult<()> {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.enter(MockOp::InsertTask)?;
        }
        self.seed_task(new);
        Ok(())
    }

    async fn update_task(&self, task_id: Uuid, patch: TaskPatch) -> SyncResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.enter(MockOp::UpdateTask)?;

        let now = inner.next_timestamp();
        if let Some(task) = inner.tasks.iter_mut().find(|t| t.id == task_id) {
            if let Some(title) = patch.title {
                task.title = title;
            }
            if let Some(description) = patch.description {
                task.description = Some(description);
            }
            if let Some(status) = patch.status {
                task.status = status;
            }
            if let Some(priority) = patch.priority {
                task.priority = priority;
            }
            if let Some(assigned_to) = patch.assigned_to {
                task.assigned_to = Some(assigned_to);
            }
            if let Some(due_date) = patch.due_date {
                task.due_date = Some(due_date);
            }
            task.updated_at = now;
        }
        Ok(())
    }

    async fn delete_task(&self, task_id: Uuid) -> SyncResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.enter(MockOp::DeleteTask)?;

        inner.tasks.retain(|t| t.id != task_id);
        Ok(())
    }
}
