/// PostgreSQL backend
///
/// Production implementation of the remote store contract over the four
/// tables created by `teamboard-shared`'s migrations. Display profiles are
/// attached with LEFT JOINs at fetch time so a missing profile row never
/// hides a membership or task.
///
/// # Visibility
///
/// `list_teams` scopes its result through the `team_members` table: a user
/// sees exactly the teams they hold a membership in. Task listing takes the
/// team id as given and applies no further filtering; access control beyond
/// membership visibility is not this layer's concern.
///
/// # Example
///
/// ```no_run
/// use teamboard_shared::db::pool::{create_pool, DatabaseConfig};
/// use teamboard_sync::backend::{PgStore, RemoteStore};
/// use uuid::Uuid;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
/// let backend = PgStore::new(pool);
/// let tasks = backend.list_tasks(Uuid::new_v4()).await?;
/// # Ok(())
/// # }
/// ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use teamboard_shared::error::SyncResult;
use teamboard_shared::models::membership::{NewTeamMember, TeamMember, TeamRole};
use teamboard_shared::models::profile::Profile;
use teamboard_shared::models::task::{NewTask, Task, TaskPatch, TaskPriority, TaskStatus};
use teamboard_shared::models::team::{NewTeam, Team};

use crate::backend::remote::RemoteStore;

/// sqlx-backed remote store
#[derive(Debug, Clone)]
pub struct PgStore {
    /// Database connection pool
    pool: PgPool,
}

impl PgStore {
    /// Creates a backend over an existing pool
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }
}

/// Membership row with the member's profile joined in
#[derive(Debug, sqlx::FromRow)]
struct MemberRow {
    id: Uuid,
    team_id: Uuid,
    user_id: Uuid,
    role: TeamRole,
    joined_at: DateTime<Utc>,
    profile_id: Option<Uuid>,
    display_name: Option<String>,
    avatar_url: Option<String>,
}

impl From<MemberRow> for TeamMember {
    fn from(row: MemberRow) -> Self {
        TeamMember {
            id: row.id,
            team_id: row.team_id,
            user_id: row.user_id,
            role: row.role,
            joined_at: row.joined_at,
            profile: Profile::from_join(row.profile_id.is_some(), row.display_name, row.avatar_url),
        }
    }
}

/// Task row with both display profiles joined in
#[derive(Debug, sqlx::FromRow)]
struct TaskRow {
    id: Uuid,
    title: String,
    description: Option<String>,
    status: TaskStatus,
    priority: TaskPriority,
    team_id: Uuid,
    assigned_to: Option<Uuid>,
    created_by: Uuid,
    due_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    assignee_profile_id: Option<Uuid>,
    assignee_display_name: Option<String>,
    assignee_avatar_url: Option<String>,
    creator_profile_id: Option<Uuid>,
    creator_display_name: Option<String>,
    creator_avatar_url: Option<String>,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            id: row.id,
            title: row.title,
            description: row.description,
            status: row.status,
            priority: row.priority,
            team_id: row.team_id,
            assigned_to: row.assigned_to,
            created_by: row.created_by,
            due_date: row.due_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
            assigned_user: Profile::from_join(
                row.assignee_profile_id.is_some(),
                row.assignee_display_name,
                row.assignee_avatar_url,
            ),
            creator: Profile::from_join(
                row.creator_profile_id.is_some(),
                row.creator_display_name,
                row.creator_avatar_url,
            ),
        }
    }
}

#[async_trait]
impl RemoteStore for PgStore {
    async fn list_teams(&self, user_id: Uuid) -> SyncResult<Vec<Team>> {
        debug!(%user_id, "Listing teams");

        let teams = sqlx::query_as::<_, Team>(
            r#"
            SELECT t.id, t.name, t.description, t.created_by, t.created_at, t.updated_at
            FROM teams t
            INNER JOIN team_members tm ON tm.team_id = t.id
            WHERE tm.user_id = $1
            ORDER BY t.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(teams)
    }

    async fn insert_team(&self, new: NewTeam) -> SyncResult<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (name, description, created_by)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, created_by, created_at, updated_at
            "#,
        )
        .bind(new.name)
        .bind(new.description)
        .bind(new.created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(team)
    }

    async fn list_team_members(&self, team_id: Uuid) -> SyncResult<Vec<TeamMember>> {
        debug!(%team_id, "Listing team members");

        let rows = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT tm.id, tm.team_id, tm.user_id, tm.role, tm.joined_at,
                   p.id AS profile_id, p.display_name, p.avatar_url
            FROM team_members tm
            LEFT JOIN profiles p ON p.id = tm.user_id
            WHERE tm.team_id = $1
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TeamMember::from).collect())
    }

    async fn insert_membership(&self, new: NewTeamMember) -> SyncResult<()> {
        sqlx::query(
            r#"
            INSERT INTO team_members (team_id, user_id, role)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(new.team_id)
        .bind(new.user_id)
        .bind(new.role)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_tasks(&self, team_id: Uuid) -> SyncResult<Vec<Task>> {
        debug!(%team_id, "Listing tasks");

        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT t.id, t.title, t.description, t.status, t.priority, t.team_id,
                   t.assigned_to, t.created_by, t.due_date, t.created_at, t.updated_at,
                   ap.id AS assignee_profile_id,
                   ap.display_name AS assignee_display_name,
                   ap.avatar_url AS assignee_avatar_url,
                   cp.id AS creator_profile_id,
                   cp.display_name AS creator_display_name,
                   cp.avatar_url AS creator_avatar_url
            FROM tasks t
            LEFT JOIN profiles ap ON ap.id = t.assigned_to
            LEFT JOIN profiles cp ON cp.id = t.created_by
            WHERE t.team_id = $1
            ORDER BY t.created_at DESC
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Task::from).collect())
    }

    async fn insert_task(&self, new: NewTask) -> SyncResult<()> {
        sqlx::query(
            r#"
            INSERT INTO tasks (title, description, priority, team_id, assigned_to, created_by, due_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(new.title)
        .bind(new.description)
        .bind(new.priority)
        .bind(new.team_id)
        .bind(new.assigned_to)
        .bind(new.created_by)
        .bind(new.due_date)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_task(&self, task_id: Uuid, patch: TaskPatch) -> SyncResult<()> {
        // Unset patch fields keep their stored value via COALESCE, so an
        // all-None patch would only bump updated_at. Skip the write entirely.
        if patch.is_empty() {
            return Ok(());
        }

        sqlx::query(
            r#"
            UPDATE tasks
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                priority = COALESCE($5, priority),
                assigned_to = COALESCE($6, assigned_to),
                due_date = COALESCE($7, due_date),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(task_id)
        .bind(patch.title)
        .bind(patch.description)
        .bind(patch.status)
        .bind(patch.priority)
        .bind(patch.assigned_to)
        .bind(patch.due_date)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_task(&self, task_id: Uuid) -> SyncResult<()> {
        sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(task_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
