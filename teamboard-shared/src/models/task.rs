/// Task model
///
/// Tasks are the unit of work. Each task belongs to exactly one team and
/// moves through a fixed workflow of three statuses.
///
/// # Status workflow
///
/// ```text
/// todo ⇄ doing ⇄ done   (every transition allowed, including skips)
/// ```
///
/// Transitions are deliberately unrestricted: the board offers all three
/// destinations from any card, so the model does not police forward-only
/// progress.
///
/// # Schema
///
/// ```sql
/// CREATE TYPE task_status AS ENUM ('todo', 'doing', 'done');
/// CREATE TYPE task_priority AS ENUM ('low', 'medium', 'high');
///
/// CREATE TABLE tasks (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     title VARCHAR(255) NOT NULL,
///     description TEXT,
///     status task_status NOT NULL DEFAULT 'todo',
///     priority task_priority NOT NULL DEFAULT 'medium',
///     team_id UUID NOT NULL REFERENCES teams(id),
///     assigned_to UUID REFERENCES profiles(id),
///     created_by UUID NOT NULL REFERENCES profiles(id),
///     due_date TIMESTAMPTZ,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Trust boundary
///
/// `assigned_to` may name any user; neither the store nor the schema checks
/// that the assignee is a member of the task's team. Callers that care must
/// check the roster themselves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::profile::Profile;

/// Workflow status of a task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Not started
    #[default]
    Todo,

    /// In progress
    Doing,

    /// Finished
    Done,
}

impl TaskStatus {
    /// All statuses in board-column order
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::Doing, TaskStatus::Done];

    /// Converts status to string for display and storage
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::Doing => "doing",
            TaskStatus::Done => "done",
        }
    }
}

/// Priority of a task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    /// Can wait
    Low,

    /// Normal urgency
    #[default]
    Medium,

    /// Needs attention first
    High,
}

impl TaskPriority {
    /// Converts priority to string for display and storage
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }
}

/// Task model representing one unit of work scoped to a team
///
/// `assigned_user` and `creator` are read-only projections joined from the
/// profiles table at fetch time; they are never part of a write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task ID (UUID v4)
    pub id: Uuid,

    /// Task title, required and non-empty
    pub title: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Current workflow status
    pub status: TaskStatus,

    /// Priority
    pub priority: TaskPriority,

    /// Team this task belongs to
    pub team_id: Uuid,

    /// Assignee, if any (unvalidated against the team roster)
    pub assigned_to: Option<Uuid>,

    /// User who created the task; set at creation, never user-editable
    pub created_by: Uuid,

    /// Optional due date
    pub due_date: Option<DateTime<Utc>>,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was last updated
    pub updated_at: DateTime<Utc>,

    /// Display projection for the assignee, joined at fetch time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_user: Option<Profile>,

    /// Display projection for the creator, joined at fetch time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<Profile>,
}

/// Input for creating a new task
///
/// `team_id` and `created_by` are filled in by the store from its bound scope
/// and the current identity; the presentation layer cannot override them.
/// Status always starts at `todo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    /// Task title (non-empty, enforced by the store precondition)
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Priority (defaults to medium)
    #[serde(default)]
    pub priority: TaskPriority,

    /// Owning team
    pub team_id: Uuid,

    /// Optional assignee
    pub assigned_to: Option<Uuid>,

    /// Creating user
    pub created_by: Uuid,

    /// Optional due date
    pub due_date: Option<DateTime<Utc>>,
}

/// Partial update applied to one task
///
/// Fields left as `None` are not touched. Only the writable entity fields
/// appear here; identity fields (`team_id`, `created_by`) and the fetch-time
/// projections have no patchable counterpart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    /// New title
    pub title: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New status (any transition is legal)
    pub status: Option<TaskStatus>,

    /// New priority
    pub priority: Option<TaskPriority>,

    /// New assignee (unvalidated against the team roster)
    pub assigned_to: Option<Uuid>,

    /// New due date
    pub due_date: Option<DateTime<Utc>>,
}

impl TaskPatch {
    /// Convenience patch for moving a card between board columns
    pub fn status(status: TaskStatus) -> Self {
        TaskPatch {
            status: Some(status),
            ..Default::default()
        }
    }

    /// True when no field is set; applying it would be a no-op write
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.assigned_to.is_none()
            && self.due_date.is_none()
    }
}
