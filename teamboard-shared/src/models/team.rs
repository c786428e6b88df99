/// Team model
///
/// Teams are the top-level grouping: every task belongs to exactly one team,
/// and visibility is granted through membership rows (see
/// [`crate::models::membership`]).
///
/// # Schema
///
/// ```sql
/// CREATE TABLE teams (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     name VARCHAR(255) NOT NULL,
///     description TEXT,
///     created_by UUID NOT NULL REFERENCES profiles(id),
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Creation
///
/// Team creation is a two-step operation: insert the team row, then insert an
/// `admin` membership for the creator. The two inserts are not wrapped in a
/// client-side transaction; if the membership insert fails the team row
/// remains and the failure is surfaced to the user rather than rolled back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Team model representing one named group of tasks and members
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Team {
    /// Unique team ID (UUID v4)
    pub id: Uuid,

    /// Team name, required and non-empty
    pub name: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// User who created the team
    ///
    /// The creator always holds an `admin` membership, established in the
    /// second step of team creation.
    pub created_by: Uuid,

    /// When the team was created
    pub created_at: DateTime<Utc>,

    /// When the team was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new team
///
/// `created_by` is filled in by the store from the current identity, never by
/// the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTeam {
    /// Team name (non-empty, enforced by the store precondition)
    pub name: String,

    /// Optional description
    pub description: Option<String>,

    /// Creating user; becomes the first admin member
    pub created_by: Uuid,
}
