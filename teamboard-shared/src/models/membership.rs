/// Team membership model
///
/// Memberships link users to teams and carry the role that grants visibility
/// and edit rights. The pair (team_id, user_id) is unique; a user is a member
/// of a team at most once.
///
/// # Schema
///
/// ```sql
/// CREATE TYPE team_role AS ENUM ('admin', 'member');
///
/// CREATE TABLE team_members (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     team_id UUID NOT NULL REFERENCES teams(id),
///     user_id UUID NOT NULL REFERENCES profiles(id),
///     role team_role NOT NULL DEFAULT 'member',
///     joined_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     UNIQUE (team_id, user_id)
/// );
/// ```
///
/// # Roles
///
/// - **admin**: manage the team and its members
/// - **member**: work on the team's tasks
///
/// The creator of a team always receives the `admin` role.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::profile::Profile;

/// Role a user holds within one team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "team_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TeamRole {
    /// Can manage the team and its members
    Admin,

    /// Can work on the team's tasks
    Member,
}

impl TeamRole {
    /// Converts role to string for display and storage
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamRole::Admin => "admin",
            TeamRole::Member => "member",
        }
    }

    /// Whether this role can manage the team
    pub fn is_admin(&self) -> bool {
        matches!(self, TeamRole::Admin)
    }
}

/// Membership row linking one user to one team
///
/// Carries an optional display [`Profile`] joined at fetch time so rosters
/// can be rendered without extra lookups. The projection is never written
/// back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Unique membership ID
    pub id: Uuid,

    /// Team this membership belongs to
    pub team_id: Uuid,

    /// Member's user ID
    pub user_id: Uuid,

    /// Role within the team
    pub role: TeamRole,

    /// When the user joined the team
    pub joined_at: DateTime<Utc>,

    /// Read-only display projection for the member, if a profile row exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

/// Input for creating a new membership
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTeamMember {
    /// Team to join
    pub team_id: Uuid,

    /// Joining user
    pub user_id: Uuid,

    /// Role to assign (defaults to Member)
    #[serde(default = "default_role")]
    pub role: TeamRole,
}

fn default_role() -> TeamRole {
    TeamRole::Member
}
