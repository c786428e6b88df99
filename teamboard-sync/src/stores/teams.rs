/// Team store
///
/// Owns the set of teams the current user can see, the currently selected
/// team, and the selected team's membership roster. Collections are replaced
/// wholesale on every fetch; nothing is merged incrementally.
///
/// # Selection
///
/// Selecting a team refreshes its roster as an observable consequence.
/// Clearing the selection clears the roster without issuing a fetch. When a
/// fetch finds teams and nothing is selected yet, the newest team is
/// selected automatically (a default-selection policy, not a user action).
///
/// # Team creation
///
/// Creation is two-step: insert the team, then insert an `admin` membership
/// for the creator. The steps are not transactional; if the second fails the
/// team row already exists remotely and the failure is surfaced as a single
/// error notice with no compensation.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use teamboard_sync::backend::mock::MockStore;
/// use teamboard_sync::identity::{CurrentUser, StaticIdentity};
/// use teamboard_sync::notify::TracingNotifier;
/// use teamboard_sync::stores::teams::TeamStore;
/// use uuid::Uuid;
///
/// # async fn example() {
/// let mut store = TeamStore::new(
///     Arc::new(MockStore::new()),
///     Arc::new(StaticIdentity::signed_in(CurrentUser::new(Uuid::new_v4()))),
///     Arc::new(TracingNotifier),
/// );
///
/// store.fetch_teams().await;
/// store.create_team("Platform", Some("Infra and tooling")).await;
/// # }
/// ```

use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use teamboard_shared::error::{SyncError, SyncResult};
use teamboard_shared::models::membership::{NewTeamMember, TeamMember, TeamRole};
use teamboard_shared::models::team::{NewTeam, Team};

use crate::backend::RemoteStore;
use crate::identity::{CurrentUser, IdentityProvider};
use crate::notify::{Notice, Notifier};

/// State store for teams and the selected team's roster
pub struct TeamStore {
    /// Remote store backend
    backend: Arc<dyn RemoteStore>,

    /// Current-user source, consulted at the start of each operation
    identity: Arc<dyn IdentityProvider>,

    /// Sink for success and failure notices
    notifier: Arc<dyn Notifier>,

    /// Teams visible to the current user, newest-created first
    teams: Vec<Team>,

    /// Currently selected team, if any
    current_team: Option<Team>,

    /// Membership roster of the selected team
    team_members: Vec<TeamMember>,

    /// True until the first fetch resolves
    loading: bool,
}

impl TeamStore {
    /// Creates a store with explicit collaborators
    ///
    /// The store holds no ambient state: identity, backend, and notifier are
    /// all passed in here.
    pub fn new(
        backend: Arc<dyn RemoteStore>,
        identity: Arc<dyn IdentityProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        TeamStore {
            backend,
            identity,
            notifier,
            teams: Vec::new(),
            current_team: None,
            team_members: Vec::new(),
            loading: true,
        }
    }

    /// Teams visible to the current user, newest-created first
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// The currently selected team, if any
    pub fn current_team(&self) -> Option<&Team> {
        self.current_team.as_ref()
    }

    /// Membership roster of the selected team, unordered
    pub fn team_members(&self) -> &[TeamMember] {
        &self.team_members
    }

    /// True until the first team fetch has resolved
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Loads all teams visible to the current identity
    ///
    /// Replaces `teams` wholesale on success and applies the default
    /// selection when nothing is selected yet. Without a signed-in user this
    /// is a silent no-op apart from `loading` resolving to false.
    pub async fn fetch_teams(&mut self) {
        let result = self.try_fetch_teams().await;
        self.loading = false;
        self.report(result);
    }

    async fn try_fetch_teams(&mut self) -> SyncResult<()> {
        let user = self.require_user()?;

        let teams = self.backend.list_teams(user.id).await?;
        debug!(count = teams.len(), "Fetched teams");
        self.teams = teams;

        // Default selection: newest team, only when nothing is selected.
        if self.current_team.is_none() {
            if let Some(first) = self.teams.first().cloned() {
                self.select(Some(first)).await;
            }
        }
        Ok(())
    }

    /// Changes the selected team
    ///
    /// Selecting `Some` refreshes the roster; selecting `None` clears the
    /// roster without issuing a fetch.
    pub async fn set_current_team(&mut self, team: Option<Team>) {
        self.select(team).await;
    }

    async fn select(&mut self, team: Option<Team>) {
        self.current_team = team;
        match self.current_team.as_ref().map(|t| t.id) {
            Some(team_id) => self.fetch_team_members(team_id).await,
            None => self.team_members.clear(),
        }
    }

    /// Loads the membership roster for one team
    ///
    /// Replaces `team_members` wholesale on success; on failure the prior
    /// roster is kept and the error is surfaced as a notice.
    pub async fn fetch_team_members(&mut self, team_id: Uuid) {
        match self.backend.list_team_members(team_id).await {
            Ok(members) => {
                debug!(%team_id, count = members.len(), "Fetched team members");
                self.team_members = members;
            }
            Err(err) => self.report(Err(err)),
        }
    }

    /// Creates a team and joins the creator as admin
    ///
    /// Silent no-op without a signed-in user or with a blank name. On
    /// success the team list is resynced and the new team selected.
    pub async fn create_team(&mut self, name: &str, description: Option<&str>) {
        let created = self.try_create_team(name, description).await;
        match created {
            Ok(team) => {
                self.notifier
                    .notify(Notice::success("Team created successfully!"));
                self.resync().await;
                self.select(Some(team)).await;
            }
            Err(err) => self.report(Err(err)),
        }
    }

    async fn try_create_team(
        &mut self,
        name: &str,
        description: Option<&str>,
    ) -> SyncResult<Team> {
        let user = self.require_user()?;
        if name.trim().is_empty() {
            return Err(SyncError::Validation("team name is empty"));
        }

        let team = self
            .backend
            .insert_team(NewTeam {
                name: name.to_string(),
                description: description.map(str::to_string),
                created_by: user.id,
            })
            .await?;

        // Second step of the two-step creation. A failure here leaves the
        // team row in place; it is surfaced, not rolled back.
        self.backend
            .insert_membership(NewTeamMember {
                team_id: team.id,
                user_id: user.id,
                role: TeamRole::Admin,
            })
            .await?;

        Ok(team)
    }

    /// Full team re-fetch after a mutation, in lieu of incremental merge
    pub async fn resync(&mut self) {
        self.fetch_teams().await;
    }

    fn require_user(&self) -> SyncResult<CurrentUser> {
        self.identity
            .current_user()
            .ok_or(SyncError::Validation("no signed-in user"))
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
