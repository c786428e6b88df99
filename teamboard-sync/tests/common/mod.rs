/// Common test utilities for the store integration tests
///
/// Provides a test context wiring both stores to the in-memory mock backend,
/// a settable identity, and a recording notifier, plus seeding helpers for
/// teams, memberships, and tasks.

use std::sync::Arc;
use uuid::Uuid;

use teamboard_shared::models::membership::{NewTeamMember, TeamRole};
use teamboard_shared::models::task::{NewTask, Task};
use teamboard_shared::models::team::{NewTeam, Team};
use teamboard_sync::backend::mock::MockStore;
use teamboard_sync::identity::{CurrentUser, StaticIdentity};
use teamboard_sync::notify::{MemoryNotifier, Severity};
use teamboard_sync::stores::{TaskStore, TeamStore};

/// Test context containing the store collaborators
pub struct TestContext {
    pub backend: Arc<MockStore>,
    pub identity: Arc<StaticIdentity>,
    pub notifier: Arc<MemoryNotifier>,
    pub user: CurrentUser,
}

impl TestContext {
    /// Context with a signed-in user
    pub fn signed_in() -> Self {
        let user = CurrentUser::new(Uuid::new_v4());
        TestContext {
            backend: Arc::new(MockStore::new()),
            identity: Arc::new(StaticIdentity::signed_in(user.clone())),
            notifier: Arc::new(MemoryNotifier::new()),
            user,
        }
    }

    /// Context with no signed-in user; `self.user` is the id that would
    /// sign in later
    pub fn anonymous() -> Self {
        let ctx = Self::signed_in();
        ctx.identity.sign_out();
        ctx
    }

    /// A team store over this context's collaborators
    pub fn team_store(&self) -> TeamStore {
        TeamStore::new(
            self.backend.clone(),
            self.identity.clone(),
            self.notifier.clone(),
        )
    }

    /// A task store over this context's collaborators
    pub fn task_store(&self, team_id: Option<Uuid>) -> TaskStore {
        TaskStore::new(
            self.backend.clone(),
            self.identity.clone(),
            self.notifier.clone(),
            team_id,
        )
    }

    /// Seeds a team the context user is an admin member of
    pub fn seed_team(&self, name: &str) -> Team {
        let team = self.backend.seed_team(NewTeam {
            name: name.to_string(),
            description: None,
            created_by: self.user.id,
        });
        self.backend.seed_member(NewTeamMember {
            team_id: team.id,
            user_id: self.user.id,
            role: TeamRole::Admin,
        });
        team
    }

    /// Seeds a task created by the context user
    pub fn seed_task(&self, team_id: Uuid, title: &str) -> Task {
        self.backend.seed_task(NewTask {
            title: title.to_string(),
            description: None,
            priority: Default::default(),
            team_id,
            assigned_to: None,
            created_by: self.user.id,
            due_date: None,
        })
    }

    /// Messages of all destructive notices recorded so far
    pub fn error_notices(&self) -> Vec<String> {
        self.notifier
            .notices()
            .into_iter()
            .filter(|n| n.severity == Severity::Destructive)
            .map(|n| n.message)
            .collect()
    }
}
