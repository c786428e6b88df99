/// Integration tests for the team store
///
/// Drive the store against the in-memory mock backend and assert on the
/// cached collections, the recorded notices, and which backend operations
/// were actually reached.

mod common;

use common::TestContext;
use teamboard_sync::backend::mock::MockOp;
use teamboard_sync::notify::Severity;

#[tokio::test]
async fn test_fetch_orders_newest_first_and_default_selects() {
    let ctx = TestContext::signed_in();
    ctx.seed_team("Older");
    let newer = ctx.seed_team("Newer");

    let mut store = ctx.team_store();
    assert!(store.is_loading());

    store.fetch_teams().await;

    let names: Vec<&str> = store.teams().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Newer", "Older"]);

    // Default selection picks the newest team and pulls its roster.
    assert_eq!(store.current_team().map(|t| t.id), Some(newer.id));
    assert_eq!(store.team_members().len(), 1);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn test_fetch_without_identity_is_a_silent_noop() {
    let ctx = TestContext::anonymous();
    let mut store = ctx.team_store();

    store.fetch_teams().await;

    assert!(store.teams().is_empty());
    assert!(!store.is_loading());
    assert_eq!(ctx.backend.calls(MockOp::ListTeams), 0);
    assert!(ctx.notifier.is_empty());
}

#[tokio::test]
async fn test_fetch_failure_notifies_and_keeps_prior_state() {
    let ctx = TestContext::signed_in();
    let team = ctx.seed_team("Platform");

    let mut store = ctx.team_store();
    store.fetch_teams().await;
    assert_eq!(store.teams().len(), 1);

    ctx.backend.fail_on(MockOp::ListTeams);
    store.fetch_teams().await;

    // Prior collection intact, one destructive notice, loading resolved.
    assert_eq!(store.teams().len(), 1);
    assert_eq!(store.current_team().map(|t| t.id), Some(team.id));
    assert_eq!(ctx.error_notices(), vec!["injected failure: list_teams"]);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn test_clearing_selection_clears_roster_without_fetch() {
    let ctx = TestContext::signed_in();
    ctx.seed_team("Platform");

    let mut store = ctx.team_store();
    store.fetch_teams().await;
    assert!(!store.team_members().is_empty());

    let roster_fetches = ctx.backend.calls(MockOp::ListTeamMembers);
    store.set_current_team(None).await;

    assert!(store.current_team().is_none());
    assert!(store.team_members().is_empty());
    assert_eq!(ctx.backend.calls(MockOp::ListTeamMembers), roster_fetches);
}

#[tokio::test]
async fn test_selecting_a_team_refreshes_its_roster() {
    let ctx = TestContext::signed_in();
    let first = ctx.seed_team("First");
    let second = ctx.seed_team("Second");

    let mut store = ctx.team_store();
    store.fetch_teams().await;
    assert_eq!(store.current_team().map(|t| t.id), Some(second.id));

    store.set_current_team(Some(first.clone())).await;

    assert_eq!(store.current_team().map(|t| t.id), Some(first.id));
    assert!(store
        .team_members()
        .iter()
        .all(|m| m.team_id == first.id));
}

#[tokio::test]
async fn test_create_team_adds_creator_as_admin_and_selects_it() {
    let ctx = TestContext::signed_in();
    let mut store = ctx.team_store();

    store.create_team("Platform", Some("Infra and tooling")).await;

    let created = store.current_team().cloned().expect("team selected");
    assert_eq!(created.name, "Platform");
    assert_eq!(created.created_by, ctx.user.id);
    assert_eq!(store.teams().len(), 1);

    // The creator holds an admin membership from the second creation step.
    let roster = store.team_members();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].user_id, ctx.user.id);
    assert!(roster[0].role.is_admin());

    let success = ctx
        .notifier
        .notices()
        .into_iter()
        .find(|n| n.severity == Severity::Normal)
        .expect("success notice");
    assert_eq!(success.message, "Team created successfully!");
}

#[tokio::test]
async fn test_create_team_with_blank_name_is_a_silent_noop() {
    let ctx = TestContext::signed_in();
    let mut store = ctx.team_store();

    store.create_team("   ", None).await;

    assert_eq!(ctx.backend.calls(MockOp::InsertTeam), 0);
    assert!(ctx.notifier.is_empty());
}

#[tokio::test]
async fn test_create_team_without_identity_is_a_silent_noop() {
    let ctx = TestContext::anonymous();
    let mut store = ctx.team_store();

    store.create_team("Platform", None).await;

    assert_eq!(ctx.backend.calls(MockOp::InsertTeam), 0);
    assert!(ctx.notifier.is_empty());
}

#[tokio::test]
async fn test_membership_step_failure_leaves_team_row_and_notifies_once() {
    let ctx = TestContext::signed_in();
    ctx.backend.fail_on(MockOp::InsertMembership);

    let mut store = ctx.team_store();
    store.create_team("Platform", None).await;

    // The first step already ran: the team row exists remotely even though
    // the operation failed as a whole.
    assert_eq!(ctx.backend.stored_teams().len(), 1);
    assert_eq!(
        ctx.error_notices(),
        vec!["injected failure: insert_membership"]
    );
    assert!(store.current_team().is_none());
    assert!(store.teams().is_empty());
}

#[tokio::test]
async fn test_roster_fetch_failure_keeps_prior_roster() {
    let ctx = TestContext::signed_in();
    let team = ctx.seed_team("Platform");

    let mut store = ctx.team_store();
    store.fetch_teams().await;
    assert_eq!(store.team_members().len(), 1);

    ctx.backend.fail_on(MockOp::ListTeamMembers);
    store.fetch_team_members(team.id).await;

    assert_eq!(store.team_members().len(), 1);
    assert_eq!(
        ctx.error_notices(),
        vec!["injected failure: list_team_members"]
    );
}
