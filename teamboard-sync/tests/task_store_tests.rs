/// Integration tests for the task store
///
/// Drive the store against the in-memory mock backend and assert on the
/// cached task list, the board partitioning view, the recorded notices, and
/// which backend operations were actually reached.

mod common;

use common::TestContext;
use teamboard_shared::models::task::{TaskPatch, TaskPriority, TaskStatus};
use teamboard_sync::backend::mock::MockOp;
use teamboard_sync::notify::Severity;
use teamboard_sync::stores::NewTaskInput;

#[tokio::test]
async fn test_fetch_without_team_is_a_silent_noop() {
    let ctx = TestContext::signed_in();
    let mut store = ctx.task_store(None);
    assert!(store.is_loading());

    store.fetch_tasks().await;

    assert!(store.tasks().is_empty());
    assert!(!store.is_loading());
    assert_eq!(ctx.backend.calls(MockOp::ListTasks), 0);
    assert!(ctx.notifier.is_empty());
}

#[tokio::test]
async fn test_fetch_orders_newest_first() {
    let ctx = TestContext::signed_in();
    let team = ctx.seed_team("Platform");
    ctx.seed_task(team.id, "first");
    ctx.seed_task(team.id, "second");
    ctx.seed_task(team.id, "third");

    let mut store = ctx.task_store(Some(team.id));
    store.fetch_tasks().await;

    let titles: Vec<&str> = store.tasks().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn test_tasks_by_status_partitions_preserving_order() {
    let ctx = TestContext::signed_in();
    let team = ctx.seed_team("Platform");
    ctx.seed_task(team.id, "a");
    let b = ctx.seed_task(team.id, "b");
    ctx.seed_task(team.id, "c");

    let mut store = ctx.task_store(Some(team.id));
    store.update_task(b.id, TaskPatch::status(TaskStatus::Doing)).await;

    let todo: Vec<&str> = store
        .tasks_by_status(TaskStatus::Todo)
        .iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(todo, vec!["c", "a"]);

    let doing: Vec<&str> = store
        .tasks_by_status(TaskStatus::Doing)
        .iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(doing, vec!["b"]);

    assert!(store.tasks_by_status(TaskStatus::Done).is_empty());
}

#[tokio::test]
async fn test_create_with_blank_title_never_reaches_the_backend() {
    let ctx = TestContext::signed_in();
    let team = ctx.seed_team("Platform");

    let mut store = ctx.task_store(Some(team.id));
    store
        .create_task(NewTaskInput {
            title: "".to_string(),
            ..Default::default()
        })
        .await;

    assert_eq!(ctx.backend.calls(MockOp::InsertTask), 0);
    assert!(ctx.notifier.is_empty());
    assert!(ctx.backend.stored_tasks().is_empty());
}

#[tokio::test]
async fn test_create_fills_scope_and_defaults() {
    let ctx = TestContext::signed_in();
    let team = ctx.seed_team("Platform");

    let mut store = ctx.task_store(Some(team.id));
    store
        .create_task(NewTaskInput {
            title: "Ship report".to_string(),
            ..Default::default()
        })
        .await;

    // Visible only after the resync, no optimistic insert beforehand.
    assert_eq!(store.tasks().len(), 1);
    let task = &store.tasks()[0];
    assert_eq!(task.title, "Ship report");
    assert_eq!(task.status, TaskStatus::Todo);
    assert_eq!(task.priority, TaskPriority::Medium);
    assert_eq!(task.created_by, ctx.user.id);
    assert_eq!(task.team_id, team.id);

    let success = ctx
        .notifier
        .notices()
        .into_iter()
        .find(|n| n.severity == Severity::Normal)
        .expect("success notice");
    assert_eq!(success.message, "Task created successfully!");
}

#[tokio::test]
async fn test_create_without_identity_is_a_silent_noop() {
    let ctx = TestContext::anonymous();
    let team = ctx.seed_team("Platform");

    let mut store = ctx.task_store(Some(team.id));
    store
        .create_task(NewTaskInput {
            title: "Ship report".to_string(),
            ..Default::default()
        })
        .await;

    assert_eq!(ctx.backend.calls(MockOp::InsertTask), 0);
    assert!(ctx.notifier.is_empty());
}

#[tokio::test]
async fn test_update_moves_status_and_resyncs() {
    let ctx = TestContext::signed_in();
    let team = ctx.seed_team("Platform");
    let task = ctx.seed_task(team.id, "Ship report");

    let mut store = ctx.task_store(Some(team.id));
    store.fetch_tasks().await;

    store
        .update_task(task.id, TaskPatch::status(TaskStatus::Done))
        .await;

    assert_eq!(store.tasks()[0].status, TaskStatus::Done);
    assert!(ctx
        .notifier
        .notices()
        .iter()
        .any(|n| n.message == "Task updated successfully!"));
}

#[tokio::test]
async fn test_update_failure_notifies_and_keeps_prior_state() {
    let ctx = TestContext::signed_in();
    let team = ctx.seed_team("Platform");
    let task = ctx.seed_task(team.id, "Ship report");

    let mut store = ctx.task_store(Some(team.id));
    store.fetch_tasks().await;

    ctx.backend.fail_on(MockOp::UpdateTask);
    store
        .update_task(task.id, TaskPatch::status(TaskStatus::Done))
        .await;

    assert_eq!(store.tasks()[0].status, TaskStatus::Todo);
    assert_eq!(ctx.error_notices(), vec!["injected failure: update_task"]);
}

#[tokio::test]
async fn test_delete_removes_the_task_from_later_fetches() {
    let ctx = TestContext::signed_in();
    let team = ctx.seed_team("Platform");
    let keep = ctx.seed_task(team.id, "keep");
    let drop = ctx.seed_task(team.id, "drop");

    let mut store = ctx.task_store(Some(team.id));
    store.fetch_tasks().await;
    assert_eq!(store.tasks().len(), 2);

    store.delete_task(drop.id).await;

    assert!(store.tasks().iter().all(|t| t.id != drop.id));
    assert_eq!(store.tasks()[0].id, keep.id);

    store.fetch_tasks().await;
    assert!(store.tasks().iter().all(|t| t.id != drop.id));
}

#[tokio::test]
async fn test_rebinding_team_discards_the_previous_list() {
    let ctx = TestContext::signed_in();
    let team_a = ctx.seed_team("A");
    let team_b = ctx.seed_team("B");
    ctx.seed_task(team_a.id, "a-task");
    ctx.seed_task(team_b.id, "b-task");

    let mut store = ctx.task_store(Some(team_a.id));
    store.fetch_tasks().await;
    assert_eq!(store.tasks()[0].title, "a-task");

    store.set_team(Some(team_b.id)).await;

    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0].title, "b-task");
    assert!(store.tasks().iter().all(|t| t.team_id == team_b.id));
}

#[tokio::test]
async fn test_binding_from_unset_fetches_immediately() {
    let ctx = TestContext::signed_in();
    let team = ctx.seed_team("Platform");
    ctx.seed_task(team.id, "Ship report");

    let mut store = ctx.task_store(None);
    store.set_team(Some(team.id)).await;

    assert_eq!(store.tasks().len(), 1);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn test_fetch_failure_notifies_and_keeps_prior_list() {
    let ctx = TestContext::signed_in();
    let team = ctx.seed_team("Platform");
    ctx.seed_task(team.id, "Ship report");

    let mut store = ctx.task_store(Some(team.id));
    store.fetch_tasks().await;
    assert_eq!(store.tasks().len(), 1);

    ctx.backend.fail_on(MockOp::ListTasks);
    store.fetch_tasks().await;

    assert_eq!(store.tasks().len(), 1);
    assert_eq!(ctx.error_notices(), vec!["injected failure: list_tasks"]);
    assert!(!store.is_loading());
}
