//! End-to-end wiring demo for the synchronization layer
//!
//! Connects to PostgreSQL, runs the migrations, and drives both stores once:
//! fetch teams, create one if none is visible, then list that team's board.
//!
//! ```bash
//! DATABASE_URL=postgresql://localhost/teamboard \
//! TEAMBOARD_USER_ID=<profile uuid> \
//! cargo run -p teamboard-sync --example board
//! ```

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use teamboard_shared::db::migrations::run_migrations;
use teamboard_shared::db::pool::create_pool;
use teamboard_shared::models::task::TaskStatus;
use teamboard_sync::backend::PgStore;
use teamboard_sync::config::Config;
use teamboard_sync::identity::{CurrentUser, StaticIdentity};
use teamboard_sync::notify::TracingNotifier;
use teamboard_sync::stores::{TaskStore, TeamStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "teamboard_sync=debug,teamboard_shared=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let pool = create_pool(config.database).await?;
    run_migrations(&pool).await?;

    let user_id = match std::env::var("TEAMBOARD_USER_ID") {
        Ok(raw) => raw.parse::<Uuid>()?,
        Err(_) => anyhow::bail!("TEAMBOARD_USER_ID environment variable is required"),
    };

    let backend = Arc::new(PgStore::new(pool));
    let identity = Arc::new(StaticIdentity::signed_in(CurrentUser::new(user_id)));
    let notifier = Arc::new(TracingNotifier);

    let mut teams = TeamStore::new(backend.clone(), identity.clone(), notifier.clone());
    teams.fetch_teams().await;

    if teams.current_team().is_none() {
        teams.create_team("My first team", Some("Created by the demo")).await;
    }

    let Some(team) = teams.current_team().cloned() else {
        anyhow::bail!("no team available; check the earlier error output");
    };
    tracing::info!(team = %team.name, members = teams.team_members().len(), "Selected team");

    let mut tasks = TaskStore::new(backend, identity, notifier, Some(team.id));
    tasks.fetch_tasks().await;

    for status in TaskStatus::ALL {
        let column = tasks.tasks_by_status(status);
        tracing::info!(column = status.as_str(), count = column.len(), "Board column");
        for task in column {
            tracing::info!("  [{}] {}", task.priority.as_str(), task.title);
        }
    }

    Ok(())
}
