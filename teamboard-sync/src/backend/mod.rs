/// Remote store backends
///
/// This module defines the contract the stores use to reach the remote
/// relational store, and the backends that implement it.
///
/// # Architecture
///
/// The stores treat the remote store as an opaque capability: typed reads
/// and writes over the `teams`, `team_members`, and `tasks` tables, with the
/// `profiles` table joined in for display projections. Anything offering
/// those semantics satisfies the contract.
///
/// # Backends
///
/// - **Postgres**: sqlx-backed production backend over the four tables
/// - **Mock**: deterministic in-memory backend for tests and demos
///
/// # Example
///
/// ```no_run
/// use teamboard_sync::backend::{mock::MockStore, RemoteStore};
/// use uuid::Uuid;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let backend = MockStore::new();
/// let teams = backend.list_teams(Uuid::new_v4()).await?;
/// assert!(teams.is_empty());
/// # Ok(())
/// # }
/// ```

pub mod mock;
pub mod postgres;
pub mod remote;

// Re-export main types
pub use mock::MockStore;
pub use postgres::PgStore;
pub use remote::RemoteStore;
