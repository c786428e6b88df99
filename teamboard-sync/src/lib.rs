//! # Teamboard Sync Library
//!
//! Client-side state synchronization for the Teamboard task tracker. Two
//! stores load, cache, and mutate the team and task collections against a
//! remote relational store:
//!
//! - [`stores::teams::TeamStore`]: visible teams, the selected team, and that
//!   team's membership roster
//! - [`stores::tasks::TaskStore`]: one team's tasks, keyed by a team id the
//!   caller passes by value
//!
//! Every mutation is followed by a full resynchronizing re-fetch rather than
//! an incremental merge; there is no offline mode and no conflict resolution
//! beyond last write wins at the remote store.
//!
//! ## Modules
//!
//! - `backend`: remote store contract plus PostgreSQL and in-memory backends
//! - `stores`: the two state stores
//! - `identity`: current-user seam
//! - `notify`: user-visible notification seam
//! - `config`: environment-based configuration
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use teamboard_sync::backend::mock::MockStore;
//! use teamboard_sync::identity::{CurrentUser, StaticIdentity};
//! use teamboard_sync::notify::TracingNotifier;
//! use teamboard_sync::stores::teams::TeamStore;
//! use uuid::Uuid;
//!
//! # async fn example() {
//! let identity = Arc::new(StaticIdentity::signed_in(CurrentUser::new(Uuid::new_v4())));
//! let mut teams = TeamStore::new(
//!     Arc::new(MockStore::new()),
//!     identity,
//!     Arc::new(TracingNotifier),
//! );
//! teams.fetch_teams().await;
//! # }
//! ```

pub mod backend;
pub mod config;
pub mod identity;
pub mod notify;
pub mod stores;
