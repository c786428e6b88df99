/// State stores for the Teamboard client
///
/// Two cooperating stores, each owning one entity collection:
///
/// - [`teams::TeamStore`]: the teams visible to the current user, the
///   selected team, and that team's membership roster
/// - [`tasks::TaskStore`]: the tasks of one team, keyed by a team id its
///   caller passes by value
///
/// The stores share no mutable state. Selection flows from `TeamStore` into
/// `TaskStore` as a plain `Uuid`, so each store is independently
/// instantiable and testable.
///
/// # Operation model
///
/// Operations are `async fn(&mut self)`: within one store they run one at a
/// time to completion, cooperative and non-overlapping. Public operations
/// never return errors: remote failures go to the notification sink and
/// precondition failures are silent no-ops (see
/// [`teamboard_shared::error::SyncError`]).
///
/// # Known race
///
/// There is no request cancellation. A fetch started before the store's
/// scope changed still applies its result when it resolves, so a slow
/// response can overwrite newer state with a stale snapshot. This is the
/// documented behavior, not a bug to patch here; fixing it would change what
/// consumers observe.

pub mod tasks;
pub mod teams;

// Re-export main types
pub use tasks::{NewTaskInput, TaskStore};
pub use teams::TeamStore;
