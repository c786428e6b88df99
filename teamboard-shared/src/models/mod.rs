/// Entity models for Teamboard
///
/// This module contains the entity shapes the synchronization layer caches
/// and mutates. The writable shape of each entity is expressed by dedicated
/// input types (`NewTeam`, `NewTask`, `TaskPatch`); joined display data is a
/// read-only [`profile::Profile`] projection attached at fetch time and never
/// written back.
///
/// # Models
///
/// - `team`: Teams owning tasks and members
/// - `membership`: Team membership rows with roles
/// - `task`: Tasks scoped to one team, with status/priority/assignment
/// - `profile`: Display-only profile projection joined from the profiles table
///
/// # Example
///
/// ```
/// use teamboard_shared::models::task::{TaskPriority, TaskStatus};
///
/// assert_eq!(TaskStatus::default(), TaskStatus::Todo);
/// assert_eq!(TaskPriority::default(), TaskPriority::Medium);
/// ```

pub mod membership;
pub mod profile;
pub mod task;
pub mod team;
