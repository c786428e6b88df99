/// Identity provider seam
///
/// The stores never talk to the authentication system directly; they ask an
/// [`IdentityProvider`] for the current user at the start of each operation.
/// An absent user means "not authenticated" and suppresses every fetch and
/// mutation that needs a user id. That check is a silent no-op, not an error
/// shown to the user.
///
/// # Example
///
/// ```
/// use teamboard_sync::identity::{CurrentUser, IdentityProvider, StaticIdentity};
/// use uuid::Uuid;
///
/// let identity = StaticIdentity::signed_in(CurrentUser::new(Uuid::new_v4()));
/// assert!(identity.current_user().is_some());
///
/// identity.sign_out();
/// assert!(identity.current_user().is_none());
/// ```

use std::sync::RwLock;
use uuid::Uuid;

/// The authenticated user as seen by the stores
///
/// Only the stable id matters to the synchronization layer; the display name
/// is carried for log context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    /// Stable user id issued by the identity system
    pub id: Uuid,

    /// Display name, if known
    pub display_name: Option<String>,
}

impl CurrentUser {
    /// Creates a user with just an id
    pub fn new(id: Uuid) -> Self {
        CurrentUser {
            id,
            display_name: None,
        }
    }
}

/// Source of the current user for store operations
///
/// Implementations must be cheap to query; the stores call this at the start
/// of every operation rather than caching the answer.
pub trait IdentityProvider: Send + Sync {
    /// The signed-in user, or `None` when unauthenticated
    fn current_user(&self) -> Option<CurrentUser>;
}

/// Identity provider backed by a settable value
///
/// Suits embedding hosts that manage their own session lifecycle: sign the
/// user in or out and the stores observe the change on their next operation.
#[derive(Debug, Default)]
pub struct StaticIdentity {
    user: RwLock<Option<CurrentUser>>,
}

impl StaticIdentity {
    /// Creates a provider with no signed-in user
    pub fn anonymous() -> Self {
        StaticIdentity {
            user: RwLock::new(None),
        }
    }

    /// Creates a provider with the given user signed in
    pub fn signed_in(user: CurrentUser) -> Self {
        StaticIdentity {
            user: RwLock::new(Some(user)),
        }
    }

    /// Signs a user in
    pub fn sign_in(&self, user: CurrentUser) {
        *self.user.write().unwrap() = Some(user);
    }

    /// Signs the current user out
    pub fn sign_out(&self) {
        *self.user.write().unwrap() = None;
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> Option<CurrentUser> {
        self.user.read().unwrap().clone()
    }
}
