/// Display-only profile projection
///
/// The synchronization layer never writes profile data. Profiles exist in a
/// `profiles` table maintained by the identity system and are joined into
/// membership and task rows at fetch time so the presentation layer can show
/// names and avatars without a second round trip.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE profiles (
///     id UUID PRIMARY KEY,
///     display_name VARCHAR(255),
///     avatar_url VARCHAR(512),
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use serde::{Deserialize, Serialize};

/// Read-only display data for one user
///
/// Both fields are optional; a user may have neither a display name nor an
/// avatar. Keeping the projection out of the writable entity shapes prevents
/// it from being round-tripped back into the store by accident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Human-readable name, if the user has set one
    pub display_name: Option<String>,

    /// Avatar image URL, if the user has set one
    pub avatar_url: Option<String>,
}

impl Profile {
    /// Builds a projection from a LEFT JOIN row
    ///
    /// Returns `None` when the join found no profile row at all, which keeps
    /// "no profile" distinct from "profile with empty fields".
    pub fn from_join(
        matched: bool,
        display_name: Option<String>,
        avatar_url: Option<String>,
    ) -> Option<Self> {
        if matched {
            Some(Profile {
                display_name,
                avatar_url,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_join_row_is_none() {
        assert_eq!(Profile::from_join(false, None, None), None);
    }

    #[test]
    fn test_matched_join_row_keeps_fields() {
        let profile = Profile::from_join(true, Some("Ada".to_string()), None).unwrap();
        assert_eq!(profile.display_name.as_deref(), Some("Ada"));
        assert_eq!(profile.avatar_url, None);
    }
}
