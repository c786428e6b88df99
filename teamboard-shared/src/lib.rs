//! # Teamboard Shared Library
//!
//! This crate contains the entity models and data-layer utilities shared by
//! the Teamboard synchronization crate and any future server components.
//!
//! ## Module Organization
//!
//! - `models`: Entity models (teams, memberships, tasks, profiles)
//! - `db`: PostgreSQL pool and migration utilities
//! - `error`: Common error types

pub mod db;
pub mod error;
pub mod models;

/// Current version of the Teamboard shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
