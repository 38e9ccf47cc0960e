//! Repository contracts consumed by the registrars.
//!
//! # Responsibility
//! - Define use-case oriented persistence contracts for editors and posts.
//! - Provide process-local implementations for wiring and smoke runs.
//!
//! # Invariants
//! - Repositories are the only place identities get assigned.
//! - Lookups return `Ok(None)` for absent rows; `NotFound` is reserved for
//!   writes addressing a missing row.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod editor_repo;
pub mod memory;
pub mod post_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository failure.
///
/// Registrars carry this value to their caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Storage backend rejected or failed the operation.
    Backend(String),
    /// Write addressed a row that does not exist.
    NotFound { entity: &'static str, id: i64 },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backend(message) => write!(f, "repository backend failure: {message}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found in storage: {id}"),
        }
    }
}

impl Error for RepoError {}
