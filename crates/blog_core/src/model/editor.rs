//! Editor domain model.
//!
//! # Responsibility
//! - Define the author record managed by `EditorRegistrar`.
//! - Provide the explicit field-copy used by edit flows.
//!
//! # Invariants
//! - `id` is `None` until a repository assigns one on first save.
//! - `apply_update` never overwrites `id`.
//! - Email uniqueness is a registrar rule, not a model rule.

use serde::{Deserialize, Serialize};

/// Store-assigned editor identity.
pub type EditorId = i64;

/// Author account that can own posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Editor {
    /// Assigned by the repository; `None` for editors never persisted.
    pub id: Option<EditorId>,
    pub name: String,
    /// Contact address; also the destination of registration messages.
    pub email: String,
    /// Monthly salary in minor currency units.
    pub salary: i64,
    pub active: bool,
}

impl Editor {
    /// Creates a new, not yet persisted, active editor.
    pub fn new(name: impl Into<String>, email: impl Into<String>, salary: i64) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            salary,
            active: true,
        }
    }

    /// Same as [`Editor::new`] with an already known identity.
    ///
    /// Used by repositories when hydrating stored rows and by edit callers
    /// that address an existing editor.
    pub fn with_id(
        id: EditorId,
        name: impl Into<String>,
        email: impl Into<String>,
        salary: i64,
    ) -> Self {
        Self {
            id: Some(id),
            ..Self::new(name, email, salary)
        }
    }

    /// Copies the mutable fields of `other` onto this editor.
    ///
    /// # Invariants
    /// - Copies `name`, `email`, `salary` and `active`.
    /// - `id` is kept so repository tracking of this instance survives.
    pub fn apply_update(&mut self, other: &Editor) {
        self.name = other.name.clone();
        self.email = other.email.clone();
        self.salary = other.salary;
        self.active = other.active;
    }

    /// Returns whether a repository already assigned an identity.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
