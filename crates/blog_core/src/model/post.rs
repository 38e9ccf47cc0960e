//! Post domain model.
//!
//! # Responsibility
//! - Define the article record managed by `PostRegistrar`.
//! - Expose the removal-eligibility predicate derived from workflow flags.
//!
//! # Invariants
//! - `slug` and `earnings` are set before the first save of a new post.
//! - `earnings` are frozen once `paid` is set.
//! - Only a post that is neither paid nor published can be removed.

use crate::model::earnings::Earnings;
use crate::model::editor::Editor;
use serde::{Deserialize, Serialize};

/// Store-assigned post identity.
pub type PostId = i64;

/// Workflow position of a post with respect to removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalState {
    /// Neither paid nor published; the only removable state.
    Draft,
    Paid,
    Published,
    PaidAndPublished,
}

impl RemovalState {
    pub fn permits_removal(self) -> bool {
        matches!(self, Self::Draft)
    }
}

/// Article written by an editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Option<PostId>,
    pub title: String,
    /// Markdown body.
    pub content: String,
    pub author: Editor,
    /// Derived from `title` on creation.
    pub slug: Option<String>,
    pub paid: bool,
    pub published: bool,
    /// Derived by an earnings calculator; `None` until computed.
    pub earnings: Option<Earnings>,
}

impl Post {
    /// Creates an unpaid, unpublished draft with no derived fields.
    pub fn new(title: impl Into<String>, content: impl Into<String>, author: Editor) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            author,
            slug: None,
            paid: false,
            published: false,
            earnings: None,
        }
    }

    /// Copies the editorial fields of `other` onto this post.
    ///
    /// # Invariants
    /// - Copies `title` and `content` only.
    /// - Identity, author, slug, earnings and workflow flags are kept.
    pub fn apply_update(&mut self, other: &Post) {
        self.title = other.title.clone();
        self.content = other.content.clone();
    }

    pub fn mark_paid(&mut self) {
        self.paid = true;
    }

    pub fn publish(&mut self) {
        self.published = true;
    }

    pub fn removal_state(&self) -> RemovalState {
        match (self.paid, self.published) {
            (false, false) => RemovalState::Draft,
            (true, false) => RemovalState::Paid,
            (false, true) => RemovalState::Published,
            (true, true) => RemovalState::PaidAndPublished,
        }
    }

    pub fn can_be_removed(&self) -> bool {
        self.removal_state().permits_removal()
    }
}
