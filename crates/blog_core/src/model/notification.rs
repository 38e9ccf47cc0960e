//! In-app notification announcing new posts.

use crate::model::post::Post;
use serde::{Deserialize, Serialize};

/// Content prefix of the "post created" announcement.
pub const NEW_POST_PREFIX: &str = "Novo post criado -> ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub content: String,
    /// Address the notification is routed to.
    pub target: String,
}

impl Notification {
    pub fn new(content: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            target: target.into(),
        }
    }

    /// Announcement for a created post, routed to its author.
    ///
    /// Content is exactly `NEW_POST_PREFIX` followed by the title.
    pub fn post_created(post: &Post) -> Self {
        Self::new(
            format!("{NEW_POST_PREFIX}{}", post.title),
            post.author.email.as_str(),
        )
    }
}
