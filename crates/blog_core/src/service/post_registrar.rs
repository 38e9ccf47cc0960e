//! Post registration use-cases.
//!
//! # Responsibility
//! - Create, edit and remove posts.
//! - Derive slug and earnings before persistence.
//! - Announce created posts.
//!
//! # Invariants
//! - Null inputs fail before any collaborator call.
//! - New posts get a slug and earnings before their single `save`.
//! - The creation notification is sent only after `save` succeeded.
//! - Paid posts keep their earnings on edit; the calculator is not called.
//! - Paid or published posts are never handed to `PostRepository::remove`.

use crate::collab::earnings::EarningsCalculator;
use crate::collab::sender::NotificationSender;
use crate::collab::slug::SlugConverter;
use crate::model::notification::Notification;
use crate::model::post::{Post, PostId, RemovalState};
use crate::repo::post_repo::PostRepository;
use crate::service::error::{BusinessRuleViolation, RegistrarError, RegistrarResult};
use crate::service::log_outcome;
use std::time::Instant;

/// Orchestrates post create/edit/remove workflows.
pub struct PostRegistrar<R, N, S, C>
where
    R: PostRepository,
    N: NotificationSender,
    S: SlugConverter,
    C: EarningsCalculator,
{
    repo: R,
    notification_sender: N,
    slug_converter: S,
    earnings_calculator: C,
}

impl<R, N, S, C> PostRegistrar<R, N, S, C>
where
    R: PostRepository,
    N: NotificationSender,
    S: SlugConverter,
    C: EarningsCalculator,
{
    /// Creates a registrar over the provided repository and collaborators.
    pub fn new(repo: R, notification_sender: N, slug_converter: S, earnings_calculator: C) -> Self {
        Self {
            repo,
            notification_sender,
            slug_converter,
            earnings_calculator,
        }
    }

    /// Creates a post.
    ///
    /// # Contract
    /// - `None` fails with `NullArgument`.
    /// - Slug is derived from the title and earnings are calculated, both
    ///   before `save`.
    /// - After `save`, exactly one `Notification::post_created` is sent.
    pub fn create(&self, post: Option<Post>) -> RegistrarResult<Post> {
        let started_at = Instant::now();
        let result = self.create_inner(post);
        log_outcome("post_create", started_at, &result, |saved| saved.id);
        result
    }

    fn create_inner(&self, post: Option<Post>) -> RegistrarResult<Post> {
        let mut post = post.ok_or_else(|| RegistrarError::null_argument("post"))?;

        post.slug = Some(self.slug_converter.convert(post.title.as_str()));
        post.earnings = Some(self.earnings_calculator.calculate(&post));

        let saved = self.repo.save(post)?;
        self.notification_sender
            .send(&Notification::post_created(&saved))?;
        Ok(saved)
    }

    /// Applies `post`'s editorial fields onto the stored post with the same id.
    ///
    /// # Contract
    /// - `None`, or a post without id, fails with `NullArgument`.
    /// - Unknown ids fail with `PostNotFound`; nothing is saved.
    /// - Earnings are recalculated before `save` only while the stored post
    ///   is unpaid.
    pub fn edit(&self, post: Option<&Post>) -> RegistrarResult<Post> {
        let started_at = Instant::now();
        let result = self.edit_inner(post);
        log_outcome("post_edit", started_at, &result, |saved| saved.id);
        result
    }

    fn edit_inner(&self, post: Option<&Post>) -> RegistrarResult<Post> {
        let post = post.ok_or_else(|| RegistrarError::null_argument("post"))?;
        let id = post
            .id
            .ok_or_else(|| RegistrarError::null_argument("post.id"))?;

        let mut stored = self.find_existing(id)?;
        stored.apply_update(post);
        if !stored.paid {
            stored.earnings = Some(self.earnings_calculator.calculate(&stored));
        }
        Ok(self.repo.save(stored)?)
    }

    /// Removes a draft post.
    ///
    /// # Contract
    /// - `None` fails with `NullArgument`.
    /// - Unknown ids fail with `PostNotFound`.
    /// - Paid posts fail with `PaidPostRemoval`, published posts with
    ///   `PublishedPostRemoval`; the repository is not asked to remove them.
    pub fn remove(&self, id: Option<PostId>) -> RegistrarResult<()> {
        let started_at = Instant::now();
        let result = self.remove_inner(id);
        log_outcome("post_remove", started_at, &result, |_| id);
        result
    }

    fn remove_inner(&self, id: Option<PostId>) -> RegistrarResult<()> {
        let id = id.ok_or_else(|| RegistrarError::null_argument("id"))?;

        let stored = self.find_existing(id)?;
        match stored.removal_state() {
            RemovalState::Draft => {}
            RemovalState::Paid | RemovalState::PaidAndPublished => {
                return Err(BusinessRuleViolation::PaidPostRemoval(id).into());
            }
            RemovalState::Published => {
                return Err(BusinessRuleViolation::PublishedPostRemoval(id).into());
            }
        }

        Ok(self.repo.remove(id)?)
    }

    fn find_existing(&self, id: PostId) -> RegistrarResult<Post> {
        self.repo
            .find_by_id(id)?
            .ok_or(RegistrarError::PostNotFound(id))
    }
}
