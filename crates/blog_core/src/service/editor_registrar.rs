//! Editor registration use-cases.
//!
//! # Responsibility
//! - Register new editors and edit existing ones.
//! - Enforce email uniqueness against current repository state on both
//!   create and edit.
//! - Send the registration welcome message.
//!
//! # Invariants
//! - Null inputs fail before any collaborator call.
//! - `save` completes before the welcome message is sent; a failed save
//!   sends nothing.
//! - Edits mutate the repository's own instance via `Editor::apply_update`
//!   and never send messages.

use crate::collab::sender::EmailSender;
use crate::model::editor::Editor;
use crate::model::message::Message;
use crate::repo::editor_repo::EditorRepository;
use crate::service::error::{BusinessRuleViolation, RegistrarError, RegistrarResult};
use crate::service::log_outcome;
use std::time::Instant;

/// Orchestrates editor create/edit workflows.
pub struct EditorRegistrar<R: EditorRepository, M: EmailSender> {
    repo: R,
    email_sender: M,
}

impl<R: EditorRepository, M: EmailSender> EditorRegistrar<R, M> {
    /// Creates a registrar over the provided repository and email sender.
    pub fn new(repo: R, email_sender: M) -> Self {
        Self { repo, email_sender }
    }

    /// Registers a new editor.
    ///
    /// # Contract
    /// - `None` fails with `NullArgument`.
    /// - An editor already stored under the same email fails with
    ///   `BusinessRule(EmailAlreadyRegistered)`; nothing is saved or sent.
    /// - Repository errors are returned as `Repo` and suppress the message.
    /// - Returns the editor as saved, carrying its assigned id.
    pub fn create(&self, editor: Option<Editor>) -> RegistrarResult<Editor> {
        let started_at = Instant::now();
        let result = self.create_inner(editor);
        log_outcome("editor_create", started_at, &result, |saved| saved.id);
        result
    }

    fn create_inner(&self, editor: Option<Editor>) -> RegistrarResult<Editor> {
        let editor = editor.ok_or_else(|| RegistrarError::null_argument("editor"))?;

        // Email is read from the incoming entity at call time.
        if self.repo.find_by_email(editor.email.as_str())?.is_some() {
            return Err(BusinessRuleViolation::EmailAlreadyRegistered(editor.email).into());
        }

        let saved = self.repo.save(editor)?;
        self.email_sender
            .send(&Message::registration_welcome(&saved))?;
        Ok(saved)
    }

    /// Applies `editor`'s fields onto the stored editor with the same id.
    ///
    /// # Contract
    /// - `None`, or an editor without id, fails with `NullArgument`.
    /// - Unknown ids fail with `EditorNotFound`; nothing is saved.
    /// - An email owned by a different editor fails with
    ///   `BusinessRule(EmailAlreadyRegistered)`; nothing is saved.
    /// - Returns the saved editor; its id is the stored one.
    pub fn edit(&self, editor: Option<&Editor>) -> RegistrarResult<Editor> {
        let started_at = Instant::now();
        let result = self.edit_inner(editor);
        log_outcome("editor_edit", started_at, &result, |saved| saved.id);
        result
    }

    fn edit_inner(&self, editor: Option<&Editor>) -> RegistrarResult<Editor> {
        let editor = editor.ok_or_else(|| RegistrarError::null_argument("editor"))?;
        let id = editor
            .id
            .ok_or_else(|| RegistrarError::null_argument("editor.id"))?;

        let mut stored = self
            .repo
            .find_by_id(id)?
            .ok_or(RegistrarError::EditorNotFound(id))?;

        let owner = self.repo.find_by_email(editor.email.as_str())?;
        if owner.is_some_and(|owner| owner.id != Some(id)) {
            return Err(BusinessRuleViolation::EmailAlreadyRegistered(editor.email.clone()).into());
        }

        stored.apply_update(editor);
        Ok(self.repo.save(stored)?)
    }
}
