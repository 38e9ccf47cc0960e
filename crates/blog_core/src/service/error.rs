//! Registrar error taxonomy.

use crate::collab::sender::DeliveryError;
use crate::model::editor::EditorId;
use crate::model::post::PostId;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RegistrarResult<T> = Result<T, RegistrarError>;

/// Domain rule broken by a registrar request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusinessRuleViolation {
    /// Another editor is already registered with this email.
    EmailAlreadyRegistered(String),
    PaidPostRemoval(PostId),
    PublishedPostRemoval(PostId),
}

impl Display for BusinessRuleViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmailAlreadyRegistered(_) => write!(f, "email already registered"),
            Self::PaidPostRemoval(id) => write!(f, "cannot remove a paid post: {id}"),
            Self::PublishedPostRemoval(id) => write!(f, "cannot remove a published post: {id}"),
        }
    }
}

impl Error for BusinessRuleViolation {}

/// Error returned by registrar use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrarError {
    /// A required input was absent; no collaborator was called.
    NullArgument { argument: &'static str },
    EditorNotFound(EditorId),
    PostNotFound(PostId),
    BusinessRule(BusinessRuleViolation),
    /// Repository failure, exactly as the repository reported it.
    Repo(RepoError),
    /// Sender failure, exactly as the sender reported it.
    Delivery(DeliveryError),
}

impl RegistrarError {
    pub(crate) fn null_argument(argument: &'static str) -> Self {
        Self::NullArgument { argument }
    }

    /// Stable snake_case code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NullArgument { .. } => "null_argument",
            Self::EditorNotFound(_) => "editor_not_found",
            Self::PostNotFound(_) => "post_not_found",
            Self::BusinessRule(BusinessRuleViolation::EmailAlreadyRegistered(_)) => {
                "email_already_registered"
            }
            Self::BusinessRule(BusinessRuleViolation::PaidPostRemoval(_)) => "paid_post_removal",
            Self::BusinessRule(BusinessRuleViolation::PublishedPostRemoval(_)) => {
                "published_post_removal"
            }
            Self::Repo(_) => "repo_failure",
            Self::Delivery(_) => "delivery_failure",
        }
    }
}

impl Display for RegistrarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NullArgument { argument } => write!(f, "required argument is null: {argument}"),
            Self::EditorNotFound(id) => write!(f, "editor not found: {id}"),
            Self::PostNotFound(id) => write!(f, "post not found: {id}"),
            Self::BusinessRule(violation) => write!(f, "business rule violated: {violation}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Delivery(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RegistrarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::BusinessRule(violation) => Some(violation),
            Self::Repo(err) => Some(err),
            Self::Delivery(err) => Some(err),
            Self::NullArgument { .. } | Self::EditorNotFound(_) | Self::PostNotFound(_) => None,
        }
    }
}

impl From<BusinessRuleViolation> for RegistrarError {
    fn from(value: BusinessRuleViolation) -> Self {
        Self::BusinessRule(value)
    }
}

impl From<RepoError> for RegistrarError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<DeliveryError> for RegistrarError {
    fn from(value: DeliveryError) -> Self {
        Self::Delivery(value)
    }
}
