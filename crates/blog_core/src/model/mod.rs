//! Domain model for the publishing core.
//!
//! # Responsibility
//! - Define editors, posts and the value objects exchanged with collaborators.
//! - Keep field-copy and eligibility rules next to the data they guard.
//!
//! # Invariants
//! - Identities are assigned by repositories, never by the model.

pub mod earnings;
pub mod editor;
pub mod message;
pub mod notification;
pub mod post;
