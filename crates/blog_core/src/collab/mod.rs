//! External collaborator contracts and default wiring implementations.
//!
//! # Responsibility
//! - Define the narrow interfaces registrars use for delivery and derivation.
//! - Ship minimal defaults so the core runs without the surrounding app.
//!
//! # Invariants
//! - Slug conversion and earnings calculation are pure from the caller's view.
//! - Delivery failures are reported, never retried here.

pub mod earnings;
pub mod sender;
pub mod slug;
