//! Core registration logic for the blog publishing domain.
//! This crate owns the editor and post registration invariants.

pub mod collab;
pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use collab::earnings::{EarningsCalculator, PerWordEarningsCalculator};
pub use collab::sender::{
    DeliveryError, DeliveryResult, EmailSender, LogEmailSender, LogNotificationSender,
    NotificationSender,
};
pub use collab::slug::{SlugConverter, SlugifyConverter};
pub use config::{default_log_level, LoggingConfig};
pub use logging::{init_logging, logging_status};
pub use model::earnings::Earnings;
pub use model::editor::{Editor, EditorId};
pub use model::message::Message;
pub use model::notification::{Notification, NEW_POST_PREFIX};
pub use model::post::{Post, PostId, RemovalState};
pub use repo::editor_repo::EditorRepository;
pub use repo::memory::{InMemoryEditorRepository, InMemoryPostRepository};
pub use repo::post_repo::PostRepository;
pub use repo::{RepoError, RepoResult};
pub use service::editor_registrar::EditorRegistrar;
pub use service::error::{BusinessRuleViolation, RegistrarError, RegistrarResult};
pub use service::post_registrar::PostRegistrar;

/// Minimal health-check API for wiring probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
