//! Registration use-case services.
//!
//! # Responsibility
//! - Orchestrate validation, mutation, persistence and notification for
//!   editors and posts.
//! - Keep callers decoupled from repository and delivery details.
//!
//! # Invariants
//! - Every operation runs validate -> mutate -> persist -> notify, in order.
//! - Collaborator failures abort the operation; nothing is retried.
//! - Log events carry ids and error codes only, never names or emails.

use crate::service::error::{RegistrarError, RegistrarResult};
use log::{error, info, warn};
use std::time::Instant;

pub mod editor_registrar;
pub mod error;
pub mod post_registrar;

pub(crate) fn log_outcome<T>(
    event: &str,
    started_at: Instant,
    result: &RegistrarResult<T>,
    id_of: impl FnOnce(&T) -> Option<i64>,
) {
    let duration_ms = started_at.elapsed().as_millis();
    match result {
        Ok(value) => info!(
            "event={event} module=registrar status=ok duration_ms={duration_ms} id={}",
            format_id(id_of(value))
        ),
        Err(err @ (RegistrarError::Repo(_) | RegistrarError::Delivery(_))) => error!(
            "event={event} module=registrar status=error duration_ms={duration_ms} error_code={}{}",
            err.code(),
            error_detail(err)
        ),
        Err(err) => warn!(
            "event={event} module=registrar status=rejected duration_ms={duration_ms} error_code={}",
            err.code()
        ),
    }
}

// Delivery errors may quote recipient addresses, so only their code is logged.
fn error_detail(err: &RegistrarError) -> String {
    match err {
        RegistrarError::Repo(inner) => format!(" error={inner}"),
        _ => String::new(),
    }
}

fn format_id(id: Option<i64>) -> String {
    id.map(|value| value.to_string())
        .unwrap_or_else(|| "none".to_string())
}
