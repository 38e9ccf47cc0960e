//! Email and notification delivery contracts.

use crate::model::message::Message;
use crate::model::notification::Notification;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type DeliveryResult<T> = Result<T, DeliveryError>;

/// Failure reported by a sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// Transport could not be reached.
    Unavailable(String),
}

impl Display for DeliveryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "delivery transport unavailable: {reason}"),
        }
    }
}

impl Error for DeliveryError {}

/// Dispatches email messages.
pub trait EmailSender {
    fn send(&self, message: &Message) -> DeliveryResult<()>;
}

/// Dispatches in-app notifications.
pub trait NotificationSender {
    fn send(&self, notification: &Notification) -> DeliveryResult<()>;
}

impl<S: EmailSender + ?Sized> EmailSender for &S {
    fn send(&self, message: &Message) -> DeliveryResult<()> {
        (**self).send(message)
    }
}

impl<S: NotificationSender + ?Sized> NotificationSender for &S {
    fn send(&self, notification: &Notification) -> DeliveryResult<()> {
        (**self).send(notification)
    }
}

/// Email sender that only records dispatch in the log.
///
/// Recipient addresses are not logged; only sizes are.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEmailSender;

impl EmailSender for LogEmailSender {
    fn send(&self, message: &Message) -> DeliveryResult<()> {
        info!(
            "event=email_send module=sender status=ok subject_len={} body_len={}",
            message.subject.chars().count(),
            message.body.chars().count()
        );
        Ok(())
    }
}

/// Notification sender that only records dispatch in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotificationSender;

impl NotificationSender for LogNotificationSender {
    fn send(&self, notification: &Notification) -> DeliveryResult<()> {
        info!(
            "event=notification_send module=sender status=ok content_len={}",
            notification.content.chars().count()
        );
        Ok(())
    }
}
