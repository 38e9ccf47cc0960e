//! Outbound email message sent to editors.

use crate::model::editor::Editor;
use serde::{Deserialize, Serialize};

const REGISTRATION_SUBJECT: &str = "Cadastro no Blog";

/// Email addressed to one recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl Message {
    pub fn new(
        recipient: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Welcome message for a freshly registered editor.
    ///
    /// The recipient is the editor's email as it was saved.
    pub fn registration_welcome(editor: &Editor) -> Self {
        Self::new(
            editor.email.as_str(),
            REGISTRATION_SUBJECT,
            format!(
                "Olá, {}! Seu cadastro foi realizado com sucesso.",
                editor.name
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Message;
    use crate::model::editor::Editor;

    #[test]
    fn registration_welcome_targets_editor_email() {
        let editor = Editor::with_id(1, "Alex", "alex@email.com", 0);
        let message = Message::registration_welcome(&editor);
        assert_eq!(message.recipient, "alex@email.com");
        assert!(message.body.contains("Alex"));
    }
}
