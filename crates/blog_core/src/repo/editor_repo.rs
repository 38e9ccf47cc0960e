//! Editor repository contract.

use crate::model::editor::{Editor, EditorId};
use crate::repo::RepoResult;

/// Persistence interface for editors.
pub trait EditorRepository {
    /// Inserts or updates `editor`, assigning an id when it has none.
    ///
    /// Returns the stored editor, including the assigned id.
    fn save(&self, editor: Editor) -> RepoResult<Editor>;
    fn find_by_id(&self, id: EditorId) -> RepoResult<Option<Editor>>;
    /// Looks up an editor by exact email match.
    fn find_by_email(&self, email: &str) -> RepoResult<Option<Editor>>;
}

impl<R: EditorRepository + ?Sized> EditorRepository for &R {
    fn save(&self, editor: Editor) -> RepoResult<Editor> {
        (**self).save(editor)
    }

    fn find_by_id(&self, id: EditorId) -> RepoResult<Option<Editor>> {
        (**self).find_by_id(id)
    }

    fn find_by_email(&self, email: &str) -> RepoResult<Option<Editor>> {
        (**self).find_by_email(email)
    }
}
