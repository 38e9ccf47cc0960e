//! Process-local repositories backed by ordered maps.
//!
//! # Responsibility
//! - Let the registrars run end to end without an external store.
//!
//! # Invariants
//! - Ids are assigned sequentially starting at 1 and never reused.
//! - Saving an entity that already carries an id replaces the stored row.

use crate::model::editor::{Editor, EditorId};
use crate::model::post::{Post, PostId};
use crate::repo::editor_repo::EditorRepository;
use crate::repo::post_repo::PostRepository;
use crate::repo::{RepoError, RepoResult};
use log::debug;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

/// In-memory editor repository.
#[derive(Debug)]
pub struct InMemoryEditorRepository {
    rows: RefCell<BTreeMap<EditorId, Editor>>,
    next_id: Cell<EditorId>,
}

impl Default for InMemoryEditorRepository {
    fn default() -> Self {
        Self {
            rows: RefCell::new(BTreeMap::new()),
            next_id: Cell::new(1),
        }
    }
}

impl InMemoryEditorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.borrow().is_empty()
    }
}

impl EditorRepository for InMemoryEditorRepository {
    fn save(&self, mut editor: Editor) -> RepoResult<Editor> {
        let id = match editor.id {
            Some(id) => id,
            None => allocate_id(&self.next_id),
        };
        reserve_id(&self.next_id, id);
        editor.id = Some(id);
        self.rows.borrow_mut().insert(id, editor.clone());
        debug!("event=repo_save module=repo entity=editor id={id}");
        Ok(editor)
    }

    fn find_by_id(&self, id: EditorId) -> RepoResult<Option<Editor>> {
        Ok(self.rows.borrow().get(&id).cloned())
    }

    fn find_by_email(&self, email: &str) -> RepoResult<Option<Editor>> {
        Ok(self
            .rows
            .borrow()
            .values()
            .find(|editor| editor.email == email)
            .cloned())
    }
}

/// In-memory post repository.
#[derive(Debug)]
pub struct InMemoryPostRepository {
    rows: RefCell<BTreeMap<PostId, Post>>,
    next_id: Cell<PostId>,
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self {
            rows: RefCell::new(BTreeMap::new()),
            next_id: Cell::new(1),
        }
    }
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.borrow().is_empty()
    }
}

impl PostRepository for InMemoryPostRepository {
    fn save(&self, mut post: Post) -> RepoResult<Post> {
        let id = match post.id {
            Some(id) => id,
            None => allocate_id(&self.next_id),
        };
        reserve_id(&self.next_id, id);
        post.id = Some(id);
        self.rows.borrow_mut().insert(id, post.clone());
        debug!("event=repo_save module=repo entity=post id={id}");
        Ok(post)
    }

    fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        Ok(self.rows.borrow().get(&id).cloned())
    }

    fn remove(&self, id: PostId) -> RepoResult<()> {
        if self.rows.borrow_mut().remove(&id).is_none() {
            return Err(RepoError::NotFound { entity: "post", id });
        }
        debug!("event=repo_remove module=repo entity=post id={id}");
        Ok(())
    }
}

fn allocate_id(next_id: &Cell<i64>) -> i64 {
    let id = next_id.get();
    next_id.set(id + 1);
    id
}

// Keeps caller-provided ids from colliding with later allocations.
fn reserve_id(next_id: &Cell<i64>, id: i64) {
    if id >= next_id.get() {
        next_id.set(id + 1);
    }
}
