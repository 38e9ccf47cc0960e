//! Post repository contract.

use crate::model::post::{Post, PostId};
use crate::repo::RepoResult;

/// Persistence interface for posts.
pub trait PostRepository {
    /// Inserts or updates `post`, assigning an id when it has none.
    fn save(&self, post: Post) -> RepoResult<Post>;
    fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>>;
    /// Hard-deletes the post with `id`.
    fn remove(&self, id: PostId) -> RepoResult<()>;
}

impl<R: PostRepository + ?Sized> PostRepository for &R {
    fn save(&self, post: Post) -> RepoResult<Post> {
        (**self).save(post)
    }

    fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        (**self).find_by_id(id)
    }

    fn remove(&self, id: PostId) -> RepoResult<()> {
        (**self).remove(id)
    }
}
