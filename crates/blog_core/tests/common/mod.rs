#![allow(dead_code)]

use blog_core::{
    DeliveryError, DeliveryResult, Earnings, Editor, EditorId, EditorRepository, EmailSender,
    Message, Notification, NotificationSender, Post, PostId, PostRepository, RepoError,
    RepoResult,
};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

/// One observed collaborator call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FindEditorByEmail(String),
    FindEditorById(EditorId),
    SaveEditor(Editor),
    SendEmail(Message),
    ConvertSlug(String),
    CalculateEarnings(Post),
    FindPostById(PostId),
    SavePost(Post),
    RemovePost(PostId),
    SendNotification(Notification),
}

/// Shared, ordered record of collaborator calls.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<Call>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.0.borrow().iter().filter(|call| matches(call)).count()
    }

    /// Index of the first call accepted by `matches`.
    pub fn position(&self, matches: impl Fn(&Call) -> bool) -> Option<usize> {
        self.0.borrow().iter().position(|call| matches(call))
    }
}

pub fn is_save_editor(call: &Call) -> bool {
    matches!(call, Call::SaveEditor(_))
}

pub fn is_send_email(call: &Call) -> bool {
    matches!(call, Call::SendEmail(_))
}

pub fn is_save_post(call: &Call) -> bool {
    matches!(call, Call::SavePost(_))
}

pub fn is_remove_post(call: &Call) -> bool {
    matches!(call, Call::RemovePost(_))
}

pub fn is_send_notification(call: &Call) -> bool {
    matches!(call, Call::SendNotification(_))
}

pub fn is_convert_slug(call: &Call) -> bool {
    matches!(call, Call::ConvertSlug(_))
}

pub fn is_calculate_earnings(call: &Call) -> bool {
    matches!(call, Call::CalculateEarnings(_))
}

/// Editor repository that records calls and assigns ids from 1.
pub struct RecordingEditorRepository {
    log: CallLog,
    rows: RefCell<BTreeMap<EditorId, Editor>>,
    next_id: Cell<EditorId>,
    save_failure: RefCell<Option<RepoError>>,
}

impl RecordingEditorRepository {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            rows: RefCell::new(BTreeMap::new()),
            next_id: Cell::new(1),
            save_failure: RefCell::new(None),
        }
    }

    /// Stores `editor` without recording a call.
    pub fn seed(&self, editor: Editor) {
        let id = editor.id.expect("seeded editors need an id");
        self.rows.borrow_mut().insert(id, editor);
        if id >= self.next_id.get() {
            self.next_id.set(id + 1);
        }
    }

    /// Makes every following `save` fail with `error`.
    pub fn fail_saves_with(&self, error: RepoError) {
        *self.save_failure.borrow_mut() = Some(error);
    }

    pub fn stored(&self, id: EditorId) -> Option<Editor> {
        self.rows.borrow().get(&id).cloned()
    }
}

impl EditorRepository for RecordingEditorRepository {
    fn save(&self, mut editor: Editor) -> RepoResult<Editor> {
        self.log.push(Call::SaveEditor(editor.clone()));
        if let Some(error) = self.save_failure.borrow().clone() {
            return Err(error);
        }
        let id = match editor.id {
            Some(id) => id,
            None => {
                let id = self.next_id.get();
                self.next_id.set(id + 1);
                id
            }
        };
        editor.id = Some(id);
        self.rows.borrow_mut().insert(id, editor.clone());
        Ok(editor)
    }

    fn find_by_id(&self, id: EditorId) -> RepoResult<Option<Editor>> {
        self.log.push(Call::FindEditorById(id));
        Ok(self.rows.borrow().get(&id).cloned())
    }

    fn find_by_email(&self, email: &str) -> RepoResult<Option<Editor>> {
        self.log.push(Call::FindEditorByEmail(email.to_string()));
        Ok(self
            .rows
            .borrow()
            .values()
            .find(|editor| editor.email == email)
            .cloned())
    }
}

/// Post repository that records calls and assigns ids from 1.
pub struct RecordingPostRepository {
    log: CallLog,
    rows: RefCell<BTreeMap<PostId, Post>>,
    next_id: Cell<PostId>,
    save_failure: RefCell<Option<RepoError>>,
}

impl RecordingPostRepository {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            rows: RefCell::new(BTreeMap::new()),
            next_id: Cell::new(1),
            save_failure: RefCell::new(None),
        }
    }

    /// Makes every following `save` fail with `error`.
    pub fn fail_saves_with(&self, error: RepoError) {
        *self.save_failure.borrow_mut() = Some(error);
    }

    pub fn seed(&self, post: Post) {
        let id = post.id.expect("seeded posts need an id");
        self.rows.borrow_mut().insert(id, post);
        if id >= self.next_id.get() {
            self.next_id.set(id + 1);
        }
    }

    pub fn stored(&self, id: PostId) -> Option<Post> {
        self.rows.borrow().get(&id).cloned()
    }
}

impl PostRepository for RecordingPostRepository {
    fn save(&self, mut post: Post) -> RepoResult<Post> {
        self.log.push(Call::SavePost(post.clone()));
        if let Some(error) = self.save_failure.borrow().clone() {
            return Err(error);
        }
        let id = match post.id {
            Some(id) => id,
            None => {
                let id = self.next_id.get();
                self.next_id.set(id + 1);
                id
            }
        };
        post.id = Some(id);
        self.rows.borrow_mut().insert(id, post.clone());
        Ok(post)
    }

    fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        self.log.push(Call::FindPostById(id));
        Ok(self.rows.borrow().get(&id).cloned())
    }

    fn remove(&self, id: PostId) -> RepoResult<()> {
        self.log.push(Call::RemovePost(id));
        self.rows.borrow_mut().remove(&id);
        Ok(())
    }
}

pub struct RecordingEmailSender {
    log: CallLog,
    failure: Option<DeliveryError>,
}

impl RecordingEmailSender {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            failure: None,
        }
    }

    pub fn failing(log: &CallLog, error: DeliveryError) -> Self {
        Self {
            log: log.clone(),
            failure: Some(error),
        }
    }
}

impl EmailSender for RecordingEmailSender {
    fn send(&self, message: &Message) -> DeliveryResult<()> {
        self.log.push(Call::SendEmail(message.clone()));
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

pub struct RecordingNotificationSender {
    log: CallLog,
}

impl RecordingNotificationSender {
    pub fn new(log: &CallLog) -> Self {
        Self { log: log.clone() }
    }
}

impl NotificationSender for RecordingNotificationSender {
    fn send(&self, notification: &Notification) -> DeliveryResult<()> {
        self.log.push(Call::SendNotification(notification.clone()));
        Ok(())
    }
}

/// Slug converter closure returning `slug-of-<title>`.
pub fn recording_slug_converter(log: &CallLog) -> impl Fn(&str) -> String {
    let log = log.clone();
    move |title: &str| {
        log.push(Call::ConvertSlug(title.to_string()));
        format!("slug-of-{title}")
    }
}

/// Earnings calculator closure always returning `earnings`.
pub fn recording_calculator(log: &CallLog, earnings: Earnings) -> impl Fn(&Post) -> Earnings {
    let log = log.clone();
    move |post: &Post| {
        log.push(Call::CalculateEarnings(post.clone()));
        earnings
    }
}

pub fn sample_earnings() -> Earnings {
    Earnings::new(10, 4, 40)
}

pub fn new_editor() -> Editor {
    Editor::new("Alex", "alex@email.com", 250_000)
}

pub fn existing_editor() -> Editor {
    Editor::with_id(1, "Alex", "alex@email.com", 250_000)
}

pub fn new_post() -> Post {
    Post::new("Título", "Conteúdo", existing_editor())
}

pub fn existing_post() -> Post {
    let mut post = new_post();
    post.id = Some(1);
    post.slug = Some("slug".to_string());
    post.earnings = Some(sample_earnings());
    post
}

pub fn existing_paid_post() -> Post {
    let mut post = existing_post();
    post.mark_paid();
    post
}

pub fn existing_published_post() -> Post {
    let mut post = existing_post();
    post.publish();
    post
}
