//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire both registrars with the default collaborators and run one
//!   create/edit/remove pass.
//! - Keep output deterministic `key=value` lines for quick sanity checks.
//!
//! Set `BLOG_LOG_DIR` to an absolute path to also write core logs there.

use blog_core::{
    default_log_level, init_logging, Editor, EditorRegistrar, InMemoryEditorRepository,
    InMemoryPostRepository, LogEmailSender, LogNotificationSender, LoggingConfig,
    PerWordEarningsCalculator, Post, PostRegistrar, SlugifyConverter,
};
use std::error::Error;

const DEMO_RATE_PER_WORD: i64 = 10;

fn main() -> Result<(), Box<dyn Error>> {
    if let Ok(log_dir) = std::env::var("BLOG_LOG_DIR") {
        init_logging(&LoggingConfig::new(default_log_level(), log_dir))?;
    }

    println!("blog_core ping={}", blog_core::ping());
    println!("blog_core version={}", blog_core::core_version());

    let editors = InMemoryEditorRepository::new();
    let posts = InMemoryPostRepository::new();
    let editor_registrar = EditorRegistrar::new(&editors, LogEmailSender);
    let post_registrar = PostRegistrar::new(
        &posts,
        LogNotificationSender,
        SlugifyConverter,
        PerWordEarningsCalculator::new(DEMO_RATE_PER_WORD),
    );

    let author = editor_registrar.create(Some(Editor::new("Alex", "alex@email.com", 250_000)))?;
    println!("editor_create id={:?}", author.id);

    let duplicate = editor_registrar.create(Some(Editor::new("Alex", "alex@email.com", 0)));
    if let Err(err) = duplicate {
        println!("editor_create_duplicate error_code={}", err.code());
    }

    let post = post_registrar.create(Some(Post::new(
        "Primeiro post",
        "Olá mundo do blog",
        author,
    )))?;
    println!(
        "post_create id={:?} earnings_total={}",
        post.id,
        post.earnings.map(|earnings| earnings.total).unwrap_or_default()
    );

    let mut revision = post.clone();
    revision.content = "Olá mundo do blog, agora revisado".to_string();
    let edited = post_registrar.edit(Some(&revision))?;
    println!(
        "post_edit id={:?} earnings_total={}",
        edited.id,
        edited.earnings.map(|earnings| earnings.total).unwrap_or_default()
    );

    post_registrar.remove(edited.id)?;
    println!("post_remove remaining={}", posts.len());

    Ok(())
}
