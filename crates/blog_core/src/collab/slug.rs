//! Slug derivation for post titles.

use ::slug::slugify;
use uuid::Uuid;

const SLUG_CODE_LEN: usize = 8;

/// Converts a post title into its URL slug.
///
/// Any `Fn(&str) -> String` is a converter, so callers can inject plain
/// closures.
pub trait SlugConverter {
    fn convert(&self, title: &str) -> String;
}

impl<F> SlugConverter for F
where
    F: Fn(&str) -> String,
{
    fn convert(&self, title: &str) -> String {
        self(title)
    }
}

/// Slugifies the title and appends a short random code.
///
/// Output shape: `<slugified-title>-<8 hex chars>`, or just the code when the
/// title has no representable characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlugifyConverter;

impl SlugConverter for SlugifyConverter {
    fn convert(&self, title: &str) -> String {
        let code = Uuid::new_v4().simple().to_string();
        let code = &code[..SLUG_CODE_LEN];
        let base = slugify(title);
        if base.is_empty() {
            code.to_string()
        } else {
            format!("{base}-{code}")
        }
    }
}
