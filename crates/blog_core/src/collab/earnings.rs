//! Earnings calculation contract.

use crate::model::earnings::Earnings;
use crate::model::post::Post;

/// Computes the earnings owed for a post.
///
/// Any `Fn(&Post) -> Earnings` is a calculator.
pub trait EarningsCalculator {
    fn calculate(&self, post: &Post) -> Earnings;
}

impl<F> EarningsCalculator for F
where
    F: Fn(&Post) -> Earnings,
{
    fn calculate(&self, post: &Post) -> Earnings {
        self(post)
    }
}

/// Pays a fixed rate for every whitespace-separated word of the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerWordEarningsCalculator {
    /// Minor currency units per word.
    pub rate_per_word: i64,
}

impl PerWordEarningsCalculator {
    pub fn new(rate_per_word: i64) -> Self {
        Self { rate_per_word }
    }
}

impl EarningsCalculator for PerWordEarningsCalculator {
    fn calculate(&self, post: &Post) -> Earnings {
        let word_count = u32::try_from(post.content.split_whitespace().count()).unwrap_or(u32::MAX);
        let total = self.rate_per_word.saturating_mul(i64::from(word_count));
        Earnings::new(self.rate_per_word, word_count, total)
    }
}
