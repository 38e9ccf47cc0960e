//! Earnings value object.

use serde::{Deserialize, Serialize};

/// Amount owed to a post's author, as computed by an `EarningsCalculator`.
///
/// Registrars only thread this value into `Post::earnings`; they never read
/// its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Earnings {
    /// Paid amount per word, in minor currency units.
    pub rate_per_word: i64,
    pub word_count: u32,
    /// Total amount in minor currency units.
    pub total: i64,
}

impl Earnings {
    pub fn new(rate_per_word: i64, word_count: u32, total: i64) -> Self {
        Self {
            rate_per_word,
            word_count,
            total,
        }
    }
}
