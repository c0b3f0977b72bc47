//! Content gate guarding community post creation.
//!
//! Empty or all-whitespace content never reaches the scorer. Everything else
//! must score at least 1; a score of exactly 0 is still a rejection.

use crate::services::sentiment;

pub const EMPTY_MESSAGE: &str = "Please write something before submitting!";
pub const REJECTION_MESSAGE: &str = "Please keep posts positive and uplifting!";

const MIN_SCORE: i32 = 1;

pub fn accept(content: &str) -> bool {
    if content.trim().is_empty() {
        return false;
    }
    sentiment::score(content) >= MIN_SCORE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_whitespace_content() {
        assert!(!accept(""));
        assert!(!accept("   "));
        assert!(!accept("\n\t "));
    }

    #[test]
    fn accepts_positive_content() {
        assert!(accept("you are wonderful and kind"));
    }

    #[test]
    fn rejects_negative_content() {
        assert!(!accept("I hate everything, this is terrible"));
    }

    #[test]
    fn a_score_of_zero_is_not_enough() {
        // No lexicon hits at all nets zero.
        assert!(!accept("went to the store and came back"));
        // Balanced positive and negative also nets zero.
        assert!(!accept("lovely but terrible"));
    }
}
