//! Lexicon-based sentiment scoring.
//!
//! An AFINN-style word list trimmed to the vocabulary the app actually sees:
//! each recognized word carries an integer weight, the score of a text is the
//! sum over its tokens. The content gate and the journal tone badge both sit
//! on top of this.

/// Word weights in [-5, 5]. Unrecognized words score 0.
static LEXICON: &[(&str, i32)] = &[
    // Positive
    ("amazing", 4),
    ("awesome", 4),
    ("beautiful", 3),
    ("best", 3),
    ("blessed", 3),
    ("brilliant", 4),
    ("calm", 2),
    ("cheerful", 2),
    ("delight", 3),
    ("delighted", 3),
    ("encourage", 2),
    ("encouraging", 2),
    ("enjoy", 2),
    ("enjoyed", 2),
    ("excellent", 3),
    ("excited", 3),
    ("exciting", 3),
    ("fantastic", 4),
    ("fun", 4),
    ("glad", 3),
    ("good", 3),
    ("grateful", 3),
    ("great", 3),
    ("happy", 3),
    ("heartwarming", 3),
    ("hope", 2),
    ("hopeful", 2),
    ("inspired", 2),
    ("inspiring", 2),
    ("joy", 3),
    ("joyful", 3),
    ("kind", 2),
    ("laugh", 3),
    ("laughed", 3),
    ("love", 3),
    ("loved", 3),
    ("lovely", 3),
    ("nice", 3),
    ("peaceful", 2),
    ("proud", 2),
    ("relaxed", 2),
    ("smile", 2),
    ("smiled", 2),
    ("supportive", 2),
    ("sweet", 2),
    ("thankful", 2),
    ("warm", 2),
    ("win", 4),
    ("wonderful", 4),
    // Negative
    ("afraid", -2),
    ("angry", -3),
    ("annoyed", -2),
    ("annoying", -2),
    ("anxious", -2),
    ("ashamed", -2),
    ("awful", -3),
    ("bad", -3),
    ("broken", -2),
    ("cruel", -3),
    ("cry", -2),
    ("crying", -2),
    ("depressed", -2),
    ("depressing", -2),
    ("disappointed", -2),
    ("disappointing", -2),
    ("disgusting", -3),
    ("dumb", -3),
    ("fail", -2),
    ("failed", -2),
    ("failure", -2),
    ("fear", -2),
    ("frustrated", -2),
    ("frustrating", -2),
    ("gloomy", -2),
    ("guilty", -3),
    ("hate", -3),
    ("hated", -3),
    ("hates", -3),
    ("hating", -3),
    ("hopeless", -2),
    ("horrible", -3),
    ("hurt", -2),
    ("hurts", -2),
    ("jealous", -2),
    ("lonely", -2),
    ("lost", -3),
    ("mad", -3),
    ("miserable", -3),
    ("pain", -2),
    ("regret", -2),
    ("sad", -2),
    ("scared", -2),
    ("sick", -2),
    ("stressed", -2),
    ("stupid", -2),
    ("terrible", -3),
    ("tired", -2),
    ("ugly", -3),
    ("unhappy", -2),
    ("upset", -2),
    ("useless", -2),
    ("worried", -3),
    ("worry", -3),
    ("worst", -3),
    ("worthless", -2),
];

fn weight(token: &str) -> i32 {
    LEXICON
        .iter()
        .find(|(word, _)| *word == token)
        .map(|(_, w)| *w)
        .unwrap_or(0)
}

/// Net sentiment score of a text: sum of token weights.
pub fn score(text: &str) -> i32 {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| weight(&t.to_lowercase()))
        .sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

/// Tone badge shown next to journal entries.
pub fn tone(text: &str) -> Tone {
    match score(text) {
        s if s > 0 => Tone::Positive,
        s if s < 0 => Tone::Negative,
        _ => Tone::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_words_raise_the_score() {
        assert!(score("you are wonderful and kind") >= 1);
        assert_eq!(score("wonderful"), 4);
    }

    #[test]
    fn negative_words_lower_the_score() {
        assert!(score("I hate everything, this is terrible") < 0);
    }

    #[test]
    fn unrecognized_text_scores_zero() {
        assert_eq!(score("the sky has clouds today"), 0);
        assert_eq!(score(""), 0);
    }

    #[test]
    fn scoring_is_case_insensitive_and_ignores_punctuation() {
        assert_eq!(score("WONDERFUL!"), score("wonderful"));
        assert_eq!(score("hate, hate."), score("hate hate"));
    }

    #[test]
    fn tone_tracks_score_sign() {
        assert_eq!(tone("such a lovely walk"), Tone::Positive);
        assert_eq!(tone("a terrible meeting"), Tone::Negative);
        assert_eq!(tone("went to the store"), Tone::Neutral);
        assert_eq!(tone("lovely but terrible"), Tone::Neutral);
    }
}
