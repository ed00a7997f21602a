use crate::emojibot::format::{join_words, shortcode, words};
use crate::emojibot::random::{RandomSource, choose};
use crate::emojibot::similarity::similarity;
use crate::emojibot::vocabulary::Vocabulary;

use super::traits::Strategy;

/// Scores must be strictly above this to count as a match.
pub const SIMILARITY_THRESHOLD: f64 = 0.70;

/// Swap each word for a random emoji that looks like it, or keep the word.
pub struct EnglishToEmojis;

impl Strategy for EnglishToEmojis {
    fn apply(&self, text: &str, vocabulary: &Vocabulary, rng: &mut dyn RandomSource) -> String {
        english_to_emojis(text, vocabulary, rng)
    }
}

/// Vocabulary entries scoring above the threshold against the lower-cased word,
/// in vocabulary order.
pub fn candidates<'v>(word: &str, vocabulary: &'v Vocabulary) -> Vec<&'v str> {
    let lowered = word.to_lowercase();
    vocabulary
        .iter()
        .filter(|entry| similarity(lowered.as_str(), *entry) > SIMILARITY_THRESHOLD)
        .collect()
}

pub fn english_to_emojis(text: &str, vocabulary: &Vocabulary, rng: &mut dyn RandomSource) -> String {
    join_words(words(text).map(|word| {
        let matches = candidates(word, vocabulary);
        match choose(&mut *rng, &matches) {
            Some(entry) => shortcode(entry),
            None => word.to_string(),
        }
    }))
}
