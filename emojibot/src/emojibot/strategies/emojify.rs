use crate::emojibot::format::{join_words, shortcode, words};
use crate::emojibot::random::RandomSource;
use crate::emojibot::vocabulary::Vocabulary;

use super::traits::Strategy;

/// Words must be longer than this (in chars) to get an emoji.
pub const MIN_WORD_CHARS: usize = 3;

/// Keep every word and, after each long enough word, toss a coin to append a random emoji.
pub struct Emojify;

impl Strategy for Emojify {
    fn apply(&self, text: &str, vocabulary: &Vocabulary, rng: &mut dyn RandomSource) -> String {
        emojify(text, vocabulary, rng)
    }
}

pub fn emojify(text: &str, vocabulary: &Vocabulary, rng: &mut dyn RandomSource) -> String {
    join_words(words(text).map(|word| {
        // Short words never touch the generator.
        if word.chars().count() > MIN_WORD_CHARS && rng.coin() {
            format!("{word} {}", shortcode(vocabulary.choose(&mut *rng)))
        } else {
            word.to_string()
        }
    }))
}
