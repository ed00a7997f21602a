use std::sync::Arc;

use crate::emojibot::commands::Command;
use crate::emojibot::random::RandomSource;
use crate::emojibot::strategies::{emojify, english_to_emojis};
use crate::emojibot::vocabulary::Vocabulary;

/// The two text commands over a shared, read-only vocabulary.
/// Randomness is passed per call so concurrent callers never share a generator.
#[derive(Debug, Clone)]
pub struct EmojiService {
    vocabulary: Arc<Vocabulary>,
}

impl EmojiService {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary: Arc::new(vocabulary),
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn emojify(&self, text: &str, rng: &mut dyn RandomSource) -> String {
        emojify(text, &self.vocabulary, rng)
    }

    pub fn english_to_emojis(&self, text: &str, rng: &mut dyn RandomSource) -> String {
        english_to_emojis(text, &self.vocabulary, rng)
    }

    pub fn run(&self, command: Command, text: &str, rng: &mut dyn RandomSource) -> String {
        command.strategy().apply(text, &self.vocabulary, rng)
    }
}
