use crate::emojibot::random::RandomSource;
use crate::emojibot::vocabulary::Vocabulary;

pub trait Strategy: Send + Sync {
    fn apply(&self, text: &str, vocabulary: &Vocabulary, rng: &mut dyn RandomSource) -> String;
}
