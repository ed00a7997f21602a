pub mod emojify;
pub mod english_to_emojis;
pub mod traits;

pub use emojify::{Emojify, emojify};
pub use english_to_emojis::{EnglishToEmojis, SIMILARITY_THRESHOLD, candidates, english_to_emojis};
pub use traits::Strategy;
