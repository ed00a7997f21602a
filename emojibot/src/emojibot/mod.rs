pub mod commands;
pub mod config;
pub mod delivery;
pub mod format;
pub mod random;
pub mod service;
pub mod similarity;
pub mod strategies;
pub mod unicode;
pub mod vocabulary;

pub use commands::Command;
pub use config::BotConfig;
pub use delivery::{Delivery, DeliveryPolicy};
pub use random::RandomSource;
pub use service::EmojiService;
pub use vocabulary::Vocabulary;
