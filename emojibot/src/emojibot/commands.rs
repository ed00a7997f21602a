use serde::Serialize;

use crate::emojibot::strategies::{Emojify, EnglishToEmojis, Strategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Emojify,
    EnglishToEmojis,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommandInfo {
    pub name: &'static str,
    pub description: &'static str,
}

impl Command {
    pub const ALL: [Command; 2] = [Command::Emojify, Command::EnglishToEmojis];

    pub fn name(self) -> &'static str {
        match self {
            Command::Emojify => "emojify",
            Command::EnglishToEmojis => "english-to-emojis",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Emojify => "Add random emojis to your text. :weary:",
            Command::EnglishToEmojis => "Replaces English words with emojis. :eyes:",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn strategy(self) -> &'static dyn Strategy {
        match self {
            Command::Emojify => &Emojify,
            Command::EnglishToEmojis => &EnglishToEmojis,
        }
    }

    pub fn info(self) -> CommandInfo {
        CommandInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
