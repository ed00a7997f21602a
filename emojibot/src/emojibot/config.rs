use std::path::{Path, PathBuf};

use anyhow::Result;
use confik::{Configuration, EnvSource};
use serde::{Deserialize, Serialize};

use self::yaml::YamlFileSource;
use crate::emojibot::delivery::{DEFAULT_INLINE_LIMIT, DeliveryPolicy};
use crate::emojibot::vocabulary::Vocabulary;

const DEFAULT_VOCABULARY_FILE: &str = "emojis.txt";

#[derive(Debug, Clone, Serialize, Deserialize, Configuration)]
pub struct ServerConfig {
    #[confik(default = default_host())]
    pub host: String,
    #[confik(default = 8080_u16)]
    pub port: u16,
    #[confik(default = 1_048_576_usize)]
    pub max_payload_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, Configuration)]
pub struct EmojiConfig {
    /// Line-delimited shortcode list. Relative paths resolve against the crate root.
    pub vocabulary_path: Option<String>,
    #[confik(default = DEFAULT_INLINE_LIMIT)]
    pub inline_limit: usize,
    #[confik(default = default_attachment_dir())]
    pub attachment_dir: String,
    #[confik(default = false)]
    pub render_unicode: bool,
    /// Use the bundled gemoji catalogue instead of a shortcode file.
    #[confik(default = false)]
    pub builtin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, Configuration)]
pub struct BotConfig {
    pub server: ServerConfig,
    pub emojis: EmojiConfig,
}

fn default_host() -> String {
    "127.0.0.1".into()
}

fn default_attachment_dir() -> String {
    "TextFiles".into()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: 8080,
            max_payload_bytes: 1_048_576,
        }
    }
}

impl Default for EmojiConfig {
    fn default() -> Self {
        Self {
            vocabulary_path: None,
            inline_limit: DEFAULT_INLINE_LIMIT,
            attachment_dir: default_attachment_dir(),
            render_unicode: false,
            builtin: false,
        }
    }
}

impl BotConfig {
    /// Layer `config.yml` (if present), then `.env` and `EMOJIS__*`/`SERVER__*` variables
    /// over the compiled-in defaults, falling back to those defaults when parsing fails.
    /// Only server and delivery settings can be defaulted this way: the vocabulary itself
    /// is resolved later by [`EmojiConfig::load_vocabulary`], which never falls back.
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();

        let config_path = manifest_dir().join("config.yml");
        let mut builder = BotConfig::builder();

        if config_path.exists() {
            builder.override_with(YamlFileSource::new(config_path));
        }

        builder.override_with(EnvSource::new());

        match builder.try_build() {
            Ok(cfg) => cfg,
            Err(err) => {
                log::warn!("Failed to load config.yml or env overrides: {err}. Using defaults.");
                BotConfig::default()
            }
        }
    }
}

impl EmojiConfig {
    pub fn delivery_policy(&self, base: &Path) -> DeliveryPolicy {
        DeliveryPolicy::new(self.inline_limit, resolve_path(base, &self.attachment_dir))
    }

    /// The built-in catalogue only when `builtin` is set. Otherwise the configured file,
    /// or `emojis.txt` under `base`, must exist and hold at least one shortcode.
    pub fn load_vocabulary(&self, base: &Path) -> Result<Vocabulary> {
        if self.builtin {
            return Vocabulary::builtin();
        }

        let path = resolve_path(
            base,
            self.vocabulary_path
                .as_deref()
                .unwrap_or(DEFAULT_VOCABULARY_FILE),
        );
        Vocabulary::load(&path)
    }
}

pub fn manifest_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn resolve_path(base: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

mod yaml {
    use std::error::Error;
    use std::path::PathBuf;

    use confik::Source;
    use serde::de::DeserializeOwned;

    #[derive(Debug)]
    pub struct YamlFileSource {
        path: PathBuf,
    }

    impl YamlFileSource {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }
    }

    impl<T> Source<T> for YamlFileSource
    where
        T: DeserializeOwned + confik::ConfigurationBuilder,
    {
        fn allows_secrets(&self) -> bool {
            false
        }

        fn provide(&self) -> Result<T, Box<dyn Error + Sync + Send>> {
            let contents = std::fs::read_to_string(&self.path)?;
            let parsed = serde_yaml::from_str(&contents)?;
            Ok(parsed)
        }
    }
}
