use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{info, warn};
use tokio::fs;
use uuid::Uuid;

/// Longest result (in chars) sent inline; anything longer goes out as a file.
pub const DEFAULT_INLINE_LIMIT: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Inline(String),
    Attachment { file_name: String, body: Vec<u8> },
}

#[derive(Debug, Clone)]
pub struct DeliveryPolicy {
    pub inline_limit: usize,
    pub attachment_dir: PathBuf,
}

impl DeliveryPolicy {
    pub fn new(inline_limit: usize, attachment_dir: impl Into<PathBuf>) -> Self {
        Self {
            inline_limit,
            attachment_dir: attachment_dir.into(),
        }
    }

    pub fn needs_attachment(&self, text: &str) -> bool {
        text.chars().count() > self.inline_limit
    }

    /// Inline when short enough. Otherwise the text is persisted as a temporary
    /// `.txt` file, read back as the attachment body, and the file is removed.
    pub async fn deliver(&self, text: String) -> Result<Delivery> {
        if !self.needs_attachment(&text) {
            return Ok(Delivery::Inline(text));
        }

        fs::create_dir_all(&self.attachment_dir)
            .await
            .with_context(|| format!("creating {}", self.attachment_dir.display()))?;

        let file_name = format!("{}.txt", Uuid::new_v4());
        let path = self.attachment_dir.join(&file_name);

        fs::write(&path, text.as_bytes())
            .await
            .with_context(|| format!("writing attachment {}", path.display()))?;

        let body = fs::read(&path).await;

        // Release the file whether or not the read succeeded.
        if let Err(err) = fs::remove_file(&path).await {
            warn!("failed to remove attachment {}: {err}", path.display());
        }

        let body = body.with_context(|| format!("reading attachment {}", path.display()))?;
        info!(
            "Result of {} chars sent as attachment {file_name}",
            text.chars().count()
        );

        Ok(Delivery::Attachment { file_name, body })
    }
}
