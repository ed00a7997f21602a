use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::info;

use crate::emojibot::random::RandomSource;

/// Ordered, non-empty list of bare emoji shortcodes (`dog`, not `:dog:`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    entries: Vec<String>,
}

impl Vocabulary {
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();

        for entry in &entries {
            check_entry(entry)?;
        }

        if entries.is_empty() {
            bail!("emoji vocabulary is empty");
        }

        Ok(Self { entries })
    }

    /// Parse a line-delimited resource: one shortcode per line, blank lines skipped.
    pub fn parse(source: &str) -> Result<Self> {
        let mut entries = vec![];
        for (idx, line) in source.lines().enumerate() {
            let entry = line.trim();
            if entry.is_empty() {
                continue;
            }
            check_entry(entry).with_context(|| format!("line {}", idx + 1))?;
            entries.push(entry.to_string());
        }

        Self::new(entries)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("reading emoji vocabulary at {}", path.display()))?;
        let vocabulary = Self::parse(&source)
            .with_context(|| format!("parsing emoji vocabulary at {}", path.display()))?;

        info!(
            "Loaded {} emoji shortcodes from {}",
            vocabulary.len(),
            path.display()
        );
        Ok(vocabulary)
    }

    /// Every shortcode the bundled gemoji catalogue knows, aliases included.
    pub fn builtin() -> Result<Self> {
        let vocabulary = Self::new(emojis::iter().flat_map(|emoji| emoji.shortcodes()))
            .context("building the built-in emoji vocabulary")?;

        info!("Using {} built-in emoji shortcodes", vocabulary.len());
        Ok(vocabulary)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Uniformly pick an entry. Never fails: the list is non-empty by construction.
    pub fn choose(&self, rng: &mut dyn RandomSource) -> &str {
        &self.entries[rng.below(self.entries.len())]
    }
}

fn check_entry(entry: &str) -> Result<()> {
    if entry.is_empty() {
        bail!("empty shortcode");
    }
    if entry.contains(':') {
        bail!("shortcode {entry:?} must not contain colons");
    }
    if entry.chars().any(char::is_whitespace) {
        bail!("shortcode {entry:?} must not contain whitespace");
    }
    Ok(())
}
