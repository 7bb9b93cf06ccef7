//! Text summarization via a hosted inference model.
//!
//! The challenge: read a text file, ask a remote summarization model for a
//! short, medium, or bullet-list summary, and post-process the raw output
//! into the requested shape. Unlike the other challenges, failures here are
//! real errors; the CLI reports them and exits non-zero.

mod dummy;
mod hf;

pub use dummy::Dummy;
pub use hf::HuggingFace;

use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{KataError, Result};

/// The summary style requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    Short,
    Medium,
    Bullet,
}

impl Style {
    /// Token limit requested from the model for each style.
    pub fn max_new_tokens(&self) -> u32 {
        match self {
            Style::Short => 60,
            Style::Medium => 160,
            Style::Bullet => 200,
        }
    }

    fn leadin(&self) -> &'static str {
        match self {
            Style::Short => "Provide ONLY a concise 1-2 sentence summary of the following text.",
            Style::Medium => "Provide ONLY a one-paragraph summary of the following text.",
            Style::Bullet => {
                "Provide ONLY a concise bullet list summary of the following text. \
                 Use '- ' to prefix each bullet and one bullet per line."
            }
        }
    }
}

impl FromStr for Style {
    type Err = KataError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(Style::Short),
            "medium" => Ok(Style::Medium),
            "bullet" => Ok(Style::Bullet),
            other => Err(KataError::InvalidArgument(format!(
                "invalid summary type {:?} (use short|medium|bullet)",
                other
            ))),
        }
    }
}

/// Builds the instruction prompt sent to the model.
pub fn build_prompt(style: Style, text: &str) -> String {
    format!("{}\n\n{}", style.leadin(), text.trim())
}

/// A summarization backend.
#[async_trait]
pub trait SummarizeProvider {
    async fn summarize(&self, prompt: &str, style: Style) -> Result<String>;
}

/// The available summarization backends.
#[derive(Debug, Clone)]
pub enum Backend {
    HuggingFace(HuggingFace),
    Dummy(Dummy),
}

#[async_trait]
impl SummarizeProvider for Backend {
    async fn summarize(&self, prompt: &str, style: Style) -> Result<String> {
        match self {
            Backend::HuggingFace(b) => b.summarize(prompt, style).await,
            Backend::Dummy(b) => b.summarize(prompt, style).await,
        }
    }
}

/// Summarizes the file at `path` with `backend`, returning the formatted
/// summary.
pub async fn summarize_file(backend: &Backend, path: &Path, style: Style) -> Result<String> {
    let content = std::fs::read_to_string(path)?;
    let prompt = build_prompt(style, &content);
    let raw = backend.summarize(&prompt, style).await?;
    Ok(format_summary(style, &raw))
}

/// Post-processes the raw model output for the requested style. Bullet
/// summaries that already contain bullets pass through unchanged; otherwise
/// the text is split into sentences and bulletized. Short and medium
/// summaries are truncated to 2 and 4 sentences respectively.
pub fn format_summary(style: Style, summary: &str) -> String {
    let summary = summary.trim();
    match style {
        Style::Bullet => {
            if summary
                .lines()
                .any(|line| line.trim_start().starts_with("- "))
            {
                return summary.to_string();
            }
            let bullets: Vec<String> = sentence_split(summary)
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(|s| format!("- {}", s))
                .collect();
            if bullets.is_empty() {
                summary.to_string()
            } else {
                bullets.join("\n")
            }
        }
        Style::Short => truncate_sentences(summary, 2),
        Style::Medium => truncate_sentences(summary, 4),
    }
}

fn truncate_sentences(summary: &str, limit: usize) -> String {
    let sentences: Vec<String> = sentence_split(summary)
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if sentences.is_empty() {
        return summary.to_string();
    }
    sentences[..sentences.len().min(limit)].join(" ")
}

/// Splits on sentence-ending punctuation, keeping the terminator with its
/// sentence.
fn sentence_split(text: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut buf = String::new();
    for ch in text.chars() {
        buf.push(ch);
        if matches!(ch, '.' | '!' | '?') {
            parts.push(std::mem::take(&mut buf));
        }
    }
    if !buf.is_empty() {
        parts.push(buf);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_style_parsing() {
        assert_eq!("short".parse::<Style>().unwrap(), Style::Short);
        assert_eq!(" Medium ".parse::<Style>().unwrap(), Style::Medium);
        assert_eq!("BULLET".parse::<Style>().unwrap(), Style::Bullet);
        assert!("paragraph".parse::<Style>().is_err());
    }

    #[test]
    fn test_max_new_tokens() {
        assert_eq!(Style::Short.max_new_tokens(), 60);
        assert_eq!(Style::Medium.max_new_tokens(), 160);
        assert_eq!(Style::Bullet.max_new_tokens(), 200);
    }

    #[test]
    fn test_build_prompt_trims_and_leads_in() {
        let prompt = build_prompt(Style::Short, "  some text\n");
        assert!(prompt.starts_with("Provide ONLY a concise 1-2 sentence"));
        assert!(prompt.ends_with("\n\nsome text"));
    }

    #[test]
    fn test_format_bullet_passthrough() {
        let raw = "- first point\n- second point";
        assert_eq!(format_summary(Style::Bullet, raw), raw);
    }

    #[test]
    fn test_format_bullet_splits_sentences() {
        let raw = "First thing happened. Then another! Finally done.";
        assert_eq!(
            format_summary(Style::Bullet, raw),
            "- First thing happened.\n- Then another!\n- Finally done."
        );
    }

    #[test]
    fn test_format_short_truncates_to_two_sentences() {
        let raw = "One. Two. Three. Four.";
        assert_eq!(format_summary(Style::Short, raw), "One. Two.");
    }

    #[test]
    fn test_format_medium_truncates_to_four_sentences() {
        let raw = "One. Two. Three. Four. Five.";
        assert_eq!(format_summary(Style::Medium, raw), "One. Two. Three. Four.");
    }

    #[test]
    fn test_format_without_terminators_passes_through() {
        assert_eq!(format_summary(Style::Short, "no punctuation"), "no punctuation");
        assert_eq!(
            format_summary(Style::Bullet, "no punctuation"),
            "- no punctuation"
        );
    }

    #[tokio::test]
    async fn test_summarize_file_end_to_end() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "A long article about nothing in particular.").unwrap();
        let backend = Backend::Dummy(Dummy::from_summary("It is about nothing. Truly nothing."));
        let summary = summarize_file(&backend, file.path(), Style::Short)
            .await
            .unwrap();
        assert_eq!(summary, "It is about nothing. Truly nothing.");
    }

    #[tokio::test]
    async fn test_summarize_file_missing_input() {
        let backend = Backend::Dummy(Dummy::from_summary("unused"));
        let result = summarize_file(
            &backend,
            Path::new("/nonexistent/input.txt"),
            Style::Short,
        )
        .await;
        assert!(matches!(result, Err(KataError::Io(_))));
    }

    #[tokio::test]
    async fn test_backend_failure_propagates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "content").unwrap();
        let backend = Backend::Dummy(Dummy::failing());
        let result = summarize_file(&backend, file.path(), Style::Bullet).await;
        assert!(matches!(result, Err(KataError::Api(_))));
    }
}
