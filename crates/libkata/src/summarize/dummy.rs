use async_trait::async_trait;

use super::{Style, SummarizeProvider};
use crate::{KataError, Result};

/// A canned summarizer for testing purposes.
#[derive(Debug, Clone, Default)]
pub struct Dummy {
    summary: String,
    fail: bool,
}

impl Dummy {
    /// Creates a Dummy backend that returns the given summary for every
    /// prompt.
    pub fn from_summary(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            fail: false,
        }
    }

    /// Creates a Dummy backend that fails every request.
    pub fn failing() -> Self {
        Self {
            summary: String::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl SummarizeProvider for Dummy {
    async fn summarize(&self, _prompt: &str, _style: Style) -> Result<String> {
        if self.fail {
            return Err(KataError::Api("dummy summarizer failure".into()));
        }
        Ok(self.summary.clone())
    }
}
