use async_trait::async_trait;

use super::{SeriesPage, SeriesSource};
use crate::{KataError, Result};

/// A canned series source for testing purposes.
#[derive(Debug, Clone, Default)]
pub struct Dummy {
    pages: Vec<SeriesPage>,
    fail: bool,
}

impl Dummy {
    /// Creates a Dummy source serving the given pages in order.
    pub fn from_pages(pages: Vec<SeriesPage>) -> Self {
        Self { pages, fail: false }
    }

    /// Creates a Dummy source that fails every fetch.
    pub fn failing() -> Self {
        Self {
            pages: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl SeriesSource for Dummy {
    async fn fetch_page(&self, page: u32) -> Result<SeriesPage> {
        if self.fail {
            return Err(KataError::Http("dummy source failure".into()));
        }
        (page as usize)
            .checked_sub(1)
            .and_then(|index| self.pages.get(index))
            .cloned()
            .ok_or_else(|| KataError::Api(format!("no such page: {}", page)))
    }
}
