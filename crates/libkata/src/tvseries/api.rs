use async_trait::async_trait;

use super::{SeriesPage, SeriesSource};
use crate::Result;

/// Fetches listing pages from the remote JSON API.
#[derive(Debug, Clone)]
pub struct Api {
    pub(crate) base_url: String,
}

impl Api {
    /// Creates a source for the listing at `base_url`; the page number is
    /// appended as a query parameter.
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }
}

#[async_trait]
impl SeriesSource for Api {
    async fn fetch_page(&self, page: u32) -> Result<SeriesPage> {
        let client = reqwest::Client::new();
        let payload = client
            .get(format!("{}?page={}", self.base_url, page))
            .send()
            .await?
            .json()
            .await?;
        Ok(payload)
    }
}
