//! Best-in-genre lookup over a paginated TV series listing.
//!
//! The listing is served one page at a time, with the total page count
//! declared in the payload. We page through the whole listing, filter on the
//! comma-separated genre field, and keep the highest-rated match, breaking
//! ties with the alphabetically lower name. Any failure along the way
//! degrades to an empty string rather than an error; callers of the
//! challenge function cannot tell "no match" from "listing unavailable".

mod api;
mod dummy;

pub use api::Api;
pub use dummy::Dummy;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::Result;

/// One page of the series listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeriesPage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub data: Vec<Show>,
}

/// A single series entry. Fields are optional because the listing is not
/// under our control; entries we cannot use are skipped during the scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Show {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub imdb_rating: Option<Value>,
}

impl Show {
    /// Whether this show lists `target` among its comma-separated genres.
    /// `target` must already be trimmed and lowercased.
    fn in_genre(&self, target: &str) -> bool {
        match &self.genre {
            Some(genres) => genres
                .split(',')
                .any(|entry| entry.trim().to_lowercase() == target),
            None => false,
        }
    }

    /// The rating as a float, accepting JSON numbers or numeric strings.
    fn rating(&self) -> Option<f64> {
        match self.imdb_rating.as_ref()? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// A source of listing pages. Pages are numbered from 1.
#[async_trait]
pub trait SeriesSource {
    async fn fetch_page(&self, page: u32) -> Result<SeriesPage>;
}

/// The available series sources.
#[derive(Debug, Clone)]
pub enum Source {
    Api(Api),
    Dummy(Dummy),
}

#[async_trait]
impl SeriesSource for Source {
    async fn fetch_page(&self, page: u32) -> Result<SeriesPage> {
        match self {
            Source::Api(s) => s.fetch_page(page).await,
            Source::Dummy(s) => s.fetch_page(page).await,
        }
    }
}

/// Finds the name of the highest-rated series in `genre`.
///
/// Genre matching is case-insensitive against the comma-separated genre
/// field. Ties are broken by the alphabetically lower name. Returns an empty
/// string for a blank genre and on any fetch or parse failure.
pub async fn best_in_genre(source: &Source, genre: &str) -> String {
    let target = genre.trim().to_lowercase();
    if target.is_empty() {
        return String::new();
    }
    match scan(source, &target).await {
        Ok(best) => best,
        Err(e) => {
            warn!("series scan failed: {}", e);
            String::new()
        }
    }
}

/// Pages through the listing, reducing to the best matching show name.
async fn scan(source: &Source, target: &str) -> Result<String> {
    let mut best_name = String::new();
    let mut best_rating = f64::NEG_INFINITY;
    let mut total_pages = None;
    let mut page = 1;

    loop {
        let payload = source.fetch_page(page).await?;
        // The page count is taken from the first page only; later pages are
        // not consulted for it.
        let total = *total_pages.get_or_insert(payload.total_pages);
        debug!("scanned page {} of {}", page, total);

        for show in &payload.data {
            if !show.in_genre(target) {
                continue;
            }
            let name = match &show.name {
                Some(name) => name,
                None => continue,
            };
            let rating = match show.rating() {
                Some(rating) => rating,
                None => continue,
            };
            if rating > best_rating
                || (rating == best_rating && (best_name.is_empty() || *name < best_name))
            {
                best_rating = rating;
                best_name = name.clone();
            }
        }

        page += 1;
        if page > total {
            break;
        }
    }

    Ok(best_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn show(name: &str, genre: &str, rating: Value) -> Show {
        Show {
            name: Some(name.to_string()),
            genre: Some(genre.to_string()),
            imdb_rating: Some(rating),
        }
    }

    fn single_page(data: Vec<Show>) -> Source {
        Source::Dummy(Dummy::from_pages(vec![SeriesPage {
            page: 1,
            total_pages: 1,
            data,
        }]))
    }

    #[tokio::test]
    async fn test_selects_highest_rating_single_page() {
        let source = single_page(vec![
            show("Show A", "Drama, Action", json!(8.1)),
            show("Show B", "Action", json!(9.0)),
        ]);
        assert_eq!(best_in_genre(&source, "Action").await, "Show B");
    }

    #[tokio::test]
    async fn test_tie_breaks_alphabetically() {
        let source = single_page(vec![
            show("Zeta Show", "Comedy", json!(8.5)),
            show("Alpha Show", "Comedy", json!(8.5)),
        ]);
        assert_eq!(best_in_genre(&source, "comedy").await, "Alpha Show");
    }

    #[tokio::test]
    async fn test_paginates_and_finds_on_second_page() {
        let source = Source::Dummy(Dummy::from_pages(vec![
            SeriesPage {
                page: 1,
                total_pages: 2,
                data: vec![show("Irrelevant", "Drama", json!(7.0))],
            },
            SeriesPage {
                page: 2,
                total_pages: 2,
                data: vec![show("Deep Pick", "Sci-Fi", json!(9.2))],
            },
        ]));
        assert_eq!(best_in_genre(&source, "sci-fi").await, "Deep Pick");
    }

    #[tokio::test]
    async fn test_genre_matching_splits_and_trims() {
        let source = single_page(vec![show("Spaced Out", "Sci-Fi , Drama", json!(6.0))]);
        assert_eq!(best_in_genre(&source, "SCI-FI").await, "Spaced Out");
        assert_eq!(best_in_genre(&source, "drama").await, "Spaced Out");
        assert_eq!(best_in_genre(&source, "western").await, "");
    }

    #[tokio::test]
    async fn test_blank_genre_returns_empty() {
        let source = single_page(vec![show("Show A", "Drama", json!(8.0))]);
        assert_eq!(best_in_genre(&source, "").await, "");
        assert_eq!(best_in_genre(&source, "   ").await, "");
    }

    #[tokio::test]
    async fn test_source_failure_returns_empty() {
        let source = Source::Dummy(Dummy::failing());
        assert_eq!(best_in_genre(&source, "Drama").await, "");
    }

    #[tokio::test]
    async fn test_unusable_shows_are_skipped() {
        let source = single_page(vec![
            Show {
                name: None,
                genre: Some("Drama".to_string()),
                imdb_rating: Some(json!(9.9)),
            },
            show("No Rating", "Drama", json!("n/a")),
            Show {
                name: Some("No Genre".to_string()),
                genre: None,
                imdb_rating: Some(json!(9.5)),
            },
            show("Usable", "Drama", json!(5.0)),
        ]);
        assert_eq!(best_in_genre(&source, "drama").await, "Usable");
    }

    #[tokio::test]
    async fn test_string_ratings_are_parsed() {
        let source = single_page(vec![
            show("Stringly", "Drama", json!("8.5")),
            show("Numeric", "Drama", json!(8.0)),
        ]);
        assert_eq!(best_in_genre(&source, "drama").await, "Stringly");
    }

    #[test]
    fn test_page_payload_deserializes() {
        let payload = json!({
            "page": 1,
            "total_pages": 3,
            "data": [
                {"name": "Show A", "genre": "Drama", "imdb_rating": 8.1},
                {"name": "Show B"}
            ]
        });
        let page: SeriesPage = serde_json::from_value(payload).unwrap();
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[1].genre, None);
    }
}
