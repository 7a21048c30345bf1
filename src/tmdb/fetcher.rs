//! Pagination Aggregator Module
//!
//! Stitches multi-page upstream results into single responses and fetches
//! single movie records.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::tmdb::TmdbClient;

// == Constants ==
/// Fixed ceiling on upstream pages fetched per trending request, bounding
/// worst-case latency and upstream load.
pub const MAX_PAGES: u64 = 5;

// == Trending Window ==
/// Time window for the upstream trending endpoint.
///
/// The upstream only understands `day` and `week`; any other input is
/// coerced to `day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendingWindow {
    Day,
    Week,
}

impl TrendingWindow {
    /// Coerces a raw query value into a supported window.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw {
            Some("week") => TrendingWindow::Week,
            _ => TrendingWindow::Day,
        }
    }

    /// Upstream path segment for this window.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendingWindow::Day => "day",
            TrendingWindow::Week => "week",
        }
    }
}

// == Upstream Page Shape ==
/// The slice of an upstream trending page the aggregator reads. Record
/// objects inside `results` stay opaque.
#[derive(Debug, Deserialize)]
struct TrendingPage {
    #[serde(default)]
    results: Vec<Value>,
    #[serde(default = "default_total_pages")]
    total_pages: u64,
}

fn default_total_pages() -> u64 {
    1
}

impl TmdbClient {
    // == Fetch Trending ==
    /// Aggregates trending movies across up to [`MAX_PAGES`] upstream pages.
    ///
    /// Pages are fetched sequentially starting at 1 and their `results`
    /// arrays concatenated in page order. The loop runs while
    /// `page <= min(total_pages, MAX_PAGES)`, with `total_pages` read from
    /// each response. Any single page failure aborts the whole aggregation;
    /// callers never receive a truncated list.
    pub async fn fetch_trending(&self, window: TrendingWindow) -> Result<Vec<Value>> {
        let path = format!("/trending/movie/{}", window.as_str());
        let mut all_movies = Vec::new();
        let mut page: u64 = 1;
        let mut total_pages: u64 = 1;

        while page <= total_pages && page <= MAX_PAGES {
            let body = self.call(&path, &[("page", page.to_string())]).await?;
            let parsed: TrendingPage = serde_json::from_value(body)?;

            all_movies.extend(parsed.results);
            total_pages = parsed.total_pages;
            page += 1;
        }

        debug!(
            window = window.as_str(),
            pages = page - 1,
            movies = all_movies.len(),
            "Aggregated trending movies"
        );
        Ok(all_movies)
    }

    // == Fetch Movie Details ==
    /// Fetches a single movie record, passing the raw upstream body through.
    ///
    /// The id is not validated locally; a malformed or unknown id fails at
    /// the upstream and surfaces as an upstream error.
    pub async fn fetch_movie_details(&self, id: &str) -> Result<Value> {
        self.call(&format!("/movie/{}", id), &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_window_from_query_week() {
        assert_eq!(TrendingWindow::from_query(Some("week")), TrendingWindow::Week);
    }

    #[test]
    fn test_window_from_query_day() {
        assert_eq!(TrendingWindow::from_query(Some("day")), TrendingWindow::Day);
    }

    #[test]
    fn test_window_coercion() {
        // Anything other than exactly "week" falls back to day
        assert_eq!(TrendingWindow::from_query(None), TrendingWindow::Day);
        assert_eq!(TrendingWindow::from_query(Some("month")), TrendingWindow::Day);
        assert_eq!(TrendingWindow::from_query(Some("")), TrendingWindow::Day);
        assert_eq!(TrendingWindow::from_query(Some("Week")), TrendingWindow::Day);
    }

    #[test]
    fn test_trending_page_deserialize() {
        let page: TrendingPage = serde_json::from_value(json!({
            "page": 1,
            "results": [{"id": 1}, {"id": 2}],
            "total_pages": 3,
            "total_results": 45
        }))
        .unwrap();

        assert_eq!(page.results.len(), 2);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_trending_page_missing_fields_default() {
        let page: TrendingPage = serde_json::from_value(json!({})).unwrap();

        assert!(page.results.is_empty());
        assert_eq!(page.total_pages, 1);
    }
}
