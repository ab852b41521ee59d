use std::collections::HashSet;
use std::time::Duration;

use log::{debug, info, warn};
use reqwest::Client as HttpClient;
use serde::Deserialize;
use thiserror::Error;

/// Upper bound on headlines returned to the frontend.
const MAX_HEADLINES: usize = 8;

/// Raw-count threshold after which the sports group stops fetching. The
/// technology group still runs afterwards regardless.
const SPORTS_TARGET: usize = 5;

/// Placeholder title NewsAPI substitutes for withdrawn articles.
const REMOVED_TITLE: &str = "[Removed]";

/// Query variants for the sports group, Portugal-focused phrasings first.
const SPORTS_QUERIES: &[NewsQuery] = &[
    NewsQuery::Everything { q: "portugal football" },
    NewsQuery::Everything { q: "portugal soccer" },
    NewsQuery::Everything { q: "portugal liga" },
    NewsQuery::Everything { q: "benfica porto sporting" },
    NewsQuery::Everything { q: "premier league champions league" },
    NewsQuery::TopHeadlines { category: "sports" },
];

/// Query variants for the technology group.
const TECH_QUERIES: &[NewsQuery] = &[
    NewsQuery::TopHeadlines { category: "technology" },
    NewsQuery::Everything { q: "technology ai programming" },
    NewsQuery::Everything { q: "apple google microsoft" },
];

#[derive(Debug, Clone, Copy)]
enum NewsQuery {
    Everything { q: &'static str },
    TopHeadlines { category: &'static str },
}

#[derive(Debug, Error)]
enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("provider reported status '{0}'")]
    ProviderStatus(String),
}

#[derive(Deserialize)]
struct ArticlesResponse {
    status: String,
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Deserialize)]
struct Article {
    #[serde(default)]
    title: Option<String>,
}

/// Client for the news aggregation provider (NewsAPI-compatible).
pub struct NewsClient {
    http: HttpClient,
    api_key: String,
    base_url: String,
}

impl NewsClient {
    pub fn new(
        api_key: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_key,
            base_url,
        })
    }

    /// Fetches up to eight distinct headlines, sports first, technology
    /// second. Per-query failures degrade to a shorter (possibly empty)
    /// list; this never fails.
    pub async fn headlines(&self) -> Vec<String> {
        let mut collected: Vec<String> = Vec::new();

        info!("searching for sports headlines");
        self.fill_from_group(SPORTS_QUERIES, SPORTS_TARGET, &mut collected).await;

        info!("searching for technology headlines");
        self.fill_from_group(TECH_QUERIES, MAX_HEADLINES, &mut collected).await;

        let headlines = dedupe_and_truncate(collected, MAX_HEADLINES);
        info!("returning {} unique headlines", headlines.len());
        headlines
    }

    /// Runs one query group in listed order, one request at a time,
    /// appending extracted titles until `target` raw items have accumulated
    /// or the group is exhausted. The target only short-circuits this
    /// group's iteration.
    async fn fill_from_group(
        &self,
        group: &[NewsQuery],
        target: usize,
        collected: &mut Vec<String>,
    ) {
        for query in group {
            match self.fetch_titles(query).await {
                Ok(titles) => {
                    if !titles.is_empty() {
                        debug!("{:?} yielded {} titles", query, titles.len());
                        collected.extend(titles);
                        if collected.len() >= target {
                            break;
                        }
                    }
                }
                Err(e) => {
                    warn!("news query {:?} failed: {}", query, e);
                }
            }
        }
    }

    async fn fetch_titles(&self, query: &NewsQuery) -> Result<Vec<String>, FetchError> {
        let base = self.base_url.trim_end_matches('/');

        let request = match query {
            NewsQuery::Everything { q } => self.http
                .get(format!("{}/v2/everything", base))
                .query(&[
                    ("q", *q),
                    ("language", "en"),
                    ("sortBy", "publishedAt"),
                    ("apiKey", self.api_key.as_str()),
                ]),
            NewsQuery::TopHeadlines { category } => self.http
                .get(format!("{}/v2/top-headlines", base))
                .query(&[
                    ("category", *category),
                    ("language", "en"),
                    ("apiKey", self.api_key.as_str()),
                ]),
        };

        let resp = request
            .send()
            .await?
            .error_for_status()?
            .json::<ArticlesResponse>()
            .await?;

        if resp.status != "ok" {
            return Err(FetchError::ProviderStatus(resp.status));
        }

        Ok(resp.articles
            .into_iter()
            .filter_map(|article| article.title)
            .filter(|title| !title.is_empty() && title.as_str() != REMOVED_TITLE)
            .collect())
    }
}

/// First-seen-order dedup by exact title equality, capped at `max`.
fn dedupe_and_truncate(titles: Vec<String>, max: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for title in titles {
        if unique.len() == max {
            break;
        }
        if seen.insert(title.clone()) {
            unique.push(title);
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn dedupe_preserves_first_seen_order() {
        let result = dedupe_and_truncate(titles(&["A", "B", "A", "C"]), 8);
        assert_eq!(result, titles(&["A", "B", "C"]));
    }

    #[test]
    fn dedupe_truncates_at_max() {
        let input = titles(&["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"]);
        let result = dedupe_and_truncate(input, 8);
        assert_eq!(result.len(), 8);
        assert_eq!(result, titles(&["A", "B", "C", "D", "E", "F", "G", "H"]));
    }

    #[test]
    fn dedupe_empty_input_is_empty() {
        assert!(dedupe_and_truncate(Vec::new(), 8).is_empty());
    }
}
