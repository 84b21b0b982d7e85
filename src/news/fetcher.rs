use reqwest::header::{ACCEPT, CACHE_CONTROL, PRAGMA};

use crate::{Error, NewsItem, NewsList, Result, Url};

/// Where the previously published news list comes from
pub trait NewsSource {
    async fn fetch(&self) -> Result<NewsList>;
}

/// Reads the published `news.json` over HTTP, bypassing intermediate caches
pub struct RemoteNewsSource {
    client: reqwest::Client,
    url: Url,
}

impl RemoteNewsSource {
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

impl NewsSource for RemoteNewsSource {
    async fn fetch(&self) -> Result<NewsList> {
        let body = self
            .client
            .get(self.url.clone())
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .header(ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_news_list(&body)
    }
}

/// An empty body or a JSON `null` count as an empty list
pub fn parse_news_list(body: &str) -> Result<NewsList> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let items: Option<Vec<NewsItem>> = serde_json::from_str(body).map_err(Error::Json)?;
    Ok(items.unwrap_or_default())
}

/// Outcome of loading the existing list. Failures are kept so that callers
/// can tell "nothing published yet" from "could not fetch".
#[derive(Debug)]
pub enum ExistingNews {
    Loaded(NewsList),
    Unavailable(Error),
}

impl ExistingNews {
    /// The loaded items, or an empty slice when the fetch failed
    pub fn items(&self) -> &[NewsItem] {
        match self {
            ExistingNews::Loaded(items) => items,
            ExistingNews::Unavailable(_) => &[],
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, ExistingNews::Loaded(_))
    }
}

/// Load the existing news list. Never fails: any error is logged once and
/// reported as `ExistingNews::Unavailable`.
pub async fn load_existing_news<S: NewsSource>(source: &S) -> ExistingNews {
    match source.fetch().await {
        Ok(items) => {
            tracing::debug!(count = items.len(), "loaded existing news list");
            ExistingNews::Loaded(items)
        }
        Err(e) => {
            tracing::error!("failed to load existing news list: {e}");
            ExistingNews::Unavailable(e)
        }
    }
}
