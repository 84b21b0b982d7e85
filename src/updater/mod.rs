use crate::{
    load_existing_news, retain_new, ExistingNews, KeywordFilter, NewsItem, NewsList, NewsSource,
    NewsStorage, Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateReport {
    /// Items that made it through the filters and were prepended
    pub added: usize,
    /// Length of the list written to disk
    pub written: usize,
    /// False when the existing list could not be fetched
    pub existing_available: bool,
}

pub struct NewsUpdater<S: NewsSource, W: NewsStorage> {
    source: S,
    storage: W,
    keywords: KeywordFilter,
}

impl<S: NewsSource, W: NewsStorage> NewsUpdater<S, W> {
    #[must_use]
    pub fn new(source: S, storage: W, keywords: KeywordFilter) -> Self {
        Self {
            source,
            storage,
            keywords,
        }
    }

    /// Merge freshly collected items into the published list:
    /// 1. Load the existing list; a failed fetch leaves it empty
    /// 2. Drop candidates that don't pass the keyword filter
    /// 3. Drop candidates whose link is already known
    /// 4. Write the merged list; write errors are returned to the caller
    pub async fn run(&mut self, candidates: &[NewsItem]) -> Result<UpdateReport> {
        let existing = load_existing_news(&self.source).await;
        if let ExistingNews::Unavailable(e) = &existing {
            tracing::warn!("no dedup history ({e}), every candidate is treated as new");
        }

        let relevant: NewsList = candidates
            .iter()
            .filter(|item| self.keywords.keep_item(item))
            .cloned()
            .collect();
        let fresh = retain_new(&relevant, existing.items());
        tracing::debug!(
            candidates = candidates.len(),
            relevant = relevant.len(),
            fresh = fresh.len(),
            "filtered collected items"
        );

        let written = self.storage.save(&fresh, existing.items())?;

        Ok(UpdateReport {
            added: fresh.len(),
            written,
            existing_available: existing.is_available(),
        })
    }
}
