use crate::{NewsItem, NewsList};

/// Check whether `link` is already present in `existing_news`. Links are compared
/// as plain strings; items without a link never match.
pub fn is_duplicate(link: &str, existing_news: &[NewsItem]) -> bool {
    existing_news.iter().any(|item| item.link() == Some(link))
}

/// Keep the candidates that are neither in `existing_news` nor repeated earlier
/// in the same batch. Candidates without a link are kept as-is.
pub fn retain_new(candidates: &[NewsItem], existing_news: &[NewsItem]) -> NewsList {
    let mut fresh: NewsList = Vec::new();

    for item in candidates {
        if let Some(link) = item.link() {
            if is_duplicate(link, existing_news) || is_duplicate(link, &fresh) {
                tracing::debug!("skipping duplicate link {link}");
                continue;
            }
        }
        fresh.push(item.clone());
    }

    fresh
}
