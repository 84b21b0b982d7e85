use crate::{Deserialize, NewsItem, Regex, RegexBuilder};

#[derive(Clone, Deserialize)]
pub struct ItemFilter {
    #[serde(default)]
    pub title: String,
    pub value: String,
}

pub struct Filters {}

impl Filters {
    /// Each filter value is a comma-separated list of case-insensitive patterns
    #[must_use]
    pub fn compile(filters: &[ItemFilter]) -> Vec<Regex> {
        let mut compiled: Vec<Regex> = Vec::new();
        for item_filter in filters {
            for pattern in item_filter.value.split(',').filter(|p| !p.is_empty()) {
                match RegexBuilder::new(pattern).case_insensitive(true).build() {
                    Ok(re) => compiled.push(re),
                    Err(e) => tracing::warn!(
                        "Error creating filter {pattern} in {}: {e}",
                        item_filter.title
                    ),
                }
            }
        }
        compiled
    }
}

/// Title based relevance check for freshly collected items
pub struct KeywordFilter {
    include: Vec<Regex>,
    exclude: Vec<Regex>,
    min_matches: usize,
}

impl KeywordFilter {
    #[must_use]
    pub fn new(include: &[ItemFilter], exclude: &[ItemFilter], min_matches: usize) -> Self {
        Self {
            include: Filters::compile(include),
            exclude: Filters::compile(exclude),
            min_matches,
        }
    }

    /// Relevant when the title hits at least `min_matches` include patterns
    /// (always, if there are none) and no exclude pattern.
    pub fn is_relevant(&self, title: &str) -> bool {
        if !self.include.is_empty() {
            let matches = self.include.iter().filter(|re| re.is_match(title)).count();
            if matches < self.min_matches {
                return false;
            }
        }

        !self.exclude.iter().any(|re| re.is_match(title))
    }

    pub fn keep_item(&self, item: &NewsItem) -> bool {
        self.is_relevant(item.title().unwrap_or_default())
    }
}

impl Default for KeywordFilter {
    fn default() -> Self {
        Self::new(&[], &[], 1)
    }
}
