use crate::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered list of news items, newest first
pub type NewsList = Vec<NewsItem>;

/// A single news entry. Only `link` carries meaning here; every other field
/// (title, date, source, ...) passes through untouched and in its original order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct NewsItem {
    fields: Map<String, Value>,
}

impl NewsItem {
    #[allow(dead_code)]
    #[must_use]
    pub fn new(link: &str) -> Self {
        Self::default().with_field("link", Value::from(link))
    }

    #[allow(dead_code)]
    #[must_use]
    pub fn with_field(mut self, name: &str, value: Value) -> Self {
        self.fields.insert(name.to_string(), value);
        self
    }

    /// The dedup key; `None` if the field is missing or not a string
    pub fn link(&self) -> Option<&str> {
        self.fields.get("link").and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }
}
