use crate::{Deserialize, Error, ItemFilter, Result, Url};

pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/WashingManager/News-Crawler/main/news.json";
const DEFAULT_OUTPUT_FILE: &str = "news.json";
/// Upper bound on the length of the written news list
pub const MAX_ITEMS: usize = 50;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub source_url: Option<String>,
    pub output_file: Option<String>,
    pub max_items: Option<usize>,
    pub filters: Vec<ItemFilter>,
    pub exclude_filters: Vec<ItemFilter>,
    pub min_keyword_matches: Option<usize>,
    pub log_level: Option<String>,
}

impl AppConfig {
    pub fn from_file(file_name: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(file_name)?;
        Self::from_str(&contents)
    }

    pub fn from_str(contents: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(contents)?;

        if let Some(max_items) = config.max_items {
            if max_items == 0 || max_items > MAX_ITEMS {
                return Err(Error::Config(format!(
                    "max_items must be between 1 and {MAX_ITEMS}, got {max_items}"
                )));
            }
        }

        Ok(config)
    }

    /// Parsed URL of the published news list
    pub fn get_source_url(&self) -> Result<Url> {
        let url = Url::parse(self.source_url.as_deref().unwrap_or(DEFAULT_SOURCE_URL))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(Error::Config(format!(
                "unsupported source URL scheme: {scheme}"
            ))),
        }
    }

    pub fn get_output_file(&self) -> String {
        self.output_file
            .clone()
            .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string())
    }

    pub fn get_max_items(&self) -> usize {
        self.max_items.unwrap_or(MAX_ITEMS).min(MAX_ITEMS)
    }

    pub fn get_min_keyword_matches(&self) -> usize {
        self.min_keyword_matches.unwrap_or(1)
    }

    pub fn get_log_level(&self) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
    }
}
