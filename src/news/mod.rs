mod data_types;
mod dedup;
mod fetcher;
mod filter;

pub mod prelude {
    pub use super::data_types::*;
    pub use super::dedup::*;
    pub use super::fetcher::*;
    pub use super::filter::*;
    pub use regex::{Regex, RegexBuilder};
    pub use serde::{Deserialize, Serialize};
    pub use url::Url;
}
