#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
mod arg_parse;
mod config;
mod error;
mod news;
mod storage;
mod updater;

use std::io::Read;

use tracing_subscriber::EnvFilter;

pub use crate::{
    arg_parse::CmdArgs,
    config::AppConfig,
    error::{Error, Result},
    news::prelude::*,
    storage::{NewsFile, NewsStorage},
    updater::NewsUpdater,
};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = CmdArgs::parse(std::env::args().collect())?;
    let mut config = match &args.config {
        Some(file_name) => AppConfig::from_file(file_name)?,
        None => AppConfig::default(),
    };
    if args.source.is_some() {
        config.source_url.clone_from(&args.source);
    }
    if args.output.is_some() {
        config.output_file.clone_from(&args.output);
    }

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.get_log_level())),
        )
        .init();

    let candidates = load_candidates(args.input.as_deref())?;

    let source = RemoteNewsSource::new(config.get_source_url()?);
    let storage = NewsFile::new(config.get_output_file(), config.get_max_items());
    let keywords = KeywordFilter::new(
        &config.filters,
        &config.exclude_filters,
        config.get_min_keyword_matches(),
    );

    let report = NewsUpdater::new(source, storage, keywords)
        .run(&candidates)
        .await?;

    tracing::info!(
        added = report.added,
        written = report.written,
        history = report.existing_available,
        "news list updated"
    );

    Ok(())
}

/// Items collected by an external crawler; no input means nothing new
fn load_candidates(input: Option<&str>) -> Result<NewsList> {
    let contents = match input {
        None => return Ok(Vec::new()),
        Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(file_name) => std::fs::read_to_string(file_name)?,
    };

    Ok(serde_json::from_str(&contents)?)
}
