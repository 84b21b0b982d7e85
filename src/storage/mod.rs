use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{config::MAX_ITEMS, NewsItem, NewsList, Result};

pub trait NewsStorage {
    /// Persist `new_items` ahead of `existing_news`; returns the number of items written
    fn save(&mut self, new_items: &[NewsItem], existing_news: &[NewsItem]) -> Result<usize>;
}

/// Put new items in front of the existing ones and cut the list at `max_items`.
/// The cut is positional; nothing is sorted by date.
pub fn merge_news(new_items: &[NewsItem], existing_news: &[NewsItem], max_items: usize) -> NewsList {
    new_items
        .iter()
        .chain(existing_news)
        .take(max_items)
        .cloned()
        .collect()
}

/// The local `news.json`, rewritten in full on every save. Only the working
/// copy is touched; publishing it (e.g. committing from CI) is up to the caller.
pub struct NewsFile {
    path: PathBuf,
    max_items: usize,
}

impl NewsFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, max_items: usize) -> Self {
        Self {
            path: path.into(),
            max_items: max_items.min(MAX_ITEMS),
        }
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Dump the list as two-space indented JSON, replacing the file content
    fn dump(&self, news: &[NewsItem]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }

        let contents = serde_json::to_string_pretty(news)?;
        let mut writer = BufWriter::new(File::create(&self.path)?);
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

impl NewsStorage for NewsFile {
    fn save(&mut self, new_items: &[NewsItem], existing_news: &[NewsItem]) -> Result<usize> {
        let updated = merge_news(new_items, existing_news, self.max_items);
        self.dump(&updated)?;

        tracing::info!(
            "{} updated: {} items added",
            self.path.display(),
            new_items.len()
        );
        Ok(updated.len())
    }
}

#[cfg(test)]
mod test {
    use super::{merge_news, NewsFile, NewsStorage};
    use crate::{NewsItem, NewsList};
    use serde_json::Value;
    use tracing_test::traced_test;

    fn items(prefix: &str, count: usize) -> NewsList {
        (0..count)
            .map(|i| NewsItem::new(&format!("https://example.com/{prefix}/{i}")))
            .collect()
    }

    fn read_back(file: &NewsFile) -> NewsList {
        let contents = std::fs::read_to_string(file.path()).unwrap();
        serde_json::from_str(&contents).unwrap()
    }

    #[test]
    fn test_new_items_go_first() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = NewsFile::new(dir.path().join("news.json"), 50);
        let item_a = NewsItem::new("https://example.com/a").with_field("title", Value::from("A"));
        let item_b = NewsItem::new("https://example.com/b");
        let item_c = NewsItem::new("https://example.com/c");

        let written = file
            .save(&[item_a.clone()], &[item_b.clone(), item_c.clone()])
            .unwrap();

        assert_eq!(written, 3);
        assert_eq!(read_back(&file), vec![item_a, item_b, item_c]);
    }

    #[test]
    fn test_truncates_positionally() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = NewsFile::new(dir.path().join("news.json"), 50);
        let new_items = items("new", 5);
        let existing = items("old", 60);

        let written = file.save(&new_items, &existing).unwrap();
        assert_eq!(written, 50);

        let saved = read_back(&file);
        assert_eq!(saved.len(), 50);
        assert_eq!(&saved[..5], &new_items[..]);
        assert_eq!(&saved[5..], &existing[..45]);
    }

    #[test]
    fn test_limit_never_exceeds_cap() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = NewsFile::new(dir.path().join("news.json"), 1000);

        assert_eq!(file.save(&items("new", 30), &items("old", 30)).unwrap(), 50);
        assert_eq!(read_back(&file).len(), 50);
    }

    #[test]
    #[traced_test]
    fn test_save_logs_added_count_once() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = NewsFile::new(dir.path().join("news.json"), 50);

        file.save(&items("new", 3), &items("old", 10)).unwrap();

        assert!(logs_contain("updated: 3 items added"));
        logs_assert(|lines: &[&str]| {
            match lines
                .iter()
                .filter(|line| line.contains("INFO") && line.contains("items added"))
                .count()
            {
                1 => Ok(()),
                n => Err(format!("expected exactly one info line, got {n}")),
            }
        });
    }

    #[test]
    fn test_empty_lists_write_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = NewsFile::new(dir.path().join("news.json"), 50);

        assert_eq!(file.save(&[], &[]).unwrap(), 0);
        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "[]");
    }

    #[test]
    fn test_overwrites_and_pretty_prints() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("news.json");
        std::fs::write(&path, "stale content that is much longer than the new list").unwrap();

        let mut file = NewsFile::new(&path, 50);
        let item = NewsItem::new("https://example.com/1").with_field("title", Value::from("속보"));
        file.save(&[item], &[]).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[\n  {\n    \"link\": \"https://example.com/1\",\n    \"title\": \"속보\"\n  }\n]"
        );
    }

    #[test]
    fn test_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = NewsFile::new(dir.path().join("news_json").join("news.json"), 50);

        file.save(&items("new", 2), &[]).unwrap();
        assert_eq!(read_back(&file).len(), 2);
    }

    #[test]
    fn test_write_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let mut file = NewsFile::new(blocker.join("news.json"), 50);
        assert!(file.save(&items("new", 1), &[]).is_err());
    }

    #[test]
    fn test_merge_respects_limit() {
        assert_eq!(merge_news(&items("new", 3), &items("old", 3), 4).len(), 4);
        assert_eq!(merge_news(&items("new", 60), &[], 50).len(), 50);
        assert!(merge_news(&[], &[], 50).is_empty());
    }
}
