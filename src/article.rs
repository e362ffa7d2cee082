//! Articles: front matter, body and reading time loaded together.
//!
//! # Architecture
//!
//! ```text
//! collect_articles(dir)
//!     │
//!     ├── content_files()  (walkdir, extension filter)
//!     │
//!     └── JoinSet ──► Article::load(path) per file
//!                          │
//!                          ├── tokio::fs::read_to_string
//!                          ├── FrontMatter::parse
//!                          └── estimate_from_text(body)
//! ```
//!
//! Reading time is computed over the body only; the metadata block is not
//! part of what a reader reads.

use crate::{
    front_matter::{FrontMatter, FrontMatterError},
    reading::{ReadingTime, ReadingTimeError, ReadingTimeEstimator},
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task::{JoinError, JoinSet};
use walkdir::WalkDir;

/// Article loading errors
#[derive(Debug, Error)]
pub enum ArticleError {
    #[error(transparent)]
    Read(#[from] ReadingTimeError),

    #[error("invalid front matter in `{}`", path.display())]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },

    #[error("cannot walk content directory `{}`", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("article task failed")]
    Join(#[from] JoinError),
}

/// A loaded article.
#[derive(Debug, Clone)]
pub struct Article {
    pub path: PathBuf,
    pub meta: FrontMatter,
    pub body: String,
    pub reading_time: ReadingTime,
}

/// Flattened view of an article for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleSummary<'a> {
    pub title: &'a str,
    pub path: &'a Path,
    pub words: u64,
    pub minutes: u64,
    pub published_date: &'a str,
    pub tags: Vec<&'a str>,
}

impl Article {
    /// Build an article from already read source text.
    pub fn from_source(
        path: PathBuf,
        source: &str,
        estimator: &ReadingTimeEstimator,
    ) -> Result<Self, ArticleError> {
        let (meta, body) = FrontMatter::parse(source).map_err(|source| {
            ArticleError::FrontMatter {
                path: path.clone(),
                source,
            }
        })?;
        let reading_time = estimator.estimate_from_text(body);

        Ok(Self {
            path,
            meta,
            body: body.to_owned(),
            reading_time,
        })
    }

    /// Read and parse the article at `path`.
    pub async fn load(
        path: impl Into<PathBuf>,
        estimator: ReadingTimeEstimator,
    ) -> Result<Self, ArticleError> {
        let path = path.into();
        let read = tokio::fs::read_to_string(&path).await;
        let source = match read {
            Ok(source) => source,
            Err(source) => return Err(ReadingTimeError::Read { path, source }.into()),
        };
        Self::from_source(path, &source, &estimator)
    }

    /// Title from front matter, or the file stem when untitled.
    pub fn title(&self) -> &str {
        if !self.meta.title.is_empty() {
            return &self.meta.title;
        }
        self.path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default()
    }

    pub fn summary(&self) -> ArticleSummary<'_> {
        ArticleSummary {
            title: self.title(),
            path: &self.path,
            words: self.reading_time.words,
            minutes: self.reading_time.minutes,
            published_date: &self.meta.published_date,
            tags: self.meta.tags(),
        }
    }
}

/// List files under `dir` whose extension is one of `extensions`, sorted.
pub fn content_files(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, ArticleError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|source| ArticleError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

/// Load every article under `dir` concurrently.
///
/// Fails on the first article that cannot be read or parsed; remaining
/// loads are aborted. The result is sorted by path.
pub async fn collect_articles(
    dir: &Path,
    extensions: &[String],
    estimator: ReadingTimeEstimator,
) -> Result<Vec<Article>, ArticleError> {
    let files = content_files(dir, extensions)?;

    let mut tasks = JoinSet::new();
    for path in files {
        tasks.spawn(Article::load(path, estimator));
    }

    let mut articles = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        articles.push(joined??);
    }

    articles.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(articles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::Tokenization;
    use std::fs;

    fn exts() -> Vec<String> {
        vec!["md".into(), "mdx".into()]
    }

    fn post(title: &str, words: usize) -> String {
        format!(
            "---\ntitle: {title}\npublishedDate: \"2024-01-01\"\ntags: a, b\n---\n{}\n",
            vec!["word"; words].join(" ")
        )
    }

    #[test]
    fn test_from_source_counts_body_only() {
        // The front matter alone holds well over 240 space separated tokens
        let meta = vec!["x"; 300].join(" ");
        let source = format!("---\ndescription: {meta}\n---\nshort body");
        let estimator = ReadingTimeEstimator::default().with_tokenization(Tokenization::Space);

        let article = Article::from_source("a.md".into(), &source, &estimator).unwrap();
        assert_eq!(article.reading_time.words, 2);
        assert_eq!(article.reading_time.minutes, 1);
        assert_eq!(article.body, "short body");
    }

    #[test]
    fn test_from_source_bad_front_matter_names_path() {
        let err = Article::from_source(
            "posts/broken.md".into(),
            "---\ntitle: [\n---\n",
            &ReadingTimeEstimator::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ArticleError::FrontMatter { .. }));
        assert!(err.to_string().contains("posts/broken.md"));
    }

    #[test]
    fn test_title_falls_back_to_stem() {
        let article = Article::from_source(
            "posts/untitled-post.md".into(),
            "body",
            &ReadingTimeEstimator::default(),
        )
        .unwrap();
        assert_eq!(article.title(), "untitled-post");
    }

    #[test]
    fn test_summary() {
        let article = Article::from_source(
            "p.md".into(),
            &post("Hello", 241),
            &ReadingTimeEstimator::default(),
        )
        .unwrap();
        let summary = article.summary();

        assert_eq!(summary.title, "Hello");
        assert_eq!(summary.words, 241);
        assert_eq!(summary.minutes, 2);
        assert_eq!(summary.published_date, "2024-01-01");
        assert_eq!(summary.tags, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Article::load(dir.path().join("nope.md"), ReadingTimeEstimator::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ArticleError::Read(ReadingTimeError::Read { .. })));
        assert!(err.to_string().contains("nope.md"));
    }

    #[test]
    fn test_content_files_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("posts/nested")).unwrap();
        fs::write(dir.path().join("posts/b.md"), "b").unwrap();
        fs::write(dir.path().join("posts/a.MDX"), "a").unwrap();
        fs::write(dir.path().join("posts/nested/c.md"), "c").unwrap();
        fs::write(dir.path().join("posts/image.png"), "png").unwrap();
        fs::write(dir.path().join("README"), "no ext").unwrap();

        let files = content_files(dir.path(), &exts()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            names,
            vec![
                PathBuf::from("posts/a.MDX"),
                PathBuf::from("posts/b.md"),
                PathBuf::from("posts/nested/c.md"),
            ]
        );
    }

    #[test]
    fn test_content_files_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let result = content_files(&dir.path().join("missing"), &exts());
        assert!(matches!(result, Err(ArticleError::Walk { .. })));
    }

    #[tokio::test]
    async fn test_collect_articles() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("second.md"), post("Second", 480)).unwrap();
        fs::write(dir.path().join("first.md"), post("First", 10)).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let articles = collect_articles(dir.path(), &exts(), ReadingTimeEstimator::default())
            .await
            .unwrap();

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title(), "First");
        assert_eq!(articles[0].reading_time.minutes, 1);
        assert_eq!(articles[1].title(), "Second");
        assert_eq!(articles[1].reading_time.minutes, 2);
    }

    #[tokio::test]
    async fn test_collect_articles_propagates_failure() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("good.md"), post("Good", 5)).unwrap();
        fs::write(dir.path().join("bad.md"), "---\ntitle: [\n---\n").unwrap();

        let err = collect_articles(dir.path(), &exts(), ReadingTimeEstimator::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("bad.md"));
    }

    #[tokio::test]
    async fn test_collect_articles_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let articles = collect_articles(dir.path(), &exts(), ReadingTimeEstimator::default())
            .await
            .unwrap();
        assert!(articles.is_empty());
    }
}
