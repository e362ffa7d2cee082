//! nnago - reading-time estimates for blog articles.

use anyhow::{Context, Result};
use clap::Parser;
use nnago::{
    article::{Article, collect_articles},
    cli::{Cli, Commands},
    config::SiteConfig,
    log,
    reading::ReadingTimeEstimator,
};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SiteConfig::load(&cli)?;
    let estimator = config.estimator()?;

    match &cli.command {
        Commands::Text { words } => {
            let time = estimator.estimate_from_text(&words.join(" "));
            log!("text"; "{time} ({} words)", time.words);
            Ok(())
        }
        Commands::File { paths, body } => estimate_files(paths, *body, estimator).await,
        Commands::Scan { json, .. } => scan(&config, estimator, *json).await,
    }
}

/// Estimate each file in order, stopping at the first unreadable one.
async fn estimate_files(
    paths: &[PathBuf],
    body: bool,
    estimator: ReadingTimeEstimator,
) -> Result<()> {
    for path in paths {
        let time = if body {
            Article::load(path.clone(), estimator).await?.reading_time
        } else {
            estimator.estimate_from_path(path).await?
        };
        log!("file"; "{}: {time} ({} words)", path.display(), time.words);
    }
    Ok(())
}

/// Estimate every article under the configured content directory.
async fn scan(config: &SiteConfig, estimator: ReadingTimeEstimator, json: bool) -> Result<()> {
    let dir = &config.content.dir;
    let articles = collect_articles(dir, &config.content.extensions, estimator)
        .await
        .with_context(|| format!("failed to scan `{}`", dir.display()))?;

    if json {
        let summaries: Vec<_> = articles.iter().map(Article::summary).collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    for article in &articles {
        let relative = article.path.strip_prefix(dir).unwrap_or(&article.path);
        log!("scan"; "{}: {} ({})", relative.display(), article.title(), article.reading_time);
    }
    let minutes: u64 = articles.iter().map(|a| a.reading_time.minutes).sum();
    log!("scan"; "{} articles, {minutes} min total", articles.len());

    Ok(())
}
