//! article_harvester library: article scraping and retrieval.
//!
//! This library fetches web pages, extracts article metadata (title, content,
//! publication date) and persists articles in a SQLite database. Stored
//! articles are served through a small read API (list with source filter,
//! detail by id).
//!
//! Publication dates are recovered heuristically: a strict priority cascade
//! over structured metadata, localized and English month-name patterns, bare
//! ISO dates, relative times, and the word "yesterday", with "today at
//! midnight" as the final fallback. See [`resolve_publication_date`].
//!
//! # Example
//!
//! ```no_run
//! use article_harvester::{run_harvest, HarvestConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HarvestConfig {
//!     file: std::path::PathBuf::from("urls.txt"),
//!     max_concurrency: 10,
//!     ..Default::default()
//! };
//!
//! let report = run_harvest(config).await?;
//! println!("Stored {} of {} URLs", report.stored, report.total_urls);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or call library functions within an async context.

#![warn(missing_docs)]

mod api;
mod app;
pub mod config;
mod error_handling;
mod extract;
mod fetch;
pub mod initialization;
mod storage;
mod utils;

// Re-export public API
pub use api::{api_router, start_api_server, ApiState};
pub use config::{Cli, Command, HarvestConfig, LogFormat, LogLevel, ServeConfig};
pub use extract::{resolve_publication_date, resolve_publication_date_at};
pub use run::{run_harvest, HarvestReport};
pub use storage::{
    article_exists, count_articles, get_article, init_db_pool_with_path, insert_article,
    list_articles, run_migrations, ArticleRecord, ArticleSummary, StoredArticle,
};

// Internal run module (contains the main harvest logic)
mod run {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use futures::stream::FuturesUnordered;
    use futures::StreamExt;
    use log::{info, warn};
    use tokio::io::{AsyncBufReadExt, BufReader};
    use tokio_util::sync::CancellationToken;

    use crate::app::statistics::print_error_statistics;
    use crate::app::{log_progress, shutdown_gracefully, validate_and_normalize_url};
    use crate::config::{HarvestConfig, LOGGING_INTERVAL, URL_PROCESSING_TIMEOUT};
    use crate::error_handling::{ErrorType, InfoType, ProcessingStats};
    use crate::fetch::ProcessingContext;
    use crate::initialization::{init_client, init_semaphore};
    use crate::storage::{article_exists, count_articles, init_db_pool_with_path, run_migrations};
    use crate::utils::{process_article, ProcessArticleResult};

    /// Results of a harvest run.
    ///
    /// Contains summary statistics about the completed harvest.
    #[derive(Debug, Clone)]
    pub struct HarvestReport {
        /// Number of URLs attempted (valid lines minus duplicates)
        pub total_urls: usize,
        /// Number of articles fetched and stored
        pub stored: usize,
        /// Number of URLs skipped because they were already stored
        pub skipped_existing: usize,
        /// Number of URLs that failed to process
        pub failed: usize,
        /// Total number of articles in the database after the run
        pub total_in_db: i64,
        /// Path to the SQLite database containing results
        pub db_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs an article harvest with the provided configuration.
    ///
    /// This is the main entry point for the library. It reads URLs from the
    /// input file (or stdin for `-`), skips URLs already stored, fetches the
    /// rest concurrently, and stores extracted articles in the SQLite
    /// database.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened
    /// - Database initialization or migration fails
    /// - The HTTP client cannot be constructed
    ///
    /// Per-URL failures are counted in the report, not propagated.
    pub async fn run_harvest(config: HarvestConfig) -> Result<HarvestReport> {
        let (total_lines, is_stdin) = if config.file.as_os_str() == "-" {
            info!("Reading URLs from stdin");
            (0, true)
        } else {
            let file_for_counting = tokio::fs::File::open(&config.file)
                .await
                .context("Failed to open input file for line counting")?;
            let reader = BufReader::new(file_for_counting);
            let mut count = 0usize;
            let mut counting_lines = reader.lines();
            while let Ok(Some(line)) = counting_lines.next_line().await {
                let trimmed = line.trim();
                if !trimmed.is_empty() && !trimmed.starts_with('#') {
                    count += 1;
                }
            }
            info!("Total URLs in file: {}", count);
            (count, false)
        };

        let mut stdin_lines = if is_stdin {
            use tokio::io::stdin;
            Some(BufReader::new(stdin()).lines())
        } else {
            None
        };

        let mut file_lines = if !is_stdin {
            let file = tokio::fs::File::open(&config.file)
                .await
                .context("Failed to open input file")?;
            Some(BufReader::new(file).lines())
        } else {
            None
        };

        let semaphore = init_semaphore(config.max_concurrency);

        let pool = init_db_pool_with_path(&config.db_path)
            .await
            .context("Failed to initialize database pool")?;
        run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        let client = init_client(&config).context("Failed to initialize HTTP client")?;

        let error_stats = Arc::new(ProcessingStats::new());

        let start_time = std::time::Instant::now();

        let stored_urls = Arc::new(AtomicUsize::new(0));
        let failed_urls = Arc::new(AtomicUsize::new(0));
        let skipped_urls = Arc::new(AtomicUsize::new(0));
        let total_urls_attempted = Arc::new(AtomicUsize::new(0));
        let total_urls_in_file = Arc::new(AtomicUsize::new(total_lines));

        let shared_ctx = Arc::new(ProcessingContext::new(
            Arc::clone(&client),
            Arc::clone(&pool),
            error_stats.clone(),
        ));

        let mut tasks = FuturesUnordered::new();

        loop {
            let line_result = if is_stdin {
                stdin_lines
                    .as_mut()
                    .expect("stdin_lines should be Some when is_stdin is true")
                    .next_line()
                    .await
            } else {
                file_lines
                    .as_mut()
                    .expect("file_lines should be Some when is_stdin is false")
                    .next_line()
                    .await
            };
            let line = match line_result {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    warn!("Failed to read line from input: {e}");
                    continue;
                }
            };

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let Some(url) = validate_and_normalize_url(trimmed) else {
                continue;
            };

            // Dedup by exact URL before spending a fetch on it
            match article_exists(&pool, &url).await {
                Ok(true) => {
                    info!("Article already exists in database, skipping: {url}");
                    error_stats.increment_info(InfoType::DuplicateSkipped);
                    skipped_urls.fetch_add(1, Ordering::SeqCst);
                    continue;
                }
                Ok(false) => {}
                Err(e) => {
                    // Leave the decision to the insert path; its UNIQUE
                    // constraint still guards against duplicates
                    warn!("Failed to check for existing article {url}: {e}");
                }
            }

            let permit = match Arc::clone(&semaphore).acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    warn!("Semaphore closed, skipping URL: {url}");
                    continue;
                }
            };

            total_urls_attempted.fetch_add(1, Ordering::SeqCst);

            let ctx = Arc::clone(&shared_ctx);
            let stored_urls_clone = Arc::clone(&stored_urls);
            let failed_urls_clone = Arc::clone(&failed_urls);
            let url_shared: Arc<str> = Arc::from(url.as_str());

            tasks.push(tokio::spawn(async move {
                let _permit = permit;

                let url_for_logging = Arc::clone(&url_shared);

                let result = tokio::time::timeout(
                    URL_PROCESSING_TIMEOUT,
                    process_article(url_shared, ctx.clone()),
                )
                .await;

                match result {
                    Ok(ProcessArticleResult { result: Ok(()), .. }) => {
                        stored_urls_clone.fetch_add(1, Ordering::SeqCst);
                    }
                    Ok(ProcessArticleResult {
                        result: Err(e),
                        retry_count,
                    }) => {
                        failed_urls_clone.fetch_add(1, Ordering::SeqCst);
                        warn!(
                            "Failed to process URL {} after {} retr{}: {e:#}",
                            url_for_logging.as_ref(),
                            retry_count,
                            if retry_count == 1 { "y" } else { "ies" }
                        );
                    }
                    Err(_) => {
                        failed_urls_clone.fetch_add(1, Ordering::SeqCst);
                        warn!("Timeout processing URL {}", url_for_logging.as_ref());
                        ctx.error_stats.increment_error(ErrorType::ProcessUrlTimeout);
                    }
                }
            }));
        }

        let cancel = CancellationToken::new();
        let cancel_logging = cancel.child_token();

        let stored_urls_for_logging = Arc::clone(&stored_urls);
        let failed_urls_for_logging = Arc::clone(&failed_urls);
        let total_urls_for_logging = Arc::clone(&total_urls_in_file);

        let logging_task = Some(tokio::task::spawn(async move {
            let mut interval =
                tokio::time::interval(std::time::Duration::from_secs(LOGGING_INTERVAL));
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        log_progress(
                            start_time,
                            &stored_urls_for_logging,
                            &failed_urls_for_logging,
                            Some(&total_urls_for_logging),
                        );
                    }
                    _ = cancel_logging.cancelled() => {
                        break;
                    }
                }
            }
        }));

        while let Some(task_result) = tasks.next().await {
            if let Err(join_error) = task_result {
                failed_urls.fetch_add(1, Ordering::SeqCst);
                warn!("Task panicked: {:?}", join_error);
            }
        }

        shutdown_gracefully(cancel, logging_task).await;

        log_progress(
            start_time,
            &stored_urls,
            &failed_urls,
            Some(&total_urls_attempted),
        );

        let elapsed_seconds = start_time.elapsed().as_secs_f64();

        if let Err(e) = sqlx::query("PRAGMA wal_checkpoint(TRUNCATE)")
            .execute(pool.as_ref())
            .await
        {
            warn!("Failed to checkpoint WAL file (this is non-critical): {e}");
        }

        print_error_statistics(&error_stats);

        let total_in_db = count_articles(&pool)
            .await
            .context("Failed to count stored articles")?;

        Ok(HarvestReport {
            total_urls: total_urls_attempted.load(Ordering::SeqCst),
            stored: stored_urls.load(Ordering::SeqCst),
            skipped_existing: skipped_urls.load(Ordering::SeqCst),
            failed: failed_urls.load(Ordering::SeqCst),
            total_in_db,
            db_path: config.db_path.clone(),
            elapsed_seconds,
        })
    }
}
