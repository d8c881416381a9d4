// Document acquisition: build a corpus from a text file or a directory tree.
// Discovery streams paths; reading is async buffered; unreadable files fail
// open unless fail_fast is set.

use anyhow::{Context, Result};
use futures::stream::{Stream, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::fs;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::corpus::Corpus;

/// Configuration for corpus ingestion behavior.
#[derive(Debug, Clone, Default)]
pub struct IngestConfig {
    /// Abort on the first unreadable file instead of skipping it.
    pub fail_fast: bool,
    /// Show a console progress bar for multi-file ingestion.
    pub show_progress: bool,
}

/// Statistics for one ingestion run, serialized to the stats output file.
#[derive(Debug, Clone, Serialize)]
pub struct IngestStats {
    pub files_found: usize,
    pub files_read: usize,
    pub files_failed: usize,
    pub sentences: usize,
    pub indexed_words: usize,
    pub indexed_stems: usize,
    pub elapsed_ms: u64,
}

/// Discover every regular file under `root`, streamed as it is found.
pub fn discover_files(root: impl AsRef<Path>) -> impl Stream<Item = Result<PathBuf>> {
    let walker = WalkDir::new(root.as_ref()).follow_links(false).into_iter();
    futures::stream::unfold(walker, |mut walker| async move {
        loop {
            match walker.next() {
                Some(Ok(entry)) => {
                    if entry.file_type().is_file() {
                        debug!("found file: {}", entry.path().display());
                        return Some((Ok(entry.path().to_path_buf()), walker));
                    }
                }
                Some(Err(e)) => {
                    return Some((Err(anyhow::anyhow!("directory walk failed: {e}")), walker));
                }
                None => return None,
            }
        }
    })
}

/// Collect discovered files into a sorted Vec for deterministic corpus order.
pub async fn collect_files(root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut stream = Box::pin(discover_files(root));
    while let Some(result) = stream.next().await {
        files.push(result?);
    }
    files.sort();
    info!("discovered {} files", files.len());
    Ok(files)
}

/// Build a corpus from `path`: a single text file, or every regular file
/// under a directory, in sorted path order.
pub async fn build_corpus(path: impl AsRef<Path>, config: &IngestConfig) -> Result<(Corpus, IngestStats)> {
    let path = path.as_ref();
    let start = Instant::now();

    let files = if path.is_dir() {
        collect_files(path).await?
    } else {
        vec![path.to_path_buf()]
    };

    let progress = if config.show_progress && files.len() > 1 {
        let bar = ProgressBar::new(files.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Some(bar)
    } else {
        None
    };

    let mut corpus = Corpus::new();
    let mut files_read = 0usize;
    let mut files_failed = 0usize;

    for file in &files {
        if let Some(bar) = &progress {
            bar.set_message(file.display().to_string());
        }
        match fs::read_to_string(file).await {
            Ok(text) => {
                corpus.add_text(&text);
                files_read += 1;
                debug!("ingested {}", file.display());
            }
            Err(e) => {
                if config.fail_fast {
                    return Err(e).with_context(|| format!("failed to read {}", file.display()));
                }
                warn!("skipping {}: {}", file.display(), e);
                files_failed += 1;
            }
        }
        if let Some(bar) = &progress {
            bar.inc(1);
        }
    }

    if let Some(bar) = &progress {
        bar.finish_and_clear();
    }

    let stats = IngestStats {
        files_found: files.len(),
        files_read,
        files_failed,
        sentences: corpus.sentences().len(),
        indexed_words: corpus.index().len(),
        indexed_stems: corpus.stem_index().len(),
        elapsed_ms: start.elapsed().as_millis() as u64,
    };

    info!(
        "ingestion complete: {} files read, {} failed, {} sentences in {}ms",
        stats.files_read, stats.files_failed, stats.sentences, stats.elapsed_ms
    );

    Ok((corpus, stats))
}

/// Write ingestion stats as pretty JSON.
pub async fn write_stats(path: impl AsRef<Path>, stats: &IngestStats) -> Result<()> {
    let json = serde_json::to_vec_pretty(stats).context("failed to serialize stats")?;
    fs::write(path.as_ref(), json)
        .await
        .with_context(|| format!("failed to write stats to {}", path.as_ref().display()))?;
    Ok(())
}
