use anyhow::{Context, Result};
use clap::Parser;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::info;

use chresto::shell;
use chresto::{build_corpus, write_stats, Corpus, IngestConfig};

#[derive(Parser, Debug)]
#[command(name = "chresto")]
#[command(about = "Personal text-corpus concordance tool")]
#[command(version)]
struct Args {
    /// Corpus source: a text file, a directory of text files, or a saved
    /// dump when --load is given
    path: PathBuf,

    /// Treat the path as a previously saved dump instead of raw text
    #[arg(long)]
    load: bool,

    /// Dump the corpus to this path once it is built
    #[arg(long)]
    save: Option<PathBuf>,

    /// Default result limit for shell commands
    #[arg(long, short = 'l', default_value_t = 20)]
    limit: usize,

    /// Abort on first unreadable file
    #[arg(long)]
    fail_fast: bool,

    /// Suppress console progress bars
    #[arg(long)]
    no_progress: bool,

    /// Stats output file path
    #[arg(long, default_value = "run_stats.json")]
    stats_out: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    info!("Starting chresto");
    info!(?args, "Parsed CLI arguments");

    if !args.path.exists() {
        anyhow::bail!("Corpus path does not exist: {}", args.path.display());
    }

    let corpus = if args.load {
        let file = std::fs::File::open(&args.path)
            .with_context(|| format!("failed to open dump {}", args.path.display()))?;
        let corpus = Corpus::load(BufReader::new(file))
            .with_context(|| format!("failed to parse dump {}", args.path.display()))?;
        println!(
            "Loaded {} sentences from {}",
            corpus.sentences().len(),
            args.path.display()
        );
        corpus
    } else {
        let config = IngestConfig {
            fail_fast: args.fail_fast,
            show_progress: !args.no_progress,
        };
        let (corpus, stats) = build_corpus(&args.path, &config).await?;
        write_stats(&args.stats_out, &stats).await?;

        println!("chresto v{} - corpus ready", env!("CARGO_PKG_VERSION"));
        println!(
            "Ingested {} of {} files ({} failed)",
            stats.files_read, stats.files_found, stats.files_failed
        );
        println!(
            "{} sentences, {} indexed words, {} stems",
            stats.sentences, stats.indexed_words, stats.indexed_stems
        );
        corpus
    };

    if let Some(save_path) = &args.save {
        let mut file = std::fs::File::create(save_path)
            .with_context(|| format!("failed to create {}", save_path.display()))?;
        corpus
            .dump(&mut file)
            .with_context(|| format!("failed to write {}", save_path.display()))?;
        info!("Saved corpus to {}", save_path.display());
        println!("Saved corpus to {}", save_path.display());
    }

    shell::run_interactive(corpus, args.limit)
}
