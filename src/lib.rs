pub mod analysis;
pub mod corpus;
pub mod ingest;
pub mod sentence;
pub mod shell;

// Re-export main types for convenient access
pub use corpus::{is_stop_word, Corpus, LoadError};
pub use sentence::Sentence;

// Re-export ingestion entry points used by the CLI and integration tests
pub use ingest::{build_corpus, collect_files, write_stats, IngestConfig, IngestStats};
