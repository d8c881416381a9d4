// Ingestion end to end: corpus built from real files and directories,
// stats output, and the save/load cycle through the filesystem.

use std::io::BufReader;

use chresto::{build_corpus, Corpus, IngestConfig};
use tempfile::TempDir;

const GPL_SNIPPET: &str = "\
The licenses for most software are designed to take away your freedom. \
By contrast, this license is intended to guarantee your freedom to share free software. \
This General Public License applies to most of the Free Software Foundation's software.";

const BSD_SNIPPET: &str = "\
Redistribution and use of this software in source and binary forms is permitted. \
This software is provided by the copyright holders as is.";

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}

#[tokio::test]
async fn test_corpus_from_single_file() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "gpl.txt", GPL_SNIPPET);

    let (corpus, stats) = build_corpus(&path, &IngestConfig::default()).await.unwrap();

    assert_eq!(stats.files_found, 1);
    assert_eq!(corpus.sentences().len(), 3);
    assert_eq!(corpus.concordance(&["software"], false).len(), 3);
}

#[tokio::test]
async fn test_corpus_from_directory_accumulates_files() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "gpl.txt", GPL_SNIPPET);
    write_fixture(&dir, "licenses/bsd.txt", BSD_SNIPPET);

    let (corpus, stats) = build_corpus(dir.path(), &IngestConfig::default()).await.unwrap();

    assert_eq!(stats.files_read, 2);
    assert_eq!(corpus.sentences().len(), 5);
    assert_eq!(corpus.concordance(&["software"], false).len(), 5);
    // Words from different files land in one shared index.
    assert_eq!(corpus.concordance(&["redistribution"], false).len(), 1);
    assert_eq!(corpus.concordance(&["freedom"], false).len(), 2);
}

#[tokio::test]
async fn test_sentence_ids_follow_file_order() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "a.txt", "First file sentence.");
    write_fixture(&dir, "b.txt", "Second file sentence.");

    let (corpus, _) = build_corpus(dir.path(), &IngestConfig::default()).await.unwrap();

    assert_eq!(corpus.sentences()[0].raw(), "First file sentence.");
    assert_eq!(corpus.sentences()[1].raw(), "Second file sentence.");
    for (position, sentence) in corpus.sentences().iter().enumerate() {
        assert_eq!(sentence.id(), position);
    }
}

#[tokio::test]
async fn test_save_and_load_through_files() {
    let dir = TempDir::new().unwrap();
    let source = write_fixture(&dir, "gpl.txt", GPL_SNIPPET);
    let dump_path = dir.path().join("corpus.dump");

    let (corpus, _) = build_corpus(&source, &IngestConfig::default()).await.unwrap();
    let mut file = std::fs::File::create(&dump_path).unwrap();
    corpus.dump(&mut file).unwrap();
    drop(file);

    let reloaded = Corpus::load(BufReader::new(std::fs::File::open(&dump_path).unwrap())).unwrap();

    assert_eq!(reloaded.sentences().len(), corpus.sentences().len());
    assert_eq!(
        reloaded.concordance(&["software"], false).len(),
        corpus.concordance(&["software"], false).len()
    );
    assert_eq!(
        reloaded.used_with(&["software"], false),
        corpus.used_with(&["software"], false)
    );
}

#[tokio::test]
async fn test_unreadable_file_fails_open() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "good.txt", "A perfectly readable sentence.");
    std::fs::write(dir.path().join("binary.dat"), [0xFF, 0xFE, 0x00, 0x01]).unwrap();

    let (corpus, stats) = build_corpus(dir.path(), &IngestConfig::default()).await.unwrap();

    assert_eq!(stats.files_found, 2);
    assert_eq!(stats.files_read, 1);
    assert_eq!(stats.files_failed, 1);
    assert_eq!(corpus.sentences().len(), 1);
}

#[tokio::test]
async fn test_fail_fast_surfaces_read_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("binary.dat"), [0xFF, 0xFE, 0x00, 0x01]).unwrap();

    let config = IngestConfig {
        fail_fast: true,
        ..Default::default()
    };
    let result = build_corpus(dir.path(), &config).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_stats_reflect_corpus_contents() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "bsd.txt", BSD_SNIPPET);

    let (corpus, stats) = build_corpus(&path, &IngestConfig::default()).await.unwrap();

    assert_eq!(stats.sentences, corpus.sentences().len());
    assert_eq!(stats.indexed_words, corpus.index().len());
    assert_eq!(stats.indexed_stems, corpus.stem_index().len());

    let stats_path = dir.path().join("run_stats.json");
    chresto::write_stats(&stats_path, &stats).await.unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&stats_path).unwrap()).unwrap();
    assert_eq!(parsed["sentences"], stats.sentences as u64);
}
