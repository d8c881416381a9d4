// Corpus: append-only sentence arena plus two inverted indices (surface word
// and stem), set-intersection queries over them, and a line-oriented
// dump/load cycle. Index buckets hold sentence ids into the arena; a
// sentence's id is its position in the arena.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;
use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::analysis::{split_sentences_with, AbbreviationChecker, Stemmer, Tagger};
use crate::sentence::Sentence;

const STOP_SYMBOLS: &str = "!@#$%^&*()-_+=,.<>;':\"[]{}`~";

const STOP_DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "these", "that", "those", "any", "all",
];

const STOP_PRONOUNS: &[&str] = &[
    "i", "my", "me", "we", "our", "us", "you", "your", "she", "her", "he", "his", "him", "they",
    "their", "them",
];

const STOP_PREPOSITIONS: &[&str] = &[
    "aboard", "about", "above", "across", "after", "against", "along", "amid", "among", "anti",
    "around", "as", "at", "before", "behind", "below", "beneath", "beside", "besides", "between",
    "beyond", "but", "by", "concerning", "considering", "despite", "down", "during", "except",
    "excepting", "excluding", "following", "for", "from", "in", "inside", "into", "like", "minus",
    "near", "of", "off", "on", "onto", "opposite", "outside", "over", "past", "per", "plus",
    "regarding", "round", "save", "since", "than", "through", "to", "toward", "towards", "under",
    "underneath", "unlike", "until", "up", "upon", "versus", "via", "with", "within", "without",
];

/// Words excluded from co-occurrence statistics: punctuation symbols,
/// articles and demonstratives, personal pronouns, and prepositions.
pub fn is_stop_word(word: &str) -> bool {
    let mut chars = word.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if STOP_SYMBOLS.contains(c) {
            return true;
        }
    }
    STOP_DETERMINERS.contains(&word)
        || STOP_PRONOUNS.contains(&word)
        || STOP_PREPOSITIONS.contains(&word)
}

/// Parse failure while reloading a dumped corpus. No partial recovery is
/// attempted; the reader's position at failure is undefined.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dump: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: expected a count, got {value:?}")]
    InvalidCount { line: usize, value: String },
    #[error("unexpected end of dump at line {0}")]
    UnexpectedEof(usize),
    #[error("line {line}: empty index bucket entry")]
    EmptyBucket { line: usize },
    #[error("line {line}: invalid sentence id {value:?}")]
    InvalidId { line: usize, value: String },
    #[error("line {line}: sentence id {id} out of range ({count} sentences)")]
    IdOutOfRange { line: usize, id: usize, count: usize },
}

type IndexMap = BTreeMap<String, BTreeSet<usize>>;

/// An ordered collection of sentences with surface and stem inverted
/// indices. Append-only: sentences are never updated or removed, so index
/// buckets only grow. Single-threaded by design; no internal locking.
pub struct Corpus {
    sentences: Vec<Sentence>,
    index: IndexMap,
    stem_index: IndexMap,
    checker: AbbreviationChecker,
    tagger: Tagger,
    stemmer: Stemmer,
}

impl Corpus {
    pub fn new() -> Self {
        Self {
            sentences: Vec::new(),
            index: IndexMap::new(),
            stem_index: IndexMap::new(),
            checker: AbbreviationChecker::new(),
            tagger: Tagger::new(),
            stemmer: Stemmer::new(),
        }
    }

    pub fn from_text(text: &str) -> Self {
        let mut corpus = Self::new();
        corpus.add_text(text);
        corpus
    }

    /// Sentences in document order; a sentence's id is its index here.
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Surface index: lowercase word -> ids of sentences containing it.
    pub fn index(&self) -> &BTreeMap<String, BTreeSet<usize>> {
        &self.index
    }

    /// Stem index: stem -> ids of sentences with a vocab word of that stem.
    pub fn stem_index(&self) -> &BTreeMap<String, BTreeSet<usize>> {
        &self.stem_index
    }

    /// Split `text` into sentences and append them, indexing every vocab
    /// word under both its surface form and its stem. Cumulative: safe to
    /// call repeatedly to grow the corpus.
    pub fn add_text(&mut self, text: &str) {
        let segments = split_sentences_with(text, &self.checker);
        let added = segments.len();

        for segment in segments {
            let id = self.sentences.len();
            let sentence = Sentence::new(segment, id);
            for word in sentence.vocab() {
                self.index.entry(word.clone()).or_default().insert(id);
                let stem = self.stemmer.stem(word);
                self.stem_index.entry(stem).or_default().insert(id);
            }
            self.sentences.push(sentence);
        }

        debug!(
            "added {} sentences ({} total, {} indexed words, {} stems)",
            added,
            self.sentences.len(),
            self.index.len(),
            self.stem_index.len()
        );
    }

    /// Ids of the sentences containing every query word.
    ///
    /// Query words are lowercased; with `stem` they are additionally stemmed
    /// and looked up in the stem index. An empty query yields the empty set,
    /// and a word absent from the index contributes an empty bucket rather
    /// than an error. Result order carries no meaning.
    pub fn concordance<S: AsRef<str>>(&self, words: &[S], stem: bool) -> BTreeSet<usize> {
        let (keys, index): (Vec<String>, &IndexMap) = if stem {
            (
                words.iter().map(|w| self.stemmer.stem(w.as_ref())).collect(),
                &self.stem_index,
            )
        } else {
            (
                words.iter().map(|w| w.as_ref().to_lowercase()).collect(),
                &self.index,
            )
        };

        let mut keys = keys.into_iter();
        let Some(first) = keys.next() else {
            return BTreeSet::new();
        };
        let mut result = index.get(&first).cloned().unwrap_or_default();

        for key in keys {
            if result.is_empty() {
                break;
            }
            match index.get(&key) {
                Some(bucket) => result.retain(|id| bucket.contains(id)),
                None => result.clear(),
            }
        }
        result
    }

    /// Count (word, tag) pairs whose tag starts with `tag` across the
    /// sentences matching `words` ("VB" counts VB, VBZ, VBD, ...).
    pub fn find_tag<S: AsRef<str>>(
        &self,
        words: &[S],
        tag: &str,
        stem: bool,
    ) -> HashMap<(String, String), usize> {
        let mut counts = HashMap::new();
        for id in self.concordance(words, stem) {
            let sentence = &self.sentences[id];
            for token in sentence.tokens(&self.tagger) {
                if token.1.starts_with(tag) {
                    *counts.entry(token.clone()).or_insert(0) += 1;
                }
            }
        }
        counts
    }

    /// Count the words co-occurring with `words`, excluding the query words
    /// themselves and the stop-word set.
    pub fn used_with<S: AsRef<str>>(&self, words: &[S], stem: bool) -> HashMap<String, usize> {
        let exclude: HashSet<String> = words.iter().map(|w| w.as_ref().to_lowercase()).collect();
        let mut counts = HashMap::new();
        for id in self.concordance(words, stem) {
            for word in self.sentences[id].vocab() {
                if exclude.contains(word.as_str()) || is_stop_word(word) {
                    continue;
                }
                *counts.entry(word.clone()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Count the text spans lying strictly between the first occurrence of
    /// `word1` and the first occurrence of `word2` in each matching
    /// sentence. Only sentences where `word1`'s first occurrence precedes
    /// `word2`'s contribute; later occurrences are ignored. Matching is by
    /// literal lowercased word even when `stem` selected the sentence set,
    /// so in stem mode a sentence without a literal occurrence contributes
    /// nothing.
    pub fn between(&self, word1: &str, word2: &str, stem: bool) -> HashMap<String, usize> {
        let w1 = word1.to_lowercase();
        let w2 = word2.to_lowercase();
        let mut counts = HashMap::new();

        for id in self.concordance(&[word1, word2], stem) {
            let sentence = &self.sentences[id];
            let first1 = sentence.words().iter().position(|w| w.to_lowercase() == w1);
            let first2 = sentence.words().iter().position(|w| w.to_lowercase() == w2);
            if let (Some(i1), Some(i2)) = (first1, first2) {
                if i1 < i2 {
                    let span = sentence.words()[i1 + 1..i2].join(" ");
                    *counts.entry(span).or_insert(0) += 1;
                }
            }
        }
        counts
    }

    /// Serialize the corpus: sentence count, one raw sentence per line, then
    /// the surface and stem indices, each as a bucket count followed by
    /// "word id id ..." lines. Ids are 0-based positions in the sentence
    /// section. Normalization guarantees no sentence contains a newline.
    pub fn dump<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}", self.sentences.len())?;
        for sentence in &self.sentences {
            writeln!(writer, "{}", sentence.raw())?;
        }
        dump_index(writer, &self.index)?;
        dump_index(writer, &self.stem_index)?;
        Ok(())
    }

    /// Reconstruct a corpus from a dump produced by [`Corpus::dump`].
    ///
    /// Sentences are rebuilt from their raw text in dumped order, so ids and
    /// content equality are preserved; both indices are restored from the
    /// dumped buckets. Malformed input fails with a [`LoadError`].
    pub fn load<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let mut lines = reader.lines();
        let mut line_no = 0usize;

        let count_line = next_line(&mut lines, &mut line_no)?;
        let count = parse_count(&count_line, line_no)?;

        let mut corpus = Self::new();
        for id in 0..count {
            let raw = next_line(&mut lines, &mut line_no)?;
            corpus.sentences.push(Sentence::new(&raw, id));
        }

        corpus.index = load_index(&mut lines, &mut line_no, count)?;
        corpus.stem_index = load_index(&mut lines, &mut line_no, count)?;

        debug!(
            "loaded corpus: {} sentences, {} indexed words, {} stems",
            corpus.sentences.len(),
            corpus.index.len(),
            corpus.stem_index.len()
        );
        Ok(corpus)
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Corpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Corpus")
            .field("sentences", &self.sentences.len())
            .field("indexed_words", &self.index.len())
            .field("indexed_stems", &self.stem_index.len())
            .finish()
    }
}

fn dump_index<W: Write>(writer: &mut W, index: &IndexMap) -> io::Result<()> {
    writeln!(writer, "{}", index.len())?;
    for (word, ids) in index {
        write!(writer, "{word}")?;
        for id in ids {
            write!(writer, " {id}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

fn next_line<R: BufRead>(
    lines: &mut io::Lines<R>,
    line_no: &mut usize,
) -> Result<String, LoadError> {
    *line_no += 1;
    match lines.next() {
        Some(Ok(line)) => Ok(line),
        Some(Err(e)) => Err(LoadError::Io(e)),
        None => Err(LoadError::UnexpectedEof(*line_no)),
    }
}

fn parse_count(line: &str, line_no: usize) -> Result<usize, LoadError> {
    line.trim().parse().map_err(|_| LoadError::InvalidCount {
        line: line_no,
        value: line.to_string(),
    })
}

fn load_index<R: BufRead>(
    lines: &mut io::Lines<R>,
    line_no: &mut usize,
    sentence_count: usize,
) -> Result<IndexMap, LoadError> {
    let count_line = next_line(lines, line_no)?;
    let bucket_count = parse_count(&count_line, *line_no)?;

    let mut index = IndexMap::new();
    for _ in 0..bucket_count {
        let line = next_line(lines, line_no)?;
        let mut fields = line.split_whitespace();
        let Some(word) = fields.next() else {
            return Err(LoadError::EmptyBucket { line: *line_no });
        };
        let bucket = index.entry(word.to_string()).or_default();
        for field in fields {
            let id: usize = field.parse().map_err(|_| LoadError::InvalidId {
                line: *line_no,
                value: field.to_string(),
            })?;
            if id >= sentence_count {
                return Err(LoadError::IdOutOfRange {
                    line: *line_no,
                    id,
                    count: sentence_count,
                });
            }
            bucket.insert(id);
        }
    }
    Ok(index)
}
