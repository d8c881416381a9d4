// Sentence value type: normalized text plus derived token views.
// Equality and hashing go through the normalized text only, so a sentence
// reconstructed from a dump is interchangeable with the original.

use std::cell::OnceCell;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use crate::analysis::{normalize_sentence, tokenize, Tagger};

/// A single normalized sentence with its word tokens and vocabulary.
///
/// `id` is the sentence's 0-based position in its corpus, assigned at
/// creation and stable across dump/load. Part-of-speech tokens are computed
/// at most once, on first access; everything else is fixed at construction.
#[derive(Debug, Clone)]
pub struct Sentence {
    id: usize,
    raw: String,
    words: Vec<String>,
    vocab: HashSet<String>,
    tokens: OnceCell<Vec<(String, String)>>,
}

impl Sentence {
    /// Build a sentence from raw text: normalize, tokenize, derive vocab.
    pub fn new(raw: &str, id: usize) -> Self {
        let raw = normalize_sentence(raw);
        let words: Vec<String> = tokenize(&raw).into_iter().map(str::to_string).collect();
        let vocab = words.iter().map(|w| w.to_lowercase()).collect();
        Self {
            id,
            raw,
            words,
            vocab,
            tokens: OnceCell::new(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Normalized sentence text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Ordered word tokens, original case.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Unique lowercase words in this sentence.
    pub fn vocab(&self) -> &HashSet<String> {
        &self.vocab
    }

    /// (word, tag) pairs, computed through the tagger on first access and
    /// cached for the sentence's lifetime. Repeated calls return the cached
    /// value regardless of the tagger passed.
    pub fn tokens(&self, tagger: &Tagger) -> &[(String, String)] {
        self.tokens.get_or_init(|| tagger.pos_tag(&self.words))
    }
}

impl PartialEq for Sentence {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Sentence {}

impl Hash for Sentence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}
