// Snowball English stemming behind a small wrapper so the rest of the crate
// depends on a stable word -> stem contract rather than the crate API.

use rust_stemmers::Algorithm;

/// Deterministic, pure word stemmer. Input is lowercased before stemming so
/// "Stemming" and "stem" map to the same key.
pub struct Stemmer {
    inner: rust_stemmers::Stemmer,
}

impl Stemmer {
    pub fn new() -> Self {
        Self {
            inner: rust_stemmers::Stemmer::create(Algorithm::English),
        }
    }

    pub fn stem(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        self.inner.stem(&lower).into_owned()
    }
}

impl Default for Stemmer {
    fn default() -> Self {
        Self::new()
    }
}
