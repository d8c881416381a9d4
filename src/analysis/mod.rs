// Linguistic building blocks: normalization, sentence segmentation, word
// tokenization, part-of-speech tagging, and stemming. The corpus layer treats
// these as black-box collaborators.

pub mod normalize;
pub mod segment;
pub mod stem;
pub mod tagger;
pub mod tokenize;

pub use normalize::{normalize_sentence, normalize_sentence_into};
pub use segment::{split_sentences, split_sentences_with, AbbreviationChecker};
pub use stem::Stemmer;
pub use tagger::Tagger;
pub use tokenize::tokenize;
