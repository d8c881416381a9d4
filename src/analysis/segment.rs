// Sentence boundary segmentation over raw document text.
// Hand-rolled scanner: terminator runs close a sentence when followed by
// whitespace or end of text, trailing closing quotes/brackets attach to the
// sentence, and known abbreviations suppress the split.

use std::collections::HashSet;

/// Abbreviations whose trailing period must not close a sentence.
const ABBREVIATIONS: &[&str] = &[
    "Dr.", "Mr.", "Mrs.", "Ms.", "Prof.", "Sr.", "Jr.", "St.",
    "U.S.A.", "U.K.", "N.Y.C.", "L.A.", "D.C.",
    "ft.", "in.", "lbs.", "oz.", "mi.", "km.",
    "a.m.", "p.m.", "etc.", "vs.", "e.g.", "i.e.", "cf.",
];

/// Abbreviation lookup for boundary suppression.
pub struct AbbreviationChecker {
    abbreviations: HashSet<&'static str>,
}

impl AbbreviationChecker {
    pub fn new() -> Self {
        Self {
            abbreviations: ABBREVIATIONS.iter().copied().collect(),
        }
    }

    /// Check if a word is a known abbreviation or a single-letter initial ("J.").
    pub fn is_abbreviation(&self, word: &str) -> bool {
        if self.abbreviations.contains(word) {
            return true;
        }
        let mut chars = word.chars();
        matches!((chars.next(), chars.next(), chars.next()),
            (Some(first), Some('.'), None) if first.is_uppercase())
    }

    /// Check if text ends with an abbreviation, ignoring surrounding quotes.
    pub fn ends_with_abbreviation(&self, text: &str) -> bool {
        match text.split_whitespace().last() {
            Some(last_word) => {
                let clean_word = last_word.trim_matches(|c: char| {
                    matches!(c, '"' | '\'' | '\u{201C}' | '\u{201D}' | '\u{2018}' | '\u{2019}')
                });
                self.is_abbreviation(clean_word)
            }
            None => false,
        }
    }
}

impl Default for AbbreviationChecker {
    fn default() -> Self {
        Self::new()
    }
}

fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '?' | '!')
}

fn is_closer(ch: char) -> bool {
    matches!(ch, '"' | '\'' | '\u{201D}' | '\u{2019}' | ')' | ']' | '}')
}

/// Split raw text into sentence segments, borrowed from the input.
///
/// A sentence closes at a run of `.?!` (plus any trailing closing quotes or
/// brackets) followed by whitespace or end of text. A final unterminated
/// segment is emitted as its own sentence. Segments are raw slices; callers
/// normalize them separately.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let checker = AbbreviationChecker::new();
    split_sentences_with(text, &checker)
}

/// Split raw text into sentence segments using a caller-supplied
/// abbreviation checker, allowing the checker to be built once per corpus.
pub fn split_sentences_with<'a>(text: &'a str, checker: &AbbreviationChecker) -> Vec<&'a str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();

    let mut i = 0;
    while i < chars.len() && chars[i].1.is_whitespace() {
        i += 1;
    }
    let mut start = if i < chars.len() { chars[i].0 } else { text.len() };

    while i < chars.len() {
        if !is_terminator(chars[i].1) {
            i += 1;
            continue;
        }

        let run_start = i;
        let mut j = i;
        while j < chars.len() && is_terminator(chars[j].1) {
            j += 1;
        }
        let lone_period = j - run_start == 1 && chars[run_start].1 == '.';

        while j < chars.len() && is_closer(chars[j].1) {
            j += 1;
        }
        let seg_end = if j < chars.len() { chars[j].0 } else { text.len() };
        let at_boundary = j >= chars.len() || chars[j].1.is_whitespace();

        if at_boundary {
            let segment = &text[start..seg_end];
            if !(lone_period && checker.ends_with_abbreviation(segment)) {
                sentences.push(segment);
                i = j;
                while i < chars.len() && chars[i].1.is_whitespace() {
                    i += 1;
                }
                start = if i < chars.len() { chars[i].0 } else { text.len() };
                continue;
            }
        }
        i = j;
    }

    // Trailing text without a terminator still forms a sentence.
    if start < text.len() && !text[start..].trim().is_empty() {
        sentences.push(&text[start..]);
    }

    sentences
}
