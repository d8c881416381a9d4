// Word tokenization for normalized sentence text.
// Alphanumeric runs form words (interior apostrophes and hyphens stay inside
// the word), every other non-space character becomes its own token, so
// punctuation is queryable and countable like any word.

fn is_connector(ch: char) -> bool {
    matches!(ch, '\'' | '\u{2019}' | '-')
}

/// Tokenize a sentence into ordered word tokens, borrowed from the input.
///
/// "Hello world!" yields ["Hello", "world", "!"]; "don't" and "full-time"
/// each stay a single token.
pub fn tokenize(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut tokens = Vec::new();

    let mut i = 0;
    while i < chars.len() {
        let (pos, ch) = chars[i];
        if ch.is_whitespace() {
            i += 1;
            continue;
        }

        if ch.is_alphanumeric() {
            let mut j = i + 1;
            while j < chars.len() {
                let c = chars[j].1;
                if c.is_alphanumeric() {
                    j += 1;
                } else if is_connector(c)
                    && j + 1 < chars.len()
                    && chars[j + 1].1.is_alphanumeric()
                {
                    j += 1;
                } else {
                    break;
                }
            }
            let end = if j < chars.len() { chars[j].0 } else { text.len() };
            tokens.push(&text[pos..end]);
            i = j;
        } else {
            tokens.push(&text[pos..pos + ch.len_utf8()]);
            i += 1;
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_punctuation() {
        assert_eq!(tokenize("Hello world!"), vec!["Hello", "world", "!"]);
        assert_eq!(
            tokenize("This is an example of corpus."),
            vec!["This", "is", "an", "example", "of", "corpus", "."]
        );
    }

    #[test]
    fn test_tokenize_keeps_contractions_whole() {
        assert_eq!(tokenize("don't stop"), vec!["don't", "stop"]);
    }

    #[test]
    fn test_tokenize_keeps_compounds_whole() {
        assert_eq!(tokenize("a full-time job"), vec!["a", "full-time", "job"]);
    }

    #[test]
    fn test_tokenize_trailing_hyphen_split_off() {
        assert_eq!(tokenize("wo- rld"), vec!["wo", "-", "rld"]);
    }

    #[test]
    fn test_tokenize_punctuation_runs_split_per_char() {
        assert_eq!(tokenize("Really?!"), vec!["Really", "?", "!"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_tokenize_unicode_words() {
        assert_eq!(tokenize("naïve café."), vec!["naïve", "café", "."]);
    }
}
