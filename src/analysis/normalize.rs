// Sentence text normalization: whitespace collapse, hyphen rejoin, ligature expansion.
// Kept separate from segmentation so both ingestion and reload share one code path.

/// Normalize sentence text by collapsing whitespace runs, rejoining words broken
/// across line breaks by a hyphen ("wo- rld" becomes "world"), and expanding
/// the ff/fi/fl/ffi/ffl ligature glyphs to their ASCII equivalents.
pub fn normalize_sentence(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    normalize_sentence_into(text, &mut result);
    result
}

/// Normalize sentence text into a supplied buffer to avoid allocation
/// when processing sentences in a batch.
pub fn normalize_sentence_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    // Pass 1: collapse whitespace runs to single spaces, expanding ligatures
    // as they stream past. Unknown glyphs pass through untouched.
    let mut prev_was_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                buffer.push(' ');
                prev_was_space = true;
            }
        } else {
            match expand_ligature(ch) {
                Some(expanded) => buffer.push_str(expanded),
                None => buffer.push(ch),
            }
            prev_was_space = false;
        }
    }

    // Pass 2: rejoin hyphen-broken words. After pass 1 a break is exactly
    // "<word char>- <word char>".
    let chars: Vec<char> = buffer.trim().chars().collect();
    buffer.clear();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '-'
            && i > 0
            && chars[i - 1].is_alphanumeric()
            && i + 2 < chars.len()
            && chars[i + 1] == ' '
            && chars[i + 2].is_alphanumeric()
        {
            // Skip the hyphen and the space; the next word char joins up.
            i += 2;
            continue;
        }
        buffer.push(chars[i]);
        i += 1;
    }
}

fn expand_ligature(ch: char) -> Option<&'static str> {
    match ch {
        '\u{FB00}' => Some("ff"),
        '\u{FB01}' => Some("fi"),
        '\u{FB02}' => Some("fl"),
        '\u{FB03}' => Some("ffi"),
        '\u{FB04}' => Some("ffl"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_sentence_basic() {
        let input = "This is a\nsentence with\r\nline breaks.";
        let expected = "This is a sentence with line breaks.";
        assert_eq!(normalize_sentence(input), expected);
    }

    #[test]
    fn test_normalize_sentence_whitespace_collapse() {
        let input = "Multiple\n\n\nspaces\r\n\r\n   here.";
        assert_eq!(normalize_sentence(input), "Multiple spaces here.");
    }

    #[test]
    fn test_normalize_sentence_trims_ends() {
        assert_eq!(normalize_sentence("  Leading and trailing  "), "Leading and trailing");
    }

    #[test]
    fn test_normalize_sentence_empty() {
        assert_eq!(normalize_sentence(""), "");
        assert_eq!(normalize_sentence("   "), "");
    }

    #[test]
    fn test_normalize_hyphen_break_rejoined() {
        assert_eq!(normalize_sentence("hello wo- rld."), "hello world.");
    }

    #[test]
    fn test_normalize_hyphen_break_across_lines() {
        assert_eq!(normalize_sentence("an up-\ncoming event"), "an upcoming event");
    }

    #[test]
    fn test_normalize_compound_words_untouched() {
        assert_eq!(normalize_sentence("a full-time job"), "a full-time job");
    }

    #[test]
    fn test_normalize_trailing_hyphen_kept() {
        assert_eq!(normalize_sentence("ends with a hyphen-"), "ends with a hyphen-");
    }

    #[test]
    fn test_normalize_ligature_expansion() {
        assert_eq!(
            normalize_sentence("He justi\u{FB01}ed his answer."),
            "He justified his answer."
        );
        assert_eq!(normalize_sentence("e\u{FB00}ort and a\u{FB04}uence"), "effort and affluence");
    }

    #[test]
    fn test_normalize_unknown_glyphs_pass_through() {
        let input = "Unicode 世界 with émojis 🦀.";
        assert_eq!(normalize_sentence(input), input);
    }

    #[test]
    fn test_normalize_sentence_into_buffer_reuse() {
        let mut buffer = String::new();

        normalize_sentence_into("Line one.\nLine two.", &mut buffer);
        assert_eq!(buffer, "Line one. Line two.");

        normalize_sentence_into("Different\r\ncontent.", &mut buffer);
        assert_eq!(buffer, "Different content.");
    }
}
