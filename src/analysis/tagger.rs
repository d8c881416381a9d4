// Rule-based part-of-speech tagging with Penn Treebank style tags.
// Closed-class words come from a fixed lexicon; open-class words fall through
// suffix rules, then capitalization, then the NN default. Output length and
// order always match the input.

use std::collections::HashMap;

/// Closed-class lexicon entries as (word, tag) pairs.
const LEXICON: &[(&str, &str)] = &[
    // determiners
    ("a", "DT"), ("an", "DT"), ("the", "DT"), ("this", "DT"), ("these", "DT"),
    ("that", "DT"), ("those", "DT"), ("any", "DT"), ("all", "DT"),
    ("some", "DT"), ("no", "DT"), ("every", "DT"), ("each", "DT"),
    // wh-words
    ("what", "WP"), ("who", "WP"), ("whom", "WP"), ("which", "WDT"),
    ("whose", "WP$"), ("when", "WRB"), ("where", "WRB"), ("why", "WRB"),
    ("how", "WRB"),
    // personal pronouns
    ("i", "PRP"), ("me", "PRP"), ("we", "PRP"), ("us", "PRP"),
    ("you", "PRP"), ("she", "PRP"), ("he", "PRP"), ("him", "PRP"),
    ("they", "PRP"), ("them", "PRP"), ("it", "PRP"),
    // possessive pronouns
    ("my", "PRP$"), ("our", "PRP$"), ("your", "PRP$"), ("her", "PRP$"),
    ("his", "PRP$"), ("their", "PRP$"), ("its", "PRP$"),
    // be / have / do
    ("am", "VBP"), ("is", "VBZ"), ("are", "VBP"), ("was", "VBD"),
    ("were", "VBD"), ("be", "VB"), ("been", "VBN"), ("being", "VBG"),
    ("has", "VBZ"), ("have", "VBP"), ("had", "VBD"), ("having", "VBG"),
    ("does", "VBZ"), ("do", "VBP"), ("did", "VBD"), ("done", "VBN"),
    ("doing", "VBG"),
    // modals
    ("will", "MD"), ("would", "MD"), ("can", "MD"), ("could", "MD"),
    ("shall", "MD"), ("should", "MD"), ("may", "MD"), ("might", "MD"),
    ("must", "MD"),
    // conjunctions
    ("and", "CC"), ("or", "CC"), ("but", "CC"), ("nor", "CC"),
    // prepositions
    ("of", "IN"), ("in", "IN"), ("on", "IN"), ("at", "IN"), ("by", "IN"),
    ("for", "IN"), ("with", "IN"), ("from", "IN"), ("as", "IN"),
    ("into", "IN"), ("about", "IN"), ("over", "IN"), ("under", "IN"),
    ("between", "IN"), ("through", "IN"), ("after", "IN"), ("before", "IN"),
    ("during", "IN"), ("against", "IN"), ("without", "IN"), ("within", "IN"),
    ("upon", "IN"), ("among", "IN"), ("since", "IN"), ("until", "IN"),
    ("than", "IN"),
    ("to", "TO"),
    // common adverbs
    ("not", "RB"), ("very", "RB"), ("too", "RB"), ("also", "RB"),
    ("just", "RB"), ("then", "RB"), ("here", "RB"), ("now", "RB"),
    ("never", "RB"), ("always", "RB"), ("there", "EX"),
];

/// Rule-based tagger: lexicon lookup plus suffix and shape rules.
pub struct Tagger {
    lexicon: HashMap<&'static str, &'static str>,
}

impl Tagger {
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON.iter().copied().collect(),
        }
    }

    /// Tag an ordered word sequence, returning (word, tag) pairs of the same
    /// length and order. Words keep their original case in the output.
    pub fn pos_tag<S: AsRef<str>>(&self, words: &[S]) -> Vec<(String, String)> {
        words
            .iter()
            .map(|w| {
                let word = w.as_ref();
                (word.to_string(), self.tag_word(word))
            })
            .collect()
    }

    fn tag_word(&self, word: &str) -> String {
        if !word.chars().any(|c| c.is_alphanumeric()) {
            // Punctuation tokens tag as themselves.
            return word.to_string();
        }
        if word.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | ',')) {
            return "CD".to_string();
        }

        let lower = word.to_lowercase();
        if let Some(tag) = self.lexicon.get(lower.as_str()) {
            return (*tag).to_string();
        }
        if let Some(tag) = suffix_tag(&lower) {
            return tag.to_string();
        }
        if word.chars().next().is_some_and(|c| c.is_uppercase()) {
            return "NNP".to_string();
        }
        "NN".to_string()
    }
}

impl Default for Tagger {
    fn default() -> Self {
        Self::new()
    }
}

fn suffix_tag(lower: &str) -> Option<&'static str> {
    let n = lower.len();
    if n > 4 && lower.ends_with("ing") {
        return Some("VBG");
    }
    if n > 3 && lower.ends_with("ed") {
        return Some("VBD");
    }
    if n > 3 && lower.ends_with("ly") {
        return Some("RB");
    }
    if ["ful", "ous", "ive", "able", "ible", "ish"]
        .iter()
        .any(|s| n > s.len() + 1 && lower.ends_with(s))
    {
        return Some("JJ");
    }
    if ["tion", "sion", "ment", "ness", "ity", "ism"]
        .iter()
        .any(|s| n > s.len() + 1 && lower.ends_with(s))
    {
        return Some("NN");
    }
    if n > 3
        && lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
    {
        return Some("NNS");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(tagger: &Tagger, words: &[&str]) -> Vec<String> {
        tagger.pos_tag(words).into_iter().map(|(_, t)| t).collect()
    }

    #[test]
    fn test_output_matches_input_length_and_order() {
        let tagger = Tagger::new();
        let words = vec!["This", "is", "an", "example", "of", "corpus", "."];
        let tagged = tagger.pos_tag(&words);
        assert_eq!(tagged.len(), words.len());
        for (i, (word, _)) in tagged.iter().enumerate() {
            assert_eq!(word, words[i]);
        }
    }

    #[test]
    fn test_copula_is_only_verb_in_example_sentence() {
        let tagger = Tagger::new();
        let tagged = tagger.pos_tag(&["This", "is", "an", "example", "of", "corpus", "."]);
        let verbs: Vec<_> = tagged.iter().filter(|(_, t)| t.starts_with("VB")).collect();
        assert_eq!(verbs.len(), 1);
        assert_eq!(verbs[0], &("is".to_string(), "VBZ".to_string()));
    }

    #[test]
    fn test_closed_class_lexicon() {
        let tagger = Tagger::new();
        assert_eq!(
            tags(&tagger, &["the", "of", "they", "their", "would", "to"]),
            vec!["DT", "IN", "PRP", "PRP$", "MD", "TO"]
        );
    }

    #[test]
    fn test_suffix_rules() {
        let tagger = Tagger::new();
        assert_eq!(
            tags(&tagger, &["Stemming", "walked", "quickly", "wonderful", "happiness", "words"]),
            vec!["VBG", "VBD", "RB", "JJ", "NN", "NNS"]
        );
    }

    #[test]
    fn test_us_and_ss_endings_not_plural() {
        let tagger = Tagger::new();
        assert_eq!(tags(&tagger, &["corpus", "glass", "basis"]), vec!["NN", "NN", "NN"]);
    }

    #[test]
    fn test_capitalized_defaults_to_proper_noun() {
        let tagger = Tagger::new();
        assert_eq!(tags(&tagger, &["Hello", "London"]), vec!["NNP", "NNP"]);
    }

    #[test]
    fn test_punctuation_and_numbers() {
        let tagger = Tagger::new();
        assert_eq!(tags(&tagger, &[".", "!", ",", "42", "3.14"]), vec![".", "!", ",", "CD", "CD"]);
    }
}
