// Interactive query shell over a built corpus. Line-oriented: one command
// per line, results capped at a per-command or default limit, counters
// printed highest count first.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::io::{BufRead, Write};

use crate::corpus::Corpus;

const HIGHLIGHT_ON: &str = "\x1b[30;43m";
const HIGHLIGHT_OFF: &str = "\x1b[0m";

/// Parsed shell command arguments: query words plus an optional result cap.
#[derive(Debug, PartialEq)]
struct CommandArgs {
    words: Vec<String>,
    limit: Option<usize>,
    stem: bool,
}

fn parse_args(input: &str) -> CommandArgs {
    let mut words = Vec::new();
    let mut limit = None;
    let mut stem = false;

    let mut tokens = input.split_whitespace();
    while let Some(token) = tokens.next() {
        match token {
            "-l" | "--limit" => {
                if let Some(value) = tokens.next() {
                    limit = value.parse().ok();
                }
            }
            "-s" | "--stem" => stem = true,
            word => words.push(word.to_string()),
        }
    }

    CommandArgs { words, limit, stem }
}

/// Sort a counter highest count first, ties broken by key order so output
/// is deterministic.
fn sort_counts<K: Ord>(counts: HashMap<K, usize>) -> Vec<(K, usize)> {
    let mut items: Vec<_> = counts.into_iter().collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    items
}

/// Wrap every case-insensitive occurrence of the query words in ANSI
/// reverse-video, longest query word first at each position.
fn highlight(text: &str, words: &[String]) -> String {
    let chars: Vec<char> = text.chars().collect();
    let lowered: Vec<char> = chars
        .iter()
        .map(|c| c.to_lowercase().next().unwrap_or(*c))
        .collect();

    let mut patterns: Vec<Vec<char>> = words
        .iter()
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase().chars().collect())
        .collect();
    patterns.sort_by_key(|p: &Vec<char>| std::cmp::Reverse(p.len()));

    let mut result = String::with_capacity(text.len());
    let mut i = 0;
    'outer: while i < chars.len() {
        for pattern in &patterns {
            if lowered[i..].starts_with(pattern.as_slice()) {
                result.push_str(HIGHLIGHT_ON);
                result.extend(&chars[i..i + pattern.len()]);
                result.push_str(HIGHLIGHT_OFF);
                i += pattern.len();
                continue 'outer;
            }
        }
        result.push(chars[i]);
        i += 1;
    }
    result
}

/// The shell itself. Owns the corpus; commands only read it, except `save`.
pub struct Shell {
    corpus: Corpus,
    default_limit: usize,
}

impl Shell {
    pub fn new(corpus: Corpus, default_limit: usize) -> Self {
        Self {
            corpus,
            default_limit,
        }
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<()> {
        write!(output, "chresto> ")?;
        output.flush()?;

        for line in input.lines() {
            let line = line.context("failed to read command")?;
            let (command, rest) = match line.trim().split_once(char::is_whitespace) {
                Some((command, rest)) => (command, rest),
                None => (line.trim(), ""),
            };

            match command {
                "" => {}
                "find" => self.cmd_find(rest, &mut output)?,
                "verb" => self.cmd_verb(rest, &mut output)?,
                "with" => self.cmd_with(rest, &mut output)?,
                "between" => self.cmd_between(rest, &mut output)?,
                "save" => self.cmd_save(rest, &mut output)?,
                "help" => self.cmd_help(&mut output)?,
                "quit" | "exit" => return Ok(()),
                unknown => writeln!(output, "unknown command: {unknown} (try help)")?,
            }

            write!(output, "chresto> ")?;
            output.flush()?;
        }
        Ok(())
    }

    fn limit(&self, args: &CommandArgs) -> usize {
        args.limit.unwrap_or(self.default_limit)
    }

    /// Print the sentences containing every query word, matches highlighted.
    fn cmd_find<W: Write>(&self, rest: &str, output: &mut W) -> Result<()> {
        let args = parse_args(rest);
        if args.words.is_empty() {
            writeln!(output, "usage: find <word>... [-l N] [-s]")?;
            return Ok(());
        }

        let ids = self.corpus.concordance(&args.words, args.stem);
        for (i, id) in ids.iter().take(self.limit(&args)).enumerate() {
            let raw = self.corpus.sentences()[*id].raw();
            writeln!(output, "{i}) {}", highlight(raw, &args.words))?;
        }
        Ok(())
    }

    /// Print the verbs appearing in sentences matching the query.
    fn cmd_verb<W: Write>(&self, rest: &str, output: &mut W) -> Result<()> {
        let args = parse_args(rest);
        if args.words.is_empty() {
            writeln!(output, "usage: verb <word>... [-l N] [-s]")?;
            return Ok(());
        }

        let counts = self.corpus.find_tag(&args.words, "VB", args.stem);
        for ((word, tag), count) in sort_counts(counts).into_iter().take(self.limit(&args)) {
            writeln!(output, "{word} {tag} {count}")?;
        }
        Ok(())
    }

    /// Print the words co-occurring with the query.
    fn cmd_with<W: Write>(&self, rest: &str, output: &mut W) -> Result<()> {
        let args = parse_args(rest);
        if args.words.is_empty() {
            writeln!(output, "usage: with <word>... [-l N] [-s]")?;
            return Ok(());
        }

        let counts = self.corpus.used_with(&args.words, args.stem);
        for (word, count) in sort_counts(counts).into_iter().take(self.limit(&args)) {
            writeln!(output, "{word} {count}")?;
        }
        Ok(())
    }

    /// Print the text spans between two query words.
    fn cmd_between<W: Write>(&self, rest: &str, output: &mut W) -> Result<()> {
        let args = parse_args(rest);
        if args.words.len() != 2 {
            writeln!(output, "usage: between <word1> <word2> [-l N] [-s]")?;
            return Ok(());
        }

        let counts = self.corpus.between(&args.words[0], &args.words[1], args.stem);
        for (span, count) in sort_counts(counts).into_iter().take(self.limit(&args)) {
            writeln!(output, "{span} {count}")?;
        }
        Ok(())
    }

    /// Dump the corpus to a file.
    fn cmd_save<W: Write>(&self, rest: &str, output: &mut W) -> Result<()> {
        let path = rest.trim();
        if path.is_empty() {
            writeln!(output, "usage: save <path>")?;
            return Ok(());
        }

        let mut file = std::fs::File::create(path)
            .with_context(|| format!("failed to create {path}"))?;
        self.corpus
            .dump(&mut file)
            .with_context(|| format!("failed to write {path}"))?;
        writeln!(output, "saved {} sentences to {path}", self.corpus.sentences().len())?;
        Ok(())
    }

    fn cmd_help<W: Write>(&self, output: &mut W) -> Result<()> {
        writeln!(output, "commands:")?;
        writeln!(output, "  find <word>...            sentences containing every word")?;
        writeln!(output, "  verb <word>...            verbs used in matching sentences")?;
        writeln!(output, "  with <word>...            words co-occurring with the query")?;
        writeln!(output, "  between <word1> <word2>   text between the two words")?;
        writeln!(output, "  save <path>               dump the corpus to a file")?;
        writeln!(output, "  quit")?;
        writeln!(output, "options: -l/--limit N caps results, -s/--stem matches by stem")?;
        Ok(())
    }
}

/// Run the shell over stdin/stdout.
pub fn run_interactive(corpus: Corpus, default_limit: usize) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(corpus, default_limit).run(stdin.lock(), stdout.lock())
}
