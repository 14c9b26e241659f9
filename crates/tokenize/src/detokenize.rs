//! Joins tokens back into text and re-attaches punctuation.
//!
//! This is positional, not grammatical: a space is removed before any of
//! `, . ? ! " ( ) '`. Underscores and `--` keep their surrounding spaces.

use std::sync::LazyLock;

use regex::Regex;

/// Whitespace followed by a punctuation mark that attaches to the preceding token.
///
/// `\x1C-\x1F` count as whitespace here, as they do for the splitter.
pub const REJOIN_PATTERN: &str = r#"[\s\x1C-\x1F]+([,.?!"()'])"#;

// constant pattern, covered by the tests below
#[allow(clippy::expect_used)]
static REJOIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(REJOIN_PATTERN).expect("invalid rejoin regex"));

/// Space-joins tokens and applies the punctuation rejoin rule.
#[derive(Clone, Copy, Debug, Default)]
pub struct Detokenizer;

impl Detokenizer {
    /// Detokenizer sharing the process-wide rejoin regex.
    pub fn new() -> Self {
        Self
    }

    /// Join `tokens` with single spaces, then rejoin punctuation.
    pub fn detokenize<S: AsRef<str>>(&self, tokens: &[S]) -> String {
        let joined = tokens
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(" ");
        self.rejoin(&joined)
    }

    /// Remove whitespace in front of re-attachable punctuation.
    pub fn rejoin(&self, text: &str) -> String {
        REJOIN_REGEX.replace_all(text, "$1").into_owned()
    }
}
