//! Regex splitter that keeps captured delimiters as tokens.
//!
//! Splitting works like a "split with captures": for each delimiter match the
//! text in front of it is emitted, followed by every capturing group that took
//! part in the match. Every piece is trimmed and empty pieces are dropped, so
//! whitespace delimiters vanish while punctuation survives as its own token.

use std::collections::VecDeque;
use std::str::FromStr;

use regex::{CaptureMatches, Regex};

use crate::error::{Result, TokenizeError};

/// Default delimiter: single punctuation marks, the `--` dash and whitespace.
///
/// A lone `-` is not a delimiter, so `well-known` stays one token. The
/// information separators `\x1C-\x1F` count as whitespace.
pub const DEFAULT_DELIMITER: &str = r#"([,.?_!"()']|--|[\s\x1C-\x1F])"#;

/// Whitespace for trimming: Unicode `White_Space` plus `U+001C..=U+001F`.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Compiled delimiter pattern.
#[derive(Clone, Debug)]
pub struct Splitter {
    regex: Regex,
}

impl Splitter {
    /// Compile `pattern`, which must contain at least one capturing group.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| TokenizeError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        // group 0 is the whole match and always present
        if regex.captures_len() < 2 {
            return Err(TokenizeError::MissingCaptureGroup {
                pattern: pattern.to_string(),
            });
        }
        Ok(Self { regex })
    }

    /// Splitter for [`DEFAULT_DELIMITER`].
    pub fn default_delimiter() -> Result<Self> {
        Self::new(DEFAULT_DELIMITER)
    }

    /// Source pattern.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Lazily split `text` into trimmed, non-empty slices of `text`.
    pub fn split_iter<'r, 't>(&'r self, text: &'t str) -> SplitIter<'r, 't> {
        SplitIter {
            text,
            captures: self.regex.captures_iter(text),
            pending: VecDeque::new(),
            last: 0,
            finished: false,
        }
    }

    /// Split `text` into owned tokens, in order of appearance.
    pub fn split(&self, text: &str) -> Vec<String> {
        self.split_iter(text).map(str::to_string).collect()
    }
}

impl FromStr for Splitter {
    type Err = TokenizeError;

    fn from_str(pattern: &str) -> Result<Self> {
        Self::new(pattern)
    }
}

/// Iterator returned by [`Splitter::split_iter`].
#[derive(Debug)]
pub struct SplitIter<'r, 't> {
    text: &'t str,
    captures: CaptureMatches<'r, 't>,
    pending: VecDeque<&'t str>,
    last: usize,
    finished: bool,
}

impl<'r, 't> Iterator for SplitIter<'r, 't> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        loop {
            if let Some(piece) = self.pending.pop_front() {
                let piece = piece.trim_matches(is_space);
                if !piece.is_empty() {
                    return Some(piece);
                }
                continue;
            }
            if self.finished {
                return None;
            }
            match self.captures.next() {
                Some(caps) => {
                    let Some(whole) = caps.get(0) else {
                        continue;
                    };
                    self.pending
                        .push_back(self.text.get(self.last..whole.start()).unwrap_or(""));
                    // non-participating groups contribute nothing
                    self.pending
                        .extend(caps.iter().skip(1).flatten().map(|m| m.as_str()));
                    self.last = whole.end();
                }
                None => {
                    self.pending.push_back(self.text.get(self.last..).unwrap_or(""));
                    self.finished = true;
                }
            }
        }
    }
}
