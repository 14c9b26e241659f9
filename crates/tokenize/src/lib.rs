#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![deny(missing_docs, unused_must_use)]

//! Word/punctuation tokenizer with a deterministic integer vocabulary.
//!
//! A [`Codec`] is built once from a training text: the text is split on a
//! delimiter regex whose captured delimiters become tokens, and the distinct
//! tokens are numbered in codepoint order. The codec then encodes text to ids
//! and decodes ids back to text.
//!
//! Contract: identical training text and delimiter -> identical vocabulary.
//! Text containing a token not seen during training cannot be encoded.
//!
//! ```
//! use tokenize::Codec;
//!
//! let codec = Codec::new("Hello, world. Is this-- a test?")?;
//! let ids = codec.encode("Hello, world.")?;
//! assert_eq!(ids, vec![4, 0, 9, 2]);
//! assert_eq!(codec.decode(&ids)?, "Hello, world.");
//! # Ok::<(), tokenize::TokenizeError>(())
//! ```
//!
//! Layout:
//! - `splitter.rs` — delimiter regex, split that keeps captured delimiters
//! - `vocabulary.rs` — sorted token <-> id bijection
//! - `detokenize.rs` — space join + punctuation rejoin
//! - `codec.rs` — `Codec` (encode / decode)
//! - `config.rs` — serde-friendly `CodecConfig`

/// Codec composed of splitter, vocabulary and detokenizer.
pub mod codec;
/// Codec construction options.
pub mod config;
/// Token joining and punctuation re-attachment.
pub mod detokenize;
/// Error type and result alias.
pub mod error;
/// Delimiter-regex splitter.
pub mod splitter;
/// Token <-> id bijection.
pub mod vocabulary;

pub use codec::Codec;
pub use config::CodecConfig;
pub use detokenize::Detokenizer;
pub use error::{Result, TokenizeError};
pub use splitter::{Splitter, DEFAULT_DELIMITER};
pub use vocabulary::{TokenId, Vocabulary};

/// Split `text` on `delimiter` the same way a [`Codec`] does.
///
/// Compiles the pattern on every call; hold a [`Splitter`] to reuse it.
pub fn tokenize(text: &str, delimiter: &str) -> Result<Vec<String>> {
    Ok(Splitter::new(delimiter)?.split(text))
}

/// Build the vocabulary a [`Codec`] would build from these tokens.
pub fn build_vocabulary<I, S>(tokens: I) -> Vocabulary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Vocabulary::from_tokens(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standalone_helpers_match_codec() {
        let text = "Hello, world. Is this-- a test?";
        let tokens = tokenize(text, DEFAULT_DELIMITER).unwrap();
        let codec = Codec::new(text).unwrap();
        assert_eq!(&build_vocabulary(&tokens), codec.vocabulary());
    }

    #[test]
    fn tokenize_is_deterministic() {
        let text = "\"Quick!\" she said (twice) -- then_left.";
        assert_eq!(
            tokenize(text, DEFAULT_DELIMITER).unwrap(),
            tokenize(text, DEFAULT_DELIMITER).unwrap()
        );
    }

    #[test]
    fn tokenize_rejects_bad_pattern() {
        assert!(tokenize("a b", "(").is_err());
        assert!(tokenize("a b", " ").is_err());
    }

    #[test]
    fn build_vocabulary_is_a_bijection_onto_range() {
        let vocab = build_vocabulary(["b", "a", "c", "a", "--", "?"]);
        let mut ids: Vec<TokenId> = vocab.iter().map(|(_, id)| id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..vocab.len()).collect::<Vec<_>>());
        for (token, id) in vocab.iter() {
            assert_eq!(vocab.id_of(token), Some(id));
            assert_eq!(vocab.token_of(id), Some(token));
        }
    }
}
