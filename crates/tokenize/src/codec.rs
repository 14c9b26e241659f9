//! Text <-> id codec over a vocabulary fixed at construction.
//!
//! A `Codec` only exists once its vocabulary has been built, and nothing hands
//! out mutable access to it afterwards. `&Codec` can be shared across threads.

use tracing::{debug, trace};

use crate::config::CodecConfig;
use crate::detokenize::Detokenizer;
use crate::error::{Result, TokenizeError};
use crate::splitter::{Splitter, DEFAULT_DELIMITER};
use crate::vocabulary::{TokenId, Vocabulary};

/// Encoder/decoder built from a training text.
#[derive(Clone, Debug)]
pub struct Codec {
    splitter: Splitter,
    vocabulary: Vocabulary,
    detokenizer: Detokenizer,
}

impl Codec {
    /// Build a codec from `training_text` using [`DEFAULT_DELIMITER`].
    pub fn new(training_text: &str) -> Result<Self> {
        Self::with_delimiter(training_text, DEFAULT_DELIMITER)
    }

    /// Build a codec from `training_text` splitting on `delimiter`.
    pub fn with_delimiter(training_text: &str, delimiter: &str) -> Result<Self> {
        Self::with_splitter(training_text, Splitter::new(delimiter)?)
    }

    /// Build a codec from `training_text` with options from `config`.
    pub fn from_config(training_text: &str, config: &CodecConfig) -> Result<Self> {
        Self::with_splitter(training_text, config.validate()?)
    }

    /// Build a codec from `training_text` with an already compiled splitter.
    pub fn with_splitter(training_text: &str, splitter: Splitter) -> Result<Self> {
        let detokenizer = Detokenizer::new();
        let tokens: Vec<&str> = splitter.split_iter(training_text).collect();
        let vocabulary = Vocabulary::from_tokens(&tokens);
        debug!(
            vocab_size = vocabulary.len(),
            training_tokens = tokens.len(),
            delimiter = splitter.pattern(),
            "codec vocabulary built"
        );
        Ok(Self {
            splitter,
            vocabulary,
            detokenizer,
        })
    }

    /// The fixed vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Number of distinct tokens known to the codec.
    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Delimiter pattern in use.
    pub fn delimiter(&self) -> &str {
        self.splitter.pattern()
    }

    /// Convert `text` to token ids.
    ///
    /// Fails on the first token that was not in the training text; there is
    /// no out-of-vocabulary id.
    pub fn encode(&self, text: &str) -> Result<Vec<TokenId>> {
        let ids = self
            .splitter
            .split_iter(text)
            .map(|token| {
                self.vocabulary.id_of(token).ok_or_else(|| {
                    debug!(token, "encode rejected unknown token");
                    TokenizeError::UnknownToken {
                        token: token.to_string(),
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;
        trace!(text_len = text.len(), ids = ids.len(), "encoded");
        Ok(ids)
    }

    /// Convert token ids back to text.
    ///
    /// Tokens are space-joined and punctuation is re-attached, so original
    /// spacing is not restored.
    pub fn decode(&self, ids: &[TokenId]) -> Result<String> {
        let tokens = ids
            .iter()
            .map(|&id| {
                self.vocabulary.token_of(id).ok_or_else(|| {
                    debug!(id, vocab_size = self.vocab_size(), "decode rejected unknown id");
                    TokenizeError::UnknownId {
                        id,
                        vocab_size: self.vocab_size(),
                    }
                })
            })
            .collect::<Result<Vec<&str>>>()?;
        let text = self.detokenizer.detokenize(&tokens);
        trace!(ids = ids.len(), text_len = text.len(), "decoded");
        Ok(text)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn words() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[A-Za-z0-9]{1,8}", 1..24)
    }

    proptest! {
        #[test]
        fn construction_is_idempotent(text in "\\PC{0,64}") {
            let a = Codec::new(&text).unwrap();
            let b = Codec::new(&text).unwrap();
            prop_assert_eq!(a.vocabulary(), b.vocabulary());
        }

        #[test]
        fn training_text_always_encodes(text in "\\PC{0,64}") {
            let codec = Codec::new(&text).unwrap();
            let ids = codec.encode(&text).unwrap();
            prop_assert!(ids.iter().all(|&id| id < codec.vocab_size()));
        }

        #[test]
        fn word_text_round_trips(words in words()) {
            let text = words.join(" ");
            let codec = Codec::new(&text).unwrap();
            let ids = codec.encode(&text).unwrap();
            prop_assert_eq!(codec.decode(&ids).unwrap(), text);
        }

        #[test]
        fn each_word_decodes_to_itself(words in words()) {
            let codec = Codec::new(&words.join(" ")).unwrap();
            for word in &words {
                let ids = codec.encode(word).unwrap();
                prop_assert_eq!(&codec.decode(&ids).unwrap(), word);
            }
        }

        #[test]
        fn text_with_an_unseen_word_is_rejected(
            training in prop::collection::vec("[a-z]{1,8}", 1..24),
            unseen in "[A-Z]{1,8}",
            at in 0usize..24,
        ) {
            let codec = Codec::new(&training.join(" ")).unwrap();
            let mut words = training.clone();
            words.insert(at.min(words.len()), unseen.clone());
            prop_assert_eq!(
                codec.encode(&words.join(" ")),
                Err(TokenizeError::UnknownToken { token: unseen })
            );
        }

        #[test]
        fn ids_past_the_end_are_rejected(words in words(), extra in 0usize..16) {
            let codec = Codec::new(&words.join(" ")).unwrap();
            let id = codec.vocab_size() + extra;
            let is_unknown_id = matches!(codec.decode(&[id]), Err(TokenizeError::UnknownId { .. }));
            prop_assert!(is_unknown_id);
        }
    }
}
