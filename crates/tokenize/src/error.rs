//! Error type shared by the splitter, the vocabulary and the codec.

use crate::vocabulary::TokenId;

/// Errors raised while building or using a [`Codec`](crate::Codec).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokenizeError {
    /// The delimiter pattern is not a valid regular expression.
    #[error("invalid delimiter pattern `{pattern}`: {reason}")]
    InvalidPattern {
        /// pattern as supplied by the caller
        pattern: String,
        /// compiler message from `regex`
        reason: String,
    },

    /// The delimiter pattern compiles but captures nothing, so delimiters would be dropped.
    #[error("delimiter pattern `{pattern}` has no capturing group")]
    MissingCaptureGroup {
        /// pattern as supplied by the caller
        pattern: String,
    },

    /// `encode` met a token that was not seen in the training text.
    #[error("unknown token `{token}`")]
    UnknownToken {
        /// the offending token, already trimmed
        token: String,
    },

    /// `decode` met an id outside `0..vocab_size`.
    #[error("unknown token id {id} (vocabulary size {vocab_size})")]
    UnknownId {
        /// the offending id
        id: TokenId,
        /// number of entries in the vocabulary
        vocab_size: usize,
    },
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, TokenizeError>;
