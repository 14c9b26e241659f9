//! Deterministic token <-> id bijection.
//!
//! Distinct tokens are sorted by codepoint (`str`'s `Ord`) and numbered from
//! zero. The id -> token direction is always derived from the token -> id map
//! so the two can never disagree.

use std::collections::BTreeMap;

/// Integer id of a token within one [`Vocabulary`].
pub type TokenId = usize;

/// Immutable bijection between distinct tokens and `0..len()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vocabulary {
    token_to_id: BTreeMap<String, TokenId>,
    id_to_token: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary from a token sequence. Duplicates collapse to one entry.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut token_to_id: BTreeMap<String, TokenId> = BTreeMap::new();
        for token in tokens {
            let token = token.as_ref();
            if !token_to_id.contains_key(token) {
                token_to_id.insert(token.to_string(), 0);
            }
        }
        // BTreeMap iterates in ascending key order
        for (id, slot) in token_to_id.values_mut().enumerate() {
            *slot = id;
        }
        let id_to_token = invert(&token_to_id);
        Self {
            token_to_id,
            id_to_token,
        }
    }

    /// Id assigned to `token`.
    pub fn id_of(&self, token: &str) -> Option<TokenId> {
        self.token_to_id.get(token).copied()
    }

    /// Token assigned to `id`.
    pub fn token_of(&self, id: TokenId) -> Option<&str> {
        self.id_to_token.get(id).map(String::as_str)
    }

    /// Whether `token` was seen when the vocabulary was built.
    pub fn contains(&self, token: &str) -> bool {
        self.token_to_id.contains_key(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.id_to_token.len()
    }

    /// True for a vocabulary built from no tokens.
    pub fn is_empty(&self) -> bool {
        self.id_to_token.is_empty()
    }

    /// Tokens indexed by id.
    pub fn tokens(&self) -> &[String] {
        &self.id_to_token
    }

    /// `(token, id)` pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, TokenId)> + '_ {
        self.token_to_id.iter().map(|(t, &id)| (t.as_str(), id))
    }
}

// ids were assigned in key order, so key order is id order
fn invert(token_to_id: &BTreeMap<String, TokenId>) -> Vec<String> {
    token_to_id.keys().cloned().collect()
}
