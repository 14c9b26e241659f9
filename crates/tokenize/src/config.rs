//! Codec configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::splitter::{Splitter, DEFAULT_DELIMITER};

/// Construction options for a [`Codec`](crate::Codec).
///
/// Meant to be embedded in a caller's own settings file; absent fields take
/// their defaults.
///
/// ```
/// use tokenize::{Codec, CodecConfig};
///
/// let cfg: CodecConfig = serde_json::from_str(r#"{ "delimiter": "(;)|\\s" }"#)?;
/// let codec = Codec::from_config("red;green blue", &cfg)?;
/// assert_eq!(codec.vocabulary().tokens(), [";", "blue", "green", "red"]);
/// assert_eq!(codec.decode(&codec.encode("blue;red")?)?, "blue ; red");
///
/// let defaults: CodecConfig = serde_json::from_str("{}")?;
/// assert_eq!(defaults, CodecConfig::default());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// delimiter regex; must contain at least one capturing group
    pub delimiter: String,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl CodecConfig {
    /// Config with a custom delimiter pattern.
    pub fn with_delimiter(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    /// Compile the delimiter, surfacing pattern errors before any text is processed.
    pub fn validate(&self) -> Result<Splitter> {
        Splitter::new(&self.delimiter)
    }
}
