use std::num::ParseIntError;

/// Errors produced while decoding or querying a message chain.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    /// A tagged run could not be split into kind and `key=value` fields.
    #[error("Failed to decode {message:?}: {reason}")]
    Decode { message: String, reason: String },

    /// A mention target that should be a numeric account id is not.
    #[error("Invalid mention target {value:?}: {source}")]
    InvalidMention {
        value: String,
        source: ParseIntError,
    },

    #[error("Invalid tag prefix {prefix:?}: must be non-empty and free of `[`, `]`, `,`, `:` and `=`")]
    InvalidPrefix { prefix: String },

    #[error("Invalid mention-all target {target:?}: must be free of `[`, `]` and `,`")]
    InvalidMentionAllTarget { target: String },

    #[error("Invalid array message: {0}")]
    Json(#[from] serde_json::Error),

    /// Array-form attribute values must be scalars.
    #[error("Unsupported value for attribute {key:?}: expected string, number or bool")]
    UnsupportedValue { key: String },
}

impl ChainError {
    pub(crate) fn decode(message: &str, reason: impl Into<String>) -> Self {
        Self::Decode {
            message: message.to_string(),
            reason: reason.into(),
        }
    }
}
