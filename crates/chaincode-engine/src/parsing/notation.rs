use std::sync::LazyLock;

use crate::error::ChainError;

/// A concrete inline notation: the tag prefix plus the mention-all sentinel.
///
/// All delimiter knowledge lives here; the scanner and grammar ask the
/// notation instead of hardcoding `[CQ:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notation {
    prefix: String,
    mention_all_target: String,
    opener: String,
    mention_all_marker: String,
}

impl Notation {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const SEPARATOR: u8 = b',';
    pub const ASSIGN: u8 = b'=';
    pub const PREFIX_END: u8 = b':';

    pub const DEFAULT_PREFIX: &'static str = "CQ";
    pub const DEFAULT_MENTION_ALL_TARGET: &'static str = "all";

    /// Builds a notation, rejecting a prefix or mention-all target that the
    /// tag grammar could not round-trip.
    ///
    /// The prefix must be non-empty and free of `[`, `]`, `,`, `:` and `=`.
    /// The target follows the value grammar: no `[`, `]` or `,`.
    pub fn new(
        prefix: impl Into<String>,
        mention_all_target: impl Into<String>,
    ) -> Result<Self, ChainError> {
        let prefix = prefix.into();
        let mention_all_target = mention_all_target.into();

        if prefix.is_empty() || prefix.contains(['[', ']', ',', ':', '=']) {
            return Err(ChainError::InvalidPrefix { prefix });
        }
        if mention_all_target.contains(['[', ']', ',']) {
            return Err(ChainError::InvalidMentionAllTarget {
                target: mention_all_target,
            });
        }
        Ok(Self::new_unchecked(prefix, mention_all_target))
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Result<Self, ChainError> {
        Self::new(prefix, Self::DEFAULT_MENTION_ALL_TARGET)
    }

    fn new_unchecked(prefix: String, mention_all_target: String) -> Self {
        let opener = format!("[{prefix}:");
        let mention_all_marker = format!("{opener}at,qq={mention_all_target}]");
        Self {
            prefix,
            mention_all_target,
            opener,
            mention_all_marker,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The `qq` value of an `at` segment that addresses everyone.
    pub fn mention_all_target(&self) -> &str {
        &self.mention_all_target
    }

    /// `[` + prefix + `:`, the start of every tagged run.
    pub fn opener(&self) -> &str {
        &self.opener
    }

    /// The literal tagged run that mentions everyone, e.g. `[CQ:at,qq=all]`.
    pub fn mention_all_marker(&self) -> &str {
        &self.mention_all_marker
    }
}

impl Default for Notation {
    fn default() -> Self {
        Self::new_unchecked(
            Self::DEFAULT_PREFIX.to_string(),
            Self::DEFAULT_MENTION_ALL_TARGET.to_string(),
        )
    }
}

/// The shared `[CQ:` notation used by the free functions of this crate.
pub fn default_notation() -> &'static Notation {
    static DEFAULT: LazyLock<Notation> = LazyLock::new(Notation::default);
    &DEFAULT
}
