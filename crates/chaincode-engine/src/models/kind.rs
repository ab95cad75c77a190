use std::fmt;

use serde::{Deserialize, Serialize};

/// The type tag of a [`Segment`](super::Segment).
///
/// Transports keep adding kinds, so anything not listed here is carried as
/// [`SegmentKind::Other`] with its original spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SegmentKind {
    Text,
    Face,
    At,
    Image,
    Record,
    Video,
    Reply,
    Forward,
    Node,
    Json,
    Xml,
    Other(String),
}

impl SegmentKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Face => "face",
            Self::At => "at",
            Self::Image => "image",
            Self::Record => "record",
            Self::Video => "video",
            Self::Reply => "reply",
            Self::Forward => "forward",
            Self::Node => "node",
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for SegmentKind {
    fn from(name: &str) -> Self {
        match name {
            "text" => Self::Text,
            "face" => Self::Face,
            "at" => Self::At,
            "image" => Self::Image,
            "record" => Self::Record,
            "video" => Self::Video,
            "reply" => Self::Reply,
            "forward" => Self::Forward,
            "node" => Self::Node,
            "json" => Self::Json,
            "xml" => Self::Xml,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for SegmentKind {
    fn from(name: String) -> Self {
        match Self::from(name.as_str()) {
            Self::Other(_) => Self::Other(name),
            known => known,
        }
    }
}

impl From<SegmentKind> for String {
    fn from(kind: SegmentKind) -> Self {
        match kind {
            SegmentKind::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
