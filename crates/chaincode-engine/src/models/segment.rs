use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::SegmentKind;

/// Attribute map of a segment. Keeps insertion order for re-emission.
pub type Attributes = IndexMap<String, String>;

/// An ordered message chain.
pub type Chain = Vec<Segment>;

/// One typed unit of a message chain.
///
/// Attribute values are always stored unescaped; escaping only happens when a
/// chain is rendered back to inline notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(rename = "type")]
    pub kind: SegmentKind,
    #[serde(default)]
    pub data: Attributes,
}

impl Segment {
    pub const TEXT_KEY: &'static str = "text";

    pub fn new(kind: impl Into<SegmentKind>) -> Self {
        Self {
            kind: kind.into(),
            data: Attributes::new(),
        }
    }

    /// A `text` segment holding `content` as its only attribute.
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(SegmentKind::Text).with(Self::TEXT_KEY, content)
    }

    pub fn at(target: impl Into<String>) -> Self {
        Self::new(SegmentKind::At).with("qq", target)
    }

    pub fn image(url: impl Into<String>) -> Self {
        Self::new(SegmentKind::Image).with("url", url)
    }

    pub fn video(url: impl Into<String>) -> Self {
        Self::new(SegmentKind::Video).with("url", url)
    }

    /// Builder form of [`Segment::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets an attribute. An existing key keeps its position and gets the new
    /// value; the previous value is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.data.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    pub fn is(&self, kind: &SegmentKind) -> bool {
        &self.kind == kind
    }

    /// The literal content of a `text` segment.
    pub fn as_text(&self) -> Option<&str> {
        match self.kind {
            SegmentKind::Text => self.get(Self::TEXT_KEY),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_segment_has_single_text_attribute() {
        let seg = Segment::text("hello");
        assert_eq!(seg.kind, SegmentKind::Text);
        assert_eq!(seg.data.len(), 1);
        assert_eq!(seg.as_text(), Some("hello"));
    }

    #[test]
    fn duplicate_insert_overwrites_in_place() {
        let mut seg = Segment::new("share").with("url", "a").with("title", "t");
        let previous = seg.insert("url", "b");

        assert_eq!(previous.as_deref(), Some("a"));
        let keys: Vec<_> = seg.data.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["url", "title"]);
        assert_eq!(seg.get("url"), Some("b"));
    }

    #[test]
    fn as_text_is_none_for_other_kinds() {
        assert_eq!(Segment::image("http://x/y.png").as_text(), None);
    }

    #[test]
    fn serializes_in_array_shape() {
        let json = serde_json::to_string(&Segment::at("12345")).unwrap();
        assert_eq!(json, r#"{"type":"at","data":{"qq":"12345"}}"#);
    }

    #[test]
    fn deserializes_unknown_kind() {
        let seg: Segment = serde_json::from_str(r#"{"type":"poke","data":{"id":"1"}}"#).unwrap();
        assert_eq!(seg.kind, SegmentKind::Other("poke".to_string()));
        assert_eq!(seg.get("id"), Some("1"));
    }

    #[test]
    fn missing_data_defaults_to_empty() {
        let seg: Segment = serde_json::from_str(r#"{"type":"shake"}"#).unwrap();
        assert!(seg.data.is_empty());
    }
}
