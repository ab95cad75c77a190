//! Derived views over a parsed chain.

use crate::{
    error::ChainError,
    models::{Segment, SegmentKind},
    parsing::{Notation, default_notation},
};

impl Notation {
    /// Substring test for the mention-all marker; the message is not parsed.
    pub fn has_mention_all(&self, raw: &str) -> bool {
        raw.contains(self.mention_all_marker())
    }

    /// Account ids of every `at` segment except the mention-all target, in
    /// chain order.
    pub fn mentioned_ids(&self, chain: &[Segment]) -> Result<Vec<i64>, ChainError> {
        chain
            .iter()
            .filter(|segment| segment.kind == SegmentKind::At)
            .map(|segment| segment.get("qq").unwrap_or_default())
            .filter(|target| *target != self.mention_all_target())
            .map(|target| {
                target
                    .parse::<i64>()
                    .map_err(|source| ChainError::InvalidMention {
                        value: target.to_string(),
                        source,
                    })
            })
            .collect()
    }
}

/// True if `raw` contains `[CQ:at,qq=all]`.
pub fn has_mention_all(raw: &str) -> bool {
    default_notation().has_mention_all(raw)
}

/// See [`Notation::mentioned_ids`]. Uses `all` as the mention-all target.
pub fn mentioned_ids(chain: &[Segment]) -> Result<Vec<i64>, ChainError> {
    default_notation().mentioned_ids(chain)
}

/// The `url` of every segment of `kind`. Segments without one are skipped.
pub fn urls_of<'a>(chain: &'a [Segment], kind: &SegmentKind) -> Vec<&'a str> {
    chain
        .iter()
        .filter(|segment| segment.is(kind))
        .filter_map(|segment| segment.get("url"))
        .collect()
}

/// The `url` of every `image` segment, in chain order.
///
/// Images without a `url` are skipped, so the result can be shorter than the
/// number of image segments.
pub fn image_urls(chain: &[Segment]) -> Vec<&str> {
    urls_of(chain, &SegmentKind::Image)
}

/// The `url` of every `video` segment, in chain order.
///
/// Videos without a `url` are skipped, so the result can be shorter than the
/// number of video segments.
pub fn video_urls(chain: &[Segment]) -> Vec<&str> {
    urls_of(chain, &SegmentKind::Video)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mentioned_ids_skip_mention_all() {
        let chain = vec![Segment::at("1"), Segment::at("all"), Segment::at("2")];
        assert_eq!(mentioned_ids(&chain).unwrap(), vec![1, 2]);
    }

    #[test]
    fn mentioned_ids_ignore_other_kinds() {
        let chain = vec![
            Segment::text("qq=3"),
            Segment::new("reply").with("qq", "4"),
            Segment::at("5"),
        ];
        assert_eq!(mentioned_ids(&chain).unwrap(), vec![5]);
    }

    #[test]
    fn non_numeric_mention_is_an_error() {
        let chain = vec![Segment::at("1"), Segment::at("bob")];
        let err = mentioned_ids(&chain).unwrap_err();
        match err {
            ChainError::InvalidMention { value, .. } => assert_eq!(value, "bob"),
            other => panic!("expected InvalidMention, got {other:?}"),
        }
    }

    #[test]
    fn missing_mention_target_is_an_error() {
        let chain = vec![Segment::new(SegmentKind::At)];
        assert!(matches!(
            mentioned_ids(&chain),
            Err(ChainError::InvalidMention { .. })
        ));
    }

    #[test]
    fn custom_mention_all_target() {
        let notation = Notation::new("CQ", "everyone").unwrap();
        let chain = vec![Segment::at("everyone"), Segment::at("7")];
        assert_eq!(notation.mentioned_ids(&chain).unwrap(), vec![7]);
        assert!(notation.has_mention_all("hey [CQ:at,qq=everyone]"));
        assert!(!notation.has_mention_all("hey [CQ:at,qq=all]"));
    }

    #[test]
    fn has_mention_all_is_a_substring_test() {
        assert!(has_mention_all("[CQ:at,qq=all] meeting now"));
        assert!(has_mention_all("[CQ:at,qq=all][CQ:at,qq"));
        assert!(!has_mention_all("[CQ:at,qq=123]"));
        assert!(!has_mention_all("at all"));
    }

    #[test]
    fn media_urls_in_order() {
        let chain = vec![
            Segment::image("http://x/1.png"),
            Segment::video("http://x/1.mp4"),
            Segment::text("between"),
            Segment::image("http://x/2.png"),
            Segment::new(SegmentKind::Image).with("file", "no-url.png"),
        ];
        assert_eq!(image_urls(&chain), vec!["http://x/1.png", "http://x/2.png"]);
        assert_eq!(video_urls(&chain), vec!["http://x/1.mp4"]);
    }

    #[test]
    fn no_matches_yield_empty() {
        let chain = vec![Segment::text("hello")];
        assert!(image_urls(&chain).is_empty());
        assert!(video_urls(&chain).is_empty());
        assert!(mentioned_ids(&chain).unwrap().is_empty());
        assert!(mentioned_ids(&[]).unwrap().is_empty());
    }
}
