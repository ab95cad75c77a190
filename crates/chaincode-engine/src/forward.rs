use crate::models::{Chain, Segment, SegmentKind};

/// Builds a combined-forward message: one `node` segment per entry of
/// `messages`, all attributed to the same sender.
pub fn forward_nodes<S: AsRef<str>>(uin: i64, name: &str, messages: &[S]) -> Chain {
    messages
        .iter()
        .map(|content| {
            Segment::new(SegmentKind::Node)
                .with("name", name)
                .with("uin", uin.to_string())
                .with("content", content.as_ref())
        })
        .collect()
}
