//! Chain to inline notation.
//!
//! Text segments are written verbatim, every other segment becomes a tagged
//! run with escaped attribute values in attribute order.

use std::fmt;

use crate::{
    escape::escape,
    models::{Segment, SegmentKind},
    parsing::{Notation, default_notation},
};

impl Notation {
    pub fn render(&self, chain: &[Segment]) -> String {
        let mut out = String::new();
        for segment in chain {
            self.write_segment(segment, &mut out);
        }
        out
    }

    pub fn render_segment(&self, segment: &Segment) -> String {
        let mut out = String::new();
        self.write_segment(segment, &mut out);
        out
    }

    fn write_segment(&self, segment: &Segment, out: &mut String) {
        if segment.kind == SegmentKind::Text {
            out.push_str(segment.get(Segment::TEXT_KEY).unwrap_or_default());
            return;
        }

        out.push_str(self.opener());
        out.push_str(segment.kind.as_str());
        for (key, value) in &segment.data {
            out.push(Notation::SEPARATOR as char);
            out.push_str(key);
            out.push(Notation::ASSIGN as char);
            out.push_str(&escape(value));
        }
        out.push(Notation::CLOSE as char);
    }
}

/// Renders `chain` with the default `[CQ:` notation.
pub fn encode_chain(chain: &[Segment]) -> String {
    default_notation().render(chain)
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&default_notation().render_segment(self))
    }
}
