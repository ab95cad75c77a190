pub mod kind;
pub mod segment;

pub use kind::SegmentKind;
pub use segment::{Attributes, Chain, Segment};
