//! # chaincode-engine
//!
//! Codec and query layer for inline CQ-code chat messages such as
//! `[CQ:at,qq=12345] hello [CQ:image,url=http://x/y.png]`.
//!
//! - [`parsing`]: inline message → [`Chain`]
//! - [`encode`]: [`Chain`] → inline message
//! - [`escape`]: attribute value codec
//! - [`query`]: mentions and media URLs
//! - [`array`]: the JSON array message form
//! - [`forward`], [`avatar`]: small helpers for outgoing messages

pub mod array;
pub mod avatar;
pub mod encode;
pub mod error;
pub mod escape;
pub mod forward;
pub mod models;
pub mod parsing;
pub mod query;

// Re-export key types for easier usage
pub use array::{decode_array, decode_value, encode_array};
pub use avatar::{AvatarSize, group_avatar_url, user_avatar_url};
pub use encode::encode_chain;
pub use error::ChainError;
pub use escape::{escape, unescape};
pub use forward::forward_nodes;
pub use models::{Attributes, Chain, Segment, SegmentKind};
pub use parsing::{
    Notation, decode_code, default_notation, parse_chain, parse_chain_or_default,
};
pub use query::{has_mention_all, image_urls, mentioned_ids, urls_of, video_urls};
