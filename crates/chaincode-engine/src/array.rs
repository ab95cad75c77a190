//! The array message form: `[{"type": "at", "data": {"qq": "1"}}, ...]`.
//!
//! Transports report some attributes as JSON numbers or booleans; those are
//! stringified so both forms decode to the same chain.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::ChainError,
    models::{Attributes, Chain, Segment, SegmentKind},
};

#[derive(Deserialize)]
struct RawSegment {
    #[serde(rename = "type")]
    kind: SegmentKind,
    #[serde(default)]
    data: Option<IndexMap<String, Value>>,
}

impl TryFrom<RawSegment> for Segment {
    type Error = ChainError;

    fn try_from(raw: RawSegment) -> Result<Self, Self::Error> {
        let mut data = Attributes::new();
        for (key, value) in raw.data.unwrap_or_default() {
            let value = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(ChainError::UnsupportedValue { key });
                }
            };
            data.insert(key, value);
        }
        Ok(Segment {
            kind: raw.kind,
            data,
        })
    }
}

/// Decodes an array-form message.
pub fn decode_array(json: &str) -> Result<Chain, ChainError> {
    let raw: Vec<RawSegment> = serde_json::from_str(json)?;
    raw.into_iter().map(Segment::try_from).collect()
}

/// Decodes an array-form message that has already been parsed as JSON.
pub fn decode_value(value: Value) -> Result<Chain, ChainError> {
    let raw: Vec<RawSegment> = serde_json::from_value(value)?;
    raw.into_iter().map(Segment::try_from).collect()
}

pub fn encode_array(chain: &[Segment]) -> Result<String, ChainError> {
    Ok(serde_json::to_string(chain)?)
}
