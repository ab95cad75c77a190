use crate::{
    error::ChainError,
    escape::unescape,
    models::{Chain, Segment},
};

use super::{Notation, default_notation, grammar::is_tagged_run, scanner::split_runs};

impl Notation {
    /// Converts an inline message into a chain.
    ///
    /// Tag-like runs that are not well-formed are kept as text. A failure is
    /// logged with the offending message and returned whole; no partial chain
    /// is ever produced.
    pub fn parse(&self, raw: &str) -> Result<Chain, ChainError> {
        split_runs(raw, self.opener())
            .into_iter()
            .map(|run| self.decode_run(run))
            .collect::<Result<Chain, _>>()
            .inspect_err(|err| {
                log::error!("Failed to convert inline message {raw:?} to chain: {err}");
            })
    }

    fn decode_run(&self, run: &str) -> Result<Segment, ChainError> {
        if !is_tagged_run(run, self.opener()) {
            if run.starts_with(self.opener()) {
                log::debug!("Keeping malformed tag {run:?} as text");
            }
            return Ok(Segment::text(run));
        }
        self.decode_code(&run[1..run.len() - 1])
    }

    /// Decodes the body of a tagged run, the part between the brackets:
    /// `CQ:kind,key=value,...`.
    ///
    /// Values are unescaped. A repeated key keeps its first position and its
    /// last value.
    pub fn decode_code(&self, body: &str) -> Result<Segment, ChainError> {
        let mut fields = body.split(Notation::SEPARATOR as char);
        let head = fields.next().unwrap_or_default();

        let kind = head
            .strip_prefix(self.prefix())
            .and_then(|rest| rest.strip_prefix(Notation::PREFIX_END as char))
            .ok_or_else(|| {
                ChainError::decode(body, format!("missing `{}:` prefix", self.prefix()))
            })?;
        if kind.is_empty() {
            return Err(ChainError::decode(body, "empty segment kind"));
        }

        let mut segment = Segment::new(kind);
        for field in fields {
            let (key, value) = field
                .split_once(Notation::ASSIGN as char)
                .ok_or_else(|| ChainError::decode(body, format!("field {field:?} has no `=`")))?;
            segment.insert(key, unescape(value));
        }
        Ok(segment)
    }
}

/// Parses `raw` with the default `[CQ:` notation.
pub fn parse_chain(raw: &str) -> Result<Chain, ChainError> {
    default_notation().parse(raw)
}

/// Like [`parse_chain`], but falls back to an empty chain on failure.
pub fn parse_chain_or_default(raw: &str) -> Chain {
    parse_chain(raw).unwrap_or_default()
}

/// Decodes a bare tag body such as `CQ:at,qq=1` with the default notation.
pub fn decode_code(body: &str) -> Result<Segment, ChainError> {
    default_notation().decode_code(body)
}
