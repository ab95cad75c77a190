//! Reserved-character codec for attribute values.
//!
//! Inline notation reserves `,`, `[`, `]` and `&`. Inside attribute values
//! they travel as the HTML-style entities below; plain text runs are never
//! escaped.

use std::borrow::Cow;

pub const AMP: &str = "&amp;";
pub const COMMA: &str = "&#44;";
pub const OPEN_BRACKET: &str = "&#91;";
pub const CLOSE_BRACKET: &str = "&#93;";

/// Entities in matching order. The ampersand entity comes last.
const ENTITIES: [(&str, char); 4] = [
    (COMMA, ','),
    (OPEN_BRACKET, '['),
    (CLOSE_BRACKET, ']'),
    (AMP, '&'),
];

/// Replaces the four entities with their literal characters.
///
/// Single left-to-right pass: text produced by a replacement is never
/// scanned again, so `&amp;#44;` decodes to `&#44;` and not to `,`.
/// Unknown entities and bare reserved characters are copied through.
pub fn unescape(s: &str) -> Cow<'_, str> {
    if !s.contains('&') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(at) = rest.find('&') {
        out.push_str(&rest[..at]);
        rest = &rest[at..];
        match ENTITIES
            .iter()
            .find(|(entity, _)| rest.starts_with(entity))
        {
            Some((entity, ch)) => {
                out.push(*ch);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Replaces reserved characters with their entities.
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', ',', '[', ']']) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str(AMP),
            ',' => out.push_str(COMMA),
            '[' => out.push_str(OPEN_BRACKET),
            ']' => out.push_str(CLOSE_BRACKET),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}
