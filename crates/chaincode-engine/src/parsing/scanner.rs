//! Loose split of an inline message into plain and tag-like runs.
//!
//! A tag-like run is `[PREFIX:` followed by at least one byte that is not
//! `]`, closed by the first `]`. Each such run contributes a cut at its
//! start and one after its closing bracket; the message is partitioned at
//! those cuts and empty pieces are dropped. Whether a run is really tagged
//! is decided later by the grammar.

use super::{Notation, cursor::Cursor};

pub fn split_runs<'a>(s: &'a str, opener: &str) -> Vec<&'a str> {
    let mut cur = Cursor::new(s);
    let mut cuts = vec![0];

    // First `]` at or after the last lookup. Candidate bodies start at
    // increasing offsets, so the cached index only ever moves forward.
    let mut next_close: Option<usize> = None;
    let mut no_close_left = false;

    while !cur.eof() {
        if cur.peek() == Some(Notation::OPEN) && cur.starts_with(opener.as_bytes()) {
            let body_start = cur.i + opener.len();
            if !no_close_left && next_close.is_none_or(|close| close < body_start) {
                next_close = cur.find_from(body_start, Notation::CLOSE);
                no_close_left = next_close.is_none();
            }
            if let Some(close) = next_close
                && close > body_start
            {
                cuts.push(cur.i);
                cuts.push(close + 1);
            }
        }
        cur.bump();
    }

    cuts.push(s.len());
    cuts.sort_unstable();
    cuts.dedup();

    cuts.windows(2)
        .map(|w| &s[w[0]..w[1]])
        .filter(|run| !run.is_empty())
        .collect()
}
