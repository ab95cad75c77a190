//! Strict grammar for a tagged run.
//!
//! ```text
//! run   := "[" PREFIX ":" kind ("," key "=" value)* "]"
//! kind  := [^,\[\]=]+
//! key   := [^,=\[\]]+
//! value := [^,\[\]]*
//! ```
//!
//! Runs from the loose split that fail this check are kept as plain text.

use super::{Notation, cursor::Cursor};

fn is_kind_byte(b: u8) -> bool {
    !matches!(b, b',' | b'[' | b']' | b'=')
}

fn is_key_byte(b: u8) -> bool {
    !matches!(b, b',' | b'=' | b'[' | b']')
}

fn is_value_byte(b: u8) -> bool {
    !matches!(b, b',' | b'[' | b']')
}

/// Returns true when the whole of `run` is one well-formed tagged run.
pub fn is_tagged_run(run: &str, opener: &str) -> bool {
    let mut cur = Cursor::new(run);
    if !cur.starts_with(opener.as_bytes()) {
        return false;
    }
    cur.bump_n(opener.len());

    if cur.eat_while(is_kind_byte) == 0 {
        return false;
    }

    loop {
        match cur.bump() {
            Some(Notation::CLOSE) => return cur.eof(),
            Some(Notation::SEPARATOR) => {
                if cur.eat_while(is_key_byte) == 0 {
                    return false;
                }
                if cur.bump() != Some(Notation::ASSIGN) {
                    return false;
                }
                cur.eat_while(is_value_byte);
            }
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("[CQ:face]")]
    #[case("[CQ:at,qq=12345]")]
    #[case("[CQ:image,file=a.png,url=http://x/y.png?a=1&amp;b=2]")]
    #[case("[CQ:share,title=]")]
    #[case("[CQ:json,data=a=b=c]")]
    #[case("[CQ:poke,type=1,id=2,type=3]")]
    #[case("[CQ:at,qq=&#44;&#91;&#93;]")]
    fn accepts_well_formed_runs(#[case] run: &str) {
        assert!(is_tagged_run(run, "[CQ:"), "{run} should be accepted");
    }

    #[rstest]
    #[case("plain")]
    #[case("[CQ:]")]
    #[case("[CQ:bad=]")]
    #[case("[CQ:at,qq]")]
    #[case("[CQ:at,=1]")]
    #[case("[CQ:at,,qq=1]")]
    #[case("[CQ:at,qq=1,]")]
    #[case("[CQ:a[b]")]
    #[case("[CQ:a")]
    #[case("[CQ:at,qq=1]trailing")]
    #[case("[XQ:at,qq=1]")]
    fn rejects_malformed_runs(#[case] run: &str) {
        assert!(!is_tagged_run(run, "[CQ:"), "{run} should be rejected");
    }

    #[test]
    fn custom_opener() {
        assert!(is_tagged_run("[CODE:at,qq=1]", "[CODE:"));
        assert!(!is_tagged_run("[CQ:at,qq=1]", "[CODE:"));
    }
}
