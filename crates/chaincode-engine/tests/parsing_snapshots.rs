use chaincode_engine::{Notation, parse_chain};
use insta::assert_yaml_snapshot;

#[test]
fn mention_text_and_image() {
    let chain = parse_chain("[CQ:at,qq=12345]hi[CQ:image,url=http://x/y.png]").unwrap();
    assert_yaml_snapshot!(chain, @r#"
    - type: at
      data:
        qq: "12345"
    - type: text
      data:
        text: hi
    - type: image
      data:
        url: "http://x/y.png"
    "#);
}

#[test]
fn malformed_tag_kept_verbatim() {
    let chain = Notation::with_prefix("CODE")
        .unwrap()
        .parse("[CODE:bad=]")
        .unwrap();
    assert_yaml_snapshot!(chain, @r#"
    - type: text
      data:
        text: "[CODE:bad=]"
    "#);
}

#[test]
fn unknown_kind_preserved() {
    let chain = parse_chain("[CQ:poke,qq=1,id=2]").unwrap();
    assert_yaml_snapshot!(chain, @r#"
    - type: poke
      data:
        qq: "1"
        id: "2"
    "#);
}
