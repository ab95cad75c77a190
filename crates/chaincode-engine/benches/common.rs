/// A group-chat style message with `n` mentions, images and text runs.
pub fn generate_inline_message(n: usize) -> String {
    let mut out = String::new();
    for i in 0..n {
        out.push_str(&format!("[CQ:at,qq={}] ", 10_000 + i));
        out.push_str("check this out, it's great ");
        out.push_str(&format!(
            "[CQ:image,file={i}.png,url=https://example.com/img?id={i}&amp;s=640]"
        ));
        out.push_str("[CQ:broken ");
    }
    out
}
