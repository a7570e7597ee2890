/// Render a token for logs: a short prefix and the length, never the full value.
pub fn mask_token(token: &str) -> String {
    let len = token.chars().count();
    if len <= 8 {
        return "*".repeat(len);
    }
    let prefix: String = token.chars().take(4).collect();
    format!("{prefix}***({len} chars)")
}
