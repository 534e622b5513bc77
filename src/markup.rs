//! Escaping for HTML and XML bundles

/// Escape `&`, `<` and `>` so a translation can be embedded as markup text.
///
/// `&` is replaced first, so existing entities are escaped once more rather
/// than preserved: `&amp;` becomes `&amp;amp;`.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Reverse [`escape`]. Only the three entities `escape` produces are
/// recognized; everything else is left as it is.
pub fn unescape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(index) = rest.find('&') {
        result.push_str(&rest[..index]);
        rest = &rest[index..];
        let (replacement, length) = if rest.starts_with("&amp;") {
            ('&', 5)
        } else if rest.starts_with("&lt;") {
            ('<', 4)
        } else if rest.starts_with("&gt;") {
            ('>', 4)
        } else {
            ('&', 1)
        };
        result.push(replacement);
        rest = &rest[length..];
    }
    result.push_str(rest);
    result
}
