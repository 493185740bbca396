// src/core/sanitize.rs

/// Decode the small set of entities the portal actually emits.
/// `&amp;` goes last so double-escaped text decodes one level only.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Collapse whitespace runs to single spaces and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entities_decoded() {
        assert_eq!(normalize_entities("a&nbsp;b &amp; c"), "a b & c");
        assert_eq!(normalize_entities("&quot;x&quot;"), "\"x\"");
        assert_eq!(normalize_entities("&amp;nbsp;"), "&nbsp;");
    }

    #[test]
    fn whitespace_collapsed() {
        assert_eq!(normalize_ws("  Lu \n\t 8-12  "), "Lu 8-12");
        assert_eq!(normalize_ws("   "), "");
    }
}
