// src/sanitize.rs
//! HTML escaping for free text coming out of the feed.

use std::borrow::Cow;

/// Escape `&`, `<`, `>` so the text can be embedded as HTML content.
/// Absent input maps to an empty string.
pub fn esc(s: Option<&str>) -> String {
    match s {
        Some(s) => html_escape::encode_text(s).into_owned(),
        None => String::new(),
    }
}

/// Escape a URL for use inside a double-quoted `href`.
pub fn attr(s: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}

/// The URL itself when it is an absolute `http`/`https` link, else `None`.
/// Anything else (`javascript:`, `data:`, relative paths) must not become an `href`.
pub fn safe_href(url: &str) -> Option<&str> {
    let url = url.trim();
    let scheme = url.split_once(':').map(|(s, _)| s)?;
    (scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")).then_some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        let out = esc(Some("<b>Tom & Jerry</b>"));
        assert_eq!(out, "&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;");
        assert!(!out.contains('<') && !out.contains('>'));
    }

    #[test]
    fn plain_text_is_unchanged() {
        let s = "반려동물 구독 박스 - 2025 (KR) \"quoted\" 'single'";
        assert_eq!(esc(Some(s)), s);
    }

    #[test]
    fn absent_is_empty() {
        assert_eq!(esc(None), "");
        assert_eq!(esc(Some("")), "");
    }

    #[test]
    fn every_ampersand_is_an_entity() {
        let out = esc(Some("a&&b &amp; <<>>"));
        // every '&' in the output must start an entity we produced
        for (i, _) in out.match_indices('&') {
            let rest = &out[i..];
            assert!(
                rest.starts_with("&amp;") || rest.starts_with("&lt;") || rest.starts_with("&gt;"),
                "unescaped ampersand at {i} in {out}"
            );
        }
    }

    #[test]
    fn attr_escapes_quotes() {
        assert_eq!(attr(r#"https://x.test/?a="b"&c"#), "https://x.test/?a=&quot;b&quot;&amp;c");
    }

    #[test]
    fn only_web_links_are_hrefs() {
        assert_eq!(safe_href("https://x.test/a"), Some("https://x.test/a"));
        assert_eq!(safe_href(" HTTP://x.test "), Some("HTTP://x.test"));
        assert_eq!(safe_href("javascript:alert(1)"), None);
        assert_eq!(safe_href("JavaScript:alert(1)"), None);
        assert_eq!(safe_href("data:text/html,<b>x</b>"), None);
        assert_eq!(safe_href("/relative"), None);
        assert_eq!(safe_href(""), None);
    }
}
