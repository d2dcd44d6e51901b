// src/citations.rs
//! Rewrites inline `[n]` evidence markers into superscript anchor links.

use once_cell::sync::OnceCell;
use regex::Regex;

fn citation_re() -> &'static Regex {
    static RE: OnceCell<Regex> = OnceCell::new();
    RE.get_or_init(|| Regex::new(r"\[(\d+)\]").expect("citation regex"))
}

/// Anchor id for the `n`-th (1-based) evidence entry of a section.
pub fn evidence_anchor(section: &str, n: usize) -> String {
    format!("ev_{section}_{n}")
}

/// Replace every `[n]` in already-sanitized `html` with a link to the evidence
/// anchor of `section`. Indices are not checked against the evidence list.
pub fn format_citations(html: &str, section: &str) -> String {
    citation_re()
        .replace_all(html, |caps: &regex::Captures<'_>| {
            let n = &caps[1];
            format!(r##"<sup class="cite"><a href="#ev_{section}_{n}">[{n}]</a></sup>"##)
        })
        .into_owned()
}
