//! Minimal markdown to HTML conversion for content previews.
//!
//! Covers headings, bold/italic, links and paragraph breaks only. Input is
//! trusted editor content and is not HTML-escaped.

use log::error;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

pub static HEADING_EXPR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(#{1,6})\s+(.+)$")
        .map_err(|e| error!("Regex init failed: {e}"))
        .unwrap()
});
pub static BOLD_ITALIC_EXPR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*\*(.+?)\*\*\*")
        .map_err(|e| error!("Regex init failed: {e}"))
        .unwrap()
});
pub static BOLD_EXPR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*(.+?)\*\*")
        .map_err(|e| error!("Regex init failed: {e}"))
        .unwrap()
});
pub static ITALIC_EXPR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*(.+?)\*")
        .map_err(|e| error!("Regex init failed: {e}"))
        .unwrap()
});
pub static LINK_EXPR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\]]+)\]\(([^)]+)\)")
        .map_err(|e| error!("Regex init failed: {e}"))
        .unwrap()
});
pub static PARAGRAPH_EXPR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n{2,}")
        .map_err(|e| error!("Regex init failed: {e}"))
        .unwrap()
});
pub static NEWLINE_EXPR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n").unwrap());
pub static EMPTY_PARAGRAPH_EXPR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<p>\s*</p>")
        .map_err(|e| error!("Regex init failed: {e}"))
        .unwrap()
});

pub fn markdown_to_html(md: &str) -> String {
    if md.is_empty() {
        return String::new();
    }

    let text = HEADING_EXPR.replace_all(md, |caps: &Captures| {
        let level = caps[1].len();
        format!("<h{level}>{}</h{level}>", &caps[2])
    });

    // longest marker first, so `***` is not eaten by the bold rule
    let text = BOLD_ITALIC_EXPR.replace_all(&text, "<strong><em>${1}</em></strong>");
    let text = BOLD_EXPR.replace_all(&text, "<strong>${1}</strong>");
    let text = ITALIC_EXPR.replace_all(&text, "<em>${1}</em>");

    let text = LINK_EXPR.replace_all(&text, r#"<a href="${2}">${1}</a>"#);

    let text = PARAGRAPH_EXPR.replace_all(&text, "</p><p>");
    let text = NEWLINE_EXPR.replace_all(&text, "<br />");
    let text = format!("<p>{text}</p>");

    EMPTY_PARAGRAPH_EXPR.replace_all(&text, "").into_owned()
}
