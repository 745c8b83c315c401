//! Markup stripping. Everything downstream of the lexical metrics operates on
//! this normalized form: lower-cased, whitespace-collapsed, no code, no tags.

use once_cell::sync::Lazy;
use regex::Regex;

static FENCED_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```.*?```").unwrap());
static INLINE_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`[^`]+`").unwrap());
static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static IMAGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[[^\]]*\]\([^)]*\)").unwrap());
static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]*\)").unwrap());
static MARKUP_CHAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-*_`#]").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Strip markup down to analyzable plain text.
///
/// Order matters: code is removed before the single-character markup pass so
/// fence backticks never leak their contents into the word stream. Links keep
/// their visible text; images are dropped entirely. Idempotent.
pub fn normalize(raw: &str) -> String {
    let text = FENCED_CODE_RE.replace_all(raw, " ");
    let text = INLINE_CODE_RE.replace_all(&text, " ");
    let text = HTML_TAG_RE.replace_all(&text, " ");
    let text = IMAGE_RE.replace_all(&text, " ");
    let text = LINK_RE.replace_all(&text, "$1");
    let text = MARKUP_CHAR_RE.replace_all(&text, " ");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    text.trim().to_lowercase()
}
