//! Heading hierarchy analysis over the raw markdown.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::locale::{default_locale, Locale};
use crate::params::HP;

static H1_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#\s+(.+)$").unwrap());
static H2_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^##\s+(.+)$").unwrap());
static H3_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^###\s+(.+)$").unwrap());

#[derive(Debug, Clone, Serialize)]
pub struct HeadingAnalysis {
    pub h1_count: usize,
    pub h2_count: usize,
    pub h3_count: usize,
    /// Heading labels grouped by level, e.g. `"H1: Introducción"`.
    pub structure: Vec<String>,
    pub issues: Vec<String>,
}

pub fn analyze_headings(raw_markdown: &str) -> HeadingAnalysis {
    analyze_headings_with_locale(raw_markdown, default_locale())
}

pub fn analyze_headings_with_locale(raw_markdown: &str, locale: &Locale) -> HeadingAnalysis {
    let collect = |re: &Regex, label: &str| -> Vec<String> {
        re.captures_iter(raw_markdown)
            .map(|caps| format!("{label}: {}", caps[1].trim()))
            .collect()
    };

    let h1 = collect(&H1_RE, "H1");
    let h2 = collect(&H2_RE, "H2");
    let h3 = collect(&H3_RE, "H3");
    let (h1_count, h2_count, h3_count) = (h1.len(), h2.len(), h3.len());

    let mut structure = h1;
    structure.extend(h2);
    structure.extend(h3);

    let mut issues = Vec::new();
    if h1_count == 0 {
        issues.push(locale.messages.missing_h1.to_string());
    } else if h1_count > 1 {
        issues.push(locale.messages.multiple_h1.to_string());
    }
    if h2_count == 0 && raw_markdown.chars().count() > HP.long_content_chars {
        issues.push(locale.messages.long_content_no_h2.to_string());
    }
    if h2_count > 0 && h3_count as f64 / h2_count as f64 > HP.h3_per_h2_max {
        issues.push(locale.messages.too_many_h3.to_string());
    }

    HeadingAnalysis {
        h1_count,
        h2_count,
        h3_count,
        structure,
        issues,
    }
}
