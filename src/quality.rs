//! Weighted content-quality score with per-factor breakdown, plus the SEO
//! suggestion and warning generator.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::headings::HeadingAnalysis;
use crate::keywords::KeywordDensityEntry;
use crate::locale::{fill, Locale};
use crate::params::HP;

static IMAGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[.*?\]\(.*?\)").unwrap());

#[derive(Debug, Clone, Serialize)]
pub struct QualityFactor {
    pub score: u32,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QualityFactors {
    pub length: QualityFactor,
    pub keywords: QualityFactor,
    pub headings: QualityFactor,
    pub readability: QualityFactor,
    pub images: QualityFactor,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentQuality {
    pub score: u32,
    pub factors: QualityFactors,
}

/// Step-function scoring of the five quality factors, combined with fixed
/// weights (length 25%, keywords 25%, headings 20%, readability 15%,
/// images 15%) and rounded to an integer in [0, 100].
pub fn score_quality(
    word_count: usize,
    keyword_entries: &[KeywordDensityEntry],
    heading_analysis: &HeadingAnalysis,
    readability: f64,
    raw_content: &str,
    locale: &Locale,
) -> ContentQuality {
    let m = &locale.messages;

    let length_score = match word_count {
        0..=299 => 20,
        300..=599 => 60,
        600..=1199 => 90,
        1200..=2499 => 100,
        _ => 80,
    };
    let length_message = if word_count < 300 {
        m.length_too_short
    } else if word_count < 600 {
        m.length_short
    } else if word_count >= 2500 {
        m.length_too_long
    } else {
        m.length_ok
    };

    let optimal_keywords = keyword_entries.iter().filter(|k| k.is_optimal).count();
    let keywords_score = match optimal_keywords {
        0 => 20,
        1..=2 => 60,
        3..=4 => 80,
        _ => 100,
    };
    let keywords_message = match optimal_keywords {
        0 => m.keywords_none.to_string(),
        1..=2 => m.keywords_few.to_string(),
        _ => m.keywords_ok.to_string(),
    };

    let issue_count = heading_analysis.issues.len();
    let headings_score = match issue_count {
        0 => 100,
        1 => 70,
        _ if heading_analysis.h2_count > 0 => 50,
        _ => 20,
    };
    let headings_message = if issue_count == 0 {
        m.headings_ok.to_string()
    } else {
        fill(m.headings_issues, &[("count", &issue_count.to_string())])
    };

    let readability_score = if readability >= 60.0 {
        100
    } else if readability >= 30.0 {
        70
    } else if readability >= 10.0 {
        40
    } else {
        20
    };
    let readability_message = if readability >= 60.0 {
        m.readability_easy
    } else if readability >= 30.0 {
        m.readability_fair
    } else {
        m.readability_hard
    };

    let image_count = IMAGE_RE.find_iter(raw_content).count();
    let images_score = match image_count {
        0 => 30,
        1..=2 => 70,
        3..=7 => 100,
        _ => 90,
    };
    let images_message = match image_count {
        0 => m.images_none,
        1..=2 => m.images_few,
        _ => m.images_ok,
    };

    let overall = (length_score as f64 * HP.weight_length
        + keywords_score as f64 * HP.weight_keywords
        + headings_score as f64 * HP.weight_headings
        + readability_score as f64 * HP.weight_readability
        + images_score as f64 * HP.weight_images)
        .round() as u32;

    ContentQuality {
        score: overall.min(100),
        factors: QualityFactors {
            length: QualityFactor {
                score: length_score,
                message: length_message.to_string(),
            },
            keywords: QualityFactor {
                score: keywords_score,
                message: keywords_message,
            },
            headings: QualityFactor {
                score: headings_score,
                message: headings_message,
            },
            readability: QualityFactor {
                score: readability_score,
                message: readability_message.to_string(),
            },
            images: QualityFactor {
                score: images_score,
                message: images_message.to_string(),
            },
        },
    }
}

/// Actionable suggestions and critical warnings derived from the analysis.
#[allow(clippy::too_many_arguments)]
pub(crate) fn seo_suggestions(
    word_count: usize,
    keyword_entries: &[KeywordDensityEntry],
    heading_analysis: &HeadingAnalysis,
    readability: f64,
    title: &str,
    description: &str,
    tags: &[String],
    locale: &Locale,
) -> (Vec<String>, Vec<String>) {
    let m = &locale.messages;
    let mut suggestions = Vec::new();
    let mut warnings = Vec::new();

    if word_count < 300 {
        warnings.push(m.warn_too_short.to_string());
        suggestions.push(m.suggest_expand.to_string());
    } else if word_count < 600 {
        suggestions.push(m.suggest_expand_soft.to_string());
    }

    for entry in keyword_entries.iter().filter(|k| !k.is_optimal).take(3) {
        if !entry.suggestion.is_empty() {
            suggestions.push(format!("🔑 {}", entry.suggestion));
        }
    }

    let title_len = title.chars().count();
    if title_len < 30 {
        suggestions.push(m.suggest_title_short.to_string());
    } else if title_len > 60 {
        warnings.push(m.warn_title_long.to_string());
    }

    let description_len = description.chars().count();
    if description_len < 120 {
        suggestions.push(m.suggest_description_short.to_string());
    } else if description_len > 160 {
        warnings.push(m.warn_description_long.to_string());
    }

    if tags.is_empty() {
        suggestions.push(m.suggest_add_tags.to_string());
    } else if tags.len() > 8 {
        suggestions.push(m.suggest_fewer_tags.to_string());
    }

    for issue in &heading_analysis.issues {
        suggestions.push(format!("📋 {issue}"));
    }

    if readability < 30.0 {
        suggestions.push(m.suggest_simplify.to_string());
    } else if readability < 60.0 {
        suggestions.push(m.suggest_readability.to_string());
    }

    if keyword_entries.is_empty() {
        warnings.push(m.warn_no_keywords.to_string());
    }

    if word_count > 800 && heading_analysis.h2_count < 2 {
        suggestions.push(m.suggest_more_h2.to_string());
    }

    (suggestions, warnings)
}
