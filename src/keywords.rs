//! Keyword density analysis over normalized text.

use regex::Regex;
use serde::Serialize;

use crate::locale::{default_locale, fill, Locale};
use crate::params::HP;
use crate::tokenize::PhraseMiner;

#[derive(Debug, Clone, Serialize)]
pub struct KeywordDensityEntry {
    pub keyword: String,
    pub count: usize,
    /// Percent of counted words, rounded to 2 decimals.
    pub density: f64,
    pub is_optimal: bool,
    /// Empty when the density sits inside the optimal band.
    pub suggestion: String,
}

/// Top keyword/phrase densities, descending, truncated to 10 entries.
///
/// Candidates come from title words, tags, the locale's seed terms, and
/// repeated two-word phrases mined from the text itself.
pub fn analyze_density(normalized: &str, title: &str, tags: &[String]) -> Vec<KeywordDensityEntry> {
    analyze_density_with_locale(normalized, title, tags, default_locale())
}

pub fn analyze_density_with_locale(
    normalized: &str,
    title: &str,
    tags: &[String],
    locale: &Locale,
) -> Vec<KeywordDensityEntry> {
    let total_words = normalized
        .split_whitespace()
        .filter(|w| w.chars().count() >= HP.density_token_min_chars)
        .count();
    if total_words == 0 {
        return Vec::new();
    }

    fn push_unique(candidates: &mut Vec<String>, keyword: String) {
        if !keyword.is_empty() && !candidates.contains(&keyword) {
            candidates.push(keyword);
        }
    }
    let mut candidates: Vec<String> = Vec::new();

    for word in title.to_lowercase().split_whitespace() {
        if word.chars().count() >= HP.title_keyword_min_chars {
            push_unique(&mut candidates, word.to_string());
        }
    }
    for tag in tags {
        push_unique(&mut candidates, tag.to_lowercase());
    }
    for seed in locale.seed_keywords {
        push_unique(&mut candidates, (*seed).to_string());
    }

    let mut entries: Vec<(String, usize)> = Vec::new();
    for keyword in &candidates {
        let count = count_word_boundary_matches(normalized, keyword);
        if count > 0 {
            entries.push((keyword.clone(), count));
        }
    }

    // Repeated adjacent phrases are candidates in their own right; the miner
    // already counted them, no rescan needed.
    let miner = PhraseMiner::new(HP.phrase_window, HP.phrase_min_chars, HP.phrase_min_count);
    for mined in miner.mine(normalized) {
        if mined.count >= HP.density_phrase_min_count
            && mined.phrase.chars().count() >= HP.density_phrase_min_chars
            && !entries.iter().any(|(k, _)| *k == mined.phrase)
        {
            entries.push((mined.phrase, mined.count));
        }
    }

    let mut scored: Vec<KeywordDensityEntry> = entries
        .into_iter()
        .map(|(keyword, count)| {
            let density = round2(count as f64 / total_words as f64 * 100.0);
            let is_optimal =
                density >= HP.density_optimal_min && density <= HP.density_optimal_max;
            let suggestion = if density < HP.density_optimal_min {
                fill(
                    locale.messages.density_low,
                    &[("keyword", &keyword), ("density", &format!("{density:.2}"))],
                )
            } else if density > HP.density_optimal_max {
                fill(
                    locale.messages.density_high,
                    &[("keyword", &keyword), ("density", &format!("{density:.2}"))],
                )
            } else {
                String::new()
            };
            KeywordDensityEntry {
                keyword,
                count,
                density,
                is_optimal,
                suggestion,
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.density
            .partial_cmp(&a.density)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b.count.cmp(&a.count))
            .then_with(|| a.keyword.cmp(&b.keyword))
    });
    scored.truncate(HP.density_top_n);
    scored
}

/// Case-insensitive whole-word occurrence count. The keyword is escaped
/// before pattern construction; an unbuildable pattern counts as zero.
fn count_word_boundary_matches(text: &str, keyword: &str) -> usize {
    let pattern = format!(r"(?i)\b{}\b", regex::escape(keyword));
    match Regex::new(&pattern) {
        Ok(re) => re.find_iter(text).count(),
        Err(_) => 0,
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
