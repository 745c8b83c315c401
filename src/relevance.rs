//! Pairwise article relevance and internal-link suggestion generation.
//!
//! Two scoring strategies coexist on purpose. `related_relevance` (the
//! "related posts" strategy) weighs raw matched-tag counts and boosts
//! numbered series parts; `linking_relevance` (the "internal linking"
//! strategy) uses tag Jaccard overlap plus a content-mention term. Their
//! thresholds were tuned per call site; unifying them would silently shift
//! both.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::keywords::round2;
use crate::locale::{default_locale, fill, Locale};
use crate::params::HP;
use crate::Article;

static MD_LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

#[derive(Debug, Clone, Serialize)]
pub struct RelatedPost {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub url: String,
    pub relevance_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Exact,
    Semantic,
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkSuggestion {
    pub anchor_text: String,
    pub target_article_id: String,
    pub target_title: String,
    pub relevance_score: f64,
    /// Byte offset of the anchor in the lower-cased source content.
    pub position: usize,
    pub match_type: MatchType,
    pub context: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkingAnalysis {
    pub suggestions: Vec<LinkSuggestion>,
    pub current_links: Vec<String>,
    /// Internal links per 100 words, 2 decimals.
    pub link_density: f64,
    /// Unique anchors as a percentage of all anchors, 2 decimals.
    pub anchor_text_variety: f64,
    pub opportunities: Vec<String>,
}

// ---------------------------------------------------------------------------
// Scoring strategies
// ---------------------------------------------------------------------------

/// "Related posts" relevance: flat tag-match count, category, title overlap,
/// and adjacency boosts for numbered series parts. In [0, 1].
pub fn related_relevance(source: &Article, target: &Article) -> f64 {
    related_relevance_with_locale(source, target, default_locale())
}

pub fn related_relevance_with_locale(source: &Article, target: &Article, locale: &Locale) -> f64 {
    if source.id == target.id {
        return 0.0;
    }

    let target_tags: Vec<String> = target.tags.iter().map(|t| t.to_lowercase()).collect();
    let matched_tags = source
        .tags
        .iter()
        .filter(|tag| target_tags.contains(&tag.to_lowercase()))
        .count();
    let mut score = matched_tags as f64 * HP.tag_weight;

    if category_of(&source.id) == category_of(&target.id) {
        score += HP.category_boost;
    }

    score += title_overlap(&source.title, &target.title, locale) * HP.title_weight;

    if let (Some(a), Some(b)) = (
        part_number(&source.title, locale),
        part_number(&target.title, locale),
    ) {
        let diff = (a - b).abs();
        if diff == 1 {
            score += HP.part_adjacent_boost;
        }
        if diff <= HP.part_near_distance {
            score += HP.part_near_boost;
        }
    }

    score.min(1.0)
}

/// "Internal linking" relevance: tag Jaccard, category, title overlap, and
/// how many of the target's keywords the source content actually mentions.
/// `content` must already be lower-cased. In [0, 1].
pub fn linking_relevance(content: &str, source: &Article, target: &Article) -> f64 {
    linking_relevance_with_locale(content, source, target, default_locale())
}

pub fn linking_relevance_with_locale(
    content: &str,
    source: &Article,
    target: &Article,
    locale: &Locale,
) -> f64 {
    if source.id == target.id {
        return 0.0;
    }

    let source_tags: HashSet<String> = source.tags.iter().map(|t| t.to_lowercase()).collect();
    let target_tags: HashSet<String> = target.tags.iter().map(|t| t.to_lowercase()).collect();
    let overlap = source_tags.intersection(&target_tags).count();
    let union = source_tags.union(&target_tags).count();

    let mut score = 0.0;
    if union > 0 {
        score += overlap as f64 / union as f64 * HP.tag_weight;
    }

    if category_of(&source.id) == category_of(&target.id) {
        score += HP.category_boost;
    }

    score += title_overlap(&source.title, &target.title, locale) * HP.title_weight;

    let keywords = anchor_keywords(target, locale);
    if !keywords.is_empty() {
        let mentions = keywords.iter().filter(|k| content.contains(k.as_str())).count();
        score += mentions as f64 / keywords.len() as f64 * HP.mention_weight;
    }

    score.min(1.0)
}

fn category_of(id: &str) -> &str {
    id.split('/').next().unwrap_or(id)
}

/// Shared title words ratio against the source's word count, stop-word
/// filtered and restricted to words longer than 3 characters.
fn title_overlap(source_title: &str, target_title: &str, locale: &Locale) -> f64 {
    let source_words = title_words(source_title, locale);
    if source_words.is_empty() {
        return 0.0;
    }
    let target_words = title_words(target_title, locale);
    let common = source_words
        .iter()
        .filter(|w| target_words.contains(*w))
        .count();
    common as f64 / source_words.len() as f64
}

fn title_words(title: &str, locale: &Locale) -> HashSet<String> {
    title
        .to_lowercase()
        .split_whitespace()
        .filter(|w| w.chars().count() >= HP.title_keyword_min_chars)
        .filter(|w| !locale.is_title_stop_word(w))
        .map(str::to_string)
        .collect()
}

/// Sequence number from titles like "Parte 2". Built from the locale's part
/// markers, longest first so "parte" wins over its "part" prefix.
fn part_number(title: &str, locale: &Locale) -> Option<i64> {
    let markers = locale
        .part_markers
        .iter()
        .map(|m| regex::escape(m))
        .collect::<Vec<_>>()
        .join("|");
    let re = Regex::new(&format!(r"(?i)(?:{markers})\s*(\d+)")).ok()?;
    re.captures(title)?.get(1)?.as_str().parse().ok()
}

/// Lower-cased anchor keyword candidates for a target: its filtered title
/// words plus all of its tags, deduplicated in order.
fn anchor_keywords(target: &Article, locale: &Locale) -> Vec<String> {
    let mut keywords = Vec::new();
    let mut push_unique = |kw: String| {
        if !kw.is_empty() && !keywords.contains(&kw) {
            keywords.push(kw);
        }
    };
    for word in target.title.to_lowercase().split_whitespace() {
        if word.chars().count() >= HP.title_keyword_min_chars && !locale.is_anchor_stop_word(word)
        {
            push_unique(word.to_string());
        }
    }
    for tag in &target.tags {
        push_unique(tag.trim().to_lowercase());
    }
    keywords
}

// ---------------------------------------------------------------------------
// Related posts
// ---------------------------------------------------------------------------

/// Corpus articles scoring above 0.2, descending, truncated to `max_results`.
pub fn find_related_posts(
    source: &Article,
    corpus: &[Article],
    max_results: usize,
) -> Vec<RelatedPost> {
    find_related_posts_with_locale(source, corpus, max_results, default_locale())
}

pub fn find_related_posts_with_locale(
    source: &Article,
    corpus: &[Article],
    max_results: usize,
    locale: &Locale,
) -> Vec<RelatedPost> {
    let mut related: Vec<RelatedPost> = corpus
        .iter()
        .map(|article| RelatedPost {
            id: article.id.clone(),
            title: article.title.clone(),
            description: article.description.clone(),
            tags: article.tags.clone(),
            url: article_url(&article.id),
            relevance_score: related_relevance_with_locale(source, article, locale),
        })
        .filter(|post| post.relevance_score > HP.related_min_score)
        .collect();
    related.sort_by(|a, b| {
        b.relevance_score
            .partial_cmp(&a.relevance_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    related.truncate(max_results);
    related
}

fn article_url(id: &str) -> String {
    format!("/posts/{id}/")
}

// ---------------------------------------------------------------------------
// Link suggestions
// ---------------------------------------------------------------------------

/// Anchor suggestions for internal links, ordered by confidence with
/// near-ties broken by earliest position, truncated to `max_suggestions`.
pub fn suggest_internal_links(
    content: &str,
    source: &Article,
    corpus: &[Article],
    max_suggestions: usize,
) -> Vec<LinkSuggestion> {
    suggest_internal_links_with_locale(content, source, corpus, max_suggestions, default_locale())
}

pub fn suggest_internal_links_with_locale(
    content: &str,
    source: &Article,
    corpus: &[Article],
    max_suggestions: usize,
    locale: &Locale,
) -> Vec<LinkSuggestion> {
    let content_lower = content.to_lowercase();
    let mut suggestions =
        collect_link_suggestions(&content_lower, source, corpus.iter().collect(), locale);

    suggestions.sort_by(|a, b| {
        confidence_bucket(b.relevance_score)
            .cmp(&confidence_bucket(a.relevance_score))
            .then_with(|| a.position.cmp(&b.position))
    });
    suggestions.truncate(max_suggestions);
    suggestions
}

/// Quantizes confidence so scores within the tie epsilon usually land in the
/// same bucket and fall back to position ordering.
fn confidence_bucket(score: f64) -> i64 {
    (score / HP.confidence_tie_epsilon).round() as i64
}

fn collect_link_suggestions(
    content_lower: &str,
    source: &Article,
    candidates: Vec<&Article>,
    locale: &Locale,
) -> Vec<LinkSuggestion> {
    let mut accepted: Vec<LinkSuggestion> = Vec::new();
    for target in candidates {
        if target.id == source.id {
            continue;
        }
        let relevance = linking_relevance_with_locale(content_lower, source, target, locale);
        if relevance <= HP.link_min_relevance {
            continue;
        }
        let per_target = suggestions_for_target(content_lower, target, relevance, &accepted, locale);
        accepted.extend(per_target);
    }
    accepted
}

fn suggestions_for_target(
    content_lower: &str,
    target: &Article,
    relevance: f64,
    accepted: &[LinkSuggestion],
    locale: &Locale,
) -> Vec<LinkSuggestion> {
    let mut out: Vec<LinkSuggestion> = Vec::new();

    // Exact whole-word keyword matches, suppressed when they would cluster
    // next to an anchor that is already accepted.
    for keyword in anchor_keywords(target, locale) {
        if keyword.chars().count() < HP.anchor_min_chars {
            continue;
        }
        let pattern = format!(r"\b{}\b", regex::escape(&keyword));
        let Ok(re) = Regex::new(&pattern) else {
            continue;
        };
        for m in re.find_iter(content_lower) {
            let position = m.start();
            let too_close = accepted
                .iter()
                .chain(out.iter())
                .any(|s| position.abs_diff(s.position) < HP.anchor_min_gap_chars);
            if too_close {
                continue;
            }
            out.push(LinkSuggestion {
                anchor_text: m.as_str().to_string(),
                target_article_id: target.id.clone(),
                target_title: target.title.clone(),
                relevance_score: relevance,
                position,
                match_type: MatchType::Exact,
                context: context_around(content_lower, m.start(), m.end()),
            });
        }
    }

    // Semantic phrases synthesized from the target's title and tags carry a
    // reduced score.
    for phrase in semantic_phrases(target, locale) {
        let phrase_lower = phrase.to_lowercase();
        if let Some(position) = content_lower.find(&phrase_lower) {
            out.push(LinkSuggestion {
                anchor_text: phrase_lower.clone(),
                target_article_id: target.id.clone(),
                target_title: target.title.clone(),
                relevance_score: relevance * HP.semantic_score_factor,
                position,
                match_type: MatchType::Semantic,
                context: context_around(
                    content_lower,
                    position,
                    position + phrase_lower.len(),
                ),
            });
        }
    }

    // Merge duplicates referencing the same anchor at the same position.
    let mut seen: HashSet<(String, usize)> = HashSet::new();
    out.retain(|s| seen.insert((s.anchor_text.clone(), s.position)));
    out.truncate(HP.suggestions_per_target);
    out
}

fn semantic_phrases(target: &Article, locale: &Locale) -> Vec<String> {
    let mut phrases = vec![target.title.clone()];
    for tag in &target.tags {
        for template in locale.semantic_phrase_templates {
            phrases.push(fill(template, &[("tag", tag)]));
        }
    }
    phrases
}

/// Snippet around a match, snapped to char boundaries, newlines flattened.
fn context_around(text: &str, start: usize, end: usize) -> String {
    let mid = (start + end) / 2;
    let half = HP.context_window_chars / 2;
    let ctx_start = snap_to_char_boundary(text, mid.saturating_sub(half), false);
    let ctx_end = snap_to_char_boundary(text, (mid + half).min(text.len()), true);
    text[ctx_start..ctx_end].replace('\n', " ").trim().to_string()
}

fn snap_to_char_boundary(text: &str, pos: usize, forward: bool) -> usize {
    if pos >= text.len() {
        return text.len();
    }
    let mut p = pos;
    while p > 0 && p < text.len() && !text.is_char_boundary(p) {
        if forward {
            p += 1;
        } else {
            p -= 1;
        }
    }
    p
}

// ---------------------------------------------------------------------------
// Linking analysis
// ---------------------------------------------------------------------------

/// Full linking report: suggestions plus diagnostics over the links already
/// present in the content. Already-linked targets are not re-suggested.
pub fn analyze_internal_linking(
    content: &str,
    source: &Article,
    corpus: &[Article],
    max_suggestions: usize,
) -> LinkingAnalysis {
    analyze_internal_linking_with_locale(content, source, corpus, max_suggestions, default_locale())
}

pub fn analyze_internal_linking_with_locale(
    content: &str,
    source: &Article,
    corpus: &[Article],
    max_suggestions: usize,
    locale: &Locale,
) -> LinkingAnalysis {
    let content_lower = content.to_lowercase();

    let mut current_links: Vec<String> = Vec::new();
    let mut anchors: Vec<String> = Vec::new();
    let mut linked_urls: HashSet<String> = HashSet::new();
    for caps in MD_LINK_RE.captures_iter(content) {
        let url = &caps[2];
        if url.starts_with('/') || url.starts_with("./") {
            current_links.push(caps[0].to_string());
            anchors.push(caps[1].to_string());
            linked_urls.insert(url.to_string());
        }
    }

    let words = content_lower.split_whitespace().count();
    let link_density = if words > 0 {
        round2(current_links.len() as f64 / words as f64 * 100.0)
    } else {
        0.0
    };

    let unique_anchors: HashSet<&String> = anchors.iter().collect();
    let anchor_text_variety = if anchors.is_empty() {
        0.0
    } else {
        round2(unique_anchors.len() as f64 / anchors.len() as f64 * 100.0)
    };

    let candidates: Vec<&Article> = corpus
        .iter()
        .filter(|article| !linked_urls.contains(&article_url(&article.id)))
        .collect();
    let mut suggestions = collect_link_suggestions(&content_lower, source, candidates, locale);
    suggestions.sort_by(|a, b| {
        b.relevance_score
            .partial_cmp(&a.relevance_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    suggestions.truncate(max_suggestions);

    let opportunities =
        linking_opportunities(&suggestions, link_density, anchor_text_variety, locale);

    LinkingAnalysis {
        suggestions,
        current_links,
        link_density,
        anchor_text_variety,
        opportunities,
    }
}

fn linking_opportunities(
    suggestions: &[LinkSuggestion],
    link_density: f64,
    anchor_text_variety: f64,
    locale: &Locale,
) -> Vec<String> {
    let m = &locale.messages;
    let mut opportunities = Vec::new();

    if link_density < HP.link_density_low {
        opportunities.push(m.link_density_low.to_string());
    } else if link_density > HP.link_density_high {
        opportunities.push(m.link_density_high.to_string());
    }

    if anchor_text_variety < HP.anchor_variety_min {
        opportunities.push(m.anchor_variety_low.to_string());
    }

    if suggestions.is_empty() {
        opportunities.push(m.no_link_opportunities.to_string());
    } else {
        opportunities.push(fill(
            m.link_opportunities,
            &[("count", &suggestions.len().to_string())],
        ));
    }

    let high_relevance = suggestions
        .iter()
        .filter(|s| s.relevance_score > HP.high_relevance_min)
        .count();
    if high_relevance > 0 {
        opportunities.push(fill(
            m.high_relevance_links,
            &[("count", &high_relevance.to_string())],
        ));
    }

    opportunities
}
