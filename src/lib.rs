//! SEO content intelligence for markdown articles.
//!
//! Pure lexical/statistical heuristics over article text and metadata:
//! content-quality scoring, keyword density, heading diagnostics, schema type
//! detection, and relevance-ranked internal-link suggestions across a corpus.
//! Every entry point is a pure function of its inputs; nothing here performs
//! I/O, holds state, or reads a clock.

use serde::Serialize;

pub mod headings;
pub mod keywords;
pub mod lexical;
pub mod locale;
pub mod normalize;
mod params;
pub mod quality;
pub mod relevance;
pub mod schema;
pub mod tokenize;

pub use headings::{analyze_headings, HeadingAnalysis};
pub use keywords::{analyze_density, KeywordDensityEntry};
pub use lexical::{estimated_reading_minutes, readability_score, syllable_count, word_count};
pub use locale::{default_locale, locale_for, Locale};
pub use normalize::normalize;
pub use quality::{score_quality, ContentQuality, QualityFactor, QualityFactors};
pub use relevance::{
    analyze_internal_linking, find_related_posts, linking_relevance, related_relevance,
    suggest_internal_links, LinkSuggestion, LinkingAnalysis, MatchType, RelatedPost,
};
pub use schema::{
    detect_code, detect_faq, detect_howto, detect_schema, CodeDetection, DetectedSchema,
    FaqDetection, FaqEntry, HowtoDetection, HowtoStep,
};
pub use tokenize::{tokenize, MinedPhrase, PhraseMiner};

/// An article as the content layer hands it over. Never mutated by any
/// analyzer; the id is a hierarchical path whose first segment is the
/// category.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub raw_content: String,
}

/// Aggregate result of the per-article analyzers.
#[derive(Debug, Clone, Serialize)]
pub struct ContentAnalysis {
    pub word_count: usize,
    pub reading_time: usize,
    pub readability_score: f64,
    pub keyword_density: Vec<KeywordDensityEntry>,
    pub heading_structure: HeadingAnalysis,
    pub content_quality: ContentQuality,
    pub seo_suggestions: Vec<String>,
    pub warnings: Vec<String>,
}

/// Run the full per-article pipeline: normalize, lexical metrics, keyword
/// density, heading structure, quality score, and SEO suggestions.
pub fn analyze_content(
    content: &str,
    title: &str,
    description: &str,
    tags: &[String],
) -> ContentAnalysis {
    analyze_content_with_locale(content, title, description, tags, default_locale())
}

pub fn analyze_content_with_locale(
    content: &str,
    title: &str,
    description: &str,
    tags: &[String],
    locale: &Locale,
) -> ContentAnalysis {
    let normalized = normalize(content);
    let word_count = lexical::word_count(&normalized);
    let reading_time = lexical::estimated_reading_minutes(word_count);
    let readability = lexical::readability_score(&normalized);
    let keyword_density = keywords::analyze_density_with_locale(&normalized, title, tags, locale);
    let heading_structure = headings::analyze_headings_with_locale(content, locale);
    let content_quality = quality::score_quality(
        word_count,
        &keyword_density,
        &heading_structure,
        readability,
        content,
        locale,
    );
    let (seo_suggestions, warnings) = quality::seo_suggestions(
        word_count,
        &keyword_density,
        &heading_structure,
        readability,
        title,
        description,
        tags,
        locale,
    );

    ContentAnalysis {
        word_count,
        reading_time,
        readability_score: readability,
        keyword_density,
        heading_structure,
        content_quality,
        seo_suggestions,
        warnings,
    }
}
