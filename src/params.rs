//! Every tunable constant in one place. These mirror the thresholds the
//! scoring contracts document; changing one changes documented output.

pub(crate) struct Hyperparameters {
    // Lexical metrics
    pub words_per_minute: f64,
    pub flesch_base: f64,
    pub flesch_sentence_weight: f64,
    pub flesch_syllable_weight: f64,

    // Keyword density
    pub density_token_min_chars: usize,
    pub title_keyword_min_chars: usize,
    pub phrase_window: usize,
    pub phrase_min_chars: usize,
    pub phrase_min_count: usize,
    pub density_phrase_min_chars: usize,
    pub density_phrase_min_count: usize,
    pub density_optimal_min: f64,
    pub density_optimal_max: f64,
    pub density_top_n: usize,

    // Heading structure
    pub long_content_chars: usize,
    pub h3_per_h2_max: f64,

    // Quality factor weights (sum to 1.0)
    pub weight_length: f64,
    pub weight_keywords: f64,
    pub weight_headings: f64,
    pub weight_readability: f64,
    pub weight_images: f64,

    // Schema detection
    pub schema_min_confidence: f64,
    pub howto_title_boost: f64,
    pub howto_step_weight: f64,
    pub howto_step_cap: f64,
    pub howto_min_steps: usize,
    pub howto_header_weight: f64,
    pub howto_header_cap: f64,
    pub howto_max_steps: usize,
    pub faq_match_weight: f64,
    pub faq_max_questions: usize,
    pub faq_answer_max_chars: usize,
    pub code_tag_boost: f64,
    pub code_block_weight: f64,
    pub code_block_cap: f64,
    pub code_inline_min: usize,
    pub code_inline_boost: f64,

    // Relevance (shared)
    pub tag_weight: f64,
    pub category_boost: f64,
    pub title_weight: f64,

    // Relevance ("related posts" strategy)
    pub related_min_score: f64,
    pub part_adjacent_boost: f64,
    pub part_near_boost: f64,
    pub part_near_distance: i64,

    // Relevance ("internal linking" strategy)
    pub mention_weight: f64,
    pub link_min_relevance: f64,
    pub semantic_score_factor: f64,
    pub anchor_min_chars: usize,
    pub anchor_min_gap_chars: usize,
    pub suggestions_per_target: usize,
    pub confidence_tie_epsilon: f64,
    pub context_window_chars: usize,

    // Linking analysis diagnostics
    pub link_density_low: f64,
    pub link_density_high: f64,
    pub anchor_variety_min: f64,
    pub high_relevance_min: f64,
}

pub(crate) static HP: Hyperparameters = Hyperparameters {
    words_per_minute: 200.0,
    flesch_base: 206.835,
    flesch_sentence_weight: 1.015,
    flesch_syllable_weight: 84.6,

    density_token_min_chars: 3,
    title_keyword_min_chars: 4,
    phrase_window: 2,
    phrase_min_chars: 7,
    phrase_min_count: 2,
    density_phrase_min_chars: 9,
    density_phrase_min_count: 3,
    density_optimal_min: 0.5,
    density_optimal_max: 3.0,
    density_top_n: 10,

    long_content_chars: 1000,
    h3_per_h2_max: 4.0,

    weight_length: 0.25,
    weight_keywords: 0.25,
    weight_headings: 0.20,
    weight_readability: 0.15,
    weight_images: 0.15,

    schema_min_confidence: 0.3,
    howto_title_boost: 0.4,
    howto_step_weight: 0.2,
    howto_step_cap: 0.6,
    howto_min_steps: 2,
    howto_header_weight: 0.25,
    howto_header_cap: 0.8,
    howto_max_steps: 8,
    faq_match_weight: 0.3,
    faq_max_questions: 5,
    faq_answer_max_chars: 300,
    code_tag_boost: 0.3,
    code_block_weight: 0.2,
    code_block_cap: 0.6,
    code_inline_min: 5,
    code_inline_boost: 0.1,

    tag_weight: 0.4,
    category_boost: 0.2,
    title_weight: 0.2,

    related_min_score: 0.2,
    part_adjacent_boost: 0.5,
    part_near_boost: 0.2,
    part_near_distance: 3,

    mention_weight: 0.2,
    link_min_relevance: 0.3,
    semantic_score_factor: 0.8,
    anchor_min_chars: 4,
    anchor_min_gap_chars: 80,
    suggestions_per_target: 2,
    confidence_tie_epsilon: 0.1,
    context_window_chars: 100,

    link_density_low: 1.0,
    link_density_high: 5.0,
    anchor_variety_min: 70.0,
    high_relevance_min: 0.7,
};
