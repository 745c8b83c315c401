//! Locale tables: stop words, seed keywords, how-to markers, and every
//! human-readable message template. The heuristics ship with a single `es`
//! table; swapping the table swaps the language without touching scoring.

/// Message templates. Placeholders (`{keyword}`, `{density}`, `{count}`,
/// `{name}`) are substituted with [`fill`].
pub struct Messages {
    pub density_low: &'static str,
    pub density_high: &'static str,

    pub missing_h1: &'static str,
    pub multiple_h1: &'static str,
    pub long_content_no_h2: &'static str,
    pub too_many_h3: &'static str,

    pub length_too_short: &'static str,
    pub length_short: &'static str,
    pub length_too_long: &'static str,
    pub length_ok: &'static str,
    pub keywords_none: &'static str,
    pub keywords_few: &'static str,
    pub keywords_ok: &'static str,
    pub headings_ok: &'static str,
    pub headings_issues: &'static str,
    pub readability_easy: &'static str,
    pub readability_fair: &'static str,
    pub readability_hard: &'static str,
    pub images_none: &'static str,
    pub images_few: &'static str,
    pub images_ok: &'static str,

    pub warn_too_short: &'static str,
    pub suggest_expand: &'static str,
    pub suggest_expand_soft: &'static str,
    pub suggest_title_short: &'static str,
    pub warn_title_long: &'static str,
    pub suggest_description_short: &'static str,
    pub warn_description_long: &'static str,
    pub suggest_add_tags: &'static str,
    pub suggest_fewer_tags: &'static str,
    pub suggest_simplify: &'static str,
    pub suggest_readability: &'static str,
    pub warn_no_keywords: &'static str,
    pub suggest_more_h2: &'static str,

    pub default_step_name: &'static str,
    pub step_detail: &'static str,
    pub missing_question: &'static str,
    pub missing_answer: &'static str,

    pub link_density_low: &'static str,
    pub link_density_high: &'static str,
    pub anchor_variety_low: &'static str,
    pub no_link_opportunities: &'static str,
    pub link_opportunities: &'static str,
    pub high_relevance_links: &'static str,
}

pub struct Locale {
    pub tag: &'static str,
    /// Domain seed terms always considered as density candidates.
    pub seed_keywords: &'static [&'static str],
    /// Filtered out of title words before relevance overlap.
    pub title_stop_words: &'static [&'static str],
    /// Filtered out of title words before anchor keyword extraction.
    pub anchor_stop_words: &'static [&'static str],
    /// Lower-case substrings marking a how-to/tutorial title.
    pub howto_title_markers: &'static [&'static str],
    /// Words opening a step header line (`## Paso 1`, `## Step 2`).
    pub step_header_words: &'static [&'static str],
    /// Word preceding a sequence number in titles ("parte 2").
    pub part_markers: &'static [&'static str],
    /// Question/answer line prefixes for FAQ detection.
    pub question_prefixes: &'static [&'static str],
    pub answer_prefixes: &'static [&'static str],
    /// Anchor phrase templates, `{tag}` substituted per target tag.
    pub semantic_phrase_templates: &'static [&'static str],
    pub messages: Messages,
}

static ES: Locale = Locale {
    tag: "es",
    seed_keywords: &[
        "javascript",
        "typescript",
        "react",
        "nodejs",
        "python",
        "sql",
        "devops",
        "tutorial",
        "guía",
        "código",
        "programación",
        "desarrollo",
        "web",
    ],
    title_stop_words: &[
        "para", "con", "una", "del", "las", "los", "como", "que",
    ],
    anchor_stop_words: &[
        "como", "para", "con", "una", "del", "las", "los", "por", "que",
    ],
    howto_title_markers: &["cómo", "como", "tutorial", "guía", "paso a paso", "instrucciones"],
    step_header_words: &["paso", "step"],
    part_markers: &["parte", "part"],
    question_prefixes: &["pregunta", "q"],
    answer_prefixes: &["respuesta", "a"],
    semantic_phrase_templates: &[
        "tutorial de {tag}",
        "guía de {tag}",
        "cómo usar {tag}",
        "{tag} paso a paso",
    ],
    messages: Messages {
        density_low: "Considera usar más \"{keyword}\" (densidad actual: {density}%)",
        density_high: "Reduce el uso de \"{keyword}\" para evitar keyword stuffing (densidad actual: {density}%)",

        missing_h1: "Falta un título principal (H1) en el contenido",
        multiple_h1: "Múltiples H1 detectados, debería haber solo uno",
        long_content_no_h2: "Contenido largo sin subtítulos (H2) para mejorar estructura",
        too_many_h3: "Demasiados H3 por H2, considera reestructurar",

        length_too_short: "Contenido demasiado corto para SEO",
        length_short: "Contenido corto, considera expandir",
        length_too_long: "Contenido muy largo, considera dividir",
        length_ok: "Longitud de contenido óptima",
        keywords_none: "Sin keywords optimizados",
        keywords_few: "Pocos keywords optimizados",
        keywords_ok: "Densidad de keywords óptima",
        headings_ok: "Estructura de títulos óptima",
        headings_issues: "{count} problemas en estructura",
        readability_easy: "Texto fácil de leer",
        readability_fair: "Legibilidad aceptable",
        readability_hard: "Texto difícil de leer, simplifica",
        images_none: "Sin imágenes, añade contenido visual",
        images_few: "Pocas imágenes, considera añadir más",
        images_ok: "Cantidad de imágenes adecuada",

        warn_too_short: "📏 Contenido demasiado corto para SEO (mínimo 300 palabras)",
        suggest_expand: "Expande el contenido con más detalles, ejemplos o explicaciones",
        suggest_expand_soft: "📏 Considera expandir el contenido para mejor SEO (objetivo: 600+ palabras)",
        suggest_title_short: "📝 Título demasiado corto, considera expandirlo (30-60 caracteres)",
        warn_title_long: "📝 Título demasiado largo, puede cortarse en resultados de búsqueda",
        suggest_description_short: "📝 Meta descripción corta, expándela (120-160 caracteres)",
        warn_description_long: "📝 Meta descripción larga, puede cortarse en resultados",
        suggest_add_tags: "🏷️ Añade tags relevantes para mejor categorización",
        suggest_fewer_tags: "🏷️ Demasiados tags, considera reducir a 5-8 más relevantes",
        suggest_simplify: "📖 Simplifica el texto: usa frases más cortas y palabras comunes",
        suggest_readability: "📖 Mejora la legibilidad: revisa frases largas y términos técnicos",
        warn_no_keywords: "🔍 No se detectaron keywords relevantes en el contenido",
        suggest_more_h2: "📋 Añade más subtítulos (H2) para mejorar la estructura",

        default_step_name: "Paso {count}",
        step_detail: "Detalles del {name}",
        missing_question: "Sin pregunta",
        missing_answer: "Sin respuesta",

        link_density_low: "🔗 Densidad de enlaces baja: considera añadir más enlaces internos (objetivo: 1-3%)",
        link_density_high: "⚠️ Demasiados enlaces internos: reduce la densidad para evitar spam",
        anchor_variety_low: "📝 Varía más el texto ancla de los enlaces para mejor SEO",
        no_link_opportunities: "🔍 No se encontraron oportunidades de enlaces internos automáticas",
        link_opportunities: "💡 {count} oportunidades de enlaces internos detectadas",
        high_relevance_links: "⭐ {count} oportunidades de alta relevancia encontradas",
    },
};

/// The default (and currently only) locale table.
pub fn default_locale() -> &'static Locale {
    &ES
}

/// Look up a locale table by BCP-47-ish tag.
pub fn locale_for(tag: &str) -> Option<&'static Locale> {
    match tag {
        "es" => Some(&ES),
        _ => None,
    }
}

/// Substitute `{name}` placeholders in a message template.
pub(crate) fn fill(template: &str, pairs: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in pairs {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}

impl Locale {
    pub(crate) fn is_title_stop_word(&self, word: &str) -> bool {
        self.title_stop_words.contains(&word)
    }

    pub(crate) fn is_anchor_stop_word(&self, word: &str) -> bool {
        self.anchor_stop_words.contains(&word)
    }
}
