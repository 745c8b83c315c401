use seo_lens::{
    analyze_content, analyze_density, analyze_headings, default_locale, detect_faq, detect_howto,
    detect_schema, estimated_reading_minutes, locale_for, normalize, readability_score,
    score_quality, syllable_count, word_count, DetectedSchema, HeadingAnalysis, PhraseMiner,
};

#[test]
fn locale_lookup_resolves_known_tags_only() {
    let es = locale_for("es").unwrap();
    assert!(std::ptr::eq(es, default_locale()));
    assert!(locale_for("en").is_none());
    assert!(locale_for("").is_none());
}

#[test]
fn normalize_strips_markup_and_is_idempotent() {
    let raw = "# Guía SEO\n\nEsto es **importante** con `código` y un \
               [enlace](/posts/sql/joins/).\n\n```js\nconst x = 1;\n```\n";
    let normalized = normalize(raw);
    assert_eq!(normalized, "guía seo esto es importante con y un enlace.");
    assert_eq!(normalize(&normalized), normalized);
}

#[test]
fn normalize_drops_images_but_keeps_link_text() {
    let raw = "Mira ![diagrama del flujo](/img/flujo.png) y la [documentación](/docs/) oficial.";
    assert_eq!(normalize(raw), "mira y la documentación oficial.");
}

#[test]
fn normalize_empty_input_yields_empty_output() {
    assert_eq!(normalize(""), "");
}

#[test]
fn word_count_and_reading_time() {
    assert_eq!(word_count("uno dos tres"), 3);
    assert_eq!(word_count(""), 0);
    assert_eq!(estimated_reading_minutes(0), 0);
    assert_eq!(estimated_reading_minutes(200), 1);
    assert_eq!(estimated_reading_minutes(401), 3);
}

#[test]
fn syllables_count_vowel_runs() {
    assert_eq!(syllable_count("hola"), 2);
    assert_eq!(syllable_count("programación"), 4);
    assert_eq!(syllable_count("web"), 1);
    // No vowels still counts as one syllable.
    assert_eq!(syllable_count("xyz"), 1);
}

#[test]
fn readability_stays_in_range() {
    let score = readability_score("hola");
    assert!((0.0..=100.0).contains(&score), "got {score}");
    assert_eq!(readability_score(""), 0.0);

    let simple = "el gato duerme. el sol sale. la casa es azul.";
    let simple_score = readability_score(simple);
    assert!((0.0..=100.0).contains(&simple_score));
}

#[test]
fn phrase_miner_finds_repeated_windows() {
    let mined = PhraseMiner::new(2, 7, 2).mine("base de datos con base de datos");
    let phrases: Vec<&str> = mined.iter().map(|p| p.phrase.as_str()).collect();
    assert!(phrases.contains(&"base de"));
    assert!(phrases.contains(&"de datos"));
    // Short windows are filtered by the minimum character length.
    assert!(!phrases.iter().any(|p| p.len() < 7));
}

#[test]
fn keyword_density_ranks_and_flags_optimality() {
    let filler = vec!["palabra"; 98].join(" ");
    let content = format!("react react {filler}");
    let entries = analyze_density(&content, "React avanzado", &["react".to_string()]);

    assert_eq!(entries.len(), 2);
    // The mined phrase dominates by density.
    assert_eq!(entries[0].keyword, "palabra palabra");
    assert!(!entries[0].is_optimal);
    assert!(!entries[0].suggestion.is_empty());

    assert_eq!(entries[1].keyword, "react");
    assert_eq!(entries[1].count, 2);
    assert!((entries[1].density - 2.0).abs() < 1e-9);
    assert!(entries[1].is_optimal);
    assert!(entries[1].suggestion.is_empty());

    for entry in &entries {
        assert!((0.0..=100.0).contains(&entry.density));
        assert_eq!(
            entry.is_optimal,
            (0.5..=3.0).contains(&entry.density),
            "optimality must follow the density band for {}",
            entry.keyword
        );
    }
}

#[test]
fn keyword_density_lower_band_edge_is_optimal() {
    let filler = vec!["dato"; 199].join(" ");
    let content = format!("rust {filler}");
    let entries = analyze_density(&content, "Rust", &["rust".to_string()]);
    let rust = entries.iter().find(|e| e.keyword == "rust").unwrap();
    assert!((rust.density - 0.5).abs() < 1e-9);
    assert!(rust.is_optimal);
}

#[test]
fn keyword_density_truncates_to_top_ten() {
    let words = [
        "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india",
        "juliet", "kilo", "lima",
    ];
    let tags: Vec<String> = words.iter().map(|w| w.to_string()).collect();
    let content = words.join(" ");
    let entries = analyze_density(&content, "", &tags);
    assert_eq!(entries.len(), 10);
}

#[test]
fn heading_analysis_flags_multiple_h1() {
    let analysis = analyze_headings("# Uno\n# Dos\n## Tres\n");
    assert_eq!(analysis.h1_count, 2);
    assert_eq!(analysis.h2_count, 1);
    assert_eq!(analysis.h3_count, 0);
    assert_eq!(
        analysis.structure,
        vec!["H1: Uno", "H1: Dos", "H2: Tres"]
    );
    assert_eq!(
        analysis.issues,
        vec!["Múltiples H1 detectados, debería haber solo uno"]
    );
}

#[test]
fn heading_analysis_flags_long_content_without_subheadings() {
    let body = "palabra ".repeat(200);
    let analysis = analyze_headings(&body);
    assert_eq!(analysis.h1_count, 0);
    assert_eq!(analysis.issues.len(), 2);
    assert!(analysis.issues[0].contains("H1"));
    assert!(analysis.issues[1].contains("H2"));
}

#[test]
fn quality_score_combines_weighted_factors() {
    let headings = HeadingAnalysis {
        h1_count: 1,
        h2_count: 3,
        h3_count: 2,
        structure: vec![],
        issues: vec![],
    };
    let quality = score_quality(250, &[], &headings, 65.0, "", default_locale());

    assert_eq!(quality.factors.length.score, 20);
    assert_eq!(
        quality.factors.length.message,
        "Contenido demasiado corto para SEO"
    );
    assert_eq!(quality.factors.keywords.score, 20);
    assert_eq!(quality.factors.headings.score, 100);
    assert_eq!(quality.factors.readability.score, 100);
    assert_eq!(quality.factors.images.score, 30);
    // 20*0.25 + 20*0.25 + 100*0.20 + 100*0.15 + 30*0.15 = 49.5 -> 50
    assert_eq!(quality.score, 50);
}

#[test]
fn quality_score_stays_in_bounds() {
    let worst = HeadingAnalysis {
        h1_count: 0,
        h2_count: 0,
        h3_count: 9,
        structure: vec![],
        issues: vec!["a".into(), "b".into(), "c".into()],
    };
    let quality = score_quality(0, &[], &worst, 0.0, "", default_locale());
    assert!(quality.score <= 100);
    assert_eq!(quality.factors.headings.score, 20);
}

#[test]
fn analyze_content_aggregates_and_warns_on_short_content() {
    let analysis = analyze_content(
        "# SQL Joins\n\nUna breve introducción a los joins en SQL.",
        "SQL Joins",
        "Joins en SQL",
        &["sql".to_string()],
    );
    assert!(analysis.word_count > 0);
    assert_eq!(analysis.reading_time, 1);
    assert!(analysis.content_quality.score <= 100);
    assert!(analysis
        .warnings
        .iter()
        .any(|w| w.contains("demasiado corto")));
    assert!(analysis
        .seo_suggestions
        .iter()
        .any(|s| s.contains("Título demasiado corto")));
}

#[test]
fn analyze_content_is_total_over_empty_input() {
    let analysis = analyze_content("", "", "", &[]);
    assert_eq!(analysis.word_count, 0);
    assert_eq!(analysis.reading_time, 0);
    assert_eq!(analysis.readability_score, 0.0);
    assert!(analysis.keyword_density.is_empty());
    assert!(analysis
        .warnings
        .iter()
        .any(|w| w.contains("No se detectaron keywords")));
}

#[test]
fn analyze_content_is_deterministic() {
    let content = "# Guía\n\nTutorial de react con react y más react para web.";
    let tags = vec!["react".to_string(), "web".to_string()];
    let a = serde_json::to_value(analyze_content(content, "Guía de React", "desc", &tags)).unwrap();
    let b = serde_json::to_value(analyze_content(content, "Guía de React", "desc", &tags)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn detects_code_heavy_content() {
    let content = "Ejemplo\n```python\nprint(1)\n```\nmás texto\n```python\nx = 2\n```\nfin\n```python\ny = 3\n```\n";
    let schema = detect_schema(content, "Notas de trabajo", &[]);
    match schema {
        DetectedSchema::Code {
            confidence,
            programming_language,
            code_blocks,
        } => {
            assert!(confidence >= 0.6, "got {confidence}");
            assert_eq!(programming_language, "python");
            assert_eq!(code_blocks, 3);
        }
        other => panic!("expected code schema, got {other:?}"),
    }
}

#[test]
fn code_detection_defaults_to_first_language() {
    let content = "Sin bloques de código aquí.";
    let detection = seo_lens::detect_code(content, &[]);
    assert_eq!(detection.programming_language, "javascript");
    assert_eq!(detection.code_blocks, 0);
    assert_eq!(detection.confidence, 0.0);
}

#[test]
fn detects_howto_from_title_and_numbered_steps() {
    let content = "Introducción breve.\n\
                   1. Descarga el instalador: usa rustup\n\
                   2. Ejecuta el script de instalación\n\
                   3. Verifica la versión: rustc --version\n";
    let schema = detect_schema(content, "Cómo instalar Rust", &[]);
    match schema {
        DetectedSchema::Howto { confidence, steps } => {
            assert!((confidence - 1.0).abs() < 1e-9, "got {confidence}");
            assert_eq!(steps.len(), 3);
            assert_eq!(steps[0].name, "Descarga el instalador");
            assert_eq!(steps[0].text, "usa rustup");
            assert_eq!(steps[1].name, "Paso 2");
            assert_eq!(steps[1].text, "Ejecuta el script de instalación");
        }
        other => panic!("expected howto schema, got {other:?}"),
    }
}

#[test]
fn step_headers_supersede_numbered_lists() {
    let content = "## Paso 1: Instala las dependencias\ntexto\n\
                   ## Paso 2: Configura el entorno\ntexto\n\
                   ## Paso 3\ntexto\n";
    let detection = detect_howto(content, "Despliegue");
    assert!((detection.confidence - 0.75).abs() < 1e-9);
    assert_eq!(detection.steps.len(), 3);
    assert_eq!(detection.steps[0].name, "Paso 1");
    assert_eq!(detection.steps[0].text, "Instala las dependencias");
    assert_eq!(detection.steps[2].name, "Paso 3");
    assert_eq!(detection.steps[2].text, "Detalles del paso 3");
}

#[test]
fn faq_is_detected_but_never_selected() {
    let content = "¿Qué es Rust?\nUn lenguaje de sistemas.\n\n\
                   ¿Por qué usarlo?\nPor seguridad y rendimiento.\n";
    let faq = detect_faq(content);
    assert!((faq.confidence - 0.6).abs() < 1e-9);
    assert_eq!(faq.questions.len(), 2);
    assert_eq!(faq.questions[0].question, "Qué es Rust?");
    assert_eq!(faq.questions[0].answer, "Un lenguaje de sistemas.");
    assert_eq!(faq.questions[1].answer, "Por seguridad y rendimiento.");

    // The default selection ignores FAQ even at high confidence.
    match detect_schema(content, "Preguntas frecuentes", &[]) {
        DetectedSchema::None { confidence } => assert_eq!(confidence, 0.0),
        other => panic!("expected none, got {other:?}"),
    }
}

#[test]
fn faq_detects_prefixed_question_lines() {
    let content = "Pregunta: Qué es un índice?\nRespuesta: Una estructura de acceso.\n";
    let faq = detect_faq(content);
    assert_eq!(faq.questions.len(), 1);
    assert_eq!(faq.questions[0].question, "Qué es un índice?");
    assert_eq!(faq.questions[0].answer, "Una estructura de acceso.");
}

#[test]
fn schema_below_threshold_returns_none() {
    let schema = detect_schema("Texto plano sin estructura.", "Apuntes", &[]);
    match schema {
        DetectedSchema::None { confidence } => assert_eq!(confidence, 0.0),
        other => panic!("expected none, got {other:?}"),
    }
}

#[test]
fn json_output_shape_is_stable() {
    let analysis = analyze_content("# Título\n\nContenido breve.", "Título", "desc", &[]);
    let value = serde_json::to_value(&analysis).unwrap();
    for key in [
        "word_count",
        "reading_time",
        "readability_score",
        "keyword_density",
        "heading_structure",
        "content_quality",
        "seo_suggestions",
        "warnings",
    ] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }

    let schema = detect_schema(
        "```rust\nfn main() {}\n```\n```rust\nlet x = 1;\n```\n",
        "Notas",
        &[],
    );
    let value = serde_json::to_value(&schema).unwrap();
    assert_eq!(value["type"], "code");
    assert_eq!(value["programming_language"], "rust");
}
