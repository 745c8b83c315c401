use seo_lens::{
    analyze_internal_linking, find_related_posts, linking_relevance, related_relevance,
    suggest_internal_links, Article, MatchType,
};

fn article(id: &str, title: &str, tags: &[&str]) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        raw_content: String::new(),
    }
}

#[test]
fn linking_relevance_combines_tag_category_and_title() {
    let source = article("sql/joins", "SQL Joins Basics", &["sql", "joins"]);
    let target = article("sql/advanced", "Advanced SQL Joins", &["sql"]);

    // Tag Jaccard 1/2 * 0.4 + category 0.2 + title overlap 1/2 * 0.2.
    let score = linking_relevance("", &source, &target);
    assert!((score - 0.5).abs() < 1e-9, "got {score}");
    assert!(score > 0.3);
}

#[test]
fn related_relevance_uses_flat_tag_counts() {
    let source = article("sql/joins", "SQL Joins Basics", &["sql", "joins"]);
    let target = article("sql/advanced", "Advanced SQL Joins", &["sql"]);

    // One matched tag * 0.4 + category 0.2 + title overlap 0.1.
    let score = related_relevance(&source, &target);
    assert!((score - 0.7).abs() < 1e-9, "got {score}");
}

#[test]
fn relevance_is_zero_for_same_article() {
    let a = article("sql/joins", "SQL Joins", &["sql"]);
    assert_eq!(related_relevance(&a, &a), 0.0);
    assert_eq!(linking_relevance("sql sql sql", &a, &a), 0.0);
}

#[test]
fn sequential_parts_boost_and_cap_at_one() {
    let part1 = article("devops/docker-1", "Docker parte 1", &["docker"]);
    let part2 = article("devops/docker-2", "Docker parte 2", &["docker"]);
    let score = related_relevance(&part1, &part2);
    assert_eq!(score, 1.0);
}

#[test]
fn find_related_posts_filters_sorts_and_builds_urls() {
    let source = article("sql/joins", "SQL Joins Basics", &["sql", "joins"]);
    let corpus = vec![
        article("go/intro", "Introducción a Go", &["go"]),
        article("sql/advanced", "Advanced SQL Joins", &["sql"]),
        article("sql/indexes", "Índices en SQL", &["sql", "performance"]),
    ];

    let related = find_related_posts(&source, &corpus, 5);
    assert_eq!(related.len(), 2);
    // Advanced SQL Joins: 0.4 + 0.2 + 0.1 = 0.7; Índices: 0.4 + 0.2 = 0.6.
    assert_eq!(related[0].id, "sql/advanced");
    assert_eq!(related[0].url, "/posts/sql/advanced/");
    assert_eq!(related[1].id, "sql/indexes");
    assert!(related.iter().all(|p| p.relevance_score > 0.2));

    let capped = find_related_posts(&source, &corpus, 1);
    assert_eq!(capped.len(), 1);
}

#[test]
fn suggests_exact_anchor_for_mentioned_keyword() {
    let source = article("devops/intro", "Introducción a DevOps", &["devops"]);
    let target = article("devops/docker", "Docker Compose Tutorial", &["docker", "devops"]);
    let content = "En producción usamos docker para contenedores.";

    let suggestions = suggest_internal_links(content, &source, &[target], 3);
    assert_eq!(suggestions.len(), 1);
    let s = &suggestions[0];
    assert_eq!(s.anchor_text, "docker");
    assert_eq!(s.target_article_id, "devops/docker");
    assert_eq!(s.match_type, MatchType::Exact);
    assert_eq!(s.position, content.to_lowercase().find("docker").unwrap());
    assert!((s.relevance_score - 0.45).abs() < 1e-9, "got {}", s.relevance_score);
    assert!(s.context.contains("docker"));
}

#[test]
fn nearby_anchor_occurrences_are_suppressed() {
    let source = article("devops/intro", "Introducción a DevOps", &["devops"]);
    let target = article("devops/docker", "Docker Compose Tutorial", &["docker", "devops"]);

    // Two mentions nine bytes apart: the second one clusters and is dropped.
    let close = "docker y docker de nuevo en este texto corto.";
    let suggestions = suggest_internal_links(close, &source, std::slice::from_ref(&target), 5);
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].position, 0);

    // Far enough apart, both anchors survive.
    let far = format!("docker {}docker al final.", "texto de relleno ".repeat(10));
    let suggestions = suggest_internal_links(&far, &source, std::slice::from_ref(&target), 5);
    assert_eq!(suggestions.len(), 2);
    assert!(suggestions[1].position.abs_diff(suggestions[0].position) >= 80);
}

#[test]
fn coinciding_anchor_and_position_merge_to_one_suggestion() {
    // The target's title is its only keyword, so the exact keyword match and
    // the semantic literal-title match land on the same anchor at the same
    // position. They must merge, keeping the exact one.
    let source = article("devops/intro", "Introducción a DevOps", &["devops"]);
    let target = article("devops/docker", "Docker", &["docker", "devops"]);
    let content = "Usamos docker en este proyecto con devops.";

    let suggestions = suggest_internal_links(content, &source, &[target], 5);
    assert_eq!(suggestions.len(), 1);
    let s = &suggestions[0];
    assert_eq!(s.anchor_text, "docker");
    assert_eq!(s.position, content.to_lowercase().find("docker").unwrap());
    assert_eq!(s.match_type, MatchType::Exact);
    assert!((s.relevance_score - 0.6).abs() < 1e-9, "got {}", s.relevance_score);
}

#[test]
fn semantic_phrases_score_lower_than_exact_matches() {
    let source = article("devops/intro", "Introducción a DevOps", &["devops"]);
    let target = article("devops/docker", "Docker Compose Tutorial", &["docker", "devops"]);
    let content = "Sigue este tutorial de docker para empezar.";

    let suggestions = suggest_internal_links(content, &source, &[target], 5);
    assert_eq!(suggestions.len(), 2);

    assert_eq!(suggestions[0].match_type, MatchType::Exact);
    assert_eq!(suggestions[0].anchor_text, "docker");
    assert_eq!(suggestions[1].match_type, MatchType::Semantic);
    assert_eq!(suggestions[1].anchor_text, "tutorial de docker");
    assert!(
        suggestions[1].relevance_score < suggestions[0].relevance_score,
        "semantic matches carry a reduced score"
    );
    let ratio = suggestions[1].relevance_score / suggestions[0].relevance_score;
    assert!((ratio - 0.8).abs() < 1e-9);
}

#[test]
fn irrelevant_targets_produce_no_suggestions() {
    let source = article("sql/joins", "SQL Joins Basics", &["sql"]);
    let target = article("go/intro", "Introducción a Go", &["go"]);
    let content = "Hablamos de go y de introducción a go constantemente.";
    let suggestions = suggest_internal_links(content, &source, &[target], 5);
    assert!(suggestions.is_empty());
}

#[test]
fn linking_analysis_reports_density_variety_and_exclusions() {
    let source = article("devops/intro", "Introducción a DevOps", &["devops"]);
    let corpus = vec![
        article("sql/joins", "SQL Joins Basics", &["sql"]),
        article("devops/docker", "Docker Compose Tutorial", &["docker", "devops"]),
    ];
    let content = "Lee la [guía de SQL](/posts/sql/joins/) antes. También usamos docker aquí.";

    let analysis = analyze_internal_linking(content, &source, &corpus, 5);

    assert_eq!(analysis.current_links, vec!["[guía de SQL](/posts/sql/joins/)"]);
    // One link across ten words.
    assert!((analysis.link_density - 10.0).abs() < 1e-9);
    assert!((analysis.anchor_text_variety - 100.0).abs() < 1e-9);

    // The already-linked article is never re-suggested.
    assert!(analysis
        .suggestions
        .iter()
        .all(|s| s.target_article_id != "sql/joins"));
    assert_eq!(analysis.suggestions.len(), 1);
    assert_eq!(analysis.suggestions[0].anchor_text, "docker");

    assert!(analysis
        .opportunities
        .iter()
        .any(|o| o.contains("Demasiados enlaces internos")));
    assert!(analysis
        .opportunities
        .iter()
        .any(|o| o == "💡 1 oportunidades de enlaces internos detectadas"));
}

#[test]
fn linking_analysis_handles_content_without_links() {
    let source = article("devops/intro", "Introducción a DevOps", &["devops"]);
    let analysis = analyze_internal_linking("Texto sin enlaces internos.", &source, &[], 5);
    assert!(analysis.current_links.is_empty());
    assert_eq!(analysis.link_density, 0.0);
    assert_eq!(analysis.anchor_text_variety, 0.0);
    assert!(analysis
        .opportunities
        .iter()
        .any(|o| o.contains("Densidad de enlaces baja")));
    assert!(analysis
        .opportunities
        .iter()
        .any(|o| o.contains("No se encontraron oportunidades")));
}

#[test]
fn external_links_are_not_counted_as_internal() {
    let source = article("devops/intro", "Introducción a DevOps", &["devops"]);
    let content = "Consulta [la docs](https://example.com/docs) y [local](./notas.md).";
    let analysis = analyze_internal_linking(content, &source, &[], 5);
    assert_eq!(analysis.current_links, vec!["[local](./notas.md)"]);
}
