//! Structured-data type detection: HowTo, code-heavy, and FAQ classifiers.
//!
//! FAQ detection is fully implemented and exported, but deliberately left out
//! of [`detect_schema`]'s selection set; callers that want it must invoke
//! [`detect_faq`] themselves.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::locale::{default_locale, fill, Locale};
use crate::params::HP;

static NUMBERED_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\d+\.\s+(.+)$").unwrap());
static STEP_NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([^:.]+)[:.]").unwrap());
static FENCED_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(\w+)?\n(.*?)```").unwrap());
static INLINE_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`[^`]+`").unwrap());
static HEADING_QUESTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#+\s*¿([^?]+\?)\s*\n([^#]*)").unwrap());

/// Languages recognized in tags and fence info strings; the first entry is
/// the fallback when nothing is detected.
const PROGRAMMING_LANGUAGES: &[&str] = &[
    "javascript",
    "typescript",
    "python",
    "java",
    "csharp",
    "cpp",
    "c",
    "rust",
    "go",
    "php",
    "ruby",
    "swift",
    "kotlin",
    "sql",
    "html",
    "css",
    "bash",
    "shell",
    "json",
    "xml",
    "yaml",
    "dockerfile",
];

#[derive(Debug, Clone, Serialize)]
pub struct HowtoStep {
    pub name: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FaqDetection {
    pub questions: Vec<FaqEntry>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct HowtoDetection {
    pub steps: Vec<HowtoStep>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CodeDetection {
    pub programming_language: String,
    pub code_blocks: usize,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DetectedSchema {
    Faq {
        confidence: f64,
        questions: Vec<FaqEntry>,
    },
    Howto {
        confidence: f64,
        steps: Vec<HowtoStep>,
    },
    Code {
        confidence: f64,
        programming_language: String,
        code_blocks: usize,
    },
    None {
        confidence: f64,
    },
}

impl DetectedSchema {
    pub fn confidence(&self) -> f64 {
        match self {
            DetectedSchema::Faq { confidence, .. }
            | DetectedSchema::Howto { confidence, .. }
            | DetectedSchema::Code { confidence, .. }
            | DetectedSchema::None { confidence } => *confidence,
        }
    }
}

/// Classify raw markdown content as HowTo, code-heavy, or neither.
///
/// Both detectors run; the higher-confidence result wins if it clears the
/// 0.3 threshold, with HowTo preferred on exact ties.
pub fn detect_schema(content: &str, title: &str, tags: &[String]) -> DetectedSchema {
    detect_schema_with_locale(content, title, tags, default_locale())
}

pub fn detect_schema_with_locale(
    content: &str,
    title: &str,
    tags: &[String],
    locale: &Locale,
) -> DetectedSchema {
    let howto = detect_howto_with_locale(content, title, locale);
    let code = detect_code(content, tags);

    let howto_ok = howto.confidence >= HP.schema_min_confidence;
    let code_ok = code.confidence >= HP.schema_min_confidence;

    if howto_ok && howto.confidence >= code.confidence {
        DetectedSchema::Howto {
            confidence: howto.confidence,
            steps: howto.steps,
        }
    } else if code_ok {
        DetectedSchema::Code {
            confidence: code.confidence,
            programming_language: code.programming_language,
            code_blocks: code.code_blocks,
        }
    } else if howto_ok {
        DetectedSchema::Howto {
            confidence: howto.confidence,
            steps: howto.steps,
        }
    } else {
        DetectedSchema::None { confidence: 0.0 }
    }
}

/// HowTo/tutorial detection from title markers, numbered-list lines, and
/// `## Paso N` style step headers.
pub fn detect_howto(content: &str, title: &str) -> HowtoDetection {
    detect_howto_with_locale(content, title, default_locale())
}

pub fn detect_howto_with_locale(content: &str, title: &str, locale: &Locale) -> HowtoDetection {
    let mut confidence = 0.0;
    let title_lower = title.to_lowercase();
    if locale
        .howto_title_markers
        .iter()
        .any(|marker| title_lower.contains(marker))
    {
        confidence += HP.howto_title_boost;
    }

    let numbered: Vec<&str> = NUMBERED_LINE_RE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();

    let mut steps: Vec<HowtoStep> = Vec::new();
    if numbered.len() >= HP.howto_min_steps {
        confidence += (numbered.len() as f64 * HP.howto_step_weight).min(HP.howto_step_cap);
        steps = numbered
            .iter()
            .take(HP.howto_max_steps)
            .enumerate()
            .map(|(index, line)| numbered_step(line, index, locale))
            .collect();
    }

    // Step headers supersede the numbered list when they yield more matches.
    let header_lines = step_header_lines(content, locale);
    if !header_lines.is_empty() && header_lines.len() > steps.len() {
        confidence = confidence
            .max((header_lines.len() as f64 * HP.howto_header_weight).min(HP.howto_header_cap));
        steps = header_lines
            .iter()
            .take(HP.howto_max_steps)
            .map(|line| header_step(line, locale))
            .collect();
    }

    HowtoDetection { steps, confidence }
}

fn numbered_step(line: &str, index: usize, locale: &Locale) -> HowtoStep {
    let full = line.trim();
    if let Some(caps) = STEP_NAME_RE.captures(full) {
        let name = caps[1].trim().to_string();
        let rest = full[caps[0].len()..].trim().to_string();
        let text = if rest.is_empty() {
            full.to_string()
        } else {
            rest
        };
        let name = if name.is_empty() {
            fill(
                locale.messages.default_step_name,
                &[("count", &(index + 1).to_string())],
            )
        } else {
            name
        };
        HowtoStep { name, text }
    } else {
        HowtoStep {
            name: fill(
                locale.messages.default_step_name,
                &[("count", &(index + 1).to_string())],
            ),
            text: full.to_string(),
        }
    }
}

fn header_step(line: &str, locale: &Locale) -> HowtoStep {
    match line.split_once(':') {
        Some((name, rest)) => HowtoStep {
            name: name.trim().to_string(),
            text: rest.trim().to_string(),
        },
        None => HowtoStep {
            name: line.to_string(),
            text: fill(
                locale.messages.step_detail,
                &[("name", &line.to_lowercase())],
            ),
        },
    }
}

fn step_header_lines(content: &str, locale: &Locale) -> Vec<String> {
    let words = locale
        .step_header_words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(r"(?im)^#+\s*((?:{words})\s*\d+.*)$");
    match Regex::new(&pattern) {
        Ok(re) => re
            .captures_iter(content)
            .map(|caps| caps[1].trim().to_string())
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Code-heavy detection from language tags, fenced blocks, and inline code.
pub fn detect_code(content: &str, tags: &[String]) -> CodeDetection {
    let mut confidence = 0.0;
    let mut detected = PROGRAMMING_LANGUAGES[0].to_string();

    let tag_lang = tags.iter().map(|t| t.to_lowercase()).find(|tag| {
        !tag.is_empty()
            && PROGRAMMING_LANGUAGES
                .iter()
                .any(|lang| tag.contains(lang) || lang.contains(tag.as_str()))
    });
    if let Some(lang) = tag_lang {
        detected = lang;
        confidence += HP.code_tag_boost;
    }

    let block_langs: Vec<Option<String>> = FENCED_BLOCK_RE
        .captures_iter(content)
        .map(|caps| caps.get(1).map(|m| m.as_str().to_lowercase()))
        .collect();
    let code_blocks = block_langs.len();

    if code_blocks > 0 {
        confidence += (code_blocks as f64 * HP.code_block_weight).min(HP.code_block_cap);
        if let Some(majority) = majority_language(&block_langs) {
            detected = majority;
        }
    }

    let inline_count = INLINE_CODE_RE.find_iter(content).count();
    if inline_count > HP.code_inline_min {
        confidence += HP.code_inline_boost;
    }

    CodeDetection {
        programming_language: detected,
        code_blocks,
        confidence: confidence.min(1.0),
    }
}

/// Most frequent fence info string; ties go to the first one seen.
fn majority_language(block_langs: &[Option<String>]) -> Option<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for lang in block_langs.iter().flatten() {
        match counts.iter_mut().find(|(l, _)| l == lang) {
            Some((_, count)) => *count += 1,
            None => counts.push((lang.clone(), 1)),
        }
    }
    let mut best: Option<(String, usize)> = None;
    for (lang, count) in counts {
        if best.as_ref().map_or(true, |(_, c)| count > *c) {
            best = Some((lang, count));
        }
    }
    best.map(|(lang, _)| lang)
}

/// FAQ detection. Administratively excluded from [`detect_schema`]; kept
/// available for callers that re-enable FAQ markup.
pub fn detect_faq(content: &str) -> FaqDetection {
    detect_faq_with_locale(content, default_locale())
}

pub fn detect_faq_with_locale(content: &str, locale: &Locale) -> FaqDetection {
    let mut best: Vec<FaqEntry> = Vec::new();
    let mut max_confidence = 0.0_f64;

    let strategies = [
        inverted_question_blocks(content, locale),
        prefixed_question_lines(content, locale),
        heading_questions(content, locale),
    ];
    for questions in strategies {
        if questions.is_empty() {
            continue;
        }
        let confidence = (questions.len() as f64 * HP.faq_match_weight).min(1.0);
        if confidence > max_confidence {
            max_confidence = confidence;
            best = questions;
        }
    }

    best.truncate(HP.faq_max_questions);
    FaqDetection {
        questions: best,
        confidence: max_confidence,
    }
}

/// `¿Pregunta? Respuesta hasta la siguiente ¿` blocks.
fn inverted_question_blocks(content: &str, locale: &Locale) -> Vec<FaqEntry> {
    let mut entries = Vec::new();
    for segment in content.split('¿').skip(1) {
        if let Some(mark) = segment.find('?') {
            let question = segment[..=mark].trim();
            let answer = &segment[mark + 1..];
            entries.push(faq_entry(question, answer, locale));
        }
    }
    entries
}

/// `Pregunta: ...? / Respuesta: ...` line pairs.
fn prefixed_question_lines(content: &str, locale: &Locale) -> Vec<FaqEntry> {
    let q = locale
        .question_prefixes
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");
    let a = locale
        .answer_prefixes
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(r"(?i)(?:{q}):\s*([^?]+\?)\s*\n?(?:{a}):\s*([^\n\r]*)");
    match Regex::new(&pattern) {
        Ok(re) => re
            .captures_iter(content)
            .map(|caps| faq_entry(caps[1].trim(), &caps[2], locale))
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// `## ¿Pregunta?` headings answered by the section body.
fn heading_questions(content: &str, locale: &Locale) -> Vec<FaqEntry> {
    HEADING_QUESTION_RE
        .captures_iter(content)
        .map(|caps| faq_entry(caps[1].trim(), &caps[2], locale))
        .collect()
}

fn faq_entry(question: &str, answer: &str, locale: &Locale) -> FaqEntry {
    let question = if question.is_empty() {
        locale.messages.missing_question.to_string()
    } else {
        question.to_string()
    };
    let answer: String = answer
        .trim()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(HP.faq_answer_max_chars)
        .collect();
    let answer = if answer.is_empty() {
        locale.messages.missing_answer.to_string()
    } else {
        answer
    };
    FaqEntry { question, answer }
}
