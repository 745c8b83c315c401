//! Word counts, syllable estimation, and the readability formula.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::params::HP;

static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

const VOWELS: &str = "aeiouáéíóúü";

/// Whitespace-separated token count of normalized text.
pub fn word_count(normalized: &str) -> usize {
    normalized.split_whitespace().count()
}

/// Reading time at 200 words per minute, rounded up.
pub fn estimated_reading_minutes(word_count: usize) -> usize {
    (word_count as f64 / HP.words_per_minute).ceil() as usize
}

/// Syllables estimated as transitions into a vowel run. Words with no
/// detected vowels still count as one syllable.
pub fn syllable_count(word: &str) -> usize {
    let mut count = 0;
    let mut prev_was_vowel = false;
    for ch in word.to_lowercase().chars() {
        let is_vowel = VOWELS.contains(ch);
        if is_vowel && !prev_was_vowel {
            count += 1;
        }
        prev_was_vowel = is_vowel;
    }
    count.max(1)
}

/// Flesch-Reading-Ease-style score over normalized text, clamped to [0, 100].
/// Sentences split on `.!?`; degenerate input (no words or no sentences)
/// scores 0 rather than erroring.
pub fn readability_score(normalized: &str) -> f64 {
    let sentences: Vec<&str> = SENTENCE_SPLIT_RE
        .split(normalized)
        .filter(|s| !s.trim().is_empty())
        .collect();
    let words: Vec<&str> = normalized.split_whitespace().collect();
    if sentences.is_empty() || words.is_empty() {
        return 0.0;
    }

    let syllables: usize = words.iter().map(|w| syllable_count(w)).sum();
    let avg_words_per_sentence = words.len() as f64 / sentences.len() as f64;
    let avg_syllables_per_word = syllables as f64 / words.len() as f64;

    let score = HP.flesch_base
        - HP.flesch_sentence_weight * avg_words_per_sentence
        - HP.flesch_syllable_weight * avg_syllables_per_word;
    score.clamp(0.0, 100.0)
}
