//! Tokenizer and sliding-window phrase miner. Keeps the "extract repeated
//! n-grams" step testable on its own, independent of density scoring.

use std::collections::HashMap;

/// Whitespace tokens, empty tokens dropped.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinedPhrase {
    pub phrase: String,
    pub count: usize,
}

/// Counts adjacent word windows of a fixed size across the token stream.
pub struct PhraseMiner {
    window: usize,
    min_chars: usize,
    min_count: usize,
}

impl PhraseMiner {
    pub fn new(window: usize, min_chars: usize, min_count: usize) -> Self {
        Self {
            window,
            min_chars,
            min_count,
        }
    }

    /// Repeated phrases sorted by count descending, then phrase ascending so
    /// output is deterministic regardless of map iteration order.
    pub fn mine(&self, text: &str) -> Vec<MinedPhrase> {
        let tokens = tokenize(text);
        if self.window == 0 || tokens.len() < self.window {
            return Vec::new();
        }

        let mut counts: HashMap<String, usize> = HashMap::new();
        for window in tokens.windows(self.window) {
            let phrase = window.join(" ");
            if phrase.chars().count() >= self.min_chars {
                *counts.entry(phrase).or_insert(0) += 1;
            }
        }

        let mut phrases: Vec<MinedPhrase> = counts
            .into_iter()
            .filter(|(_, count)| *count >= self.min_count)
            .map(|(phrase, count)| MinedPhrase { phrase, count })
            .collect();
        phrases.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.phrase.cmp(&b.phrase)));
        phrases
    }
}
