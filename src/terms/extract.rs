use crate::foundation::error::RmxResult;
use crate::foundation::rng::RmxRng;
use crate::terms::set::{Category, TermSet};

/// External part-of-speech source.
///
/// Implementations return the raw words of one category found in `text`; filtering and
/// sampling are applied by [`TermExtractor`].
pub trait TermProvider {
    /// Raw words of `category` found in `text`.
    fn words(&self, category: Category, text: &str) -> RmxResult<Vec<String>>;
}

/// Filters provider output and keeps a random contiguous window of at most `max_terms`.
#[derive(Clone, Copy, Debug)]
pub struct TermExtractor {
    max_terms: usize,
}

impl TermExtractor {
    /// Extractor keeping at most `max_terms` per category (minimum 1).
    pub fn new(max_terms: usize) -> Self {
        Self {
            max_terms: max_terms.max(1),
        }
    }

    /// Configured cap.
    pub fn max_terms(&self) -> usize {
        self.max_terms
    }

    /// Query every category and build a [`TermSet`]. A provider error aborts the whole set.
    #[tracing::instrument(skip(self, provider, text, rng), fields(text_len = text.len()))]
    pub fn extract(
        &self,
        provider: &dyn TermProvider,
        text: &str,
        rng: &mut RmxRng,
    ) -> RmxResult<TermSet> {
        let mut set = TermSet::new();
        for category in Category::ALL {
            let raw = provider.words(category, text)?;
            let window = self.sample(raw, rng);
            tracing::debug!(category = category.as_str(), kept = window.len());
            set = set.with(category, window);
        }
        Ok(set)
    }

    /// Drop numeric and blank entries, then cut a window starting at a uniform offset.
    pub fn sample(&self, words: Vec<String>, rng: &mut RmxRng) -> Vec<String> {
        let filtered: Vec<String> = words
            .into_iter()
            .filter(|w| !w.trim().is_empty())
            .filter(|w| !is_numeric(w))
            .collect();
        if filtered.is_empty() {
            return filtered;
        }
        let max_start = filtered.len().saturating_sub(self.max_terms);
        let start = rng.int_inclusive(0, max_start);
        filtered
            .into_iter()
            .skip(start)
            .take(self.max_terms)
            .collect()
    }
}

/// Finite numbers (`"12"`, `" 3.5 "`, `"-4e2"`) count as numeric.
fn is_numeric(s: &str) -> bool {
    s.trim().parse::<f64>().is_ok_and(f64::is_finite)
}

/// Split text into word tokens with surrounding punctuation trimmed, first occurrence
/// order, case-insensitively de-duplicated.
pub fn word_tokens(text: &str) -> Vec<&str> {
    let mut seen = std::collections::HashSet::new();
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .filter(|w| seen.insert(w.to_lowercase()))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/terms/extract.rs"]
mod tests;
