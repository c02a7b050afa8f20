use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::RmxResult;
use crate::terms::extract::{TermProvider, word_tokens};
use crate::terms::set::Category;

/// Dictionary-backed provider: a token belongs to a category when the category's word
/// list contains it (case-insensitive).
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    words: BTreeMap<Category, HashSet<String>>,
}

impl Lexicon {
    /// Build from explicit word lists.
    pub fn from_lists(lists: BTreeMap<Category, Vec<String>>) -> Self {
        let words = lists
            .into_iter()
            .map(|(c, ws)| (c, ws.iter().map(|w| w.to_lowercase()).collect()))
            .collect();
        Self { words }
    }

    /// Parse `{ "noun": [...], "verb": [...], ... }`. Missing categories are empty.
    pub fn from_json_str(s: &str) -> RmxResult<Self> {
        let lists: BTreeMap<Category, Vec<String>> = serde_json::from_str(s)?;
        Ok(Self::from_lists(lists))
    }

    /// Read a JSON lexicon file.
    pub fn from_path(path: &Path) -> RmxResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read lexicon '{}'", path.display()))?;
        Self::from_json_str(&s)
    }
}

impl TermProvider for Lexicon {
    fn words(&self, category: Category, text: &str) -> RmxResult<Vec<String>> {
        let Some(dict) = self.words.get(&category) else {
            return Ok(Vec::new());
        };
        Ok(word_tokens(text)
            .into_iter()
            .filter(|t| dict.contains(&t.to_lowercase()))
            .map(str::to_owned)
            .collect())
    }
}

/// Heuristic tagger used when no lexicon is supplied. Classifies each token by suffix;
/// anything alphabetic and unclaimed with three or more letters is a noun.
#[derive(Clone, Copy, Debug, Default)]
pub struct SuffixTagger;

const ADVERB_SUFFIXES: &[&str] = &["ly"];
const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "al", "ic", "less", "ish",
];
const VERB_SUFFIXES: &[&str] = &["ing", "ed", "ize", "ise", "ify", "ate"];

impl SuffixTagger {
    /// Category of a single token, if any.
    pub fn classify(token: &str) -> Option<Category> {
        if !token.chars().all(char::is_alphabetic) {
            return None;
        }
        let lower = token.to_lowercase();
        let len = lower.chars().count();
        let has = |suffixes: &[&str]| {
            suffixes
                .iter()
                .any(|s| lower.ends_with(s) && len > s.len() + 1)
        };
        if has(ADVERB_SUFFIXES) {
            Some(Category::Adverb)
        } else if has(ADJECTIVE_SUFFIXES) {
            Some(Category::Adjective)
        } else if has(VERB_SUFFIXES) {
            Some(Category::Verb)
        } else if len >= 3 {
            Some(Category::Noun)
        } else {
            None
        }
    }
}

impl TermProvider for SuffixTagger {
    fn words(&self, category: Category, text: &str) -> RmxResult<Vec<String>> {
        Ok(word_tokens(text)
            .into_iter()
            .filter(|t| Self::classify(t) == Some(category))
            .map(str::to_owned)
            .collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/terms/taggers.rs"]
mod tests;
