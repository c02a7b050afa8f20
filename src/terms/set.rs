use std::collections::BTreeMap;

/// Part-of-speech bucket a term was extracted into.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Adjectives.
    Adjective,
    /// Nouns.
    Noun,
    /// Verbs.
    Verb,
    /// Adverbs.
    Adverb,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Category; 4] = [
        Category::Adjective,
        Category::Noun,
        Category::Verb,
        Category::Adverb,
    ];

    /// Lowercase name used in JSON and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Adjective => "adjective",
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adverb => "adverb",
        }
    }
}

/// Categorized word lists sampled from one source text.
///
/// Built once per load and never mutated afterwards. Every category is present; empty
/// lists are valid.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TermSet {
    lists: BTreeMap<Category, Vec<String>>,
}

impl Default for TermSet {
    fn default() -> Self {
        Self::new()
    }
}

impl TermSet {
    /// Term set with every category empty.
    pub fn new() -> Self {
        Self {
            lists: Category::ALL.iter().map(|&c| (c, Vec::new())).collect(),
        }
    }

    /// Replace the list for `category`.
    pub fn with(mut self, category: Category, terms: Vec<String>) -> Self {
        self.lists.insert(category, terms);
        self
    }

    /// Terms for `category` (empty slice when absent).
    pub fn get(&self, category: Category) -> &[String] {
        self.lists.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Categories holding at least one term, in canonical order.
    pub fn non_empty_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|&c| !self.get(c).is_empty())
            .collect()
    }

    /// `true` when every category is empty.
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|&c| self.get(c).is_empty())
    }

    /// Total number of terms across categories.
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|&c| self.get(c).len()).sum()
    }
}
