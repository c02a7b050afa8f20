use crate::foundation::rng::RmxRng;
use crate::terms::set::{Category, TermSet};

/// Closed set of joining words placed between two terms.
pub const CONNECTORS: [&str; 12] = [
    "in", "of", "the", "on", "who", "whom", "when", "why", "how", "where", "by", "at",
];

/// Returned when the term set exists but every category is empty.
pub const SENTINEL_EMPTY: &str = "empty";
/// Returned when no term set is available (extraction failed or never ran).
pub const SENTINEL_ERROR: &str = "error";

/// Shape of a generated fragment for the animated engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentForm {
    /// `term connector term`.
    ConnectorPhrase,
    /// One term repeated 1-4 times, each followed by a space.
    MultiTermRun,
    /// A single term.
    SingleTerm,
}

/// Visual class of a block on a static remix page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockClass {
    /// Two terms around a connector.
    SmallSentence,
    /// Ten terms interleaved with connectors.
    BigSentence,
    /// A single term meant to be repeated across the block.
    MultiTerm,
    /// A single term.
    Basic,
    /// Untouched source text.
    OriginalText,
}

/// A static-page fragment together with its class and height multiplier.
#[derive(Clone, Debug, PartialEq)]
pub struct PageFragment {
    /// Base content unit (ends with a space).
    pub text: String,
    /// Visual class.
    pub class: BlockClass,
    /// Multiplier applied to the source glyph height.
    pub height_factor: f64,
}

/// Default height multiplier for static-page blocks.
pub const PAGE_HEIGHT_FACTOR: f64 = 1.8;
/// Height multiplier for big-sentence blocks.
pub const BIG_SENTENCE_HEIGHT_FACTOR: f64 = 2.5;

/// Synthesizes replacement text from a term set. Never panics and never fails: missing or
/// empty data degrades to sentinel strings.
#[derive(Clone, Copy, Debug)]
pub struct ContentGenerator<'a> {
    terms: Option<&'a TermSet>,
}

impl<'a> ContentGenerator<'a> {
    /// Generator over `terms`; `None` means the term set is unavailable.
    pub fn new(terms: Option<&'a TermSet>) -> Self {
        Self { terms }
    }

    /// Pick one term.
    ///
    /// Uses `category` when it is non-empty, otherwise a uniformly random non-empty
    /// category. Falls back to [`SENTINEL_EMPTY`] / [`SENTINEL_ERROR`].
    pub fn pick_term(&self, category: Option<Category>, rng: &mut RmxRng) -> String {
        let Some(terms) = self.terms else {
            return SENTINEL_ERROR.to_owned();
        };
        let list = match category.map(|c| terms.get(c)) {
            Some(list) if !list.is_empty() => list,
            _ => {
                let candidates = terms.non_empty_categories();
                match rng.choose(&candidates) {
                    Some(&c) => terms.get(c),
                    None => return SENTINEL_EMPTY.to_owned(),
                }
            }
        };
        rng.choose(list)
            .cloned()
            .unwrap_or_else(|| SENTINEL_EMPTY.to_owned())
    }

    /// Weighted choice among the three forms, each with weight 1/3.
    pub fn choose_form(rng: &mut RmxRng) -> ContentForm {
        let roll = rng.unit();
        if roll < 1.0 / 3.0 {
            ContentForm::ConnectorPhrase
        } else if roll < 2.0 / 3.0 {
            ContentForm::MultiTermRun
        } else {
            ContentForm::SingleTerm
        }
    }

    /// Generate one fragment with a randomly chosen form.
    pub fn generate(&self, rng: &mut RmxRng) -> String {
        let form = Self::choose_form(rng);
        self.generate_form(form, rng)
    }

    /// Generate one fragment of the given form.
    pub fn generate_form(&self, form: ContentForm, rng: &mut RmxRng) -> String {
        match form {
            ContentForm::ConnectorPhrase => {
                let a = self.pick_term(None, rng);
                let connector = random_connector(rng);
                let b = self.pick_term(None, rng);
                format!("{a} {connector} {b}")
            }
            ContentForm::MultiTermRun => {
                let term = self.pick_term(None, rng);
                let times = rng.int_inclusive(1, 4);
                format!("{term} ").repeat(times)
            }
            ContentForm::SingleTerm => self.pick_term(None, rng),
        }
    }

    /// Four-form generator used by static remix pages: small sentence 25%, big sentence
    /// 25%, multi-term 30%, basic 20%.
    pub fn page_fragment(&self, rng: &mut RmxRng) -> PageFragment {
        let roll = rng.unit();
        if roll < 0.25 {
            let a = self.pick_term(None, rng);
            let b = self.pick_term(None, rng);
            let connector = random_connector(rng);
            PageFragment {
                text: format!("{a} {connector} {b} "),
                class: BlockClass::SmallSentence,
                height_factor: PAGE_HEIGHT_FACTOR,
            }
        } else if roll < 0.5 {
            let terms: Vec<String> = (0..10).map(|_| self.pick_term(None, rng)).collect();
            let mut words: Vec<String> = Vec::with_capacity(15);
            words.push(terms[0].clone());
            for pair in terms[1..9].chunks(2) {
                words.push(random_connector(rng).to_owned());
                words.extend(pair.iter().cloned());
            }
            words.push(random_connector(rng).to_owned());
            words.push(terms[9].clone());
            PageFragment {
                text: format!("{} ", words.join(" ")),
                class: BlockClass::BigSentence,
                height_factor: BIG_SENTENCE_HEIGHT_FACTOR,
            }
        } else if roll < 0.8 {
            PageFragment {
                text: format!("{} ", self.pick_term(None, rng)),
                class: BlockClass::MultiTerm,
                height_factor: PAGE_HEIGHT_FACTOR,
            }
        } else {
            PageFragment {
                text: format!("{} ", self.pick_term(None, rng)),
                class: BlockClass::Basic,
                height_factor: PAGE_HEIGHT_FACTOR,
            }
        }
    }

    /// Chaos-page content: half `term of term `, half a term repeated five times.
    pub fn chaos_fragment(&self, rng: &mut RmxRng) -> String {
        if rng.unit() < 0.5 {
            let a = self.pick_term(None, rng);
            let b = self.pick_term(None, rng);
            format!("{a} of {b} ")
        } else {
            format!("{} ", self.pick_term(None, rng)).repeat(5)
        }
    }
}

fn random_connector(rng: &mut RmxRng) -> &'static str {
    rng.choose(&CONNECTORS).copied().unwrap_or("of")
}

/// Repeat `fragment` followed by a space `times` times. Blank fragments yield an empty
/// string.
pub fn repeat_fill(fragment: &str, times: usize) -> String {
    if fragment.trim().is_empty() {
        return String::new();
    }
    format!("{fragment} ").repeat(times.max(1))
}

#[cfg(test)]
#[path = "../../tests/unit/content/generator.rs"]
mod tests;
