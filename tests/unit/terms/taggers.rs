use super::*;

#[test]
fn suffix_tagger_classifies_common_shapes() {
    assert_eq!(SuffixTagger::classify("quickly"), Some(Category::Adverb));
    assert_eq!(SuffixTagger::classify("famous"), Some(Category::Adjective));
    assert_eq!(SuffixTagger::classify("walking"), Some(Category::Verb));
    assert_eq!(SuffixTagger::classify("river"), Some(Category::Noun));
    assert_eq!(SuffixTagger::classify("of"), None);
    assert_eq!(SuffixTagger::classify("1999"), None);
}

#[test]
fn suffix_tagger_provider_filters_by_category() {
    let words = SuffixTagger
        .words(Category::Verb, "Walking slowly, the careful river flooded.")
        .unwrap();
    assert_eq!(words, vec!["Walking".to_string(), "flooded".to_string()]);
}

#[test]
fn lexicon_matches_case_insensitively() {
    let lex = Lexicon::from_json_str(r#"{ "noun": ["River", "moon"], "verb": ["run"] }"#).unwrap();
    let nouns = lex.words(Category::Noun, "the river and the MOON run").unwrap();
    assert_eq!(nouns, vec!["river".to_string(), "MOON".to_string()]);
    assert!(lex.words(Category::Adverb, "the river").unwrap().is_empty());
}

#[test]
fn lexicon_rejects_unknown_categories() {
    assert!(Lexicon::from_json_str(r#"{ "pronoun": ["it"] }"#).is_err());
}
