//! Integration tests for prefix-first fuzzy matching.

use slangdex::config::{MatcherConfig, SlangdexConfig};
use slangdex::lexicon::Lexicon;
use slangdex::matcher::*;

fn listings(keys: &[&str]) -> Vec<WordListing> {
    keys.iter().map(|key| WordListing::new(*key, "")).collect()
}

fn keys(matches: &[MatchedEntry]) -> Vec<&str> {
    matches.iter().map(|m| m.key.as_str()).collect()
}

#[test]
fn test_prefix_then_fuzzy_by_score() {
    let words = listings(&["our", "aura", "bar"]);
    let matches = find_words("aur", &words, Some(10));

    assert_eq!(keys(&matches), vec!["aura", "bar", "our"]);
    assert_eq!(matches[0].tier, MatchTier::Prefix);
    assert!(matches[1..].iter().all(|m| m.tier == MatchTier::Fuzzy));
}

#[test]
fn test_prefix_tier_is_never_capped() {
    let owned: Vec<String> = (0..20).map(|i| format!("ab{i:02}")).collect();
    let words: Vec<WordListing> = owned.iter().map(|key| WordListing::new(key.as_str(), "")).collect();

    let matches = find_words("ab", &words, Some(1));

    assert_eq!(matches.len(), 20);
    assert!(matches.iter().all(|m| m.tier == MatchTier::Prefix));
    assert_eq!(matches[0].key, "ab00");
    assert_eq!(matches[19].key, "ab19");
}

#[test]
fn test_fuzzy_tier_is_capped_and_sorted() {
    let words = listings(&["slay", "sly", "say", "stay", "play", "clay"]);
    let matches = find_words("sxay", &words, Some(3));

    assert!(matches.len() <= 3);
    for pair in matches.windows(2) {
        assert!(pair[0].score <= pair[1].score);
    }
}

#[test]
fn test_scores_respect_threshold() {
    let config = MatcherConfig::default();
    let threshold = config.threshold;
    let matcher = FuzzyMatcher::new(config);
    let words = listings(&["bussin", "busing", "cousin", "basin", "raisin", "goat"]);

    let matches = matcher.find_words("bussn", &words, Some(10), &FindOptions::default());

    assert_eq!(&keys(&matches)[..2], &["bussin", "busing"]);
    assert!(matches.iter().all(|m| m.score <= threshold));
    assert!(!keys(&matches).contains(&"goat"));
}

#[test]
fn test_short_query_only_matches_prefixes() {
    let words = listings(&["x-ray", "ox", "box"]);
    let matches = find_words("x", &words, Some(10));

    assert_eq!(keys(&matches), vec!["x-ray"]);
}

#[test]
fn test_empty_query_matches_nothing() {
    let words = listings(&["rizz"]);
    assert!(find_words("", &words, None).is_empty());
    assert!(find_words("rizz", &[], None).is_empty());
}

#[test]
fn test_case_insensitive_prefix() {
    let words = listings(&["Sped", "sus"]);
    let matches = find_words("SP", &words, None);
    assert_eq!(keys(&matches), vec!["Sped"]);
}

#[test]
fn test_part_of_speech_filter_on_lexicon() {
    let lexicon = Lexicon::builtin(SlangdexConfig::default());
    let matches = lexicon.find_words("s", None, &FindOptions::part_of_speech("Noun"));

    assert_eq!(keys(&matches), vec!["Sped", "simp", "stan"]);
}

#[test]
fn test_display_text_matches_are_flagged() {
    let words = vec![
        WordListing::new("goat", "Greatest of all time."),
        WordListing::new("sus", "Suspicious or shady."),
    ];
    let matches = find_words("greatest", &words, None);

    assert_eq!(keys(&matches), vec!["goat"]);
    assert_eq!(matches[0].matched_on, MatchField::DisplayText);
    assert!(matches[0].score >= MatcherConfig::default().display_text_penalty);
}
