//! Property tests for the submission rules.

use std::sync::Arc;

use proptest::prelude::*;
use wordsprint_core::enums::{RejectReason, Verdict};
use wordsprint_engine::orthography::Orthography;
use wordsprint_engine::session::{self, Round, UsedWords};
use wordsprint_engine::variants::builder::{build_from_aliases, build_from_words};
use wordsprint_engine::variants::{AliasRecord, VariantMapping};

fn plain_word() -> impl Strategy<Value = String> {
    "[a-z]{1,12}"
}

fn plain_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(plain_word(), 1..40)
}

/// Lowercase words over a small alphabet that includes the German rule characters.
fn german_word() -> impl Strategy<Value = String> {
    "[abe\u{00E4}\u{00F6}\u{00FC}\u{00DF}]{1,8}"
}

fn plain_mapping(words: &[String]) -> VariantMapping {
    build_from_words("en", words, Orthography::Plain)
}

proptest! {
    #[test]
    fn every_plain_word_is_accepted_as_itself(words in plain_list()) {
        let mapping = plain_mapping(&words);
        for w in &words {
            let verdict = session::submit(w, &mapping, &UsedWords::new());
            prop_assert_eq!(
                verdict,
                Some(Verdict::Accepted { base: w.clone(), entered: w.clone() })
            );
        }
    }

    #[test]
    fn used_words_are_rejected(words in plain_list()) {
        let mapping = plain_mapping(&words);
        let used: UsedWords = words.iter().cloned().collect();
        for w in &words {
            let verdict = session::submit(w, &mapping, &used);
            prop_assert_eq!(verdict.and_then(|v| v.reason()), Some(RejectReason::AlreadyUsed));
        }
    }

    #[test]
    fn unknown_strings_are_rejected(words in plain_list(), probe in "[a-z]{1,12}", used_count in 0usize..5) {
        let mapping = plain_mapping(&words);
        prop_assume!(!words.contains(&probe));
        let used: UsedWords = words.iter().take(used_count).cloned().collect();
        let verdict = session::submit(&probe, &mapping, &used);
        prop_assert_eq!(verdict.and_then(|v| v.reason()), Some(RejectReason::NotAWord));
    }

    #[test]
    fn case_does_not_matter(words in plain_list()) {
        let mapping = plain_mapping(&words);
        let used: UsedWords = words.iter().step_by(2).cloned().collect();
        for w in &words {
            prop_assert_eq!(
                session::submit(&w.to_uppercase(), &mapping, &used).map(|v| (v.base().map(str::to_string), v.reason())),
                session::submit(w, &mapping, &used).map(|v| (v.base().map(str::to_string), v.reason()))
            );
        }
    }

    #[test]
    fn blank_input_changes_nothing(words in plain_list(), blank in "[ \t\r\n\u{00A0}\u{3000}]{0,6}") {
        let mut round = Round::with_mapping(Arc::new(plain_mapping(&words))).unwrap();
        round.submit(&words[0]);
        prop_assert_eq!(round.submit(&blank), None);
        prop_assert_eq!(round.used_words().len(), 1);
        prop_assert_eq!(round.entered_words().len(), 1);
    }

    #[test]
    fn rejections_change_nothing(words in plain_list(), inputs in prop::collection::vec("[a-z]{1,12}", 1..30)) {
        let mut round = Round::with_mapping(Arc::new(plain_mapping(&words))).unwrap();
        for input in &inputs {
            let used_before = round.used_words().clone();
            let log_before = round.entered_words().to_vec();
            match round.submit(input) {
                Some(Verdict::Accepted { .. }) => {
                    prop_assert_eq!(round.used_words().len(), used_before.len() + 1);
                    prop_assert_eq!(round.entered_words().len(), log_before.len() + 1);
                }
                Some(Verdict::Rejected { .. }) | None => {
                    prop_assert_eq!(round.used_words(), &used_before);
                    prop_assert_eq!(round.entered_words(), log_before.as_slice());
                }
            }
        }
        prop_assert_eq!(round.score(), round.used_words().len());
    }

    #[test]
    fn german_substitutions_resolve_to_original(word in german_word()) {
        let mapping = build_from_words("de", std::slice::from_ref(&word), Orthography::German);
        let rules = Orthography::German.rules();
        prop_assert_eq!(mapping.resolve(&word), Some(word.as_str()));

        // every full substitution of one rule character resolves to the word
        for rule in rules.iter().filter(|r| word.contains(r.target)) {
            for replacement in rule.replacements {
                let variant = word.replace(rule.target, replacement);
                prop_assert_eq!(mapping.resolve(&variant), Some(word.as_str()), "{}", variant);
            }
        }

        // and so does the fully folded spelling using each rule's first replacement
        let mut folded = word.clone();
        for rule in rules {
            folded = folded.replace(rule.target, rule.replacements[0]);
        }
        prop_assert_eq!(mapping.resolve(&folded), Some(word.as_str()));
    }

    #[test]
    fn german_spellings_are_mutually_exclusive(word in german_word()) {
        let mapping = build_from_words("de", std::slice::from_ref(&word), Orthography::German);
        let spellings: Vec<String> = mapping.variants_of(&word).into_iter().map(str::to_string).collect();
        let mut round = Round::with_mapping(Arc::new(mapping)).unwrap();
        let mut iter = spellings.iter();
        if let Some(first) = iter.next() {
            prop_assert!(round.submit(first).is_some_and(|v| v.is_accepted()));
        }
        for other in iter {
            prop_assert_eq!(round.submit(other).and_then(|v| v.reason()), Some(RejectReason::AlreadyUsed));
        }
        prop_assert_eq!(round.score(), 1);
    }

    #[test]
    fn alias_groups_share_one_base(base in plain_word(), aliases in prop::collection::vec("[a-z]{1,6} [a-z]{1,6}", 1..4)) {
        let mapping = build_from_aliases("countries", &[AliasRecord::new(base.clone(), aliases.clone())]);
        let mut round = Round::with_mapping(Arc::new(mapping)).unwrap();
        prop_assert_eq!(round.submit(&aliases[0].to_uppercase()).and_then(|v| v.base().map(str::to_string)), Some(base.clone()));
        prop_assert_eq!(round.submit(&base).and_then(|v| v.reason()), Some(RejectReason::AlreadyUsed));
        for alias in &aliases {
            prop_assert_eq!(round.submit(alias).and_then(|v| v.reason()), Some(RejectReason::AlreadyUsed));
        }
    }
}

#[test]
fn czechia_alias_example() {
    let mapping = build_from_aliases("countries", &[AliasRecord::new("czechia", ["czech republic"])]);
    let mut round = Round::with_mapping(Arc::new(mapping)).unwrap();
    assert_eq!(round.submit("czechia").unwrap().base(), Some("czechia"));
    assert_eq!(
        round.submit("Czech Republic").unwrap().reason(),
        Some(RejectReason::AlreadyUsed)
    );
}

#[test]
fn berlin_case_insensitive() {
    let mapping = plain_mapping(&["berlin".to_string()]);
    let used = UsedWords::new();
    assert_eq!(
        session::submit("Berlin", &mapping, &used),
        session::submit("berlin", &mapping, &used)
    );
}
