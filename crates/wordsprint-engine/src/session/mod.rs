// Validation session: deciding whether a typed string scores.

pub mod round;

use hashbrown::HashSet;
use tracing::trace;

use wordsprint_core::enums::{RejectReason, Verdict};
use wordsprint_core::normalize::normalize;

pub use round::{Round, RoundSummary};

/// Canonical base words accepted so far in a round.
pub type UsedWords = HashSet<String>;

/// Resolves a folded spelling to its canonical base word.
///
/// Implemented by [`VariantMapping`](crate::variants::VariantMapping);
/// tests and callers with their own tables can supply any lookup.
pub trait Resolver {
    fn resolve(&self, folded: &str) -> Option<&str>;
}

/// Decide whether `raw` scores against `resolver` given the words already used.
///
/// Returns `None` for blank input. This never mutates anything: on
/// [`Verdict::Accepted`] the caller records `base` in `used` and appends
/// `entered` to its log.
pub fn submit<R: Resolver + ?Sized>(raw: &str, resolver: &R, used: &UsedWords) -> Option<Verdict> {
    let entered = normalize(raw)?;

    let verdict = match resolver.resolve(&entered) {
        None => Verdict::Rejected {
            entered,
            reason: RejectReason::NotAWord,
        },
        Some(base) if used.contains(base) => Verdict::Rejected {
            entered,
            reason: RejectReason::AlreadyUsed,
        },
        Some(base) => Verdict::Accepted {
            base: base.to_string(),
            entered,
        },
    };
    trace!(entered = verdict.entered(), accepted = verdict.is_accepted(), "submission checked");
    Some(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashMap;

    struct Table(HashMap<&'static str, &'static str>);

    impl Resolver for Table {
        fn resolve(&self, folded: &str) -> Option<&str> {
            self.0.get(folded).copied()
        }
    }

    fn table() -> Table {
        Table(HashMap::from_iter([
            ("berlin", "berlin"),
            ("czechia", "czechia"),
            ("czech republic", "czechia"),
        ]))
    }

    #[test]
    fn blank_input_is_inert() {
        let used = UsedWords::new();
        assert_eq!(submit("", &table(), &used), None);
        assert_eq!(submit("   \t", &table(), &used), None);
    }

    #[test]
    fn known_word_is_accepted() {
        let used = UsedWords::new();
        assert_eq!(
            submit("berlin", &table(), &used),
            Some(Verdict::Accepted {
                base: "berlin".to_string(),
                entered: "berlin".to_string(),
            })
        );
    }

    #[test]
    fn input_is_trimmed_and_folded() {
        let used = UsedWords::new();
        assert_eq!(
            submit("  Czech Republic ", &table(), &used),
            Some(Verdict::Accepted {
                base: "czechia".to_string(),
                entered: "czech republic".to_string(),
            })
        );
    }

    #[test]
    fn unknown_word_is_rejected() {
        let used = UsedWords::new();
        assert_eq!(
            submit("Atlantis", &table(), &used),
            Some(Verdict::Rejected {
                entered: "atlantis".to_string(),
                reason: RejectReason::NotAWord,
            })
        );
    }

    #[test]
    fn used_base_is_rejected_through_any_variant() {
        let used: UsedWords = ["czechia".to_string()].into_iter().collect();
        for spelling in ["czechia", "Czech Republic"] {
            assert_eq!(
                submit(spelling, &table(), &used).and_then(|v| v.reason()),
                Some(RejectReason::AlreadyUsed)
            );
        }
    }

    #[test]
    fn unknown_beats_already_used() {
        let used: UsedWords = ["atlantis".to_string()].into_iter().collect();
        assert_eq!(
            submit("atlantis", &table(), &used).and_then(|v| v.reason()),
            Some(RejectReason::NotAWord)
        );
    }

    #[test]
    fn submit_does_not_touch_used_words() {
        let used = UsedWords::new();
        let _ = submit("berlin", &table(), &used);
        assert!(used.is_empty());
    }
}
