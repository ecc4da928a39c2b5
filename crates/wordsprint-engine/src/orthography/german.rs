// German spelling substitutions.
//
// Umlauts may be typed as an `e`-digraph or as the bare vowel, and the
// sharp s as `ss`. Rule order matters: expansion applies the rules one at
// a time to the growing variant set.

use super::SubstitutionRule;

/// Substitution rules for German word lists, in application order.
pub(crate) const GERMAN_RULES: &[SubstitutionRule] = &[
    SubstitutionRule {
        target: '\u{00E4}', // ä
        replacements: &["ae", "a"],
    },
    SubstitutionRule {
        target: '\u{00F6}', // ö
        replacements: &["oe", "o"],
    },
    SubstitutionRule {
        target: '\u{00FC}', // ü
        replacements: &["ue", "u"],
    },
    SubstitutionRule {
        target: '\u{00DF}', // ß
        replacements: &["ss"],
    },
];
