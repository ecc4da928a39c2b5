// Iterative substitution expansion over a growing variant set.

use hashbrown::HashSet;
use tracing::trace;

use super::SubstitutionRule;

/// Expand a folded word into every spelling reachable under `rules`.
///
/// Rules are applied in order, and only when the word itself contains the
/// rule's target. Each application substitutes *all* occurrences of the
/// target in every variant collected so far, once per replacement, and
/// adds the results to the set without dropping the originals. A word with
/// two rule characters therefore yields every combination of both, along
/// with partially substituted forms such as `"grosse"` next to `"größe"`.
///
/// The original word is always the first element; the rest keep the order
/// in which they were first produced, without duplicates.
pub fn expand_variants(word: &str, rules: &[SubstitutionRule]) -> Vec<String> {
    let mut variants = vec![word.to_string()];

    for rule in rules {
        if !word.contains(rule.target) {
            continue;
        }
        let mut produced = Vec::with_capacity(variants.len() * rule.replacements.len());
        for variant in &variants {
            for replacement in rule.replacements {
                produced.push(variant.replace(rule.target, replacement));
            }
        }
        trace!(word, rule_char = %rule.target, produced = produced.len(), "applied substitution rule");
        variants.extend(produced);
    }

    let mut seen = HashSet::with_capacity(variants.len());
    variants.retain(|v| seen.insert(v.clone()));
    variants
}
