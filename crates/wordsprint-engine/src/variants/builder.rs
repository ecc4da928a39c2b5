// Building variant mappings from raw entries.

use tracing::debug;

use wordsprint_core::normalize::normalize;

use super::{AliasRecord, RawEntries, VariantMapping};
use crate::orthography::{Orthography, expand::expand_variants};

/// Build the variant mapping for one word list.
///
/// - Plain words map to themselves, after expansion under `orthography`.
/// - Alias records map every variant, and the base itself, to the base.
///   Orthography rules are not applied to alias lists.
///
/// Entries are trimmed and case-folded first; blank entries are skipped.
/// When two entries claim the same spelling, a base word always keeps its
/// identity entry, and otherwise the later entry wins.
pub fn build_variant_mapping(
    list_id: &str,
    entries: &RawEntries,
    orthography: Orthography,
) -> VariantMapping {
    match entries {
        RawEntries::Words(words) => build_from_words(list_id, words, orthography),
        RawEntries::Aliases(records) => build_from_aliases(list_id, records),
    }
}

/// Map each plain word, and each spelling the rules derive from it, to the
/// folded word.
pub fn build_from_words<S: AsRef<str>>(
    list_id: &str,
    words: &[S],
    orthography: Orthography,
) -> VariantMapping {
    let mut mapping = VariantMapping::new(list_id);
    let rules = orthography.rules();
    let mut bases = Vec::with_capacity(words.len());

    for word in words {
        let Some(base) = normalize(word.as_ref()) else {
            debug!(list = list_id, "skipping blank word entry");
            continue;
        };
        if !rules.is_empty() {
            let variants = expand_variants(&base, rules);
            if variants.len() > 1 {
                debug!(list = list_id, word = %base, count = variants.len(), "expanded spelling variants");
            }
            // the first variant is the word itself
            for variant in variants.into_iter().skip(1) {
                mapping.insert(variant, &base);
            }
        }
        bases.push(base);
    }

    for base in bases {
        mapping.insert_base(base);
    }
    mapping
}

/// Map every alias, and each record's base, to the folded base.
pub fn build_from_aliases(list_id: &str, records: &[AliasRecord]) -> VariantMapping {
    let mut mapping = VariantMapping::new(list_id);
    let mut bases = Vec::with_capacity(records.len());

    for record in records {
        let Some(base) = normalize(&record.base) else {
            debug!(list = list_id, "skipping alias record with blank base");
            continue;
        };
        for variant in &record.variants {
            match normalize(variant) {
                Some(v) => mapping.insert(v, &base),
                None => debug!(list = list_id, base = %base, "skipping blank alias"),
            }
        }
        bases.push(base);
    }

    for base in bases {
        mapping.insert_base(base);
    }
    mapping
}
