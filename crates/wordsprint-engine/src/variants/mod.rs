// Variant mappings: every accepted spelling of a list, keyed to its base word.

pub mod builder;
pub mod entries;

use hashbrown::{HashMap, HashSet};

pub use builder::build_variant_mapping;
pub use entries::{AliasRecord, RawEntries};

use crate::session::Resolver;

/// Malformed word-list source data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The entry collection is not a JSON array.
    #[error("entries are not a list (found {0})")]
    NotAList(&'static str),

    /// The array mixes plain words with alias records, or holds something else.
    #[error("entry {index} is {found}, expected {expected}")]
    MixedEntries {
        index: usize,
        found: &'static str,
        expected: &'static str,
    },

    /// An object entry does not have the `{base, variants}` shape.
    #[error("alias record {index} is malformed: {message}")]
    BadAliasRecord { index: usize, message: String },

    /// The list names an orthography this build does not know.
    #[error("unknown orthography: {0}")]
    UnknownOrthography(String),
}

/// Mapping from every accepted (case-folded) spelling of a word list to its
/// canonical base word.
///
/// Every base word is itself a key resolving to itself, so the mapping is
/// total over everything a player may type for this list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantMapping {
    list_id: String,
    variants: HashMap<String, String>,
    bases: HashSet<String>,
}

impl VariantMapping {
    pub(crate) fn new(list_id: impl Into<String>) -> Self {
        Self {
            list_id: list_id.into(),
            ..Self::default()
        }
    }

    /// Record `variant` as a spelling of `base`. The last insertion for a
    /// variant wins; identity entries are re-asserted afterwards by the builder.
    pub(crate) fn insert(&mut self, variant: String, base: &str) {
        self.variants.insert(variant, base.to_string());
    }

    pub(crate) fn insert_base(&mut self, base: String) {
        self.variants.insert(base.clone(), base.clone());
        self.bases.insert(base);
    }

    /// Identifier of the word list this mapping was built for.
    pub fn list_id(&self) -> &str {
        &self.list_id
    }

    /// Look up the base word for an already-folded spelling.
    pub fn resolve(&self, folded: &str) -> Option<&str> {
        self.variants.get(folded).map(String::as_str)
    }

    /// Number of accepted spellings, base words included.
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    /// Number of canonical base words, i.e. the most points a round can score.
    pub fn base_count(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn bases(&self) -> impl Iterator<Item = &str> {
        self.bases.iter().map(String::as_str)
    }

    /// All `(variant, base)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variants.iter().map(|(v, b)| (v.as_str(), b.as_str()))
    }

    /// Every spelling that resolves to `base`, sorted.
    pub fn variants_of(&self, base: &str) -> Vec<&str> {
        let mut found: Vec<&str> = self
            .variants
            .iter()
            .filter(|(_, b)| b.as_str() == base)
            .map(|(v, _)| v.as_str())
            .collect();
        found.sort_unstable();
        found
    }
}

impl Resolver for VariantMapping {
    fn resolve(&self, folded: &str) -> Option<&str> {
        VariantMapping::resolve(self, folded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_resolves_to_itself() {
        let mut m = VariantMapping::new("en");
        m.insert_base("berlin".to_string());
        assert_eq!(m.resolve("berlin"), Some("berlin"));
        assert_eq!(m.bases().collect::<Vec<_>>(), ["berlin"]);
        assert_eq!(m.variant_count(), 1);
        assert_eq!(m.base_count(), 1);
        assert_eq!(m.list_id(), "en");
    }

    #[test]
    fn variant_resolves_to_base() {
        let mut m = VariantMapping::new("countries");
        m.insert("czech republic".to_string(), "czechia");
        m.insert_base("czechia".to_string());
        assert_eq!(m.resolve("czech republic"), Some("czechia"));
        assert_eq!(m.bases().collect::<Vec<_>>(), ["czechia"]);
        assert_eq!(m.variants_of("czechia"), vec!["czech republic", "czechia"]);
    }

    #[test]
    fn missing_variant() {
        let m = VariantMapping::new("en");
        assert_eq!(m.resolve("anything"), None);
        assert!(m.is_empty());
    }

    #[test]
    fn insert_base_overrides_earlier_variant() {
        let mut m = VariantMapping::new("de");
        m.insert("schon".to_string(), "sch\u{00F6}n");
        m.insert_base("schon".to_string());
        assert_eq!(m.resolve("schon"), Some("schon"));
    }
}
