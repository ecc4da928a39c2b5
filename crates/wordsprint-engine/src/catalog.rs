// Catalog: the immutable set of word lists built once at startup.

use std::sync::Arc;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use wordsprint_core::enums::Verdict;

use crate::orthography::Orthography;
use crate::session::{self, UsedWords};
use crate::variants::{RawEntries, SourceError, VariantMapping, build_variant_mapping};

/// Errors when asking the catalog for a list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// No mapping was built for this id (missing or malformed source data).
    #[error("word list '{0}' is not available")]
    ListUnavailable(String),

    /// The list was built but holds no words.
    #[error("word list '{0}' has no words available")]
    EmptyList(String),
}

/// Raw source data for one word list.
///
/// Deserializes from `{ "id": "de", "orthography": "german", "entries": [...] }`;
/// `orthography` may be omitted for plain lists. Entries are kept as raw JSON
/// so that malformed data surfaces per list during [`Catalog::initialize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListSource {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orthography: Option<String>,
    pub entries: Value,
}

impl ListSource {
    pub fn new(id: impl Into<String>, entries: Value) -> Self {
        Self {
            id: id.into(),
            orthography: None,
            entries,
        }
    }

    pub fn with_orthography(mut self, orthography: Orthography) -> Self {
        self.orthography = Some(orthography.name().to_string());
        self
    }

    /// Interpret a list document as stored in a list file.
    ///
    /// A document is either the bare entry array, or an object holding
    /// `entries` and optionally `orthography`. Anything else is kept as the
    /// entries themselves and rejected when the catalog is built.
    pub fn from_document(id: impl Into<String>, document: Value) -> Self {
        let id = id.into();
        match document {
            Value::Object(mut fields) if fields.contains_key("entries") => {
                let entries = fields.remove("entries").unwrap_or(Value::Null);
                let orthography = match fields.remove("orthography") {
                    Some(Value::String(name)) => Some(name),
                    Some(other) => Some(other.to_string()),
                    None => None,
                };
                Self {
                    id,
                    orthography,
                    entries,
                }
            }
            other => Self::new(id, other),
        }
    }

    /// Parse the orthography name and the entry shape.
    pub fn parse(&self) -> Result<(Orthography, RawEntries), SourceError> {
        let orthography = match &self.orthography {
            Some(name) => name.parse()?,
            None => Orthography::Plain,
        };
        let entries = RawEntries::from_json(&self.entries)?;
        Ok((orthography, entries))
    }
}

/// All word lists available to rounds, keyed by list id.
///
/// Built once by [`Catalog::initialize`] and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    lists: HashMap<String, Arc<VariantMapping>>,
    order: Vec<String>,
    unavailable: Vec<String>,
}

impl Catalog {
    /// Build every list from its source.
    ///
    /// Each list is built independently: malformed data makes only that list
    /// unavailable and is logged at warn level. If an id appears more than
    /// once, the last source decides.
    pub fn initialize<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = ListSource>,
    {
        let mut catalog = Catalog::default();

        for source in sources {
            let id = source.id.clone();
            if catalog.order.contains(&id) || catalog.unavailable.contains(&id) {
                warn!(list = %id, "word list defined more than once; the last definition wins");
                catalog.forget(&id);
            }

            match source.parse() {
                Ok((orthography, entries)) => {
                    let mapping = build_variant_mapping(&id, &entries, orthography);
                    info!(
                        list = %id,
                        %orthography,
                        words = mapping.base_count(),
                        variants = mapping.variant_count(),
                        "loaded word list"
                    );
                    catalog.lists.insert(id.clone(), Arc::new(mapping));
                    catalog.order.push(id);
                }
                Err(e) => {
                    warn!(list = %id, error = %e, "word list is unavailable");
                    catalog.unavailable.push(id);
                }
            }
        }

        catalog
    }

    fn forget(&mut self, id: &str) {
        self.lists.remove(id);
        self.order.retain(|x| x != id);
        self.unavailable.retain(|x| x != id);
    }

    /// The variant mapping for `list_id`.
    pub fn mapping(&self, list_id: &str) -> Result<&VariantMapping, CatalogError> {
        self.lists
            .get(list_id)
            .map(Arc::as_ref)
            .ok_or_else(|| CatalogError::ListUnavailable(list_id.to_string()))
    }

    /// A shared handle to the mapping, for rounds that outlive the borrow.
    pub fn shared_mapping(&self, list_id: &str) -> Result<Arc<VariantMapping>, CatalogError> {
        self.lists
            .get(list_id)
            .cloned()
            .ok_or_else(|| CatalogError::ListUnavailable(list_id.to_string()))
    }

    pub fn contains(&self, list_id: &str) -> bool {
        self.lists.contains_key(list_id)
    }

    /// Ids of successfully built lists, in source order.
    pub fn list_ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Ids whose source data could not be built, in source order.
    pub fn unavailable(&self) -> &[String] {
        &self.unavailable
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Check a submission against the list `list_id`.
    ///
    /// Same contract as [`session::submit`]; `used` is left for the caller
    /// to update.
    pub fn submit(
        &self,
        raw: &str,
        list_id: &str,
        used: &UsedWords,
    ) -> Result<Option<Verdict>, CatalogError> {
        let mapping = self.mapping(list_id)?;
        Ok(session::submit(raw, mapping, used))
    }
}
