// Parsing raw word-list entries out of JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::SourceError;

/// A named synonym group: every variant is accepted as `base`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRecord {
    pub base: String,
    #[serde(default)]
    pub variants: Vec<String>,
}

impl AliasRecord {
    pub fn new<I, S>(base: impl Into<String>, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base: base.into(),
            variants: variants.into_iter().map(Into::into).collect(),
        }
    }
}

/// The entry collection of one word list, after shape checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawEntries {
    /// Flat list of plain words.
    Words(Vec<String>),
    /// List of alias records.
    Aliases(Vec<AliasRecord>),
}

impl RawEntries {
    /// Number of raw entries (words or alias records).
    pub fn len(&self) -> usize {
        match self {
            RawEntries::Words(w) => w.len(),
            RawEntries::Aliases(a) => a.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check the shape of a JSON entry collection.
    ///
    /// The value must be an array whose items are either all strings or all
    /// objects. The first item decides which; an empty array is an empty
    /// word list.
    pub fn from_json(value: &Value) -> Result<Self, SourceError> {
        let items = value
            .as_array()
            .ok_or_else(|| SourceError::NotAList(json_kind(value)))?;

        match items.first() {
            None => Ok(RawEntries::Words(Vec::new())),
            Some(Value::Object(_)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| parse_alias(index, item))
                .collect::<Result<Vec<_>, _>>()
                .map(RawEntries::Aliases),
            Some(_) => items
                .iter()
                .enumerate()
                .map(|(index, item)| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(SourceError::MixedEntries {
                        index,
                        found: json_kind(other),
                        expected: "a string",
                    }),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(RawEntries::Words),
        }
    }
}

fn parse_alias(index: usize, item: &Value) -> Result<AliasRecord, SourceError> {
    if !item.is_object() {
        return Err(SourceError::MixedEntries {
            index,
            found: json_kind(item),
            expected: "an alias record",
        });
    }
    AliasRecord::deserialize(item).map_err(|e| SourceError::BadAliasRecord {
        index,
        message: e.to_string(),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_words() {
        let entries = RawEntries::from_json(&json!(["Haus", "Fu\u{00DF}"])).unwrap();
        assert_eq!(
            entries,
            RawEntries::Words(vec!["Haus".to_string(), "Fu\u{00DF}".to_string()])
        );
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn alias_records() {
        let entries = RawEntries::from_json(&json!([
            { "base": "Czechia", "variants": ["Czech Republic"] },
            { "base": "France" }
        ]))
        .unwrap();
        assert_eq!(
            entries,
            RawEntries::Aliases(vec![
                AliasRecord::new("Czechia", ["Czech Republic"]),
                AliasRecord::new("France", Vec::<String>::new()),
            ])
        );
    }

    #[test]
    fn empty_array_is_empty_word_list() {
        let entries = RawEntries::from_json(&json!([])).unwrap();
        assert!(entries.is_empty());
        assert_eq!(entries, RawEntries::Words(Vec::new()));
    }

    #[test]
    fn not_a_list() {
        assert_eq!(
            RawEntries::from_json(&json!({ "words": ["a"] })),
            Err(SourceError::NotAList("an object"))
        );
        assert_eq!(RawEntries::from_json(&json!(null)), Err(SourceError::NotAList("null")));
        assert_eq!(
            RawEntries::from_json(&json!("haus")),
            Err(SourceError::NotAList("a string"))
        );
    }

    #[test]
    fn mixed_words_and_records() {
        assert_eq!(
            RawEntries::from_json(&json!(["haus", { "base": "x" }])),
            Err(SourceError::MixedEntries {
                index: 1,
                found: "an object",
                expected: "a string",
            })
        );
        assert_eq!(
            RawEntries::from_json(&json!([{ "base": "x" }, "haus"])),
            Err(SourceError::MixedEntries {
                index: 1,
                found: "a string",
                expected: "an alias record",
            })
        );
    }

    #[test]
    fn non_string_word() {
        assert!(matches!(
            RawEntries::from_json(&json!([1, 2])),
            Err(SourceError::MixedEntries { index: 0, found: "a number", .. })
        ));
    }

    #[test]
    fn alias_record_without_base() {
        let err = RawEntries::from_json(&json!([{ "variants": ["x"] }])).unwrap_err();
        assert!(matches!(err, SourceError::BadAliasRecord { index: 0, .. }));
    }

    #[test]
    fn alias_record_with_bad_variants() {
        let err = RawEntries::from_json(&json!([
            { "base": "ok" },
            { "base": "czechia", "variants": "czech republic" }
        ]))
        .unwrap_err();
        assert!(matches!(err, SourceError::BadAliasRecord { index: 1, .. }));
    }
}
