// Orthographic substitution rules for plain word lists.

pub mod expand;
pub(crate) mod german;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::variants::SourceError;

/// One substitution rule: every occurrence of `target` may instead be typed
/// as any of `replacements`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstitutionRule {
    /// The (lowercase) character being replaced.
    pub target: char,
    /// Alternative spellings, in the order they are applied.
    pub replacements: &'static [&'static str],
}

/// Spelling-variant rules a plain word list is expanded with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orthography {
    /// Every word is accepted only as written.
    #[default]
    Plain,
    /// Umlauts fold to `e`-digraphs or bare vowels, `ß` folds to `ss`.
    German,
}

impl Orthography {
    /// The ordered rule set for this orthography.
    pub fn rules(self) -> &'static [SubstitutionRule] {
        match self {
            Orthography::Plain => &[],
            Orthography::German => german::GERMAN_RULES,
        }
    }

    /// Name used in list files.
    pub fn name(self) -> &'static str {
        match self {
            Orthography::Plain => "plain",
            Orthography::German => "german",
        }
    }
}

impl fmt::Display for Orthography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Orthography {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(Orthography::Plain),
            "german" | "de" => Ok(Orthography::German),
            _ => Err(SourceError::UnknownOrthography(s.to_string())),
        }
    }
}
