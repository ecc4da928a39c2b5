// One timed play-through: its own used words, entered-words log and score.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use wordsprint_core::enums::Verdict;

use super::{UsedWords, submit};
use crate::catalog::{Catalog, CatalogError};
use crate::variants::VariantMapping;

/// End-of-round result handed back to the caller for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    pub list_id: String,
    pub score: usize,
    /// Accepted inputs (trimmed and folded), in entry order.
    pub entered_words: Vec<String>,
}

/// A round in progress.
///
/// The round has no notion of time: the caller stops submitting once its
/// countdown runs out. [`Round::submit`] takes `&mut self`, so the
/// already-used check and the insertion happen as one step; a round shared
/// between threads must sit behind a `Mutex`.
#[derive(Debug, Clone)]
pub struct Round {
    mapping: Arc<VariantMapping>,
    used: UsedWords,
    entered: Vec<String>,
}

impl Round {
    /// Start a round on the list `list_id`.
    ///
    /// Fails with [`CatalogError::ListUnavailable`] when the list was never
    /// built, and with [`CatalogError::EmptyList`] when it has no words.
    pub fn start(catalog: &Catalog, list_id: &str) -> Result<Self, CatalogError> {
        Self::with_mapping(catalog.shared_mapping(list_id)?)
    }

    /// Start a round directly on a mapping.
    pub fn with_mapping(mapping: Arc<VariantMapping>) -> Result<Self, CatalogError> {
        if mapping.is_empty() {
            return Err(CatalogError::EmptyList(mapping.list_id().to_string()));
        }
        info!(list = mapping.list_id(), words = mapping.base_count(), "round started");
        Ok(Self {
            mapping,
            used: UsedWords::new(),
            entered: Vec::new(),
        })
    }

    /// Check `raw` and record it if it scores.
    ///
    /// Returns `None` for blank input, which leaves the round untouched.
    pub fn submit(&mut self, raw: &str) -> Option<Verdict> {
        let verdict = submit(raw, self.mapping.as_ref(), &self.used)?;
        if let Verdict::Accepted { base, entered } = &verdict {
            self.used.insert(base.clone());
            self.entered.push(entered.clone());
            debug!(list = self.mapping.list_id(), base = %base, score = self.score(), "word accepted");
        }
        Some(verdict)
    }

    pub fn list_id(&self) -> &str {
        self.mapping.list_id()
    }

    pub fn mapping(&self) -> &VariantMapping {
        &self.mapping
    }

    /// One point per accepted word.
    pub fn score(&self) -> usize {
        self.entered.len()
    }

    pub fn used_words(&self) -> &UsedWords {
        &self.used
    }

    pub fn entered_words(&self) -> &[String] {
        &self.entered
    }

    /// Whether every base word of the list has been used.
    pub fn is_exhausted(&self) -> bool {
        self.used.len() >= self.mapping.base_count()
    }

    /// Finish the round, discarding its used-words set.
    pub fn end(self) -> RoundSummary {
        let summary = RoundSummary {
            list_id: self.mapping.list_id().to_string(),
            score: self.entered.len(),
            entered_words: self.entered,
        };
        info!(list = %summary.list_id, score = summary.score, "round ended");
        summary
    }
}
