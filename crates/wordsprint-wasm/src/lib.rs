// WASM bindings for the wordsprint word game.
//
// Provides a `WasmWordSprint` class exported via wasm-bindgen that owns the
// list catalog and at most one round in progress. The page keeps the
// countdown: it calls `endRound()` when time runs out and stops submitting.
// Reports and summaries are serialized to JavaScript values using
// serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const game = new WasmWordSprint([
//     { id: "en", entries: ["apple", "berlin"] },
//     { id: "de", orthography: "german", entries: ["Straße"] },
//     { id: "countries", entries: [{ base: "Czechia", variants: ["Czech Republic"] }] },
//   ]);
//   game.listIds();                 // => ["en", "de", "countries"]
//   game.startRound("de");
//   game.submit("Strasse");         // => { accepted: true, base: "straße", reason: null, message: null }
//   game.submit("straße");          // => { accepted: false, ..., reason: "already_used", message: "\"straße\" wurde ..." }
//   game.score();                   // => 1
//   game.endRound();                // => { listId: "de", score: 1, enteredWords: ["strasse"], gameOver: "Game Over! ..." }

use serde::Serialize;
use wasm_bindgen::prelude::*;

use wordsprint_core::enums::Verdict;
use wordsprint_core::report::{ReportReason, SubmitReport};
use wordsprint_engine::catalog::{Catalog, CatalogError, ListSource};
use wordsprint_engine::messages::{self, Messages};
use wordsprint_engine::session::{Round, RoundSummary};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Submit report plus the localized feedback line for rejections.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSubmitReport {
    accepted: bool,
    base: Option<String>,
    reason: Option<ReportReason>,
    message: Option<String>,
}

/// End-of-round summary.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsRoundSummary {
    list_id: String,
    score: usize,
    entered_words: Vec<String>,
    game_over: String,
    /// Set when no word was accepted.
    empty_message: Option<String>,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn submit_report(list_id: &str, verdict: Option<Verdict>) -> JsSubmitReport {
    let message = match &verdict {
        Some(Verdict::Rejected { entered, reason }) => {
            Some(Messages::for_list(list_id).render(entered, *reason))
        }
        _ => None,
    };
    let SubmitReport {
        accepted,
        base,
        reason,
    } = SubmitReport::from(verdict);
    JsSubmitReport {
        accepted,
        base,
        reason,
        message,
    }
}

fn round_summary(summary: RoundSummary) -> JsRoundSummary {
    let empty_message = summary
        .entered_words
        .is_empty()
        .then(|| messages::NO_WORDS_ENTERED.to_string());
    JsRoundSummary {
        game_over: messages::game_over(summary.score),
        list_id: summary.list_id,
        score: summary.score,
        entered_words: summary.entered_words,
        empty_message,
    }
}

fn catalog_error_to_js(e: CatalogError) -> JsError {
    match e {
        CatalogError::EmptyList(_) => JsError::new(messages::NO_WORDS_AVAILABLE),
        other => JsError::new(&other.to_string()),
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

const NO_ROUND: &str = "no round in progress";

// ============================================================================
// WasmWordSprint
// ============================================================================

/// Word game engine for WebAssembly.
#[wasm_bindgen]
pub struct WasmWordSprint {
    catalog: Catalog,
    round: Option<Round>,
}

#[wasm_bindgen]
impl WasmWordSprint {
    /// Build the catalog from an array of `{ id, orthography?, entries }`
    /// objects.
    ///
    /// Lists whose entries are malformed are left out and reported by
    /// `unavailableLists()`; only a value that is not an array of list
    /// objects at all is an error.
    #[wasm_bindgen(constructor)]
    pub fn new(sources: JsValue) -> Result<WasmWordSprint, JsError> {
        let sources: Vec<ListSource> = serde_wasm_bindgen::from_value(sources)
            .map_err(|e| JsError::new(&format!("invalid list sources: {e}")))?;
        Ok(WasmWordSprint {
            catalog: Catalog::initialize(sources),
            round: None,
        })
    }

    /// Ids of the lists that can be played, in source order.
    #[wasm_bindgen(js_name = "listIds")]
    pub fn list_ids(&self) -> Vec<String> {
        self.catalog.list_ids().map(str::to_string).collect()
    }

    /// Ids of the lists that failed to build.
    #[wasm_bindgen(js_name = "unavailableLists")]
    pub fn unavailable_lists(&self) -> Vec<String> {
        self.catalog.unavailable().to_vec()
    }

    #[wasm_bindgen(js_name = "hasList")]
    pub fn has_list(&self, list_id: &str) -> bool {
        self.catalog.contains(list_id)
    }

    /// Start a new round on `list_id`, discarding any round in progress.
    #[wasm_bindgen(js_name = "startRound")]
    pub fn start_round(&mut self, list_id: &str) -> Result<(), JsError> {
        let round = Round::start(&self.catalog, list_id).map_err(catalog_error_to_js)?;
        self.round = Some(round);
        Ok(())
    }

    /// Check a submission in the current round.
    ///
    /// Returns `{ accepted, base, reason, message }`. Blank input yields
    /// `reason: "empty"` and changes nothing.
    pub fn submit(&mut self, raw: &str) -> Result<JsValue, JsError> {
        let round = self.round.as_mut().ok_or_else(|| JsError::new(NO_ROUND))?;
        let verdict = round.submit(raw);
        to_js(&submit_report(round.list_id(), verdict))
    }

    /// Score of the current round, 0 when none is running.
    pub fn score(&self) -> usize {
        self.round.as_ref().map_or(0, Round::score)
    }

    /// Accepted inputs of the current round, in entry order.
    #[wasm_bindgen(js_name = "enteredWords")]
    pub fn entered_words(&self) -> Vec<String> {
        self.round
            .as_ref()
            .map(|r| r.entered_words().to_vec())
            .unwrap_or_default()
    }

    #[wasm_bindgen(js_name = "isRoundActive")]
    pub fn is_round_active(&self) -> bool {
        self.round.is_some()
    }

    /// Finish the current round.
    ///
    /// Returns `{ listId, score, enteredWords, gameOver, emptyMessage }`.
    #[wasm_bindgen(js_name = "endRound")]
    pub fn end_round(&mut self) -> Result<JsValue, JsError> {
        let round = self.round.take().ok_or_else(|| JsError::new(NO_ROUND))?;
        to_js(&round_summary(round.end()))
    }

    /// Base word that `word` counts as in `list_id`, or null.
    pub fn resolve(&self, list_id: &str, word: &str) -> Option<String> {
        let mapping = self.catalog.mapping(list_id).ok()?;
        let folded = wordsprint_core::normalize::normalize(word)?;
        mapping.resolve(&folded).map(str::to_string)
    }
}
