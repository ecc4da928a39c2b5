//! Word-list normalization and submission validation for wordsprint.
//!
//! A player picks a word list and types as many distinct words from it as
//! they can. This crate decides what counts:
//!
//! - [`orthography`] -- spelling substitution rules (German umlauts and `ß`)
//! - [`variants`] -- raw entry parsing and variant-to-base mappings
//! - [`catalog`] -- building every list once at startup, failures isolated per list
//! - [`session`] -- the pure `submit` check and the [`Round`](session::Round) lifecycle
//! - [`messages`] -- rejection feedback strings
//!
//! ```
//! use serde_json::json;
//! use wordsprint_engine::catalog::{Catalog, ListSource};
//! use wordsprint_engine::orthography::Orthography;
//! use wordsprint_engine::session::Round;
//!
//! let catalog = Catalog::initialize([
//!     ListSource::new("de", json!(["Stra\u{00DF}e"])).with_orthography(Orthography::German),
//! ]);
//! let mut round = Round::start(&catalog, "de").unwrap();
//! assert!(round.submit("Strasse").unwrap().is_accepted());
//! assert!(!round.submit("stra\u{00DF}e").unwrap().is_accepted());
//! assert_eq!(round.end().score, 1);
//! ```

pub mod catalog;
pub mod messages;
pub mod orthography;
pub mod session;
pub mod variants;

pub use catalog::{Catalog, CatalogError, ListSource};
pub use session::{Round, RoundSummary, UsedWords};
pub use variants::VariantMapping;
