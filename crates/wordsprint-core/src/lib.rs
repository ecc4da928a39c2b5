//! Shared types for wordsprint.
//!
//! - [`character`] -- whitespace classification and case folding
//! - [`normalize`] -- the trim-and-fold step applied to input and list data
//! - [`enums`] -- submission verdicts and rejection reasons
//! - [`report`] -- the flat `{accepted, base, reason}` report shape

pub mod character;
pub mod enums;
pub mod normalize;
pub mod report;
