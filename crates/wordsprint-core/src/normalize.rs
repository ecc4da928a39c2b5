// Normalization shared by player input and word-list entries.

use crate::character::{fold_case, trim};

/// Trim surrounding whitespace and fold to lower case.
///
/// Returns `None` when nothing is left after trimming. For player input that
/// means the submission is inert; for list data it means the entry is skipped.
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = trim(raw);
    if trimmed.is_empty() {
        None
    } else {
        Some(fold_case(trimmed))
    }
}
