// Character classification and case folding for typed words and list data.

// ---------------------------------------------------------------------------
// Whitespace
// ---------------------------------------------------------------------------

/// Check whether a character is whitespace that gets trimmed from input.
///
/// This is the set a browser strips with `String.prototype.trim`: the
/// Unicode space separators, the line terminators, tab, vertical tab, form
/// feed, and the byte order mark. Input typed into the game and entries read
/// from list files are both trimmed with this set, so a word copied out of
/// a list file always matches itself when typed back.
pub fn is_whitespace(c: char) -> bool {
    let cp = c as u32;
    (0x09..=0x0D).contains(&cp)
        || cp == 0x20
        || cp == 0xA0
        || cp == 0x1680
        || (0x2000..=0x200A).contains(&cp)
        || cp == 0x2028
        || cp == 0x2029
        || cp == 0x202F
        || cp == 0x205F
        || cp == 0x3000
        || cp == 0xFEFF // BYTE ORDER MARK
}

/// Strip leading and trailing whitespace as defined by [`is_whitespace`].
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_whitespace)
}

// ---------------------------------------------------------------------------
// Case folding
//
// Folding uses the full Unicode lowercase mapping of `str::to_lowercase`,
// including context-sensitive final sigma, so "ΟΔΟΣ" folds to "οδος".
// ---------------------------------------------------------------------------

/// Fold a string to lower case for use as a lookup key or base word.
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}
