// Player-facing feedback strings, per word list.

use wordsprint_core::enums::RejectReason;

/// Rejection messages for one word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    /// Appended to the quoted word when it is not in the list.
    pub invalid_word: &'static str,
    /// Appended to the quoted word when its base was already used.
    pub duplicate_word: &'static str,
}

const ENGLISH: Messages = Messages {
    invalid_word: "is not a valid word in the selected language. Try again!",
    duplicate_word: "has already been used. Enter a new word.",
};

const GERMAN: Messages = Messages {
    invalid_word: "ist kein g\u{00FC}ltiges Wort in der ausgew\u{00E4}hlten Sprache. Versuch es erneut!",
    duplicate_word: "wurde bereits verwendet. Gib ein neues Wort ein.",
};

const SPANISH: Messages = Messages {
    invalid_word: "no es una palabra v\u{00E1}lida en el idioma seleccionado. \u{00A1}Int\u{00E9}ntalo de nuevo!",
    duplicate_word: "ya ha sido usada. Ingresa una nueva palabra.",
};

const FRENCH: Messages = Messages {
    invalid_word: "n'est pas un mot valide dans la langue s\u{00E9}lectionn\u{00E9}e. Essayez encore!",
    duplicate_word: "a d\u{00E9}j\u{00E0} \u{00E9}t\u{00E9} utilis\u{00E9}. Entrez un nouveau mot.",
};

const COUNTRIES: Messages = Messages {
    invalid_word: "is not a valid country name. Try again!",
    duplicate_word: "has already been used. Enter a new country.",
};

/// Shown when a round is requested on a list with no words.
pub const NO_WORDS_AVAILABLE: &str = "Selected language has no words available.";

/// Shown when the round ends without any accepted word.
pub const NO_WORDS_ENTERED: &str = "No words were entered.";

impl Messages {
    /// Messages for `list_id`, falling back to English.
    pub fn for_list(list_id: &str) -> Messages {
        match list_id {
            "de" => GERMAN,
            "es" => SPANISH,
            "fr" => FRENCH,
            "countries" => COUNTRIES,
            _ => ENGLISH,
        }
    }

    pub fn suffix(&self, reason: RejectReason) -> &'static str {
        match reason {
            RejectReason::NotAWord => self.invalid_word,
            RejectReason::AlreadyUsed => self.duplicate_word,
        }
    }

    /// Feedback line for a rejected word: `"word" <suffix>`.
    pub fn render(&self, word: &str, reason: RejectReason) -> String {
        format!("\"{word}\" {}", self.suffix(reason))
    }
}

/// Final line of a round.
pub fn game_over(score: usize) -> String {
    format!("Game Over! Your score is {score}.")
}
