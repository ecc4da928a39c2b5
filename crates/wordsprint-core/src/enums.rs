// Submission verdicts shared by the engine, the CLI and the WASM bindings.

use serde::{Deserialize, Serialize};

/// Why a submitted word was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// The folded input has no entry in the active list's variant mapping.
    NotAWord,
    /// The input resolves to a base word that was already accepted this round.
    AlreadyUsed,
}

impl RejectReason {
    /// Wire name used in submit reports.
    pub fn as_str(self) -> &'static str {
        match self {
            RejectReason::NotAWord => "not_a_word",
            RejectReason::AlreadyUsed => "already_used",
        }
    }
}

/// Outcome of a non-empty submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The input is a valid, unused word.
    Accepted {
        /// Canonical base form to record as used.
        base: String,
        /// Trimmed, case-folded input to append to the entered-words log.
        entered: String,
    },
    /// The input was rejected; nothing should be recorded.
    Rejected {
        /// Trimmed, case-folded input, for feedback messages.
        entered: String,
        reason: RejectReason,
    },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted { .. })
    }

    /// The base form, for accepted verdicts.
    pub fn base(&self) -> Option<&str> {
        match self {
            Verdict::Accepted { base, .. } => Some(base),
            Verdict::Rejected { .. } => None,
        }
    }

    /// The rejection reason, for rejected verdicts.
    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            Verdict::Accepted { .. } => None,
            Verdict::Rejected { reason, .. } => Some(*reason),
        }
    }

    /// The normalized input this verdict was computed for.
    pub fn entered(&self) -> &str {
        match self {
            Verdict::Accepted { entered, .. } | Verdict::Rejected { entered, .. } => entered,
        }
    }
}
