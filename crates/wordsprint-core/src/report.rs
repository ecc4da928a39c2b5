// Flat submit report for callers that cannot match on `Option<Verdict>`.

use serde::Serialize;

use crate::enums::{RejectReason, Verdict};

/// Reason field of a [`SubmitReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportReason {
    /// Blank input; nothing happened.
    Empty,
    NotAWord,
    AlreadyUsed,
}

impl From<RejectReason> for ReportReason {
    fn from(reason: RejectReason) -> Self {
        match reason {
            RejectReason::NotAWord => ReportReason::NotAWord,
            RejectReason::AlreadyUsed => ReportReason::AlreadyUsed,
        }
    }
}

/// Result of one submission in the `{accepted, base, reason}` shape.
///
/// `reason` is `None` exactly when `accepted` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitReport {
    pub accepted: bool,
    pub base: Option<String>,
    pub reason: Option<ReportReason>,
}

impl SubmitReport {
    /// Report for an inert (blank) submission.
    pub fn empty() -> Self {
        Self {
            accepted: false,
            base: None,
            reason: Some(ReportReason::Empty),
        }
    }
}

impl From<Option<Verdict>> for SubmitReport {
    fn from(verdict: Option<Verdict>) -> Self {
        match verdict {
            None => SubmitReport::empty(),
            Some(Verdict::Accepted { base, .. }) => SubmitReport {
                accepted: true,
                base: Some(base),
                reason: None,
            },
            Some(Verdict::Rejected { reason, .. }) => SubmitReport {
                accepted: false,
                base: None,
                reason: Some(reason.into()),
            },
        }
    }
}
