//! Submission echo types.

use serde::{Deserialize, Serialize};

/// Response of the submit endpoint: the echoed selection, or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub num: Option<i64>,
}

/// What the page shows about the last submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// Nothing submitted on the current page yet.
    #[default]
    NotSubmitted,
    /// Submitted with the placeholder option selected.
    Empty,
    /// Submitted with a number selected.
    Sent(i64),
}

impl From<SubmitResponse> for SubmissionState {
    fn from(response: SubmitResponse) -> Self {
        match response.num {
            Some(n) => SubmissionState::Sent(n),
            None => SubmissionState::Empty,
        }
    }
}

impl SubmissionState {
    /// Sentence describing the state. Never blank.
    pub fn sentence(&self) -> String {
        match self {
            SubmissionState::NotSubmitted => "You did not select.".to_string(),
            SubmissionState::Empty => "You sent empty option!".to_string(),
            SubmissionState::Sent(n) => format!("You sent: {}", n),
        }
    }
}
