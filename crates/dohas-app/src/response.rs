// Rust guideline compliant 2026-02-09

//! Machine-readable reports of store outcomes.
//!
//! `RefreshReport` describes the state left by a remote refresh, and
//! `ErrorReport` describes an action that failed. Both serialize to the JSON
//! printed by the CLI.

use crate::error::{AppError, ErrorCode};
use crate::store::{NoticeKind, StoreState};
use dohas_core::Language;
use serde::Serialize;

/// Summary of the store after a remote refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshReport {
    /// Outcome taken from the refresh notice.
    pub status: NoticeKind,
    /// Notice text shown to the user.
    pub message: String,
    /// Language loaded in the store.
    pub language: Language,
    /// Number of challenges in the loaded dataset.
    pub challenges: usize,
    /// Number of dohas in the current selection.
    pub dohas: usize,
}

impl RefreshReport {
    /// Builds a report from the store's pending notice.
    ///
    /// # Returns
    ///
    /// `None` if no notice is pending, e.g. when it was already dismissed.
    #[must_use]
    pub fn from_state(state: &StoreState) -> Option<Self> {
        let notice = state.notice.as_ref()?;
        Some(Self {
            status: notice.kind,
            message: notice.message.clone(),
            language: state.language,
            challenges: state.challenges_data.len(),
            dohas: state.dohas.len(),
        })
    }

    /// Returns true if the refresh succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == NoticeKind::Success
    }
}

/// Description of a failed store action.
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    /// Stable error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Language whose download failed, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    /// Underlying cause, when the message hides it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl ErrorReport {
    /// Creates a report from an application error.
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        let cause = match error {
            AppError::Persist { source } => Some(source.to_string()),
            _ => None,
        };
        Self {
            code: error.code(),
            message: error.to_string(),
            language: error.language(),
            cause,
        }
    }
}
