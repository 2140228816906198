//! Outcome of decoding or importing a build.
use serde::{Deserialize, Serialize};

/// Severity of the single message shown after a decode or import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Nothing was decoded.
    #[default]
    None,
    Success,
    Warning,
    Error,
}

/// The one user-visible message produced by a decode or import.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Notice {
    pub status: Status,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// Tagged decode/import result.
///
/// `Error` keeps whatever part of the value survived (`None` when nothing
/// is usable and the caller must leave its state untouched).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report<T> {
    Success { value: T, message: String },
    Warning { value: T, message: String },
    Error { value: Option<T>, message: String },
}

impl<T> Report<T> {
    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            Self::Success { .. } => Status::Success,
            Self::Warning { .. } => Status::Warning,
            Self::Error { .. } => Status::Error,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. }
            | Self::Warning { message, .. }
            | Self::Error { message, .. } => message,
        }
    }

    #[must_use]
    pub fn notice(&self) -> Notice {
        Notice::new(self.status(), self.message())
    }

    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success { value, .. } | Self::Warning { value, .. } => Some(value),
            Self::Error { value, .. } => value.as_ref(),
        }
    }

    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success { value, .. } | Self::Warning { value, .. } => Some(value),
            Self::Error { value, .. } => value,
        }
    }

    #[must_use]
    pub fn into_parts(self) -> (Option<T>, Notice) {
        let notice = self.notice();
        (self.into_value(), notice)
    }
}

/// Tracks the strongest message seen while processing a build.
///
/// Errors outrank warnings; within the same severity the later message wins.
#[derive(Debug, Default)]
pub(crate) struct Escalation {
    warning: Option<String>,
    error: Option<String>,
}

impl Escalation {
    pub(crate) fn warn(&mut self, message: impl Into<String>) {
        self.warning = Some(message.into());
    }

    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub(crate) fn finish<T>(self, value: T, success: &str) -> Report<T> {
        match (self.error, self.warning) {
            (Some(message), _) => Report::Error {
                value: Some(value),
                message,
            },
            (None, Some(message)) => Report::Warning { value, message },
            (None, None) => Report::Success {
                value,
                message: success.to_string(),
            },
        }
    }
}
