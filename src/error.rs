//! Error types for ironseq.
//!
//! Most APIs return [`anyhow::Result`]. Errors raised by the library itself are
//! [`SeqError`] values wrapped in an [`anyhow::Error`], so callers can
//! `downcast_ref::<SeqError>()` to tell them apart from failures raised by their
//! own closures (which are propagated unchanged).

use thiserror::Error;

/// Errors produced by ironseq itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
    /// A required argument was absent or out of range at call time.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// A stage graph lookup failed (the handle belongs to another pipeline).
    #[error("stage {0} not found in pipeline")]
    UnknownStage(u64),

    /// An integer terminal's running sum left the `i64` range.
    #[error("integer overflow in `{0}`")]
    Overflow(&'static str),
}

impl SeqError {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::warn!(argument = name, %reason, "rejected invalid argument");
        Self::InvalidArgument { name, reason }
    }

    pub(crate) fn overflow(terminal: &'static str) -> Self {
        tracing::warn!(terminal, "integer overflow");
        Self::Overflow(terminal)
    }
}
