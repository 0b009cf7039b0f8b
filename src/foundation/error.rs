/// Crate-wide result alias.
pub type CardResult<T> = Result<T, CardError>;

/// Error type shared by every cardsmith component.
#[derive(thiserror::Error, Debug)]
pub enum CardError {
    /// Caller supplied an invalid value (unknown template id, malformed color, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// The persisted draft could not be decoded. The slot has already been cleared.
    #[error("corrupt draft: {0}")]
    CorruptDraft(String),

    /// Capture, rasterization or document packaging failed.
    #[error("export error: {0}")]
    Export(String),

    /// Payment was declined or the demo bypass was refused.
    #[error("payment error: {0}")]
    Payment(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped IO or dependency error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardError {
    /// Build a [`CardError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CardError::CorruptDraft`].
    pub fn corrupt_draft(msg: impl Into<String>) -> Self {
        Self::CorruptDraft(msg.into())
    }

    /// Build a [`CardError::Export`].
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Build a [`CardError::Payment`].
    pub fn payment(msg: impl Into<String>) -> Self {
        Self::Payment(msg.into())
    }

    /// Build a [`CardError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for CardError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
