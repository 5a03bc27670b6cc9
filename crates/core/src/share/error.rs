//! Share pipeline error types

use thiserror::Error;

/// Failure of a render or clipboard step
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("clipboard unavailable: {0}")]
    CapabilityUnavailable(String),
    #[error("clipboard permission denied: {0}")]
    PermissionDenied(String),
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
    #[error("card render failed: {0}")]
    RenderFailed(String),
}

/// The compose URL could not be opened
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not open share intent: {0}")]
pub struct IntentError(pub String);
