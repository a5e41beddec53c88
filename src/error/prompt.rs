//! Interactive selection errors

use super::DapError;

/// Creates a prompt failure error
pub fn failed(message: impl Into<String>) -> DapError {
    DapError::PromptFailed {
        message: message.into(),
    }
}
