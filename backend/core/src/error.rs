use thiserror::Error;

/// Top-level error type for the MenuLens pipeline.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("LLM provider error ({provider}): {message}")]
    Llm { provider: String, message: String },

    #[error("image search error (status {status}): {message}")]
    Search { status: u16, message: String },

    #[error("invalid upload: {0}")]
    InvalidUpload(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MenuError {
    /// Whether this error was caused by the caller rather than an upstream or internal fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, MenuError::InvalidUpload(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_errors_are_client_errors() {
        assert!(MenuError::InvalidUpload("no file".into()).is_client_error());
        assert!(!MenuError::Config("missing key".into()).is_client_error());
    }

    #[test]
    fn llm_error_display_names_provider() {
        let err = MenuError::Llm {
            provider: "openai".into(),
            message: "401 Unauthorized".into(),
        };
        assert_eq!(err.to_string(), "LLM provider error (openai): 401 Unauthorized");
    }
}
