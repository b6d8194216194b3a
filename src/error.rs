use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    InvalidInput(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Grammar correction error: {0}")]
    Correction(String),

    #[error("Dictionary error: {0}")]
    Dictionary(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Translation failed: {0}")]
    TranslationFailure(String),
}

impl BoliError {
    /// Whether the error was caused by the caller's input rather than the service.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

pub type Result<T> = std::result::Result<T, BoliError>;
