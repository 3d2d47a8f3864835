use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("entity recognizer error: {0}")]
    Recognizer(String),
}
