use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Unsupported payment method: {0}")]
    UnsupportedMethod(String),
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Server error ({code}): {message}")]
    Server { code: String, message: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, CheckoutError>;
