use thiserror::Error;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    #[error("Invocation context has no request id")]
    MissingRequestId,
}

#[derive(Error, Debug)]
pub enum SerializationError {
    #[error("JSON serialization failed: {reason}")]
    Json { reason: String },
}

pub type Result<T> = std::result::Result<T, HandlerError>;

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::Serialization(SerializationError::Json {
            reason: err.to_string(),
        })
    }
}
