use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed ({0}): {1}")]
    Status(u16, String),
    #[error("could not decode response: {0}")]
    Decode(String),
}
