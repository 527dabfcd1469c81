//! Error types for the classification client and decoder.

use thiserror::Error;

/// Result type for classification operations
pub type ClassifyResult<T> = Result<T, ClassifyError>;

/// Errors from fetching or decoding a classification response
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The network call itself failed
    #[error("{0}")]
    Transport(reqwest::Error),

    /// The response body could not be fully drained
    #[error("{0}")]
    Read(reqwest::Error),

    /// The payload was not XML of the expected shape
    #[error("{0}")]
    Decode(#[from] quick_xml::DeError),
}
