use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("host page has no element with id `{0}`")]
    MissingContainer(String),

    #[error("host document is not available")]
    NoDocument,

    #[error("failed to load `{url}`: {reason}")]
    AssetLoad { url: String, reason: String },
}
