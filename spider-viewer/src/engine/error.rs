use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    #[error("host page has no element with id `{0}`")]
    MissingContainer(String),

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    #[error("host document is not available")]
    NoDocument,

    #[error("failed to load `{url}`: {reason}")]
    AssetLoad { url: String, reason: String },
}
