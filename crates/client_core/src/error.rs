use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid server url '{url}': {source}")]
    InvalidEndpoint {
        url: String,
        source: url::ParseError,
    },
    #[error("message request failed: {0}")]
    Request(#[from] reqwest::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    #[error("host page is missing required element '{id}'")]
    MissingElement { id: String },
}
