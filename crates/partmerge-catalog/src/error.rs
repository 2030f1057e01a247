use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to read feed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("cannot build a product draft from an empty item list")]
    NoItems,

    #[error("SKU not found in catalog: {0}")]
    UnknownSku(String),
}
