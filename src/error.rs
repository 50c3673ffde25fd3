use thiserror::Error;

/// Failure from one of the external stores.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Transport-level failure talking to the store
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with an error of its own
    #[error("{0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}
