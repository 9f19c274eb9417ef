use thiserror::Error;

pub type Result<T> = std::result::Result<T, CollectError>;

#[derive(Debug, Error)]
pub enum CollectError {
    /// Transport failures and non-2xx statuses surfaced by `error_for_status`.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("SUPERJOB_API_SECRET_KEY is not set ({0})")]
    MissingApiKey(#[from] std::env::VarError),
}
