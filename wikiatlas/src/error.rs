use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("fetch task did not finish: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("no tokio runtime to run the request on: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),

    #[error("failed to build http client: {0}")]
    Client(reqwest::Error),

    #[error("invalid value for {0}: {1}")]
    Config(&'static str, String),
}
