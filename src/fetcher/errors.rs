use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Mirror node responded with [{status}] for [{url}]")]
    Status {
        status: StatusCode,
        url: String
    },
    #[error("Response body is not an account page: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Link [{link}] could not be resolved: {source}")]
    InvalidLink {
        link: String,
        source: url::ParseError
    }
}
