use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Base url [{url}] is invalid: {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError
    },
    #[error("Base url [{0}] cannot carry an account path")]
    CannotBeABase(String)
}
