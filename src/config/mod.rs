mod args;
mod errors;

use std::path::PathBuf;

use url::Url;

use crate::types::AccountId;

pub use args::Args;
pub use errors::ConfigError;

/// Fully resolved run settings. Nothing here changes once the fetch starts.
#[derive(Debug, Clone)]
pub struct Config {
    pub account_id: AccountId,
    /// Only transactions with a transfer touching this account are kept.
    pub filter_account: Option<AccountId>,
    /// Exact cell value for the filtered CSV; `None` skips that file.
    pub match_string: Option<String>,
    /// `None` means no upper bound.
    pub max_records: Option<usize>,
    /// Accounts endpoint, always ending in `/`.
    pub base_url: Url,
    /// Empty means the working directory.
    pub output_dir: PathBuf
}

impl Config {
    /// Resolves parsed arguments into run settings. The match string falls back
    /// to the filter account and a `max_limit` of zero lifts the bound.
    pub fn resolve(args: Args) -> Result<Self, ConfigError> {
        let match_string = args.match_string
            .or_else(|| args.filter_account.clone())
            .filter(|value| !value.is_empty());

        let max_records = match args.max_limit {
            0 => None,
            limit => Some(limit)
        };

        Ok(Self {
            account_id: args.account_id,
            filter_account: args.filter_account,
            match_string,
            max_records,
            base_url: parse_base_url(&args.base_url)?,
            output_dir: args.output_dir.unwrap_or_default()
        })
    }
}

fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(value).map_err(|source| ConfigError::InvalidBaseUrl {
        url: value.to_string(),
        source
    })?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::CannotBeABase(value.to_string()));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
