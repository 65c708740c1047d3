use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::fetcher::{FetchError, PageQuery, PageSource};
use crate::models::AccountPage;

/// `PageSource` backed by the public mirror node REST API.
pub struct MirrorClient {
    client: Client
}

impl MirrorClient {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

impl PageSource for MirrorClient {
    async fn fetch_page(&self, url: &Url, query: &PageQuery) -> Result<AccountPage, FetchError> {
        let request_url = query.apply(url);
        debug!("GET {request_url}");

        let response = self.client.get(request_url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::Status { status, url: request_url.to_string() });
        }

        let body = response.bytes().await?;

        Ok(serde_json::from_slice(&body)?)
    }
}
