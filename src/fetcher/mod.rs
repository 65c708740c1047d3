mod errors;
mod mirror_client;
mod paginator;

use url::Url;

use crate::models::AccountPage;

pub use errors::FetchError;
pub use mirror_client::MirrorClient;
pub use paginator::{Paginator, StopReason};

/// Largest page the mirror node serves.
pub const PAGE_LIMIT: usize = 100;

const ORDER: &str = "desc";
const TRANSACTION_TYPE: &str = "cryptotransfer";

/// Anything that can serve pages of an account's transaction history.
pub trait PageSource {
    async fn fetch_page(&self, url: &Url, query: &PageQuery) -> Result<AccountPage, FetchError>;
}

/// Query parameters sent with every page request.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PageQuery {
    pub limit: usize
}

impl PageQuery {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Returns `url` carrying this query. Parameters of the same name already
    /// on the url are replaced; any other parameter (such as a next link's
    /// `timestamp` cursor) is kept in place.
    pub fn apply(&self, url: &Url) -> Url {
        let kept: Vec<(String, String)> = url.query_pairs()
            .filter(|(key, _)| !matches!(key.as_ref(), "limit" | "order" | "transactiontype"))
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        let mut merged = url.clone();
        merged.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .append_pair("limit", &self.limit.to_string())
            .append_pair("order", ORDER)
            .append_pair("transactiontype", TRANSACTION_TYPE);

        merged
    }
}
