use chrono::TimeZone;
use tracing::{debug, info, warn};
use url::Url;

use crate::fetcher::{FetchError, PageQuery, PageSource, PAGE_LIMIT};
use crate::models::{ApiTransaction, TransactionRecord};
use crate::types::AccountId;

/// Why the pagination loop stopped.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StopReason {
    /// The last page carried no next link.
    Exhausted,
    /// The configured maximum number of records was collected.
    BudgetReached,
    /// A request failed; everything collected before it is kept.
    ErrorHalted
}

#[derive(Debug)]
pub struct FetchOutcome {
    pub records: Vec<TransactionRecord>,
    pub stop: StopReason,
    pub requests: usize
}

enum FetchState {
    Fetching(Url),
    Exhausted,
    ErrorHalted
}

/// Walks an account's transaction history page by page, one request at a time.
pub struct Paginator<S: PageSource> {
    source: S,
    filter_account: Option<AccountId>,
    max_records: Option<usize>
}

impl<S: PageSource> Paginator<S> {
    /// `max_records` of `None` means the loop only ends when the history does.
    pub fn new(source: S, filter_account: Option<AccountId>, max_records: Option<usize>) -> Self {
        Self {
            source,
            filter_account,
            max_records
        }
    }

    /// Fetches the history of `account_id`, starting at `base/account_id` and
    /// following each next link resolved against `base`.
    ///
    /// Network failures never surface as errors: they stop the loop and the
    /// records gathered so far are returned.
    pub async fn run<Tz: TimeZone>(&self, base: &Url, account_id: &str, zone: &Tz) -> FetchOutcome {
        let mut records = Vec::new();
        let mut requests = 0;
        let mut state = self.resolve(base, account_id);

        let stop = loop {
            let cursor = match state {
                FetchState::Fetching(cursor) => cursor,
                FetchState::Exhausted => break StopReason::Exhausted,
                FetchState::ErrorHalted => break StopReason::ErrorHalted
            };

            //NOTE: The budget is checked before requesting rather than after, so no page is
            //      fetched only to be thrown away once the maximum is reached
            if self.budget_reached(records.len()) {
                break StopReason::BudgetReached;
            }

            let query = PageQuery::new(self.page_size(records.len()));
            requests += 1;

            state = match self.source.fetch_page(&cursor, &query).await {
                Ok(page) => {
                    let next = page.next_link().map(str::to_owned);
                    let transactions = page.transactions;
                    let received = transactions.as_ref().map_or(0, Vec::len);
                    let before = records.len();

                    records.extend(transactions.into_iter().flatten()
                        .filter(|transaction| self.keep(transaction))
                        .map(|transaction| transaction.into_record(zone)));

                    debug!("Page {requests}: kept {} of {received} transactions", records.len() - before);

                    match next {
                        Some(next) => self.resolve(base, &next),
                        None => FetchState::Exhausted
                    }
                }
                Err(error) => {
                    warn!("Stopping pagination after {} records: {error}", records.len());
                    FetchState::ErrorHalted
                }
            };
        };

        info!("Fetched {} transactions in {requests} requests ({stop:?})", records.len());

        FetchOutcome {
            records,
            stop,
            requests
        }
    }

    fn keep(&self, transaction: &ApiTransaction) -> bool {
        match &self.filter_account {
            Some(account) => transaction.involves(account),
            None => true
        }
    }

    fn budget_reached(&self, fetched: usize) -> bool {
        self.max_records.is_some_and(|max| fetched >= max)
    }

    fn page_size(&self, fetched: usize) -> usize {
        match self.max_records {
            Some(max) => PAGE_LIMIT.min(max.saturating_sub(fetched)),
            None => PAGE_LIMIT
        }
    }

    fn resolve(&self, base: &Url, link: &str) -> FetchState {
        match base.join(link) {
            Ok(url) => FetchState::Fetching(url),
            Err(source) => {
                let error = FetchError::InvalidLink { link: link.to_string(), source };
                warn!("{error}");
                FetchState::ErrorHalted
            }
        }
    }
}
