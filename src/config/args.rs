use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://mainnet-public.mirrornode.hedera.com/api/v1/accounts/";

#[derive(Debug, Parser)]
#[command(author, version, about = "Fetch and filter transactions for a specific Hedera account.", long_about = None)]
pub struct Args {
    #[arg(help = "The ID of the account in format 0.0.x")]
    pub account_id: String,

    #[arg(long = "filter_account", help = "The ID of the account to filter for in format 0.0.x")]
    pub filter_account: Option<String>,

    #[arg(long = "match_string", help = "String to match in CSV file (defaults to --filter_account)")]
    pub match_string: Option<String>,

    #[arg(long = "max_limit", default_value_t = 100, help = "Maximum number of records to fetch (0 for no limit)")]
    pub max_limit: usize,

    #[arg(long = "base_url", default_value = DEFAULT_BASE_URL, help = "Mirror node accounts endpoint")]
    pub base_url: String,

    #[arg(long = "output_dir", help = "Directory the CSV files are written to (defaults to the working directory)")]
    pub output_dir: Option<PathBuf>,

    #[arg(long = "log_level", default_value = "error", help = "error, warn, info, debug or trace")]
    pub log_level: String
}
