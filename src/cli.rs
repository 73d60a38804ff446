use std::path::PathBuf;

use clap::Parser;
use reqwest::Url;

#[derive(Parser)]
#[command(author, version, about)]
#[must_use]
pub struct Args {
    /// Page to scrape the prices from.
    #[clap(long, env = "SAHKO_URL", default_value = "https://sahko.tk/")]
    pub url: Url,

    /// File holding the most recently scraped prices.
    #[clap(
        long = "cache-path",
        env = "SAHKO_CACHE_PATH",
        default_value = "sahkon_hinta_cache.json"
    )]
    pub cache_path: PathBuf,
}
