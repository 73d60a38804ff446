mod api;
mod cache;
mod cli;
mod freshness;
mod prelude;
mod prices;
mod tables;

use chrono::Local;
use clap::{Parser, crate_version};

use crate::{
    api::SahkoTk,
    cache::Cache,
    cli::Args,
    freshness::Decision,
    prelude::*,
    prices::Prices,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let cache = Cache::new(args.cache_path);
    let prices = get_prices(&SahkoTk::try_new(args.url)?, &cache).await?;

    println!("{}", tables::title(&prices));
    println!("{}", tables::build_prices_table(&prices));
    println!("{}", tables::CAPTION);
    Ok(())
}

/// Reuse the cached prices while they are fresh, otherwise scrape the page
/// and write the new snapshot through the cache.
///
/// The headless scrape is slow and the page updates once a day around 13:45,
/// hence the cache.
async fn get_prices(api: &SahkoTk, cache: &Cache) -> Result<Prices> {
    let cached = cache.load()?;
    let now = Local::now().naive_local();
    match (freshness::decide(now, cached.as_ref().map(|prices| prices.timestamp)), cached) {
        (Decision::ReuseCache, Some(prices)) => {
            info!(cached_at = %prices.timestamp, "reusing the cached prices");
            Ok(prices)
        }
        _ => {
            let prices = api
                .get_prices()
                .await
                .inspect_err(|error| error!("failed to scrape the prices: {error:#}"))?;
            cache.save(&prices)?;
            Ok(prices)
        }
    }
}
