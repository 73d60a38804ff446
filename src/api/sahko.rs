//! [sahko.tk](https://sahko.tk/) scraper.
//!
//! The figures are read off the page's markup by element identifier, so this
//! client breaks whenever the page layout changes. That coupling stays
//! contained here: URL in, [`Prices`] out.

use chrono::Local;
use reqwest::{Client, Url};
use scraper::{Html, Selector};

use crate::{api::client, prelude::*, prices::Prices};

/// The five price fields carry this unit on the page.
const UNIT_SUFFIX: &str = " snt/kWh";

/// The active tab label reads like `… 25,5 % alv`; the VAT percentage is the
/// third whitespace-separated token from the end.
const ACTIVE_TAB: &str = "ul.nav-pills.nav-justified li.nav-item a.active";

pub struct Api {
    client: Client,
    url: Url,
}

impl Api {
    pub fn try_new(url: Url) -> Result<Self> {
        Ok(Self { client: client::try_new()?, url })
    }

    /// Scrape a fresh snapshot from the page.
    ///
    /// All-or-nothing: any network failure or missing element fails the whole
    /// fetch, never yielding a partial record.
    #[instrument(skip_all, fields(url = %self.url))]
    pub async fn get_prices(&self) -> Result<Prices> {
        let html = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .context("failed to request the page")?
            .error_for_status()
            .context("the page request failed")?
            .text()
            .await
            .context("failed to read the page body")?;
        parse_prices(&Html::parse_document(&html))
    }
}

/// Extract the six display fields and stamp the current instant.
fn parse_prices(document: &Html) -> Result<Prices> {
    Ok(Prices {
        price_now: select_price(document, "span#price_now")?,
        day_low: select_price(document, "span#min_price")?,
        day_high: select_price(document, "span#max_price")?,
        seven_day_avg: select_price(document, "span#avg")?,
        twentyeight_day_avg: select_price(document, "span#avg_28")?,
        vat: select_vat(document)?,
        timestamp: Local::now().naive_local(),
    })
}

fn select_text(document: &Html, css: &str) -> Result<String> {
    let selector =
        Selector::parse(css).map_err(|error| anyhow!("invalid selector `{css}`: {error}"))?;
    let element = document
        .select(&selector)
        .next()
        .with_context(|| format!("no element matches `{css}`"))?;
    Ok(element.text().collect::<String>().trim().to_owned())
}

fn select_price(document: &Html, css: &str) -> Result<String> {
    let text = select_text(document, css)?;
    Ok(text.strip_suffix(UNIT_SUFFIX).unwrap_or(&text).trim_end().to_owned())
}

fn select_vat(document: &Html) -> Result<String> {
    let label = select_text(document, ACTIVE_TAB)?;
    label
        .split_whitespace()
        .rev()
        .nth(2)
        .map(str::to_owned)
        .with_context(|| format!("no VAT percentage in the tab label `{label}`"))
}
