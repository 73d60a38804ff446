use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One snapshot of the spot-price figures as displayed on the page.
///
/// All the price fields are kept as display-formatted strings with the
/// `snt/kWh` unit already stripped. The snapshot is never mutated: a refresh
/// replaces the whole record.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Prices {
    pub price_now: String,
    pub day_low: String,
    pub day_high: String,
    pub seven_day_avg: String,
    pub twentyeight_day_avg: String,

    /// VAT percentage from the page's active tab label.
    pub vat: String,

    /// Local time at which the figures were scraped.
    pub timestamp: NaiveDateTime,
}
