use comfy_table::{Cell, CellAlignment, Table, modifiers, presets};

use crate::prices::Prices;

pub const CAPTION: &str = "Lähde: sahko.tk";

#[must_use]
pub fn title(prices: &Prices) -> String {
    format!("Sähkön hinta (snt/kWh) {}% alv", prices.vat)
}

#[must_use]
pub fn build_prices_table(prices: &Prices) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec![
        centered("Nyt"),
        centered("Päivän alin"),
        centered("Päivän ylin"),
        centered("7pv keskihinta"),
        centered("28pv keskihinta"),
    ]);
    table.add_row(vec![
        centered(&prices.price_now),
        centered(&prices.day_low),
        centered(&prices.day_high),
        centered(&prices.seven_day_avg),
        centered(&prices.twentyeight_day_avg),
    ]);
    table
}

fn centered(text: &str) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Center)
}
