//! Test helpers for building views and reading rendered buffers

use ratatui::buffer::Buffer;
use tickerboard_core::{
    build_view, Catalog, Currency, Market, TableConfig, TickerTableProps, TickerTableView,
};

/// View over `count` BTC markets with tabs `["", "usd", "eur"]`.
pub fn sample_view(current_bid_unit: &str, count: usize) -> TickerTableView {
    let units: Vec<String> = ["", "usd", "eur"].iter().map(|s| s.to_string()).collect();
    let currencies = vec![Currency::new("btc", "Bitcoin")];
    let markets: Vec<Market> = (0..count)
        .map(|i| {
            let mut market = Market::new(format!("m{i}"), "btc");
            market.name = Some("BTC/USD".into());
            market.last = Some(1234.5);
            market.price_precision = 2;
            market.change = Some(if i % 2 == 0 { 1.0 } else { -1.0 });
            market.price_change_percent = Some(format!("{i}.00%"));
            market
        })
        .collect();
    let props = TickerTableProps {
        current_bid_unit,
        current_bid_units_list: &units,
        markets: &markets,
        currencies: &currencies,
    };
    build_view(&props, &Catalog::english(), &TableConfig::default())
}

/// Buffer contents, one string per line.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}
