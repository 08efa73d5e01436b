//! Sample market snapshot for running the board without a data file.
//!
//! Mixes quote units (usd, eur, btc), positive/negative/zero/absent
//! changes, currencies with and without icon URLs, and one market without
//! a display name.

use tickerboard_core::{Currency, Market, MarketSnapshot};

pub fn sample_snapshot() -> MarketSnapshot {
    MarketSnapshot {
        markets: vec![
            market("btcusd", Some("BTC/USD"), "btc", "usd", 61234.5, 2, 1532.2841, Some(812.4), "+1.34%"),
            market("ethusd", Some("ETH/USD"), "eth", "usd", 2411.07, 2, 20876.5, Some(-35.9), "-1.47%"),
            market("xrpusd", Some("XRP/USD"), "xrp", "usd", 0.5231, 4, 9_871_234.0, Some(0.0), "0.00%"),
            market("btceur", Some("BTC/EUR"), "btc", "eur", 56890.0, 1, 402.113, Some(-120.0), "-0.21%"),
            market("etheur", Some("ETH/EUR"), "eth", "eur", 2230.4, 2, 5120.0, None, ""),
            market("ltcbtc", Some("LTC/BTC"), "ltc", "btc", 0.001187, 6, 3321.75, Some(0.00001), "+0.84%"),
            market("trxusd", None, "trx", "usd", 0.1213, 4, 45_000_000.0, Some(0.002), "+1.68%"),
        ],
        currencies: vec![
            Currency::new("btc", "Bitcoin").with_icon("https://cdn.example.com/icons/btc.svg"),
            Currency::new("eth", "Ethereum").with_icon("https://cdn.example.com/icons/eth.svg"),
            Currency::new("xrp", "Ripple"),
            Currency::new("ltc", "Litecoin"),
            Currency::new("trx", "Tron"),
            Currency::new("usd", "US Dollar"),
            Currency::new("eur", "Euro"),
        ],
    }
}

#[allow(clippy::too_many_arguments)]
fn market(
    id: &str,
    name: Option<&str>,
    base: &str,
    quote: &str,
    last: f64,
    price_precision: u32,
    volume: f64,
    change: Option<f64>,
    percent: &str,
) -> Market {
    Market {
        id: id.into(),
        name: name.map(String::from),
        base_unit: base.into(),
        quote_unit: quote.into(),
        last: Some(last),
        price_precision,
        volume: Some(volume),
        price_change_percent: (!percent.is_empty()).then(|| percent.to_string()),
        change,
    }
}
