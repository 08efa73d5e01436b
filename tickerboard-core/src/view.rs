//! Ticker table view model.
//!
//! [`build_view`] is a pure mapping from caller-owned inputs to everything a
//! renderer needs: tab labels, header text, formatted cells, trend classes.
//! It performs no sorting and no filtering; rows and tabs keep input order.

use crate::config::TableConfig;
use crate::currency::{placeholder_currency, CurrencyIndex, Diagnostic};
use crate::format::format_decimal;
use crate::market::{Currency, Market, PairName};
use crate::messages::{MessageKey, MessageLookup};

/// Caller-owned inputs for one render pass.
#[derive(Debug, Clone, Copy)]
pub struct TickerTableProps<'a> {
    pub current_bid_unit: &'a str,
    pub current_bid_units_list: &'a [String],
    pub markets: &'a [Market],
    pub currencies: &'a [Currency],
}

/// One entry of the filter strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTab {
    pub key: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnHeaders {
    pub asset: String,
    pub last_price: String,
    pub volume: String,
    pub change: String,
}

/// Sign class of a market's change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Positive,
    Negative,
}

impl Trend {
    /// Negative only for a strictly negative change; absent counts as zero.
    pub fn from_change(change: Option<f64>) -> Self {
        if change.unwrap_or(0.0) < 0.0 {
            Trend::Negative
        } else {
            Trend::Positive
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Trend::Positive => "positive",
            Trend::Negative => "negative",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrencyIcon {
    Image { url: String, alt: String },
    /// Generated badge keyed by the uppercased currency name.
    Glyph { code: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketRow {
    pub market_id: String,
    pub icon: CurrencyIcon,
    pub pair: Option<PairName>,
    pub full_name: String,
    pub last: String,
    pub volume: String,
    pub change_percent: String,
    pub trend: Trend,
    pub trade_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Rows(Vec<MarketRow>),
    Empty { message: String },
}

impl Default for TableBody {
    fn default() -> Self {
        TableBody::Rows(Vec::new())
    }
}

impl TableBody {
    pub fn rows(&self) -> &[MarketRow] {
        match self {
            TableBody::Rows(rows) => rows,
            TableBody::Empty { .. } => &[],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickerTableView {
    pub tabs: Vec<FilterTab>,
    pub headers: ColumnHeaders,
    pub body: TableBody,
    pub diagnostics: Vec<Diagnostic>,
}

impl TickerTableView {
    pub fn rows(&self) -> &[MarketRow] {
        self.body.rows()
    }

    pub fn active_tab(&self) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.active)
    }
}

/// Maps the inputs to a view. Never fails; inconsistencies end up in
/// [`TickerTableView::diagnostics`].
pub fn build_view(
    props: &TickerTableProps<'_>,
    messages: &dyn MessageLookup,
    config: &TableConfig,
) -> TickerTableView {
    let tabs = props
        .current_bid_units_list
        .iter()
        .map(|key| FilterTab {
            key: key.clone(),
            label: if key.is_empty() {
                messages.message(MessageKey::FilterAll).into_owned()
            } else {
                key.to_uppercase()
            },
            active: key == props.current_bid_unit,
        })
        .collect();

    let headers = ColumnHeaders {
        asset: messages.message(MessageKey::HeaderAsset).into_owned(),
        last_price: messages.message(MessageKey::HeaderLastPrice).into_owned(),
        volume: messages.message(MessageKey::HeaderVolume).into_owned(),
        change: messages.message(MessageKey::HeaderChange).into_owned(),
    };

    let mut diagnostics = Vec::new();
    let body = if props.markets.is_empty() {
        TableBody::Empty {
            message: messages.message(MessageKey::NoData).into_owned(),
        }
    } else {
        let index = CurrencyIndex::new(props.currencies);
        let trade_label = messages.message(MessageKey::Trade).into_owned();
        let rows = props
            .markets
            .iter()
            .map(|market| {
                let currency = match index.resolve(market) {
                    Ok(currency) => currency.clone(),
                    Err(diagnostic) => {
                        tracing::warn!(%diagnostic, "rendering placeholder currency");
                        diagnostics.push(diagnostic);
                        placeholder_currency(&market.base_unit)
                    }
                };
                market_row(market, &currency, &trade_label, config)
            })
            .collect();
        TableBody::Rows(rows)
    };

    TickerTableView {
        tabs,
        headers,
        body,
        diagnostics,
    }
}

fn market_row(
    market: &Market,
    currency: &Currency,
    trade_label: &str,
    config: &TableConfig,
) -> MarketRow {
    let code = currency.name.to_uppercase();
    let icon = match currency.icon() {
        Some(url) => CurrencyIcon::Image {
            url: url.to_string(),
            alt: code,
        },
        None => CurrencyIcon::Glyph { code },
    };

    MarketRow {
        market_id: market.id.clone(),
        icon,
        pair: market.pair(),
        full_name: currency.name.clone(),
        last: format_decimal(
            market.last.unwrap_or(0.0),
            market.price_precision as usize,
            config.thousands_separator,
        ),
        volume: format_decimal(
            market.volume.unwrap_or(0.0),
            config.volume_display_precision,
            config.thousands_separator,
        ),
        change_percent: market.price_change_percent.clone().unwrap_or_default(),
        trend: Trend::from_change(market.change),
        trade_label: trade_label.to_string(),
    }
}
