//! Tickerboard Core — market ticker table model.
//!
//! Everything here is toolkit independent:
//! - Market/currency records and pair-name parsing
//! - Fixed-precision decimal formatting with thousands grouping
//! - Message catalog (built-in English, TOML locale overlays)
//! - Table configuration
//! - `build_view`: inputs to a render-ready view model
//! - Intents and the caller-side actions trait

pub mod config;
pub mod currency;
pub mod format;
pub mod intent;
pub mod market;
pub mod messages;
pub mod snapshot;
pub mod view;

pub use config::{ConfigError, TableConfig, FIXED_VOL_PRECISION};
pub use currency::{CurrencyIndex, Diagnostic};
pub use format::{format_decimal, MAX_PRECISION};
pub use intent::{Callbacks, Intent, TickerTableActions};
pub use market::{Currency, Market, PairName};
pub use messages::{Catalog, CatalogError, MessageKey, MessageLookup};
pub use snapshot::{MarketSnapshot, SnapshotError};
pub use view::{
    build_view, ColumnHeaders, CurrencyIcon, FilterTab, MarketRow, TableBody, TickerTableProps,
    TickerTableView, Trend,
};

#[cfg(test)]
mod tests {
    use super::*;

    /// Views are handed to the UI thread from wherever data is loaded.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<TickerTableView>();
        require_sync::<TickerTableView>();
        require_send::<MarketSnapshot>();
        require_sync::<MarketSnapshot>();
        require_send::<Catalog>();
        require_sync::<Catalog>();
    }
}
