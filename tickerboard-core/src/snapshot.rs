//! Market snapshot files and the caller-side filtering around the table.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::market::{Currency, Market};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Markets plus the currencies they reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    #[serde(default)]
    pub markets: Vec<Market>,
    #[serde(default)]
    pub currencies: Vec<Currency>,
}

impl MarketSnapshot {
    pub fn from_json_str(content: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let snapshot = Self::from_json_str(&content)?;
        tracing::info!(
            path = %path.display(),
            markets = snapshot.markets.len(),
            currencies = snapshot.currencies.len(),
            "loaded market snapshot"
        );
        Ok(snapshot)
    }

    /// `""` (all markets) followed by each quote unit in first-seen order.
    pub fn bid_units(&self) -> Vec<String> {
        let mut units = vec![String::new()];
        for market in &self.markets {
            let unit = market.quote_unit.to_lowercase();
            if !unit.is_empty() && !units.contains(&unit) {
                units.push(unit);
            }
        }
        units
    }

    /// Markets quoted in `bid_unit`, or all of them for the empty key.
    pub fn markets_for(&self, bid_unit: &str) -> Vec<Market> {
        self.markets
            .iter()
            .filter(|market| bid_unit.is_empty() || market.quote_unit.eq_ignore_ascii_case(bid_unit))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market(id: &str, quote: &str) -> Market {
        let mut market = Market::new(id, "btc");
        market.quote_unit = quote.into();
        market
    }

    #[test]
    fn bid_units_keep_first_seen_order() {
        let snapshot = MarketSnapshot {
            markets: vec![
                market("btcusd", "usd"),
                market("btceur", "EUR"),
                market("ethusd", "usd"),
                market("odd", ""),
            ],
            currencies: vec![],
        };
        assert_eq!(snapshot.bid_units(), vec!["", "usd", "eur"]);
    }

    #[test]
    fn markets_for_filters_by_quote() {
        let snapshot = MarketSnapshot {
            markets: vec![market("btcusd", "usd"), market("btceur", "eur"), market("ethusd", "usd")],
            currencies: vec![],
        };
        let ids: Vec<String> = snapshot.markets_for("usd").into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["btcusd", "ethusd"]);
        assert_eq!(snapshot.markets_for("").len(), 3);
        assert!(snapshot.markets_for("jpy").is_empty());
    }

    #[test]
    fn parse_and_load_errors() {
        assert!(matches!(
            MarketSnapshot::from_json_str("{ broken"),
            Err(SnapshotError::Parse(_))
        ));
        assert!(matches!(
            MarketSnapshot::load(Path::new("/nonexistent/markets.json")),
            Err(SnapshotError::Io { .. })
        ));
        assert_eq!(MarketSnapshot::from_json_str("{}").unwrap(), MarketSnapshot::default());
    }

    #[test]
    fn odd_numeric_values_do_not_reject_the_snapshot() {
        let json = r#"{
            "markets": [
                { "id": "btcusd", "base_unit": "btc", "last": "1.5", "price_precision": "2" },
                { "id": "ethusd", "base_unit": "eth", "last": true, "price_precision": -1 }
            ],
            "currencies": []
        }"#;
        let snapshot = MarketSnapshot::from_json_str(json).unwrap();
        assert_eq!(snapshot.markets[0].price_precision, 2);
        assert_eq!(snapshot.markets[0].last, Some(1.5));
        assert_eq!(snapshot.markets[1].price_precision, 0);
        assert!(snapshot.markets[1].last.is_none());
    }
}
