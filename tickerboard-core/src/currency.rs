//! Base-currency resolution for market rows.

use std::collections::HashMap;

use thiserror::Error;

use crate::market::{Currency, Market};

/// Non-fatal inconsistencies found while building a table view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("market {market_id} references unknown base currency {base_unit:?}")]
    MissingCurrency { market_id: String, base_unit: String },
}

/// Currency lookup by id, built once per render pass.
#[derive(Debug)]
pub struct CurrencyIndex<'a> {
    by_id: HashMap<&'a str, &'a Currency>,
}

impl<'a> CurrencyIndex<'a> {
    /// First occurrence wins when ids repeat.
    pub fn new(currencies: &'a [Currency]) -> Self {
        let mut by_id = HashMap::with_capacity(currencies.len());
        for currency in currencies {
            by_id.entry(currency.id.as_str()).or_insert(currency);
        }
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'a Currency> {
        self.by_id.get(id).copied()
    }

    /// The market's base currency, or a diagnostic naming the miss.
    pub fn resolve(&self, market: &Market) -> Result<&'a Currency, Diagnostic> {
        self.get(&market.base_unit)
            .ok_or_else(|| Diagnostic::MissingCurrency {
                market_id: market.id.clone(),
                base_unit: market.base_unit.clone(),
            })
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Stand-in for an unresolved base unit: named after the unit, no icon.
pub fn placeholder_currency(base_unit: &str) -> Currency {
    Currency::new(base_unit, base_unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_by_base_unit() {
        let currencies = vec![Currency::new("btc", "Bitcoin"), Currency::new("eth", "Ether")];
        let index = CurrencyIndex::new(&currencies);
        let market = Market::new("ethusd", "eth");
        assert_eq!(index.resolve(&market).unwrap().name, "Ether");
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn first_duplicate_wins() {
        let currencies = vec![Currency::new("btc", "Bitcoin"), Currency::new("btc", "Other")];
        let index = CurrencyIndex::new(&currencies);
        assert_eq!(index.get("btc").unwrap().name, "Bitcoin");
    }

    #[test]
    fn miss_reports_market_and_unit() {
        let index = CurrencyIndex::new(&[]);
        assert!(index.is_empty());
        let err = index.resolve(&Market::new("dogeusd", "doge")).unwrap_err();
        assert_eq!(
            err,
            Diagnostic::MissingCurrency {
                market_id: "dogeusd".into(),
                base_unit: "doge".into(),
            }
        );
        assert_eq!(
            err.to_string(),
            "market dogeusd references unknown base currency \"doge\""
        );
    }
}
