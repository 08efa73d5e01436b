//! Market and currency records as delivered by the exchange API.
//!
//! Numeric fields arrive either as JSON numbers or as decimal strings
//! depending on the endpoint, so they go through [`lenient_f64`]. Anything
//! unparsable becomes `None` rather than failing the whole snapshot.

use serde::{Deserialize, Deserializer, Serialize};

/// A tradable base/quote pair with its latest ticker statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    pub id: String,
    /// Display name, conventionally `"BASE/QUOTE"`.
    #[serde(default)]
    pub name: Option<String>,
    pub base_unit: String,
    #[serde(default)]
    pub quote_unit: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub last: Option<f64>,
    /// Decimal places used for `last`.
    #[serde(default, deserialize_with = "lenient_precision")]
    pub price_precision: u32,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub volume: Option<f64>,
    /// Already formatted by the feed (e.g. `"+1.25%"`), shown verbatim.
    #[serde(default)]
    pub price_change_percent: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub change: Option<f64>,
}

impl Market {
    /// Minimal market with only the identifying fields set.
    pub fn new(id: impl Into<String>, base_unit: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            base_unit: base_unit.into(),
            quote_unit: String::new(),
            last: None,
            price_precision: 0,
            volume: None,
            price_change_percent: None,
            change: None,
        }
    }

    /// Split display name, computed once per row.
    pub fn pair(&self) -> Option<PairName> {
        self.name.as_deref().and_then(PairName::parse)
    }
}

/// A named asset with an optional icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon_url: Option<String>,
}

impl Currency {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon_url: None,
        }
    }

    pub fn with_icon(mut self, url: impl Into<String>) -> Self {
        self.icon_url = Some(url.into());
        self
    }

    /// Icon URL, treating an empty string as absent.
    pub fn icon(&self) -> Option<&str> {
        self.icon_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// Market display name split into base and quote symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairName {
    pub base: String,
    /// `None` when the name carries no `/` separator.
    pub quote: Option<String>,
}

impl PairName {
    /// Splits on the first `/`. Returns `None` for an empty name.
    pub fn parse(name: &str) -> Option<Self> {
        if name.is_empty() {
            return None;
        }
        let pair = match name.split_once('/') {
            Some((base, quote)) => Self {
                base: base.to_string(),
                quote: Some(quote.to_string()),
            },
            None => Self {
                base: name.to_string(),
                quote: None,
            },
        };
        Some(pair)
    }

    /// Quote segment with its leading separator, or empty.
    pub fn quote_label(&self) -> String {
        self.quote
            .as_deref()
            .map(|quote| format!("/{quote}"))
            .unwrap_or_default()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

/// Accepts a number, a numeric string, or null. Any other value is `None`.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(match raw {
        Some(NumberOrText::Number(n)) => Some(n),
        Some(NumberOrText::Text(s)) => s.trim().parse::<f64>().ok(),
        Some(NumberOrText::Other(_)) | None => None,
    }
    .filter(|n| n.is_finite()))
}

/// Whole, non-negative precision from a number or numeric string; 0 otherwise.
fn lenient_precision<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let precision = lenient_f64(deserializer)?
        .filter(|n| *n >= 0.0 && n.fract() == 0.0 && *n <= f64::from(u32::MAX))
        .map_or(0, |n| n as u32);
    Ok(precision)
}
