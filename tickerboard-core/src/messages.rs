//! Message lookup for the table's user-visible strings.
//!
//! The table only consumes a lookup capability ([`MessageLookup`]); [`Catalog`]
//! is the stock implementation: built-in English plus an optional locale
//! overlay read from TOML. Ids may be written quoted
//! (`"page.noDataToShow" = "..."`) or as plain dotted keys; nested tables
//! are flattened back into dotted ids.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::Path;

use thiserror::Error;

/// Every string the ticker table asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    HeaderAsset,
    HeaderLastPrice,
    HeaderVolume,
    HeaderChange,
    Trade,
    FilterAll,
    NoData,
}

impl MessageKey {
    pub const ALL: [MessageKey; 7] = [
        MessageKey::HeaderAsset,
        MessageKey::HeaderLastPrice,
        MessageKey::HeaderVolume,
        MessageKey::HeaderChange,
        MessageKey::Trade,
        MessageKey::FilterAll,
        MessageKey::NoData,
    ];

    /// Stable message id used in catalog files.
    pub fn id(self) -> &'static str {
        match self {
            MessageKey::HeaderAsset => "page.body.marketsTable.header.asset",
            MessageKey::HeaderLastPrice => "page.body.marketsTable.header.lastPrice",
            MessageKey::HeaderVolume => "page.body.marketsTable.header.volume",
            MessageKey::HeaderChange => "page.body.marketsTable.header.change",
            MessageKey::Trade => "page.body.marketsTable.button.trade",
            MessageKey::FilterAll => "page.body.marketsTable.filter.all",
            MessageKey::NoData => "page.noDataToShow",
        }
    }

    /// Built-in English text.
    pub fn english(self) -> &'static str {
        match self {
            MessageKey::HeaderAsset => "Asset",
            MessageKey::HeaderLastPrice => "Last price",
            MessageKey::HeaderVolume => "Volume",
            MessageKey::HeaderChange => "Change",
            MessageKey::Trade => "Trade",
            MessageKey::FilterAll => "All",
            MessageKey::NoData => "There is no data to show",
        }
    }
}

/// Resolves a message key to text in the current locale.
pub trait MessageLookup {
    fn message(&self, key: MessageKey) -> Cow<'_, str>;
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("catalog entry {0:?} must be a string")]
    Entry(String),
}

/// Locale catalog with English fallback.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locale: String,
    entries: BTreeMap<String, String>,
}

impl Catalog {
    /// Built-in English only.
    pub fn english() -> Self {
        Self {
            locale: "en".into(),
            entries: BTreeMap::new(),
        }
    }

    /// Parses a TOML table of message id to text.
    pub fn from_toml_str(locale: impl Into<String>, content: &str) -> Result<Self, CatalogError> {
        let table: toml::Table = toml::from_str(content)?;
        let mut entries = BTreeMap::new();
        flatten_into(&mut entries, None, table)?;
        Ok(Self {
            locale: locale.into(),
            entries,
        })
    }

    /// Loads a catalog file; the locale is taken from the file stem.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let locale = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("custom");
        let catalog = Self::from_toml_str(locale, &content)?;
        tracing::info!(locale, entries = catalog.entries.len(), "loaded message catalog");
        Ok(catalog)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Keys the catalog does not translate (served from English).
    pub fn missing_keys(&self) -> Vec<MessageKey> {
        MessageKey::ALL
            .into_iter()
            .filter(|key| !self.entries.contains_key(key.id()))
            .collect()
    }
}

fn flatten_into(
    entries: &mut BTreeMap<String, String>,
    prefix: Option<&str>,
    table: toml::Table,
) -> Result<(), CatalogError> {
    for (key, value) in table {
        let id = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key,
        };
        match value {
            toml::Value::String(text) => {
                entries.insert(id, text);
            }
            toml::Value::Table(nested) => flatten_into(entries, Some(&id), nested)?,
            _ => return Err(CatalogError::Entry(id)),
        }
    }
    Ok(())
}

impl MessageLookup for Catalog {
    fn message(&self, key: MessageKey) -> Cow<'_, str> {
        match self.entries.get(key.id()) {
            Some(text) => Cow::Borrowed(text.as_str()),
            None => Cow::Borrowed(key.english()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_defaults() {
        let catalog = Catalog::english();
        assert_eq!(catalog.message(MessageKey::FilterAll), "All");
        assert_eq!(catalog.message(MessageKey::NoData), "There is no data to show");
        assert_eq!(catalog.missing_keys().len(), MessageKey::ALL.len());
    }

    #[test]
    fn overlay_with_fallback() {
        let content = r#"
"page.body.marketsTable.filter.all" = "Все"
"page.body.marketsTable.button.trade" = "Торговать"
"#;
        let catalog = Catalog::from_toml_str("ru", content).unwrap();
        assert_eq!(catalog.locale(), "ru");
        assert_eq!(catalog.message(MessageKey::FilterAll), "Все");
        assert_eq!(catalog.message(MessageKey::Trade), "Торговать");
        assert_eq!(catalog.message(MessageKey::HeaderVolume), "Volume");
        assert_eq!(catalog.missing_keys().len(), 5);
    }

    #[test]
    fn dotted_keys_need_no_quotes() {
        let content = r#"
page.noDataToShow = "Нет данных"
page.body.marketsTable.header.asset = "Актив"
"page.body.marketsTable.filter.all" = "Все"
page.body.marketsTable.button = { trade = "Торговать" }
"#;
        let catalog = Catalog::from_toml_str("ru", content).unwrap();
        assert_eq!(catalog.message(MessageKey::NoData), "Нет данных");
        assert_eq!(catalog.message(MessageKey::HeaderAsset), "Актив");
        assert_eq!(catalog.message(MessageKey::FilterAll), "Все");
        assert_eq!(catalog.message(MessageKey::Trade), "Торговать");
        assert_eq!(catalog.missing_keys().len(), 3);
    }

    #[test]
    fn non_string_entry_is_an_error() {
        let err = Catalog::from_toml_str("x", "page.noDataToShow = 3\n").unwrap_err();
        assert!(matches!(err, CatalogError::Entry(id) if id == "page.noDataToShow"));
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<&str> = MessageKey::ALL.iter().map(|k| k.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), MessageKey::ALL.len());
    }

    #[test]
    fn load_reads_locale_from_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("de.toml");
        std::fs::write(&path, "\"page.noDataToShow\" = \"Keine Daten\"\n").unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.locale(), "de");
        assert_eq!(catalog.message(MessageKey::NoData), "Keine Daten");
    }

    #[test]
    fn invalid_catalog_is_an_error() {
        assert!(matches!(
            Catalog::from_toml_str("x", "not = [valid"),
            Err(CatalogError::Parse(_))
        ));
        assert!(matches!(
            Catalog::load(Path::new("/nonexistent/xx.toml")),
            Err(CatalogError::Io { .. })
        ));
    }
}
