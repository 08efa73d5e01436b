//! Tickerboard CLI — one-shot rendering and data checks.
//!
//! Commands:
//! - `snapshot` — draw the ticker table for a market snapshot and print it
//! - `check` — list markets whose base currency is missing

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use tracing_subscriber::EnvFilter;

use tickerboard_core::{
    build_view, Catalog, MarketSnapshot, TableConfig, TickerTableProps,
};
use tickerboard_tui::{Theme, TickerTablePanel};

#[derive(Parser)]
#[command(name = "tickerboard", about = "Tickerboard CLI — market ticker table tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw the ticker table once and print it as plain text.
    Snapshot {
        /// Market snapshot JSON.
        #[arg(long)]
        data: PathBuf,

        /// Quote-unit filter. Empty shows all markets.
        #[arg(long, default_value = "")]
        unit: String,

        /// Output width in columns.
        #[arg(long, default_value_t = 100)]
        width: u16,

        /// Output height in lines.
        #[arg(long, default_value_t = 30)]
        height: u16,

        /// Table config TOML.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Message catalog TOML.
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Report markets that reference unknown currencies.
    Check {
        /// Market snapshot JSON.
        #[arg(long)]
        data: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Snapshot {
            data,
            unit,
            width,
            height,
            config,
            catalog,
        } => {
            let snapshot = MarketSnapshot::load(&data)?;
            let config = TableConfig::load_or_default(config.as_deref())?;
            let catalog = match catalog {
                Some(path) => Catalog::load(&path)?,
                None => Catalog::english(),
            };
            let units = snapshot.bid_units();
            let unit = resolve_unit(&units, &unit)?;
            tracing::info!(
                data = %data.display(),
                unit,
                markets = snapshot.markets_for(unit).len(),
                width,
                height,
                "rendering snapshot"
            );
            for line in render_snapshot(&snapshot, unit, &units, &config, &catalog, width, height) {
                println!("{}", line.trim_end());
            }
        }
        Commands::Check { data } => {
            let snapshot = MarketSnapshot::load(&data)?;
            let units = snapshot.bid_units();
            let props = TickerTableProps {
                current_bid_unit: "",
                current_bid_units_list: &units,
                markets: &snapshot.markets,
                currencies: &snapshot.currencies,
            };
            let view = build_view(&props, &Catalog::english(), &TableConfig::default());
            tracing::info!(
                data = %data.display(),
                markets = snapshot.markets.len(),
                diagnostics = view.diagnostics.len(),
                "checked snapshot"
            );
            if view.diagnostics.is_empty() {
                println!(
                    "{} markets, {} currencies: ok",
                    snapshot.markets.len(),
                    snapshot.currencies.len()
                );
            } else {
                for diagnostic in &view.diagnostics {
                    println!("{diagnostic}");
                }
                bail!("{} markets reference unknown currencies", view.diagnostics.len());
            }
        }
    }

    Ok(())
}

/// Matches `--unit` against the offered bid units, ignoring case.
fn resolve_unit<'a>(units: &'a [String], unit: &str) -> Result<&'a str> {
    let wanted = unit.to_lowercase();
    match units.iter().find(|candidate| **candidate == wanted) {
        Some(found) => Ok(found.as_str()),
        None => bail!(
            "unknown quote unit {unit:?}; available: {}",
            units.iter().filter(|u| !u.is_empty()).cloned().collect::<Vec<_>>().join(", ")
        ),
    }
}

fn render_snapshot(
    snapshot: &MarketSnapshot,
    unit: &str,
    units: &[String],
    config: &TableConfig,
    catalog: &Catalog,
    width: u16,
    height: u16,
) -> Vec<String> {
    let markets = snapshot.markets_for(unit);
    let props = TickerTableProps {
        current_bid_unit: unit,
        current_bid_units_list: units,
        markets: &markets,
        currencies: &snapshot.currencies,
    };
    let view = build_view(&props, catalog, config);

    let theme = Theme::default();
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    TickerTablePanel::new(&view, None, &theme).render(area, &mut buf);

    (area.top()..area.bottom())
        .map(|y| (area.left()..area.right()).map(|x| buf[(x, y)].symbol()).collect())
        .collect()
}
