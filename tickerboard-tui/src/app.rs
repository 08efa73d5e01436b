//! Application state — single-owner, main-thread only.
//!
//! `App` is the state-owning side of the ticker table: it keeps the market
//! snapshot, the active bid unit and the row cursor, filters markets for
//! the active unit, and receives table intent through `TickerTableActions`.

use chrono::NaiveDateTime;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};

use tickerboard_core::{
    build_view, Catalog, Market, MarketSnapshot, TableConfig, TickerTableActions,
    TickerTableProps, TickerTableView,
};

use crate::input::{key_intent, mouse_intent};
use crate::theme::Theme;
use crate::ticker_table::TickerTableLayout;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Trade requests kept for the session; older ones are dropped.
pub const TRADE_HISTORY: usize = 20;

/// A trading view the user asked to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeRequest {
    pub market_id: String,
    pub requested_at: NaiveDateTime,
}

pub struct App {
    pub running: bool,

    // Inputs owned on behalf of the table
    pub snapshot: MarketSnapshot,
    pub bid_units: Vec<String>,
    pub current_bid_unit: String,
    pub markets: Vec<Market>,
    pub selected: Option<usize>,

    // Presentation
    pub catalog: Catalog,
    pub config: TableConfig,
    pub theme: Theme,
    pub view: TickerTableView,
    /// Layout from the last draw, used for mouse hit-testing.
    pub layout: TickerTableLayout,

    pub status_message: Option<(String, StatusLevel)>,
    pub trade_requests: Vec<TradeRequest>,
}

impl App {
    pub fn new(snapshot: MarketSnapshot, catalog: Catalog, config: TableConfig) -> Self {
        let bid_units = snapshot.bid_units();
        let markets = snapshot.markets_for("");
        let selected = (!markets.is_empty()).then_some(0);
        let mut app = Self {
            running: true,
            snapshot,
            bid_units,
            current_bid_unit: String::new(),
            markets,
            selected,
            catalog,
            config,
            theme: Theme::default(),
            view: TickerTableView::default(),
            layout: TickerTableLayout::default(),
            status_message: None,
            trade_requests: Vec::new(),
        };
        app.rebuild_view();
        app
    }

    /// Rebuilds the view after any input change.
    pub fn rebuild_view(&mut self) {
        let props = TickerTableProps {
            current_bid_unit: &self.current_bid_unit,
            current_bid_units_list: &self.bid_units,
            markets: &self.markets,
            currencies: &self.snapshot.currencies,
        };
        self.view = build_view(&props, &self.catalog, &self.config);
        if let Some(first) = self.view.diagnostics.first() {
            let more = self.view.diagnostics.len() - 1;
            let msg = if more > 0 {
                format!("{first} (+{more} more)")
            } else {
                first.to_string()
            };
            self.set_warning(msg);
        }
    }

    /// Market id under the cursor.
    pub fn selected_market(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.markets.get(i))
            .map(|market| market.id.as_str())
    }

    /// Puts the cursor on `market_id` if it is visible.
    pub fn select_market(&mut self, market_id: &str) {
        if let Some(i) = self.markets.iter().position(|m| m.id == market_id) {
            self.selected = Some(i);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.running = false;
                return;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
                return;
            }
            _ => {}
        }
        if let Some(intent) = key_intent(&self.view, self.selected, key) {
            intent.dispatch(self);
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let Some(intent) = mouse_intent(&self.layout, &self.view, self.selected, mouse) {
            intent.dispatch(self);
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

impl TickerTableActions for App {
    fn redirect_to_trading(&mut self, market_id: &str) {
        let request = TradeRequest {
            market_id: market_id.to_string(),
            requested_at: chrono::Local::now().naive_local(),
        };
        let at = request.requested_at.format("%H:%M:%S").to_string();
        self.set_status(format!("Opening trading view for {market_id} ({at})"));
        tracing::info!(market_id, %at, "trading view requested");

        if self.trade_requests.len() >= TRADE_HISTORY {
            let excess = self.trade_requests.len() + 1 - TRADE_HISTORY;
            self.trade_requests.drain(..excess);
        }
        self.trade_requests.push(request);
    }

    fn set_current_bid_unit(&mut self, key: &str) {
        if key == self.current_bid_unit {
            return;
        }
        let keep = self.selected_market().map(str::to_string);
        self.current_bid_unit = key.to_string();
        self.markets = self.snapshot.markets_for(key);
        self.selected = (!self.markets.is_empty()).then_some(0);
        if let Some(id) = keep {
            self.select_market(&id);
        }
        self.status_message = None;
        self.rebuild_view();
    }

    fn select_row(&mut self, index: usize) {
        if index < self.markets.len() {
            self.selected = Some(index);
        }
    }
}
