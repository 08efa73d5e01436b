//! Tickerboard TUI - terminal market board
//!
//! Provides the ratatui rendering of the ticker table:
//! - `TickerTablePanel` widget (filter strip, market rows, trade buttons)
//! - Shared layout for drawing and mouse hit-testing
//! - Key and mouse mapping to table intent
//! - A demo `App` that owns the markets and answers table intent

pub mod app;
pub mod icon;
pub mod input;
pub mod persistence;
pub mod sample_data;
pub mod theme;
pub mod ticker_table;
pub mod ui;

pub use app::App;
pub use theme::Theme;
pub use ticker_table::{Hit, TickerTableLayout, TickerTablePanel};

#[cfg(test)]
mod test_helpers;
