//! Color tokens for the market board.
//!
//! # Color Palette
//! - **Background**: deep charcoal (base layer)
//! - **Accent**: electric cyan (active tab, headers, focus)
//! - **Positive**: neon green (rising markets)
//! - **Negative**: hot pink (falling markets)
//! - **Warning**: neon orange (diagnostics)
//! - **Muted**: steel blue (quote symbol, secondary text)

use ratatui::style::{Color, Modifier, Style};

use tickerboard_core::Trend;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    /// Selected row background.
    pub selection: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::neon()
    }
}

impl Theme {
    pub fn neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            selection: Color::Rgb(60, 50, 90),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    pub fn trend_color(&self, trend: Trend) -> Color {
        match trend {
            Trend::Positive => self.positive,
            Trend::Negative => self.negative,
        }
    }

    pub fn tab(&self, active: bool) -> Style {
        if active {
            Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(self.text_secondary)
        }
    }

    pub fn header(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn pair_base(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn pair_quote(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn button(&self) -> Style {
        Style::default()
            .fg(self.background)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn row(&self, selected: bool) -> Style {
        if selected {
            Style::default().bg(self.selection).fg(self.text_primary)
        } else {
            Style::default().fg(self.text_primary)
        }
    }
}
