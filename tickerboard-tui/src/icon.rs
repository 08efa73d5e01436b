//! Currency icons in a character grid.
//!
//! Terminals can't show the remote icon image, so an icon URL becomes a
//! marker with the alt initials; currencies without one get a generated
//! badge whose color is a stable function of the code.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use tickerboard_core::CurrencyIcon;

use crate::theme::Theme;

/// Columns taken by every icon.
pub const ICON_WIDTH: u16 = 3;

const BADGE_PALETTE: [Color; 8] = [
    Color::Rgb(247, 147, 26),
    Color::Rgb(98, 126, 234),
    Color::Rgb(38, 161, 123),
    Color::Rgb(232, 65, 66),
    Color::Rgb(0, 153, 255),
    Color::Rgb(186, 159, 51),
    Color::Rgb(138, 92, 245),
    Color::Rgb(52, 200, 210),
];

pub fn icon_span(icon: &CurrencyIcon, theme: &Theme) -> Span<'static> {
    match icon {
        CurrencyIcon::Image { alt, .. } => Span::styled(
            format!("◉{}", initials(alt)),
            Style::default().fg(theme.accent),
        ),
        CurrencyIcon::Glyph { code } => glyph_badge(code),
    }
}

/// Generated badge for a currency without an icon.
pub fn glyph_badge(code: &str) -> Span<'static> {
    Span::styled(
        format!("{} ", initials(code)),
        Style::default()
            .fg(Color::Black)
            .bg(badge_color(code))
            .add_modifier(Modifier::BOLD),
    )
}

pub fn badge_color(code: &str) -> Color {
    // FNV-1a, stable across runs and platforms.
    let hash = code
        .bytes()
        .fold(0x811c_9dc5_u32, |acc, b| (acc ^ u32::from(b)).wrapping_mul(0x0100_0193));
    BADGE_PALETTE[hash as usize % BADGE_PALETTE.len()]
}

/// Two columns from the code, space-padded.
fn initials(code: &str) -> String {
    let letters: String = code.chars().filter(|c| c.is_alphanumeric()).take(2).collect();
    match letters.chars().count() {
        0 => "? ".into(),
        1 => format!("{letters} "),
        _ => letters,
    }
}
