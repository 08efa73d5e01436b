//! Ticker table widget - filter strip above a market table
//!
//! Displays:
//! - Filter tabs (quote units, active one highlighted)
//! - Asset (icon, bold base / muted quote, full currency name)
//! - Last price
//! - Volume
//! - Percent change (colored by trend)
//! - Trade button
//!
//! Drawing and mouse hit-testing share [`TickerTableLayout`], so a click
//! always lands on what was drawn there.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

use tickerboard_core::{MarketRow, TableBody, TickerTableView};

use crate::icon::{icon_span, ICON_WIDTH};
use crate::theme::Theme;

/// Lines per market row: pair name, then full currency name.
pub const ROW_HEIGHT: u16 = 2;

const TAB_GAP: u16 = 1;
const PRICE_WIDTH: u16 = 16;
const VOLUME_WIDTH: u16 = 16;
const CHANGE_WIDTH: u16 = 10;
const MIN_BUTTON_WIDTH: u16 = 7;
/// Overflow marker plus its gap.
const MARKER_WIDTH: u32 = 2;

/// Screen areas of one visible market row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowArea {
    /// Index into the view's rows.
    pub index: usize,
    pub area: Rect,
    pub trade: Rect,
}

/// What a screen position falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Tab(usize),
    Trade(usize),
    Row(usize),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickerTableLayout {
    /// Tabs that fit, starting at view tab `tab_offset`.
    pub tabs: Vec<Rect>,
    pub tab_offset: usize,
    /// Markers for tabs scrolled off either end of the strip.
    pub more_left: Option<Rect>,
    pub more_right: Option<Rect>,
    pub header: Rect,
    /// Asset, last price, volume, change, action.
    pub columns: [Rect; 5],
    pub rows: Vec<RowArea>,
    pub no_data: Option<Rect>,
    /// First visible row index.
    pub offset: usize,
}

impl TickerTableLayout {
    /// Lays out `view` inside `area` (the area inside the border), scrolled
    /// so that `selected` is visible.
    pub fn compute(area: Rect, view: &TickerTableView, selected: Option<usize>) -> Self {
        let mut layout = Self::default();
        if area.is_empty() {
            return layout;
        }

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);
        let (tab_line, header, body) = (chunks[0], chunks[1], chunks[2]);

        if tab_line.height > 0 {
            layout.place_tabs(tab_line, view);
        }

        let button_width = button_width(view);
        let columns = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(PRICE_WIDTH),
            Constraint::Length(VOLUME_WIDTH),
            Constraint::Length(CHANGE_WIDTH),
            Constraint::Length(button_width),
        ])
        .spacing(1)
        .split(header);
        layout.header = header;
        layout.columns = [columns[0], columns[1], columns[2], columns[3], columns[4]];

        match &view.body {
            TableBody::Empty { .. } => {
                if body.height > 0 {
                    layout.no_data = Some(Rect::new(body.x, body.y, body.width, 1));
                }
            }
            TableBody::Rows(rows) => {
                let visible = usize::from(body.height / ROW_HEIGHT);
                let offset = match selected.map(|s| s.min(rows.len().saturating_sub(1))) {
                    Some(sel) if visible > 0 && sel >= visible => sel + 1 - visible,
                    _ => 0,
                };
                layout.offset = offset;

                let action = layout.columns[4];
                for (slot, index) in (offset..rows.len()).take(visible).enumerate() {
                    let y = body.y + slot as u16 * ROW_HEIGHT;
                    layout.rows.push(RowArea {
                        index,
                        area: Rect::new(body.x, y, body.width, ROW_HEIGHT),
                        trade: Rect::new(action.x, y, action.width, 1),
                    });
                }
            }
        }

        layout
    }

    /// Scrolls the strip so the active tab is shown, marking hidden tabs
    /// with `‹` / `›`.
    fn place_tabs(&mut self, line: Rect, view: &TickerTableView) {
        let widths: Vec<u32> = view
            .tabs
            .iter()
            .map(|tab| u32::from(text_width(&tab.label)) + 2)
            .collect();
        let avail = u32::from(line.width);
        let active = view.active_tab().unwrap_or(0);

        let mut start = 0;
        while start < active && fit_tabs(&widths, start, avail) <= active {
            start += 1;
        }
        let end = fit_tabs(&widths, start, avail);

        let right = u32::from(line.right());
        let mut x = u32::from(line.x);
        if start > 0 {
            self.more_left = Some(Rect::new(line.x, line.y, 1, 1));
            x += MARKER_WIDTH;
        }
        for width in &widths[start..end] {
            self.tabs.push(Rect::new(x as u16, line.y, *width as u16, 1));
            x += width + u32::from(TAB_GAP);
        }
        if end < widths.len() && x < right {
            self.more_right = Some(Rect::new(x as u16, line.y, 1, 1));
        }
        self.tab_offset = start;
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let pos = Position::new(column, row);
        if let Some(i) = self.tabs.iter().position(|tab| tab.contains(pos)) {
            return Some(Hit::Tab(self.tab_offset + i));
        }
        self.rows.iter().find_map(|row| {
            if row.trade.contains(pos) {
                Some(Hit::Trade(row.index))
            } else if row.area.contains(pos) {
                Some(Hit::Row(row.index))
            } else {
                None
            }
        })
    }
}

/// Ticker table widget
pub struct TickerTablePanel<'a> {
    view: &'a TickerTableView,
    selected: Option<usize>,
    theme: &'a Theme,
}

impl<'a> TickerTablePanel<'a> {
    pub fn new(view: &'a TickerTableView, selected: Option<usize>, theme: &'a Theme) -> Self {
        Self {
            view,
            selected,
            theme,
        }
    }

    /// Layout this widget will use when rendered into `area`.
    pub fn layout(&self, area: Rect) -> TickerTableLayout {
        TickerTableLayout::compute(self.block().inner(area), self.view, self.selected)
    }

    fn block(&self) -> Block<'static> {
        let title = match self.view.active_tab() {
            Some(i) => format!(" Markets [{}] ", self.view.tabs[i].label),
            None => " Markets ".to_string(),
        };
        let mut block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .style(Style::default().bg(self.theme.background));

        let misses = self.view.diagnostics.len();
        if misses > 0 {
            block = block.title_bottom(
                Line::from(Span::styled(
                    format!(" {misses} unknown currencies "),
                    Style::default().fg(self.theme.warning),
                ))
                .right_aligned(),
            );
        }
        block
    }

    fn render_tabs(&self, layout: &TickerTableLayout, buf: &mut Buffer) {
        let shown = self.view.tabs.iter().skip(layout.tab_offset);
        for (tab, area) in shown.zip(&layout.tabs) {
            let label = Line::styled(format!(" {} ", tab.label), self.theme.tab(tab.active));
            buf.set_line(area.x, area.y, &label, area.width);
        }
        let marker = Style::default().fg(self.theme.muted);
        for (area, symbol) in [(layout.more_left, "‹"), (layout.more_right, "›")] {
            if let Some(area) = area {
                buf.set_string(area.x, area.y, symbol, marker);
            }
        }
    }

    fn render_header(&self, layout: &TickerTableLayout, buf: &mut Buffer) {
        if layout.header.height == 0 {
            return;
        }
        let headers = &self.view.headers;
        let style = self.theme.header();
        let [asset, last, volume, change, _] = layout.columns;
        put_left(buf, asset, Line::styled(headers.asset.as_str(), style));
        put_right(buf, last, Line::styled(headers.last_price.as_str(), style));
        put_right(buf, volume, Line::styled(headers.volume.as_str(), style));
        put_right(buf, change, Line::styled(headers.change.as_str(), style));
    }

    fn render_row(&self, row: &MarketRow, area: &RowArea, layout: &TickerTableLayout, buf: &mut Buffer) {
        let selected = self.selected == Some(area.index);
        buf.set_style(area.area, self.theme.row(selected));

        let y = area.area.y;
        let on_line = |col: Rect, dy: u16| Rect::new(col.x, y + dy, col.width, 1);
        let [asset, last, volume, change, _] = layout.columns;

        let mut name = vec![icon_span(&row.icon, self.theme), Span::raw(" ")];
        if let Some(pair) = &row.pair {
            name.push(Span::styled(pair.base.clone(), self.theme.pair_base()));
            name.push(Span::styled(pair.quote_label(), self.theme.pair_quote()));
        }
        put_left(buf, on_line(asset, 0), Line::from(name));

        if area.area.height > 1 {
            let indent = ICON_WIDTH + 1;
            let full_name = Rect::new(
                asset.x.saturating_add(indent),
                y + 1,
                asset.width.saturating_sub(indent),
                1,
            );
            put_left(
                buf,
                full_name,
                Line::styled(row.full_name.as_str(), Style::default().fg(self.theme.text_secondary)),
            );
        }

        put_right(buf, on_line(last, 0), Line::raw(row.last.as_str()));
        put_right(buf, on_line(volume, 0), Line::raw(row.volume.as_str()));
        put_right(
            buf,
            on_line(change, 0),
            Line::styled(
                row.change_percent.as_str(),
                Style::default()
                    .fg(self.theme.trend_color(row.trend))
                    .add_modifier(Modifier::BOLD),
            ),
        );

        put_left(
            buf,
            area.trade,
            Line::styled(format!(" {} ", row.trade_label), self.theme.button()),
        );
    }
}

impl<'a> Widget for TickerTablePanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = TickerTableLayout::compute(inner, self.view, self.selected);
        self.render_tabs(&layout, buf);
        self.render_header(&layout, buf);

        match &self.view.body {
            TableBody::Empty { message } => {
                if let Some(area) = layout.no_data {
                    put_left(
                        buf,
                        area,
                        Line::styled(
                            message.as_str(),
                            Style::default()
                                .fg(self.theme.text_secondary)
                                .add_modifier(Modifier::ITALIC),
                        ),
                    );
                }
            }
            TableBody::Rows(rows) => {
                for row_area in &layout.rows {
                    self.render_row(&rows[row_area.index], row_area, &layout, buf);
                }
            }
        }
    }
}

/// End (exclusive) of the tabs from `start` that fit in `avail` columns,
/// leaving room for the overflow markers they need.
fn fit_tabs(widths: &[u32], start: usize, avail: u32) -> usize {
    let lead = if start > 0 { MARKER_WIDTH } else { 0 };
    let span = |end: usize| -> u32 {
        let tabs: u32 = widths[start..end].iter().sum();
        let gaps = (end - start).saturating_sub(1) as u32 * u32::from(TAB_GAP);
        lead + tabs + gaps
    };

    if span(widths.len()) <= avail {
        return widths.len();
    }
    let mut end = start;
    while end < widths.len() && span(end + 1) + MARKER_WIDTH <= avail {
        end += 1;
    }
    end
}

fn text_width(text: &str) -> u16 {
    u16::try_from(Span::raw(text).width()).unwrap_or(u16::MAX)
}

fn button_width(view: &TickerTableView) -> u16 {
    view.rows()
        .iter()
        .map(|row| text_width(&row.trade_label).saturating_add(2))
        .max()
        .unwrap_or(0)
        .max(MIN_BUTTON_WIDTH)
}

fn put_left(buf: &mut Buffer, area: Rect, line: Line<'_>) {
    if area.is_empty() {
        return;
    }
    buf.set_line(area.x, area.y, &line, area.width);
}

fn put_right(buf: &mut Buffer, area: Rect, line: Line<'_>) {
    if area.is_empty() {
        return;
    }
    let width = u16::try_from(line.width()).unwrap_or(u16::MAX);
    let x = area.x + area.width.saturating_sub(width);
    buf.set_line(x, area.y, &line, area.right().saturating_sub(x));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{buffer_lines, sample_view};

    #[test]
    fn layout_places_tabs_in_order() {
        let view = sample_view("usd", 3);
        let layout = TickerTableLayout::compute(Rect::new(0, 0, 80, 20), &view, None);
        assert_eq!(layout.tabs.len(), 3);
        // " All " then gap then " USD "
        assert_eq!(layout.tabs[0], Rect::new(0, 0, 5, 1));
        assert_eq!(layout.tabs[1].x, 6);
        assert_eq!(layout.rows.len(), 3);
        assert_eq!(layout.rows[0].area.y, 2);
        assert_eq!(layout.rows[1].area.y, 2 + ROW_HEIGHT);
    }

    #[test]
    fn layout_scrolls_to_selection() {
        let view = sample_view("", 10);
        // two header lines + room for three rows
        let area = Rect::new(0, 0, 80, 2 + 3 * ROW_HEIGHT);
        let layout = TickerTableLayout::compute(area, &view, Some(7));
        assert_eq!(layout.offset, 5);
        let indices: Vec<usize> = layout.rows.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![5, 6, 7]);

        let layout = TickerTableLayout::compute(area, &view, Some(99));
        assert_eq!(layout.rows.last().map(|r| r.index), Some(9));
    }

    #[test]
    fn hit_testing() {
        let view = sample_view("", 2);
        let layout = TickerTableLayout::compute(Rect::new(0, 0, 80, 20), &view, None);
        assert_eq!(layout.hit(1, 0), Some(Hit::Tab(0)));
        let trade = layout.rows[1].trade;
        assert_eq!(layout.hit(trade.x, trade.y), Some(Hit::Trade(1)));
        assert_eq!(layout.hit(0, layout.rows[0].area.y + 1), Some(Hit::Row(0)));
        assert_eq!(layout.hit(0, 1), None);
    }

    #[test]
    fn narrow_strip_scrolls_to_active_tab() {
        // " All ", " USD ", " EUR " are five wide each
        let view = sample_view("eur", 1);
        let layout = TickerTableLayout::compute(Rect::new(0, 0, 10, 10), &view, None);
        assert_eq!(layout.tab_offset, 2);
        assert_eq!(layout.tabs, vec![Rect::new(2, 0, 5, 1)]);
        assert_eq!(layout.more_left, Some(Rect::new(0, 0, 1, 1)));
        assert_eq!(layout.more_right, None);
        assert_eq!(layout.hit(3, 0), Some(Hit::Tab(2)));

        let view = sample_view("", 1);
        let layout = TickerTableLayout::compute(Rect::new(0, 0, 10, 10), &view, None);
        assert_eq!(layout.tab_offset, 0);
        assert_eq!(layout.tabs, vec![Rect::new(0, 0, 5, 1)]);
        assert_eq!(layout.more_left, None);
        assert_eq!(layout.more_right, Some(Rect::new(6, 0, 1, 1)));
    }

    #[test]
    fn overflow_markers_are_drawn() {
        let view = sample_view("eur", 1);
        let theme = Theme::default();
        // border leaves ten columns inside
        let area = Rect::new(0, 0, 12, 8);
        let mut buf = Buffer::empty(area);
        TickerTablePanel::new(&view, None, &theme).render(area, &mut buf);
        let lines = buffer_lines(&buf);
        assert!(lines[1].contains('‹'));
        assert!(lines[1].contains("EUR"));
        assert!(!lines[1].contains("All"));
    }

    #[test]
    fn tiny_area_does_not_panic() {
        let view = sample_view("", 4);
        let theme = Theme::default();
        for (w, h) in [(0, 0), (1, 1), (3, 2), (10, 3), (80, 1)] {
            let area = Rect::new(0, 0, w, h);
            let mut buf = Buffer::empty(area);
            TickerTablePanel::new(&view, Some(2), &theme).render(area, &mut buf);
        }
    }

    #[test]
    fn renders_no_data_row() {
        let view = sample_view("", 0);
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 8);
        let mut buf = Buffer::empty(area);
        TickerTablePanel::new(&view, None, &theme).render(area, &mut buf);
        let lines = buffer_lines(&buf);
        let hits = lines.iter().filter(|l| l.contains("There is no data to show")).count();
        assert_eq!(hits, 1);
        assert!(!lines.iter().any(|l| l.contains("Trade")));
    }

    #[test]
    fn warns_about_unknown_currencies() {
        let mut view = sample_view("", 1);
        view.diagnostics.push(tickerboard_core::Diagnostic::MissingCurrency {
            market_id: "m0".into(),
            base_unit: "zzz".into(),
        });
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 8);
        let mut buf = Buffer::empty(area);
        TickerTablePanel::new(&view, None, &theme).render(area, &mut buf);
        let lines = buffer_lines(&buf);
        assert!(lines[7].contains("1 unknown currencies"));
    }
}
