//! Rendered-output tests for the ticker table widget.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::widgets::Widget;

use tickerboard_core::{
    build_view, Catalog, Currency, Market, TableConfig, TickerTableProps, TickerTableView,
};
use tickerboard_tui::{Theme, TickerTablePanel};

fn lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| (area.left()..area.right()).map(|x| buf[(x, y)].symbol()).collect())
        .collect()
}

fn view(markets: &[Market], unit: &str) -> TickerTableView {
    let units: Vec<String> = ["", "usd", "eur"].iter().map(|s| s.to_string()).collect();
    let currencies = vec![
        Currency::new("btc", "Bitcoin").with_icon("https://cdn/btc.svg"),
        Currency::new("eth", "Ethereum"),
    ];
    let props = TickerTableProps {
        current_bid_unit: unit,
        current_bid_units_list: &units,
        markets,
        currencies: &currencies,
    };
    build_view(&props, &Catalog::english(), &TableConfig::default())
}

fn btcusd() -> Market {
    let mut market = Market::new("btcusd", "btc");
    market.name = Some("BTC/USD".into());
    market.last = Some(1234.5);
    market.price_precision = 2;
    market.volume = Some(1500.0);
    market.change = Some(-5.0);
    market.price_change_percent = Some("-0.40%".into());
    market
}

fn render(view: &TickerTableView, selected: Option<usize>) -> Buffer {
    let theme = Theme::default();
    let area = Rect::new(0, 0, 90, 12);
    let mut buf = Buffer::empty(area);
    TickerTablePanel::new(view, selected, &theme).render(area, &mut buf);
    buf
}

/// Column index of `needle` on line `y`, counted in cells.
fn find(buf: &Buffer, y: u16, needle: &str) -> Option<u16> {
    let line = &lines(buf)[usize::from(y)];
    line.find(needle)
        .map(|byte| line[..byte].chars().count() as u16)
}

#[test]
fn row_shows_formatted_cells() {
    let v = view(&[btcusd()], "");
    let buf = render(&v, None);
    let text = lines(&buf);

    // border, tabs, header, then the two row lines
    assert!(text[1].contains(" All "));
    assert!(text[2].contains("Asset"));
    assert!(text[2].contains("Last price"));
    assert!(text[3].contains("BTC/USD"));
    assert!(text[3].contains("1,234.50"));
    assert!(text[3].contains("1,500.00"));
    assert!(text[3].contains("-0.40%"));
    assert!(text[3].contains(" Trade "));
    assert!(text[4].contains("Bitcoin"));
}

#[test]
fn pair_segments_are_styled_apart() {
    let v = view(&[btcusd()], "");
    let buf = render(&v, None);
    let theme = Theme::default();

    let base = find(&buf, 3, "BTC/").unwrap();
    assert!(buf[(base, 3)].modifier.contains(Modifier::BOLD));
    let slash = base + 3;
    assert_eq!(buf[(slash, 3)].fg, theme.muted);
    assert!(!buf[(slash, 3)].modifier.contains(Modifier::BOLD));
}

#[test]
fn negative_change_uses_negative_color() {
    let v = view(&[btcusd()], "");
    let buf = render(&v, None);
    let theme = Theme::default();
    let x = find(&buf, 3, "-0.40%").unwrap();
    assert_eq!(buf[(x, 3)].fg, theme.negative);

    let mut up = btcusd();
    up.change = Some(5.0);
    up.price_change_percent = Some("+0.40%".into());
    let v = view(&[up], "");
    let buf = render(&v, None);
    let x = find(&buf, 3, "+0.40%").unwrap();
    assert_eq!(buf[(x, 3)].fg, theme.positive);
}

#[test]
fn active_tab_is_highlighted() {
    let v = view(&[btcusd()], "usd");
    let buf = render(&v, None);
    let usd = find(&buf, 1, "USD").unwrap();
    let eur = find(&buf, 1, "EUR").unwrap();
    assert!(buf[(usd, 1)].modifier.contains(Modifier::REVERSED));
    assert!(!buf[(eur, 1)].modifier.contains(Modifier::REVERSED));
}

#[test]
fn missing_name_leaves_pair_blank() {
    let mut market = Market::new("ethusd", "eth");
    market.last = Some(10.0);
    let v = view(&[market], "");
    let buf = render(&v, None);
    let text = lines(&buf);
    assert!(!text[3].contains('/'));
    assert!(text[4].contains("Ethereum"));
}

#[test]
fn selected_row_gets_selection_background() {
    let mut second = btcusd();
    second.id = "btcusd2".into();
    let v = view(&[btcusd(), second], "");
    let buf = render(&v, Some(1));
    let theme = Theme::default();
    // second row starts two lines below the first
    assert_eq!(buf[(60, 5)].bg, theme.selection);
    assert_ne!(buf[(60, 3)].bg, theme.selection);
}
