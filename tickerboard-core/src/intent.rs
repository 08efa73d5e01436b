//! User intent emitted by the ticker table.
//!
//! The table never acts on intent itself. It hands every intent to the
//! caller's [`TickerTableActions`], which owns the state being changed.

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Switch the quote-unit filter. Empty key means all markets.
    SetCurrentBidUnit(String),
    /// Open the trading view for a market id.
    RedirectToTrading(String),
    /// Move the row cursor. Cursor state belongs to the caller.
    Select(usize),
}

impl Intent {
    /// Invokes exactly one action for this intent.
    pub fn dispatch<A: TickerTableActions + ?Sized>(self, actions: &mut A) {
        tracing::debug!(intent = ?self, "dispatching ticker table intent");
        match self {
            Intent::SetCurrentBidUnit(key) => actions.set_current_bid_unit(&key),
            Intent::RedirectToTrading(market_id) => actions.redirect_to_trading(&market_id),
            Intent::Select(index) => actions.select_row(index),
        }
    }
}

/// Caller-side receiver for table intent.
pub trait TickerTableActions {
    fn redirect_to_trading(&mut self, market_id: &str);

    fn set_current_bid_unit(&mut self, key: &str);

    /// Cursor movement. Callers without a cursor can ignore it.
    fn select_row(&mut self, _index: usize) {}
}

/// Adapter turning two closures into [`TickerTableActions`].
pub struct Callbacks<R, S>
where
    R: FnMut(&str),
    S: FnMut(&str),
{
    pub redirect_to_trading: R,
    pub set_current_bid_unit: S,
}

impl<R, S> Callbacks<R, S>
where
    R: FnMut(&str),
    S: FnMut(&str),
{
    pub fn new(redirect_to_trading: R, set_current_bid_unit: S) -> Self {
        Self {
            redirect_to_trading,
            set_current_bid_unit,
        }
    }
}

impl<R, S> TickerTableActions for Callbacks<R, S>
where
    R: FnMut(&str),
    S: FnMut(&str),
{
    fn redirect_to_trading(&mut self, market_id: &str) {
        (self.redirect_to_trading)(market_id)
    }

    fn set_current_bid_unit(&mut self, key: &str) {
        (self.set_current_bid_unit)(key)
    }
}
