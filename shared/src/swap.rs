//! # Swap Panel State
//!
//! The complete local state of the swap widget and its transitions.
//!
//! Every user interaction maps to one [`SwapAction`]. [`SwapPanelState::apply`]
//! applies an action in a single `&mut self` call, so a caller holding the
//! state behind a reactive signal updates it once per action and never exposes
//! a half-applied transition.
//!
//! ## Invariants
//!
//! - The "from" and "to" tokens always have different symbols.
//! - Token selector lists are derived from the current state on every read
//!   (see [`SwapPanelState::options`]) and never stored.
//! - Text fields (amounts, slippage, limit price) are stored verbatim.
//!
//! ## Usage
//!
//! ```rust
//! use shared::swap::{SwapAction, SwapPanelState, TokenSide};
//!
//! let mut panel = SwapPanelState::default();
//! panel.apply(SwapAction::SetAmount(TokenSide::From, "10".to_string())).unwrap();
//! panel.apply(SwapAction::SwapDirection).unwrap();
//!
//! assert_eq!(panel.token(TokenSide::From).symbol, "BTC");
//! assert_eq!(panel.amount(TokenSide::To), "10");
//! ```

use crate::error::{Result, SwapError};
use crate::slippage::DEFAULT_SLIPPAGE;
use crate::token::{Token, TokenCatalog};

/// Which secondary panel the widget shows under the amount fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwapMode {
    /// Market swap with slippage control (default)
    #[default]
    Swap,
    /// Placeholder limit order with a limit price field
    Limit,
}

impl SwapMode {
    /// Modes in tab order
    pub fn all() -> &'static [SwapMode] {
        &[SwapMode::Swap, SwapMode::Limit]
    }

    /// Tab title
    pub fn title(&self) -> &'static str {
        match self {
            SwapMode::Swap => "Swap",
            SwapMode::Limit => "Limit",
        }
    }

    /// Label of the call-to-action button
    pub fn submit_label(&self) -> &'static str {
        match self {
            SwapMode::Swap => "Swap",
            SwapMode::Limit => "Create Limit Order",
        }
    }
}

/// One side of the swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSide {
    /// The side the user pays with
    From,
    /// The side the user receives
    To,
}

impl TokenSide {
    pub fn opposite(&self) -> TokenSide {
        match self {
            TokenSide::From => TokenSide::To,
            TokenSide::To => TokenSide::From,
        }
    }

    /// Section label shown above the side's amount field
    pub fn label(&self) -> &'static str {
        match self {
            TokenSide::From => "You pay",
            TokenSide::To => "You receive",
        }
    }
}

/// A single user interaction with the swap panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapAction {
    /// Switch between the Swap and Limit tabs
    SetMode(SwapMode),
    /// Flip the open flag of one side's token selector
    ToggleSelector(TokenSide),
    /// Pick a token (by symbol) for one side and close that side's selector
    SelectToken(TokenSide, String),
    /// Replace the amount text of one side
    SetAmount(TokenSide, String),
    /// Exchange tokens and amounts between the two sides
    SwapDirection,
    /// Flip the slippage editor's open flag
    ToggleSlippage,
    /// Set slippage from a preset or the custom field
    SetSlippage(String),
    /// Replace the limit price text
    SetLimitPrice(String),
}

/// All mutable state of one swap panel instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapPanelState {
    catalog: TokenCatalog,
    active_mode: SwapMode,
    from_token: Token,
    to_token: Token,
    from_amount: String,
    to_amount: String,
    from_selector_open: bool,
    to_selector_open: bool,
    slippage_tolerance: String,
    slippage_panel_open: bool,
    limit_price: String,
}

impl SwapPanelState {
    /// Fresh panel: first token pays, second token receives, Swap mode,
    /// default slippage, everything closed and empty.
    pub fn new(catalog: TokenCatalog) -> Self {
        let (from, to) = catalog.default_pair();
        let (from_token, to_token) = (from.clone(), to.clone());

        Self {
            catalog,
            active_mode: SwapMode::Swap,
            from_token,
            to_token,
            from_amount: String::new(),
            to_amount: String::new(),
            from_selector_open: false,
            to_selector_open: false,
            slippage_tolerance: DEFAULT_SLIPPAGE.to_string(),
            slippage_panel_open: false,
            limit_price: String::new(),
        }
    }

    /// Apply one user action.
    ///
    /// # Errors
    ///
    /// Only [`SwapAction::SelectToken`] can fail, see
    /// [`SwapPanelState::select_token`]. On error the state is unchanged.
    pub fn apply(&mut self, action: SwapAction) -> Result<()> {
        match action {
            SwapAction::SetMode(mode) => self.set_mode(mode),
            SwapAction::ToggleSelector(side) => self.toggle_selector(side),
            SwapAction::SelectToken(side, symbol) => return self.select_token(side, &symbol),
            SwapAction::SetAmount(side, text) => self.set_amount(side, text),
            SwapAction::SwapDirection => self.swap_direction(),
            SwapAction::ToggleSlippage => self.toggle_slippage_panel(),
            SwapAction::SetSlippage(text) => self.set_slippage(text),
            SwapAction::SetLimitPrice(text) => self.set_limit_price(text),
        }
        Ok(())
    }

    // ---- transitions ----

    /// Only the visible secondary panel changes.
    pub fn set_mode(&mut self, mode: SwapMode) {
        self.active_mode = mode;
    }

    /// Flip one selector's open flag; the other selector is left alone.
    pub fn toggle_selector(&mut self, side: TokenSide) {
        match side {
            TokenSide::From => self.from_selector_open = !self.from_selector_open,
            TokenSide::To => self.to_selector_open = !self.to_selector_open,
        }
    }

    /// Assign `symbol` to `side` and close that side's selector.
    ///
    /// # Errors
    ///
    /// - [`SwapError::UnknownToken`] if the symbol is not in the catalog
    /// - [`SwapError::SameToken`] if the opposite side holds that token
    pub fn select_token(&mut self, side: TokenSide, symbol: &str) -> Result<()> {
        if self.token(side.opposite()).symbol == symbol {
            return Err(SwapError::SameToken(symbol.to_string()));
        }
        let token = self.catalog.get(symbol)?.clone();

        match side {
            TokenSide::From => {
                self.from_token = token;
                self.from_selector_open = false;
            }
            TokenSide::To => {
                self.to_token = token;
                self.to_selector_open = false;
            }
        }
        Ok(())
    }

    /// Store amount text verbatim. The other side is never recomputed.
    pub fn set_amount(&mut self, side: TokenSide, text: String) {
        match side {
            TokenSide::From => self.from_amount = text,
            TokenSide::To => self.to_amount = text,
        }
    }

    /// `(A, B, x, y)` becomes `(B, A, y, x)`.
    pub fn swap_direction(&mut self) {
        std::mem::swap(&mut self.from_token, &mut self.to_token);
        std::mem::swap(&mut self.from_amount, &mut self.to_amount);
    }

    pub fn toggle_slippage_panel(&mut self) {
        self.slippage_panel_open = !self.slippage_panel_open;
    }

    /// Presets and custom input both land here; the panel stays open.
    pub fn set_slippage(&mut self, text: String) {
        self.slippage_tolerance = text;
    }

    pub fn set_limit_price(&mut self, text: String) {
        self.limit_price = text;
    }

    // ---- derived views ----

    /// Tokens offered by `side`'s selector: the catalog minus the token held
    /// by the opposite side.
    pub fn options(&self, side: TokenSide) -> Vec<&Token> {
        self.catalog.without(&self.token(side.opposite()).symbol)
    }

    /// Label of the limit price field, e.g. `Pay ETH at price`.
    pub fn limit_price_label(&self) -> String {
        format!("Pay {} at price", self.from_token.symbol)
    }

    pub fn submit_label(&self) -> &'static str {
        self.active_mode.submit_label()
    }

    // ---- accessors ----

    pub fn catalog(&self) -> &TokenCatalog {
        &self.catalog
    }

    pub fn mode(&self) -> SwapMode {
        self.active_mode
    }

    pub fn token(&self, side: TokenSide) -> &Token {
        match side {
            TokenSide::From => &self.from_token,
            TokenSide::To => &self.to_token,
        }
    }

    pub fn amount(&self, side: TokenSide) -> &str {
        match side {
            TokenSide::From => &self.from_amount,
            TokenSide::To => &self.to_amount,
        }
    }

    pub fn selector_open(&self, side: TokenSide) -> bool {
        match side {
            TokenSide::From => self.from_selector_open,
            TokenSide::To => self.to_selector_open,
        }
    }

    pub fn slippage(&self) -> &str {
        &self.slippage_tolerance
    }

    pub fn slippage_panel_open(&self) -> bool {
        self.slippage_panel_open
    }

    pub fn limit_price(&self) -> &str {
        &self.limit_price
    }
}

impl Default for SwapPanelState {
    fn default() -> Self {
        Self::new(TokenCatalog::default())
    }
}
