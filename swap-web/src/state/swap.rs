//! Swap panel state management
//!
//! Wraps [`SwapPanelState`] in a signal. Every user action goes through
//! [`SwapContext::dispatch`], which applies it inside one `update` call, so
//! subscribers only ever see the state before or after a whole action.

use leptos::prelude::*;
use shared::swap::{SwapAction, SwapMode, SwapPanelState, TokenSide};

/// Per-view swap panel context
#[derive(Clone, Copy)]
pub struct SwapContext {
    pub panel: RwSignal<SwapPanelState>,
}

impl SwapContext {
    pub fn new() -> Self {
        Self {
            panel: RwSignal::new(SwapPanelState::default()),
        }
    }

    pub fn dispatch(&self, action: SwapAction) {
        log::debug!("Swap panel action: {:?}", action);
        self.panel.update(|panel| {
            if let Err(e) = panel.apply(action) {
                log::warn!("Rejected swap panel action: {}", e);
            }
        });
    }

    pub fn set_mode(&self, mode: SwapMode) {
        self.dispatch(SwapAction::SetMode(mode));
    }

    pub fn toggle_selector(&self, side: TokenSide) {
        self.dispatch(SwapAction::ToggleSelector(side));
    }

    pub fn select_token(&self, side: TokenSide, symbol: String) {
        self.dispatch(SwapAction::SelectToken(side, symbol));
    }

    pub fn set_amount(&self, side: TokenSide, text: String) {
        self.dispatch(SwapAction::SetAmount(side, text));
    }

    pub fn swap_direction(&self) {
        self.dispatch(SwapAction::SwapDirection);
    }

    pub fn toggle_slippage(&self) {
        self.dispatch(SwapAction::ToggleSlippage);
    }

    pub fn set_slippage(&self, text: String) {
        self.dispatch(SwapAction::SetSlippage(text));
    }

    pub fn set_limit_price(&self, text: String) {
        self.dispatch(SwapAction::SetLimitPrice(text));
    }
}

impl Default for SwapContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide a fresh panel for the current view. Called by the swap page, so
/// the state lives exactly as long as the page is mounted.
pub fn provide_swap_context() -> SwapContext {
    let context = SwapContext::new();
    provide_context(context);
    context
}

pub fn use_swap_context() -> SwapContext {
    expect_context::<SwapContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_applies_whole_action() {
        let ctx = SwapContext::new();
        ctx.set_amount(TokenSide::From, "10".to_string());
        ctx.swap_direction();

        ctx.panel.with(|panel| {
            assert_eq!(panel.token(TokenSide::From).symbol, "BTC");
            assert_eq!(panel.token(TokenSide::To).symbol, "ETH");
            assert_eq!(panel.amount(TokenSide::From), "");
            assert_eq!(panel.amount(TokenSide::To), "10");
        });
    }

    #[test]
    fn test_rejected_selection_keeps_state() {
        let ctx = SwapContext::new();
        let before = ctx.panel.get();
        ctx.select_token(TokenSide::From, "BTC".to_string());
        assert_eq!(ctx.panel.get(), before);
    }
}
