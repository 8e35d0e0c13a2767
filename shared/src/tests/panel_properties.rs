//! Property-based tests for the swap panel state machine
//!
//! Random action sequences drive a panel from its initial state; the
//! properties below must hold for every reachable state, not just the
//! hand-picked scenarios in `swap.rs`.

use crate::swap::{SwapAction, SwapMode, SwapPanelState, TokenSide};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn side() -> impl Strategy<Value = TokenSide> {
    prop_oneof![Just(TokenSide::From), Just(TokenSide::To)]
}

fn mode() -> impl Strategy<Value = SwapMode> {
    prop_oneof![Just(SwapMode::Swap), Just(SwapMode::Limit)]
}

// DOGE is not in the catalog, so unknown-token selections are covered too
fn symbol() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["ETH", "BTC", "ADA", "XRP", "DOGE"]).prop_map(str::to_string)
}

fn action() -> impl Strategy<Value = SwapAction> {
    prop_oneof![
        mode().prop_map(SwapAction::SetMode),
        side().prop_map(SwapAction::ToggleSelector),
        (side(), symbol()).prop_map(|(side, sym)| SwapAction::SelectToken(side, sym)),
        (side(), "[0-9.-]{0,8}").prop_map(|(side, text)| SwapAction::SetAmount(side, text)),
        Just(SwapAction::SwapDirection),
        Just(SwapAction::ToggleSlippage),
        "[0-9.]{0,5}".prop_map(SwapAction::SetSlippage),
        "[0-9.]{0,8}".prop_map(SwapAction::SetLimitPrice),
    ]
}

fn reachable_panel() -> impl Strategy<Value = SwapPanelState> {
    prop::collection::vec(action(), 0..40).prop_map(|actions| {
        let mut panel = SwapPanelState::default();
        for action in actions {
            // Rejected selections leave the state untouched
            let _ = panel.apply(action);
        }
        panel
    })
}

fn distinct_tokens(panel: &SwapPanelState) -> bool {
    panel.token(TokenSide::From).symbol != panel.token(TokenSide::To).symbol
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Property: no action sequence can give both sides the same token
    #[test]
    fn prop_sides_never_share_a_token(actions in prop::collection::vec(action(), 0..60)) {
        let mut panel = SwapPanelState::default();
        for action in actions {
            let _ = panel.apply(action);
            prop_assert!(distinct_tokens(&panel));
        }
    }

    /// Property: every option a selector offers can be selected, and stays valid
    #[test]
    fn prop_every_offered_option_is_selectable(panel in reachable_panel(), side in side()) {
        let offered: Vec<String> = panel.options(side).iter().map(|t| t.symbol.clone()).collect();
        prop_assert_eq!(offered.len(), panel.catalog().len() - 1);

        for symbol in offered {
            let mut next = panel.clone();
            prop_assert!(next.select_token(side, &symbol).is_ok());
            prop_assert!(distinct_tokens(&next));
            prop_assert!(!next.selector_open(side));
            prop_assert_eq!(next.selector_open(side.opposite()), panel.selector_open(side.opposite()));
            prop_assert_eq!(next.token(side.opposite()), panel.token(side.opposite()));
            prop_assert_eq!(next.amount(TokenSide::From), panel.amount(TokenSide::From));
            prop_assert_eq!(next.amount(TokenSide::To), panel.amount(TokenSide::To));
        }
    }

    /// Property: direction swap applied twice is the identity
    #[test]
    fn prop_direction_swap_is_involution(panel in reachable_panel()) {
        let mut twice = panel.clone();
        twice.apply(SwapAction::SwapDirection).unwrap();
        twice.apply(SwapAction::SwapDirection).unwrap();
        prop_assert_eq!(twice, panel);
    }

    /// Property: direction swap exchanges tokens and amounts together
    #[test]
    fn prop_direction_swap_exchanges_sides(panel in reachable_panel()) {
        let mut swapped = panel.clone();
        swapped.swap_direction();
        prop_assert_eq!(swapped.token(TokenSide::From), panel.token(TokenSide::To));
        prop_assert_eq!(swapped.token(TokenSide::To), panel.token(TokenSide::From));
        prop_assert_eq!(swapped.amount(TokenSide::From), panel.amount(TokenSide::To));
        prop_assert_eq!(swapped.amount(TokenSide::To), panel.amount(TokenSide::From));
    }

    /// Property: toggling one selector never touches the other one
    #[test]
    fn prop_selector_toggle_is_independent(panel in reachable_panel(), side in side()) {
        let mut next = panel.clone();
        next.toggle_selector(side);
        prop_assert_eq!(next.selector_open(side), !panel.selector_open(side));
        prop_assert_eq!(next.selector_open(side.opposite()), panel.selector_open(side.opposite()));
    }

    /// Property: mode switches only change the active mode
    #[test]
    fn prop_mode_switches_preserve_fields(
        panel in reachable_panel(),
        modes in prop::collection::vec(mode(), 1..10),
    ) {
        let mut next = panel.clone();
        for mode in &modes {
            next.apply(SwapAction::SetMode(*mode)).unwrap();
        }
        prop_assert_eq!(next.mode(), *modes.last().unwrap());
        next.set_mode(panel.mode());
        prop_assert_eq!(next, panel);
    }

    /// Property: a slippage preset is stored exactly and leaves the panel open state alone
    #[test]
    fn prop_slippage_preset_exact(
        panel in reachable_panel(),
        preset in prop::sample::select(crate::slippage::SLIPPAGE_PRESETS.to_vec()),
    ) {
        let mut next = panel.clone();
        next.apply(SwapAction::SetSlippage(preset.to_string())).unwrap();
        prop_assert_eq!(next.slippage(), preset);
        prop_assert_eq!(next.slippage_panel_open(), panel.slippage_panel_open());
    }
}
