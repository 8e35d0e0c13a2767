//! Swap Panel Component
//!
//! Mode tabs, the pay/receive sections, the direction-swap button, the
//! mode-dependent secondary panel and the submit button.

use leptos::prelude::*;
use shared::swap::{SwapMode, TokenSide};

use crate::components::{SlippageControl, TokenSelector};
use crate::state::swap::use_swap_context;

#[component]
pub fn SwapPanel() -> impl IntoView {
    let swap = use_swap_context();

    // Only re-render the secondary panel when the mode itself changes
    let mode = Memo::new(move |_| swap.panel.with(|panel| panel.mode()));

    view! {
        <div class="swap-panel">
            <div class="swap-tabs">
                {SwapMode::all()
                    .iter()
                    .map(|&tab| {
                        view! {
                            <button
                                class="swap-tab"
                                class:tab-active=move || mode.get() == tab
                                on:click=move |_| swap.set_mode(tab)
                            >
                                {tab.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <AmountSection side=TokenSide::From/>

            <div class="direction-swap">
                <button class="btn-direction" title="Swap direction" on:click=move |_| swap.swap_direction()>
                    "⇅"
                </button>
            </div>

            <AmountSection side=TokenSide::To/>

            <div class="secondary-panel">
                {move || match mode.get() {
                    SwapMode::Swap => view! { <SlippageControl/> }.into_any(),
                    SwapMode::Limit => view! { <LimitPriceField/> }.into_any(),
                }}
            </div>

            // Visual only: no execution backend
            <button class="btn-submit">{move || mode.get().submit_label()}</button>
        </div>
    }
}

/// "You pay" / "You receive" block: token selector, amount field, token name.
#[component]
fn AmountSection(side: TokenSide) -> impl IntoView {
    let swap = use_swap_context();

    view! {
        <div class="swap-section">
            <label class="section-label">{side.label()}</label>
            <div class="swap-field">
                <div class="swap-field-row">
                    <TokenSelector side=side/>
                    <input
                        type="number"
                        class="amount-input"
                        placeholder="0"
                        prop:value=move || swap.panel.with(|panel| panel.amount(side).to_string())
                        on:input=move |ev| swap.set_amount(side, event_target_value(&ev))
                    />
                </div>
                <div class="token-name">
                    {move || swap.panel.with(|panel| panel.token(side).name.clone())}
                </div>
            </div>
        </div>
    }
}

#[component]
fn LimitPriceField() -> impl IntoView {
    let swap = use_swap_context();

    view! {
        <div class="limit-price">
            <label class="section-label">
                {move || swap.panel.with(|panel| panel.limit_price_label())}
            </label>
            <div class="swap-field">
                <div class="swap-field-row">
                    <input
                        type="number"
                        class="limit-input"
                        placeholder="0"
                        prop:value=move || swap.panel.with(|panel| panel.limit_price().to_string())
                        on:input=move |ev| swap.set_limit_price(event_target_value(&ev))
                    />
                    <span class="quote-currency">"USD"</span>
                </div>
            </div>
        </div>
    }
}
