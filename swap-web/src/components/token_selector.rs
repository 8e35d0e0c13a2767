//! Token Selector Component
//!
//! Trigger button plus dropdown for one side of the swap. The dropdown lists
//! every token except the one held by the other side, read fresh from the
//! panel state on each render.

use leptos::prelude::*;
use shared::swap::TokenSide;
use shared::token::Token;

use crate::state::swap::use_swap_context;

#[component]
pub fn TokenSelector(side: TokenSide) -> impl IntoView {
    let swap = use_swap_context();

    let current = move || swap.panel.with(|panel| panel.token(side).clone());
    let is_open = move || swap.panel.with(|panel| panel.selector_open(side));
    let options = move || {
        swap.panel
            .with(|panel| panel.options(side).into_iter().cloned().collect::<Vec<Token>>())
    };

    view! {
        <div class="token-selector">
            <button class="token-trigger" on:click=move |_| swap.toggle_selector(side)>
                {move || {
                    let token = current();
                    view! {
                        <img src=token.logo alt=token.name width="24" height="24" class="token-logo"/>
                        <span class="token-symbol">{token.symbol}</span>
                    }
                }}
                <span class="chevron">"▾"</span>
            </button>

            <Show when=is_open>
                <div class="token-dropdown">
                    <For
                        each=options
                        key=|token| token.symbol.clone()
                        children=move |token| {
                            let symbol = token.symbol.clone();
                            view! {
                                <button
                                    class="token-option"
                                    on:click=move |_| swap.select_token(side, symbol.clone())
                                >
                                    <img src=token.logo alt=token.name width="16" height="16" class="token-logo"/>
                                    <span>{token.symbol}</span>
                                </button>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
