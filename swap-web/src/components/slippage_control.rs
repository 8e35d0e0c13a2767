//! Slippage Tolerance Control
//!
//! Collapsible editor with preset buttons and a free-form field. Picking a
//! preset keeps the editor open.

use leptos::prelude::*;
use shared::slippage::{is_preset, percent_label, SLIPPAGE_PRESETS};

use crate::state::swap::use_swap_context;

#[component]
pub fn SlippageControl() -> impl IntoView {
    let swap = use_swap_context();

    let slippage = move || swap.panel.with(|panel| panel.slippage().to_string());
    let is_open = move || swap.panel.with(|panel| panel.slippage_panel_open());

    view! {
        <div class="slippage">
            <button class="slippage-toggle" on:click=move |_| swap.toggle_slippage()>
                <span>"Slippage Tolerance"</span>
                <span class="slippage-value">
                    {move || percent_label(&slippage())}
                    <span class="chevron">"▾"</span>
                </span>
            </button>

            <Show when=is_open>
                <div class="slippage-panel">
                    {SLIPPAGE_PRESETS
                        .iter()
                        .map(|&preset| {
                            view! {
                                <button
                                    class="slippage-preset"
                                    class:preset-active=move || {
                                        swap.panel.with(|panel| panel.slippage() == preset)
                                    }
                                    on:click=move |_| swap.set_slippage(preset.to_string())
                                >
                                    {percent_label(preset)}
                                </button>
                            }
                        })
                        .collect_view()}
                    <input
                        type="number"
                        class="slippage-input"
                        class:slippage-custom=move || !is_preset(&slippage())
                        placeholder="Custom"
                        prop:value=slippage
                        on:input=move |ev| swap.set_slippage(event_target_value(&ev))
                    />
                </div>
            </Show>
        </div>
    }
}
