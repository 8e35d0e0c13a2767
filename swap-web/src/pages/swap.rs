//! Swap Page
//!
//! Hosts a single swap panel. The panel state is created on mount and dropped
//! with the page; nothing survives navigation.

use leptos::prelude::*;

use crate::components::SwapPanel;
use crate::state::swap::provide_swap_context;
use crate::utils::constants::PARTNER_LOGO;

#[component]
pub fn SwapPage() -> impl IntoView {
    provide_swap_context();
    log::debug!("Swap view mounted");

    on_cleanup(|| log::debug!("Swap view unmounted, panel state discarded"));

    view! {
        <main class="page swap-page">
            <img src=PARTNER_LOGO alt="1inch Logo" width="95" height="80" class="partner-logo"/>
            <SwapPanel/>
        </main>
    }
}
