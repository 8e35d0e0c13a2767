//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::utils::constants::{BRAND_LOGO, BRAND_NAME, ROUTE_LANDING};
use crate::utils::sound::play_click;

#[component]
pub fn Navbar() -> impl IntoView {
    // No wallet integration: the button only clicks
    let on_connect = move |_: leptos::ev::MouseEvent| {
        play_click();
        log::info!("Connect Wallet clicked");
    };

    view! {
        <header class="navbar">
            <div class="navbar-inner">
                <div class="navbar-brand">
                    <A href=ROUTE_LANDING>
                        <img src=BRAND_LOGO alt="1inch logo" width="60" height="50"/>
                    </A>
                    <span class="nav-title">{BRAND_NAME}</span>
                </div>
                <button class="btn-connect" on:click=on_connect>
                    "Connect Wallet"
                </button>
            </div>
        </header>
    }
}
