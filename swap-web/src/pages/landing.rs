//! Landing Page
//!
//! Static marketing content: hero, feature cards, call to action, supported
//! chains and footer.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::utils::constants::{FOOTER_TEXT, ROUTE_SWAP, SUPPORTED_CHAINS};
use crate::utils::sound::play_click;

struct Feature {
    number: &'static str,
    title: &'static str,
    body: &'static str,
    accent: bool,
}

const FEATURES: &[Feature] = &[
    Feature {
        number: "01",
        title: "INSTANT SWAPS",
        body: "Execute cross-chain swaps in seconds. No waiting, no hassle.",
        accent: false,
    },
    Feature {
        number: "02",
        title: "MULTI-CHAIN",
        body: "Support for Ethereum, BTC, XRP, Cardano.",
        accent: true,
    },
    Feature {
        number: "03",
        title: "BEST RATES",
        body: "Get the most out of your swap using 1inch Fusion+ Swaps",
        accent: false,
    },
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <main class="page landing">
            <section class="hero">
                <h1 class="hero-title">
                    "CROSS-CHAIN"
                    <br/>
                    <span class="accent">"SWAPS"</span>
                </h1>
                <p class="hero-subtitle">
                    "BREAK THE BARRIERS. SWAP TOKENS ACROSS ANY BLOCKCHAIN. "
                    "ONE INTERFACE. UNLIMITED POSSIBILITIES."
                </p>
            </section>

            <section class="features">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="feature-card" class:feature-accent=feature.accent>
                                <div class="feature-number">{feature.number}</div>
                                <h3 class="feature-title">{feature.title}</h3>
                                <p>{feature.body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="cta">
                <h2>"START SWAPPING NOW"</h2>
                <A href=ROUTE_SWAP>
                    <span class="btn-cta" on:click=move |_| play_click()>"Launch App"</span>
                </A>
            </section>

            <section class="chains">
                <h2>"SUPPORTED " <span class="accent">"CHAINS"</span></h2>
                <div class="chain-grid">
                    {SUPPORTED_CHAINS
                        .iter()
                        .map(|chain| view! { <div class="chain-card">{*chain}</div> })
                        .collect_view()}
                </div>
            </section>

            <footer class="footer">
                <p>{FOOTER_TEXT}</p>
            </footer>
        </main>
    }
}
