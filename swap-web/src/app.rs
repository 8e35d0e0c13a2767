//! Nuvex Swap App - Leptos Frontend
//!
//! Two routes: the landing page at `/` and the swap widget at `/swap`.

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::components::Navbar;
use crate::pages::{LandingPage, SwapPage};
use crate::state::chain::provide_chain_context;
use crate::utils::constants::ROUTE_LANDING;

#[component]
pub fn App() -> impl IntoView {
    // Declared for a future wallet client; only logged here
    let chain = provide_chain_context();
    chain.log_target();

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=LandingPage/>
                    <Route path=path!("/swap") view=SwapPage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <main class="page not-found">
            <div class="card">
                <h1>"404 - Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist."</p>
                <A href=ROUTE_LANDING>
                    <span class="btn-cta">"Go to Home"</span>
                </A>
            </div>
        </main>
    }
}
