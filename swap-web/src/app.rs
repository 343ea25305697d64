//! Application shell: context providers and the route table.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::Navbar;
use crate::pages::SwapPage;
use crate::state::notifications::provide_notification_context;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    // Contexts are provided once here and injected into the page and the
    // notification box; no ambient globals.
    provide_wallet_context();
    provide_notification_context();

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=SwapPage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="card" style="max-width: 500px; margin: 80px auto; text-align: center;">
            <h1>"404 - Page Not Found"</h1>
            <A href="/">
                <span class="btn">"Back to swap"</span>
            </A>
        </div>
    }
}
