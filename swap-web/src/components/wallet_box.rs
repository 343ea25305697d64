//! Wallet data card: current address and network, or a not-connected hint.

use leptos::prelude::*;

use shared::utils::truncate_address;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn WalletBox() -> impl IntoView {
    let wallet = use_wallet_context();

    view! {
        <div class="card">
            <h2>"Wallet Data"</h2>
            {move || {
                if wallet.is_connected() || wallet.network() != 0 {
                    view! {
                        <div>
                            <p>"Address: " {truncate_address(&wallet.address())}</p>
                            <p>"Network: " {wallet.network()}</p>
                        </div>
                    }
                        .into_any()
                } else {
                    view! { <div>"Not connected yet"</div> }.into_any()
                }
            }}
        </div>
    }
}
