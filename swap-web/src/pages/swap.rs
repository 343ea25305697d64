//! The swap page: wallet session wiring, quote loading and the submit
//! handler that drives the approve-then-swap sequence.

use leptos::prelude::*;

use shared::notify::Severity;
use shared::price::{self, PoolQuote};
use shared::swap::{SwapIntent, SwapSequencer};
use shared::tokens;

use crate::components::{NotificationBox, TokenSelect, WalletBox};
use crate::services;
use crate::services::chain::Web3ChainClient;
use crate::state::notifications::use_notification_context;
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::{DEFAULT_TOKEN_IN, DEFAULT_TOKEN_OUT};

#[component]
pub fn SwapPage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let notifications = use_notification_context();

    let (quote, set_quote) = signal(None::<PoolQuote>);
    let (busy, set_busy) = signal(false);
    let (token_in, set_token_in) = signal(DEFAULT_TOKEN_IN.to_string());
    let (token_out, set_token_out) = signal(DEFAULT_TOKEN_OUT.to_string());
    let (amount_in, set_amount_in) = signal(0.0_f64);

    // Derived output amount, recomputed whenever the input amount, either
    // token selection or the loaded quote changes.
    let amount_out = Memo::new(move |_| {
        quote.with(|q| {
            price::derive_amount_out(
                amount_in.get(),
                &token_in.get(),
                &token_out.get(),
                q.as_ref(),
            )
        })
    });

    // One-shot quote fetch at page load; a missing quote only means the
    // derived output stays at zero.
    leptos::task::spawn_local(async move {
        match services::price::load_quote().await {
            Ok(loaded) => set_quote.set(Some(loaded)),
            Err(err) => log::warn!("quote load failed: {err}"),
        }
    });

    // Seed the wallet state from the modal and follow session changes;
    // every subsequent change emits exactly one classified notification.
    wallet_ctx.seed(services::wallet::address(), services::wallet::network_id());
    services::wallet::subscribe_provider(move |update| {
        wallet_ctx.apply_provider_update(update.address, update.chain_id, &notifications);
    });

    let on_connect = move |_| services::wallet::open_modal();

    let on_swap = move |_| {
        if busy.get_untracked() {
            return;
        }

        let (token_in, token_out) = (token_in.get_untracked(), token_out.get_untracked());
        let (token_in, token_out) = match (tokens::find(&token_in), tokens::find(&token_out)) {
            (Some(token_in), Some(token_out)) => (token_in, token_out),
            _ => {
                notifications.push("Unknown token selected", Severity::Error);
                return;
            }
        };
        let intent = SwapIntent {
            token_in,
            token_out,
            amount_in: amount_in.get_untracked(),
        };

        leptos::task::spawn_local(async move {
            let chain = match Web3ChainClient::from_session() {
                Some(chain) => chain,
                None => {
                    notifications.push("Please connect wallet", Severity::Error);
                    return;
                }
            };

            set_busy.set(true);
            let sequencer = SwapSequencer::new();
            let wallet = wallet_ctx.wallet.get_untracked();
            // outcome notifications are emitted by the sequencer itself
            let _ = sequencer
                .execute(&intent, &wallet, &chain, &notifications)
                .await;
            set_busy.set(false);
        });
    };

    view! {
        <div class="page">
            <button class="btn" on:click=on_connect>
                {move || if wallet_ctx.is_connected() { "Open modal" } else { "Connect" }}
            </button>

            <WalletBox/>

            <div class="card">
                <h2>"Swap"</h2>
                <label>"Choose token to swap"</label>
                <div class="swap-row">
                    <TokenSelect value=token_in set_value=set_token_in/>
                    <input
                        type="number"
                        step="0.000001"
                        prop:value=move || amount_in.get()
                        on:input=move |ev| {
                            set_amount_in.set(event_target_value(&ev).parse().unwrap_or(0.0));
                        }
                    />
                </div>

                <label>"Choose token to receive"</label>
                <div class="swap-row">
                    <TokenSelect value=token_out set_value=set_token_out/>
                    <div class="amount-out">{move || amount_out.get().to_string()}</div>
                </div>

                <button class="btn" prop:disabled=move || busy.get() on:click=on_swap>
                    {move || if busy.get() { "Swapping..." } else { "Swap" }}
                </button>
            </div>

            <NotificationBox/>
        </div>
    }
}
