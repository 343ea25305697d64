//! Token dropdown; only active registry entries are selectable.

use leptos::prelude::*;

use shared::tokens::active_tokens;

#[component]
pub fn TokenSelect(
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <select
            class="token-select"
            on:change=move |ev| set_value.set(event_target_value(&ev))
        >
            {active_tokens()
                .map(|token| {
                    let symbol = token.symbol;
                    view! {
                        <option value=symbol selected=move || value.get() == symbol>
                            {symbol}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
