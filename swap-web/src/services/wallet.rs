//! Web3 modal bridge via wasm-bindgen.
//!
//! The host page creates the modal (`window.web3modal`) with the wallet
//! project key; this module only consumes its session surface: open the
//! connect UI, read the current address/network, subscribe to provider
//! changes, and grab the raw provider handle for contract calls.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// Session-change payload forwarded from `subscribeProvider`.
#[derive(Clone, Debug, Deserialize)]
pub struct ProviderUpdate {
    pub address: Option<String>,
    #[serde(rename = "chainId")]
    pub chain_id: Option<u64>,
}

#[wasm_bindgen(inline_js = "
export function modalOpen() {
    window.web3modal.open();
}

export function modalGetAddress() {
    const address = window.web3modal.getAddress();
    return address ? address : null;
}

export function modalGetNetworkId() {
    const state = window.web3modal.getState();
    return state && state.selectedNetworkId ? state.selectedNetworkId : 0;
}

export function modalSubscribeProvider(callback) {
    window.web3modal.subscribeProvider((info) => {
        callback({
            address: info.address ? info.address : null,
            chainId: info.chainId ? info.chainId : null,
        });
    });
}

export function modalGetWalletProvider() {
    const provider = window.web3modal.getWalletProvider();
    return provider ? provider : null;
}
")]
extern "C" {
    fn modalOpen();
    fn modalGetAddress() -> Option<String>;
    fn modalGetNetworkId() -> f64;
    fn modalSubscribeProvider(callback: &Closure<dyn FnMut(JsValue)>);
    fn modalGetWalletProvider() -> Option<JsValue>;
}

/// Show the wallet connect UI.
pub fn open_modal() {
    modalOpen();
}

/// Currently connected address, if any.
pub fn address() -> Option<String> {
    modalGetAddress()
}

/// Currently selected network id; `None` when nothing is selected.
pub fn network_id() -> Option<u64> {
    let id = modalGetNetworkId();
    if id > 0.0 {
        Some(id as u64)
    } else {
        None
    }
}

/// Raw wallet provider handle for constructing a chain client; `None`
/// while no session is active.
pub fn wallet_provider() -> Option<JsValue> {
    modalGetWalletProvider()
}

/// Subscribe to session-change events for the lifetime of the page.
pub fn subscribe_provider(mut handler: impl FnMut(ProviderUpdate) + 'static) {
    let callback = Closure::wrap(Box::new(move |value: JsValue| {
        match serde_wasm_bindgen::from_value::<ProviderUpdate>(value) {
            Ok(update) => handler(update),
            Err(err) => log::warn!("unreadable provider update: {err}"),
        }
    }) as Box<dyn FnMut(JsValue)>);

    modalSubscribeProvider(&callback);
    // the subscription lives until the page is gone
    callback.forget();
}
