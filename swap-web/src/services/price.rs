//! One-shot pool price fetch at page load. No polling, no refresh.

use gloo_net::http::Request;

use shared::price::{PoolQuote, PoolResponse};

use crate::utils::constants::{BASE_TOKEN_SYMBOL, NETWORK_SLUG, POOL_ID, PRICE_API_BASE};

/// Fetch the pair rates for the configured pool.
pub async fn load_quote() -> Result<PoolQuote, String> {
    let url = format!("{PRICE_API_BASE}/networks/{NETWORK_SLUG}/pools/{POOL_ID}");

    let response: PoolResponse = Request::get(&url)
        .send()
        .await
        .map_err(|err| format!("price request failed: {err}"))?
        .json()
        .await
        .map_err(|err| format!("price response unreadable: {err}"))?;

    PoolQuote::from_response(&response, BASE_TOKEN_SYMBOL).map_err(|err| err.to_string())
}
