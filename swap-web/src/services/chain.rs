//! Chain client over the wallet provider handle.
//!
//! Wraps the host page's ethers bundle: an ERC-20 approve proxy, the swap
//! contract proxy, and confirmation waits. Implements the sequencer's
//! [`ChainClient`] seam, so everything above this file is testable with a
//! mock.

use async_trait::async_trait;
use wasm_bindgen::prelude::*;

use shared::swap::{ChainClient, SwapError, TxHash};

use crate::services::wallet;

#[wasm_bindgen(inline_js = "
export function makeProvider(walletProvider) {
    return new ethers.providers.Web3Provider(walletProvider);
}

export async function erc20Approve(provider, tokenAddress, spender, amount) {
    const abi = ['function approve(address spender, uint256 amount) returns (bool)'];
    const contract = new ethers.Contract(tokenAddress, abi, provider.getSigner());
    const res = await contract.approve(spender, ethers.BigNumber.from(amount));
    return res.hash;
}

export async function swapTokens(provider, contractAddress, amount, tokenIn, tokenOut) {
    const abi = ['function swap(uint256 amount, address tokenIn, address tokenOut)'];
    const contract = new ethers.Contract(contractAddress, abi, provider.getSigner());
    const res = await contract.swap(ethers.BigNumber.from(amount), tokenIn, tokenOut);
    return res.hash;
}

export async function waitForTransaction(provider, hash) {
    await provider.waitForTransaction(hash);
}
")]
extern "C" {
    fn makeProvider(wallet_provider: &JsValue) -> JsValue;

    #[wasm_bindgen(catch)]
    async fn erc20Approve(
        provider: &JsValue,
        token_address: &str,
        spender: &str,
        amount: &str,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn swapTokens(
        provider: &JsValue,
        contract_address: &str,
        amount: &str,
        token_in: &str,
        token_out: &str,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn waitForTransaction(provider: &JsValue, hash: &str) -> Result<JsValue, JsValue>;
}

/// Chain client bound to the active wallet session.
pub struct Web3ChainClient {
    provider: JsValue,
}

impl Web3ChainClient {
    /// Build a client from the current modal session, or `None` while no
    /// wallet is connected.
    pub fn from_session() -> Option<Self> {
        let handle = wallet::wallet_provider()?;
        Some(Self {
            provider: makeProvider(&handle),
        })
    }
}

#[async_trait(?Send)]
impl ChainClient for Web3ChainClient {
    async fn approve(
        &self,
        token_address: &str,
        spender: &str,
        base_units: u128,
    ) -> Result<TxHash, SwapError> {
        let hash = erc20Approve(
            &self.provider,
            token_address,
            spender,
            &base_units.to_string(),
        )
        .await
        .map_err(js_error)?;
        tx_hash(hash)
    }

    async fn swap(
        &self,
        base_units: u128,
        token_in_address: &str,
        token_out_address: &str,
    ) -> Result<TxHash, SwapError> {
        let hash = swapTokens(
            &self.provider,
            shared::tokens::SWAP_CONTRACT_ADDRESS,
            &base_units.to_string(),
            token_in_address,
            token_out_address,
        )
        .await
        .map_err(js_error)?;
        tx_hash(hash)
    }

    async fn wait_for_confirmation(&self, hash: &TxHash) -> Result<(), SwapError> {
        waitForTransaction(&self.provider, &hash.0)
            .await
            .map_err(js_error)?;
        Ok(())
    }
}

fn tx_hash(value: JsValue) -> Result<TxHash, SwapError> {
    value
        .as_string()
        .map(TxHash)
        .ok_or_else(|| SwapError::Transaction("missing transaction hash".into()))
}

/// Rejected signatures, reverted calls and transport failures all arrive
/// here as opaque JS errors; the sequencer collapses them to one generic
/// user-facing message anyway.
fn js_error(err: JsValue) -> SwapError {
    let detail = err
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(&err, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{err:?}"));
    SwapError::Transaction(detail)
}
