//! Pool price quotes and output-amount derivation.
//!
//! One quote is fetched per page load from the pool price API; the
//! displayed output amount is re-derived whenever the input amount or
//! either token selection changes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw price API response: `data.attributes` carries the two pair rates
/// as string-encoded decimals.
#[derive(Clone, Debug, Deserialize)]
pub struct PoolResponse {
    pub data: PoolData,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PoolData {
    pub attributes: PoolAttributes,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PoolAttributes {
    pub base_token_price_quote_token: String,
    pub quote_token_price_base_token: String,
}

#[derive(Debug, Error)]
pub enum PriceError {
    #[error("malformed rate in price response: {0}")]
    MalformedRate(String),
}

/// Exchange rates for one pool, with the symbol designated "base" by the
/// pool recorded alongside so the right rate can be picked per direction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PoolQuote {
    pub base_to_quote: f64,
    pub quote_to_base: f64,
    pub base_symbol: String,
}

impl PoolQuote {
    /// Parse the string-encoded rates out of a price API response.
    pub fn from_response(
        response: &PoolResponse,
        base_symbol: impl Into<String>,
    ) -> Result<Self, PriceError> {
        let attrs = &response.data.attributes;
        let base_to_quote = parse_rate(&attrs.base_token_price_quote_token)?;
        let quote_to_base = parse_rate(&attrs.quote_token_price_base_token)?;
        Ok(Self {
            base_to_quote,
            quote_to_base,
            base_symbol: base_symbol.into(),
        })
    }

    /// Rate applied when swapping `token_in` into the other pool token.
    pub fn rate_for(&self, token_in: &str) -> f64 {
        if token_in == self.base_symbol {
            self.base_to_quote
        } else {
            self.quote_to_base
        }
    }
}

fn parse_rate(raw: &str) -> Result<f64, PriceError> {
    raw.parse::<f64>()
        .ok()
        .filter(|rate| rate.is_finite() && *rate >= 0.0)
        .ok_or_else(|| PriceError::MalformedRate(raw.to_string()))
}

/// Displayed output amount for the current form state. Identity
/// passthrough for same-token selections; zero while no quote has been
/// loaded yet.
pub fn derive_amount_out(
    amount_in: f64,
    token_in: &str,
    token_out: &str,
    quote: Option<&PoolQuote>,
) -> f64 {
    match quote {
        None => 0.0,
        Some(_) if token_in == token_out => amount_in,
        Some(quote) => amount_in * quote.rate_for(token_in),
    }
}
