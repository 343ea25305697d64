//! Application constants

pub const PRICE_API_BASE: &str = "https://api.geckoterminal.com/api/v2";

// Pool the one-shot quote is fetched for
pub const NETWORK_SLUG: &str = "goerli-testnet";
pub const POOL_ID: &str = "0x28cee28a7c4b4022ac92685c07d2f33ab1a0e122";

// Which pool token the API treats as "base" when reporting pair rates
pub const BASE_TOKEN_SYMBOL: &str = "UNI";

// Default form selections
pub const DEFAULT_TOKEN_IN: &str = "WETH";
pub const DEFAULT_TOKEN_OUT: &str = "UNI";
