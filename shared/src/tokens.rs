//! Static token registry and fixed-point amount scaling.
//!
//! The registry is read-only at runtime; inactive tokens exist in the
//! table but are excluded from selection.

use serde::Serialize;

/// Address of the swap router contract that is approved as spender and
/// called for the swap itself.
pub const SWAP_CONTRACT_ADDRESS: &str = "0x2F46127F6E03384e1cd1d5866360c8eB8D417884";

/// All registry tokens use the same fixed-point precision.
pub const TOKEN_DECIMALS: u32 = 18;

// registry entries are static, so this only ever serializes
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TokenDescriptor {
    pub symbol: &'static str,
    pub contract_address: &'static str,
    pub active: bool,
}

/// Goerli token table. USDT is listed but not yet deployed, so it stays
/// inactive and never shows up in the selection UI.
pub const TOKENS: &[TokenDescriptor] = &[
    TokenDescriptor {
        symbol: "WETH",
        contract_address: "0xB4FBF271143F4FBf7B91A5ded31805e42b2208d6",
        active: true,
    },
    TokenDescriptor {
        symbol: "UNI",
        contract_address: "0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984",
        active: true,
    },
    TokenDescriptor {
        symbol: "USDT",
        contract_address: "0x0000",
        active: false,
    },
];

/// Tokens selectable in the UI.
pub fn active_tokens() -> impl Iterator<Item = &'static TokenDescriptor> {
    TOKENS.iter().filter(|t| t.active)
}

/// Look up a token by symbol (active or not).
pub fn find(symbol: &str) -> Option<&'static TokenDescriptor> {
    TOKENS.iter().find(|t| t.symbol == symbol)
}

/// Scale a display amount to fixed-point base units, the `parseUnits`
/// counterpart for issuing contract calls. Returns `None` for negative or
/// non-finite input, or when the scaled value overflows `u128`.
///
/// Goes through the shortest decimal rendering rather than float
/// multiplication so amounts like `0.1` scale exactly; digits past the
/// token precision are dropped.
pub fn to_base_units(amount: f64, decimals: u32) -> Option<u128> {
    if !amount.is_finite() || amount < 0.0 {
        return None;
    }

    // f64 Display never uses exponent notation, so this is always of the
    // form "123" or "123.456"
    let text = amount.to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, f),
        None => (text.as_str(), ""),
    };

    let scale = 10u128.checked_pow(decimals)?;
    let int_units = int_part.parse::<u128>().ok()?.checked_mul(scale)?;

    let frac_digits: String = frac_part.chars().take(decimals as usize).collect();
    let frac_units = if frac_digits.is_empty() {
        0
    } else {
        let pad = decimals as usize - frac_digits.len();
        frac_digits
            .parse::<u128>()
            .ok()?
            .checked_mul(10u128.checked_pow(pad as u32)?)?
    };

    int_units.checked_add(frac_units)
}
