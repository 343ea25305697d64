//! # Shared Domain Library
//!
//! Platform-neutral logic for the swap dApp, consumed by the `swap-web`
//! frontend and tested natively. Everything that touches the browser
//! (signals, timers, JS interop) stays in `swap-web`; everything that can
//! be exercised without a browser lives here.
//!
//! ## Structure
//!
//! - **[`wallet`]**: wallet session state and provider-update classification
//! - **[`notify`]**: notification queue with FIFO auto-expiry semantics
//! - **[`tokens`]**: static token registry and fixed-point amount scaling
//! - **[`swap`]**: the approve-then-swap sequencer and its chain-client seam
//! - **[`price`]**: pool price quotes and output-amount derivation
//! - **[`utils`]**: display helpers (address truncation)
//!
//! ## Wire Format
//!
//! DTOs deserialize with default `serde` behavior (snake_case field names);
//! the price API's string-encoded decimals are parsed to `f64` at the
//! deserialization boundary.

pub mod notify;
pub mod price;
pub mod swap;
pub mod tokens;
pub mod utils;
pub mod wallet;

// Re-export commonly used types for convenience
pub use notify::{Notification, NotificationQueue, NotifySink, Severity, NOTIFICATION_TTL_MS};
pub use price::PoolQuote;
pub use swap::{ChainClient, SwapError, SwapIntent, SwapPhase, SwapSequencer, TxHash};
pub use tokens::TokenDescriptor;
pub use wallet::{ChangeKind, WalletState};
