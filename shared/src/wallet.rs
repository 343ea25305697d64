//! Wallet session state and provider-update classification.
//!
//! The wallet modal reports `(address, network)` pairs whenever the session
//! changes. [`WalletState::apply_provider_update`] replaces the stored pair
//! and classifies the transition against the previous one, so the UI can
//! emit exactly one notification per update.

use serde::{Deserialize, Serialize};

use crate::notify::Severity;

/// Current wallet session: empty address means disconnected, network 0
/// means no network selected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletState {
    pub address: String,
    pub network: u64,
}

/// Classification of a single provider update, first match wins:
///
/// 1. same address, different network → [`ChangeKind::ChangedNetwork`]
/// 2. different address, same network → [`ChangeKind::ChangedAddress`]
/// 3. new address non-empty → [`ChangeKind::Connected`]
/// 4. new address empty → [`ChangeKind::Disconnected`]
/// 5. otherwise (both changed at once) → [`ChangeKind::Unknown`]
///
/// The ordering gives single-cause attribution when only one dimension
/// moved and a generic fallback when both moved (e.g. switching accounts
/// across networks in one step).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    ChangedNetwork,
    ChangedAddress,
    Connected,
    Disconnected,
    Unknown,
}

impl ChangeKind {
    /// User-facing message for the notification emitted on this change.
    pub fn message(&self) -> &'static str {
        match self {
            ChangeKind::ChangedNetwork => "Changed network",
            ChangeKind::ChangedAddress => "Changed address",
            ChangeKind::Connected => "Connected",
            ChangeKind::Disconnected => "Disconnected",
            ChangeKind::Unknown => "Something went wrong",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            ChangeKind::Unknown => Severity::Error,
            _ => Severity::Success,
        }
    }
}

impl WalletState {
    pub fn new(address: impl Into<String>, network: u64) -> Self {
        Self {
            address: address.into(),
            network,
        }
    }

    pub fn is_connected(&self) -> bool {
        !self.address.is_empty()
    }

    /// Replace the stored session with the provider's new values and
    /// classify the transition. Missing inputs normalize to the
    /// disconnected defaults (`""` / `0`).
    pub fn apply_provider_update(
        &mut self,
        new_address: Option<String>,
        new_network: Option<u64>,
    ) -> ChangeKind {
        let before = self.clone();

        self.address = new_address.unwrap_or_default();
        self.network = new_network.unwrap_or_default();

        let kind = if self.address == before.address && self.network != before.network {
            ChangeKind::ChangedNetwork
        } else if self.address != before.address && self.network == before.network {
            ChangeKind::ChangedAddress
        } else if !self.address.is_empty() {
            ChangeKind::Connected
        } else if self.address.is_empty() {
            ChangeKind::Disconnected
        } else {
            ChangeKind::Unknown
        };

        log::debug!(
            "provider update: {}@{} -> {}@{} = {:?}",
            before.address,
            before.network,
            self.address,
            self.network,
            kind
        );

        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(
        prev: (&str, u64),
        new_address: Option<&str>,
        new_network: Option<u64>,
    ) -> (WalletState, ChangeKind) {
        let mut state = WalletState::new(prev.0, prev.1);
        let kind =
            state.apply_provider_update(new_address.map(|s| s.to_string()), new_network);
        (state, kind)
    }

    #[test]
    fn fresh_connection_classifies_as_connected() {
        let (state, kind) = update(("", 0), Some("0xABC"), Some(1));
        assert_eq!(kind, ChangeKind::Connected);
        assert!(state.is_connected());
        assert_eq!(state.network, 1);
    }

    #[test]
    fn network_switch_wins_over_connected() {
        let (_, kind) = update(("0xABC", 1), Some("0xABC"), Some(5));
        assert_eq!(kind, ChangeKind::ChangedNetwork);
    }

    #[test]
    fn address_switch_on_same_network() {
        let (_, kind) = update(("0xABC", 1), Some("0xDEF"), Some(1));
        assert_eq!(kind, ChangeKind::ChangedAddress);
    }

    #[test]
    fn disconnect_clears_address() {
        let (state, kind) = update(("0xABC", 1), None, Some(1));
        // address changed ("0xABC" -> "") with network unchanged, so the
        // single-cause rule attributes this to the address dimension
        assert_eq!(kind, ChangeKind::ChangedAddress);
        assert!(!state.is_connected());
    }

    #[test]
    fn full_disconnect_classifies_as_disconnected() {
        // address and network both reset, so the single-cause rules are
        // skipped and the empty new address lands on Disconnected
        let (state, kind) = update(("0xABC", 1), None, None);
        assert_eq!(kind, ChangeKind::Disconnected);
        assert!(!state.is_connected());
    }

    #[test]
    fn network_reset_alone_is_a_network_change() {
        // address unchanged (""), network 1 -> 0: attributed to the
        // network dimension, not treated as a fresh disconnect
        let (_, kind) = update(("", 1), None, None);
        assert_eq!(kind, ChangeKind::ChangedNetwork);
    }

    #[test]
    fn simultaneous_account_and_network_switch_is_connected() {
        // both changed and the new address is non-empty: rule 3 fires
        // before the unknown fallback
        let (_, kind) = update(("0xABC", 1), Some("0xDEF"), Some(5));
        assert_eq!(kind, ChangeKind::Connected);
    }

    #[test]
    fn no_op_update_with_connected_address() {
        let (_, kind) = update(("0xABC", 1), Some("0xABC"), Some(1));
        assert_eq!(kind, ChangeKind::Connected);
    }

    #[test]
    fn exactly_one_message_per_kind() {
        for kind in [
            ChangeKind::ChangedNetwork,
            ChangeKind::ChangedAddress,
            ChangeKind::Connected,
            ChangeKind::Disconnected,
            ChangeKind::Unknown,
        ] {
            assert!(!kind.message().is_empty());
        }
        assert_eq!(ChangeKind::Unknown.severity(), Severity::Error);
        assert_eq!(ChangeKind::Connected.severity(), Severity::Success);
    }
}
