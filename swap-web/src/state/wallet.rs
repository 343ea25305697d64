//! Wallet session context.

use leptos::prelude::*;

use shared::wallet::{ChangeKind, WalletState};

use crate::state::notifications::NotificationContext;

/// Global wallet context.
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub wallet: RwSignal<WalletState>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            wallet: RwSignal::new(WalletState::default()),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.wallet.with(|state| state.is_connected())
    }

    pub fn address(&self) -> String {
        self.wallet.with(|state| state.address.clone())
    }

    pub fn network(&self) -> u64 {
        self.wallet.with(|state| state.network)
    }

    /// Initial load: take whatever the modal currently reports, without
    /// emitting a change notification.
    pub fn seed(&self, address: Option<String>, network: Option<u64>) {
        self.wallet.set(WalletState::new(
            address.unwrap_or_default(),
            network.unwrap_or_default(),
        ));
    }

    /// Apply a session-change event and emit exactly one notification for
    /// the classified change.
    pub fn apply_provider_update(
        &self,
        address: Option<String>,
        network: Option<u64>,
        notifications: &NotificationContext,
    ) -> ChangeKind {
        let mut state = self.wallet.get_untracked();
        let kind = state.apply_provider_update(address, network);
        self.wallet.set(state);

        notifications.push(kind.message(), kind.severity());
        kind
    }
}

impl Default for WalletContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
