//! Approve-then-swap sequencer.
//!
//! One submit attempt drives two on-chain transactions in strict order:
//! an ERC-20 allowance approval for the swap contract, then the swap call
//! itself, each followed by a confirmation wait. Validation happens before
//! any chain call; any failure after that collapses to a single generic
//! error notification. No retries, no cancellation, no confirmation
//! timeout: the chain itself is the durable record of an attempt.

use std::cell::Cell;

use async_trait::async_trait;
use thiserror::Error;

use crate::notify::{NotifySink, Severity};
use crate::tokens::{self, TokenDescriptor, SWAP_CONTRACT_ADDRESS, TOKEN_DECIMALS};
use crate::wallet::WalletState;

/// Validation threshold: amounts at or below this are rejected pre-flight.
pub const MIN_SWAP_AMOUNT: f64 = 0.0001;

/// Hash of a submitted transaction, as reported by the chain client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxHash(pub String);

#[derive(Debug, Error)]
pub enum SwapError {
    #[error("Please connect wallet")]
    NotConnected,
    #[error("You can't swap token for the same token")]
    SameToken,
    #[error("Amount must be greater than 0.0001")]
    AmountTooSmall,
    #[error("A swap is already in flight")]
    Busy,
    #[error("transaction failed: {0}")]
    Transaction(String),
}

impl SwapError {
    /// Pre-flight failures: surfaced verbatim, no transaction issued.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SwapError::NotConnected | SwapError::SameToken | SwapError::AmountTooSmall
        )
    }
}

/// External chain collaborator: wraps the wallet provider handle and the
/// contract-call proxies. Not `Send` because the WASM implementation holds
/// `JsValue`s; native tests run on a current-thread runtime.
#[async_trait(?Send)]
pub trait ChainClient {
    /// Issue an allowance approval on `token_address` letting `spender`
    /// move `base_units` of the token.
    async fn approve(
        &self,
        token_address: &str,
        spender: &str,
        base_units: u128,
    ) -> Result<TxHash, SwapError>;

    /// Issue the swap call on the swap contract.
    async fn swap(
        &self,
        base_units: u128,
        token_in_address: &str,
        token_out_address: &str,
    ) -> Result<TxHash, SwapError>;

    /// Block until the chain confirms the transaction.
    async fn wait_for_confirmation(&self, hash: &TxHash) -> Result<(), SwapError>;
}

/// One submit attempt. Transient, never persisted.
#[derive(Clone, Debug)]
pub struct SwapIntent {
    pub token_in: &'static TokenDescriptor,
    pub token_out: &'static TokenDescriptor,
    pub amount_in: f64,
}

/// Sequencer states. `Error` is terminal for the attempt and reachable
/// from any non-idle state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwapPhase {
    #[default]
    Idle,
    Validating,
    Approving,
    AwaitingApproval,
    Swapping,
    AwaitingSwap,
    Done,
    Error,
}

/// Drives the two-transaction swap. The in-flight flag is advisory (the
/// UI's disabled button is the real debounce) but it is guaranteed to be
/// cleared on every exit path, including early `?` returns.
#[derive(Default)]
pub struct SwapSequencer {
    phase: Cell<SwapPhase>,
    in_flight: Cell<bool>,
}

/// Clears the in-flight flag when the attempt leaves scope, whatever the
/// exit path was.
struct InFlightGuard<'a>(&'a Cell<bool>);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl SwapSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SwapPhase {
        self.phase.get()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Run one swap attempt. Emits the step notifications into `sink` and
    /// returns the outcome; validation failures leave the sequencer idle
    /// with no chain call issued.
    pub async fn execute<C, N>(
        &self,
        intent: &SwapIntent,
        wallet: &WalletState,
        chain: &C,
        sink: &N,
    ) -> Result<(), SwapError>
    where
        C: ChainClient,
        N: NotifySink + ?Sized,
    {
        if self.in_flight.get() {
            return Err(SwapError::Busy);
        }

        self.phase.set(SwapPhase::Validating);
        let base_units = match validate(intent, wallet) {
            Ok(units) => units,
            Err(err) => {
                sink.notify(&err.to_string(), Severity::Error);
                self.phase.set(SwapPhase::Idle);
                return Err(err);
            }
        };

        self.in_flight.set(true);
        let _guard = InFlightGuard(&self.in_flight);

        match self.run_chain_steps(base_units, intent, chain, sink).await {
            Ok(()) => {
                self.phase.set(SwapPhase::Done);
                Ok(())
            }
            Err(err) => {
                log::warn!("swap attempt failed: {err}");
                sink.notify("Error something went wrong", Severity::Error);
                self.phase.set(SwapPhase::Error);
                Err(err)
            }
        }
    }

    async fn run_chain_steps<C, N>(
        &self,
        base_units: u128,
        intent: &SwapIntent,
        chain: &C,
        sink: &N,
    ) -> Result<(), SwapError>
    where
        C: ChainClient,
        N: NotifySink + ?Sized,
    {
        self.phase.set(SwapPhase::Approving);
        let approval = chain
            .approve(
                intent.token_in.contract_address,
                SWAP_CONTRACT_ADDRESS,
                base_units,
            )
            .await?;
        sink.notify("Start approving...", Severity::Info);

        self.phase.set(SwapPhase::AwaitingApproval);
        chain.wait_for_confirmation(&approval).await?;
        sink.notify("Approved successfully", Severity::Success);

        self.phase.set(SwapPhase::Swapping);
        let swap = chain
            .swap(
                base_units,
                intent.token_in.contract_address,
                intent.token_out.contract_address,
            )
            .await?;
        sink.notify("Start swapping...", Severity::Info);

        self.phase.set(SwapPhase::AwaitingSwap);
        chain.wait_for_confirmation(&swap).await?;
        sink.notify("Swapped successfully", Severity::Success);

        Ok(())
    }
}

/// Pre-flight validation: wallet session, distinct tokens, amount above
/// the threshold. Returns the amount scaled to base units.
fn validate(intent: &SwapIntent, wallet: &WalletState) -> Result<u128, SwapError> {
    if !wallet.is_connected() {
        return Err(SwapError::NotConnected);
    }
    if intent.token_in.symbol == intent.token_out.symbol {
        return Err(SwapError::SameToken);
    }
    if intent.amount_in.is_nan() || intent.amount_in <= MIN_SWAP_AMOUNT {
        return Err(SwapError::AmountTooSmall);
    }
    tokens::to_base_units(intent.amount_in, TOKEN_DECIMALS).ok_or(SwapError::AmountTooSmall)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::find;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        entries: RefCell<Vec<(String, Severity)>>,
    }

    impl RecordingSink {
        fn messages(&self) -> Vec<String> {
            self.entries.borrow().iter().map(|(m, _)| m.clone()).collect()
        }

        fn errors(&self) -> usize {
            self.entries
                .borrow()
                .iter()
                .filter(|(_, s)| *s == Severity::Error)
                .count()
        }
    }

    impl NotifySink for RecordingSink {
        fn notify(&self, message: &str, severity: Severity) {
            self.entries.borrow_mut().push((message.to_string(), severity));
        }
    }

    /// Mock chain client recording issued calls; `fail_swap` makes the
    /// swap call revert after a successful approval.
    #[derive(Default)]
    struct MockChain {
        fail_swap: bool,
        yield_in_wait: bool,
        approvals: RefCell<Vec<(String, String, u128)>>,
        swaps: RefCell<Vec<(u128, String, String)>>,
    }

    impl MockChain {
        fn call_count(&self) -> usize {
            self.approvals.borrow().len() + self.swaps.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl ChainClient for MockChain {
        async fn approve(
            &self,
            token_address: &str,
            spender: &str,
            base_units: u128,
        ) -> Result<TxHash, SwapError> {
            self.approvals.borrow_mut().push((
                token_address.to_string(),
                spender.to_string(),
                base_units,
            ));
            Ok(TxHash("0xapprove".into()))
        }

        async fn swap(
            &self,
            base_units: u128,
            token_in_address: &str,
            token_out_address: &str,
        ) -> Result<TxHash, SwapError> {
            if self.fail_swap {
                return Err(SwapError::Transaction("execution reverted".into()));
            }
            self.swaps.borrow_mut().push((
                base_units,
                token_in_address.to_string(),
                token_out_address.to_string(),
            ));
            Ok(TxHash("0xswap".into()))
        }

        async fn wait_for_confirmation(&self, _hash: &TxHash) -> Result<(), SwapError> {
            if self.yield_in_wait {
                tokio::task::yield_now().await;
            }
            Ok(())
        }
    }

    fn intent(token_in: &str, token_out: &str, amount_in: f64) -> SwapIntent {
        SwapIntent {
            token_in: find(token_in).unwrap(),
            token_out: find(token_out).unwrap(),
            amount_in,
        }
    }

    fn connected() -> WalletState {
        WalletState::new("0xABC", 5)
    }

    #[tokio::test]
    async fn happy_path_emits_step_notifications_in_order() {
        let seq = SwapSequencer::new();
        let chain = MockChain::default();
        let sink = RecordingSink::default();

        seq.execute(&intent("WETH", "UNI", 1.5), &connected(), &chain, &sink)
            .await
            .unwrap();

        assert_eq!(
            sink.messages(),
            vec![
                "Start approving...",
                "Approved successfully",
                "Start swapping...",
                "Swapped successfully",
            ]
        );
        assert_eq!(seq.phase(), SwapPhase::Done);
        assert!(!seq.is_in_flight());

        // approval targets the input token for the router, swap carries
        // the same scaled amount
        let approvals = chain.approvals.borrow();
        assert_eq!(approvals.len(), 1);
        assert_eq!(approvals[0].0, find("WETH").unwrap().contract_address);
        assert_eq!(approvals[0].1, SWAP_CONTRACT_ADDRESS);
        assert_eq!(approvals[0].2, 1_500_000_000_000_000_000);
        assert_eq!(chain.swaps.borrow()[0].0, 1_500_000_000_000_000_000);
    }

    #[tokio::test]
    async fn below_threshold_amount_is_rejected_before_any_call() {
        let seq = SwapSequencer::new();
        let chain = MockChain::default();
        let sink = RecordingSink::default();

        let err = seq
            .execute(&intent("WETH", "UNI", 0.00005), &connected(), &chain, &sink)
            .await
            .unwrap_err();

        assert!(matches!(err, SwapError::AmountTooSmall));
        assert_eq!(chain.call_count(), 0);
        assert_eq!(sink.errors(), 1);
        assert_eq!(seq.phase(), SwapPhase::Idle);
        assert!(!seq.is_in_flight());
    }

    #[tokio::test]
    async fn threshold_is_exclusive() {
        let seq = SwapSequencer::new();
        let chain = MockChain::default();
        let sink = RecordingSink::default();

        let err = seq
            .execute(&intent("WETH", "UNI", MIN_SWAP_AMOUNT), &connected(), &chain, &sink)
            .await
            .unwrap_err();

        assert!(matches!(err, SwapError::AmountTooSmall));
        assert_eq!(chain.call_count(), 0);
    }

    #[tokio::test]
    async fn same_token_swap_is_rejected_before_any_call() {
        let seq = SwapSequencer::new();
        let chain = MockChain::default();
        let sink = RecordingSink::default();

        let err = seq
            .execute(&intent("UNI", "UNI", 1.0), &connected(), &chain, &sink)
            .await
            .unwrap_err();

        assert!(matches!(err, SwapError::SameToken));
        assert_eq!(chain.call_count(), 0);
        assert_eq!(sink.messages(), vec!["You can't swap token for the same token"]);
    }

    #[tokio::test]
    async fn disconnected_wallet_is_rejected_before_any_call() {
        let seq = SwapSequencer::new();
        let chain = MockChain::default();
        let sink = RecordingSink::default();

        let err = seq
            .execute(
                &intent("WETH", "UNI", 1.0),
                &WalletState::default(),
                &chain,
                &sink,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, SwapError::NotConnected));
        assert_eq!(chain.call_count(), 0);
        assert_eq!(sink.messages(), vec!["Please connect wallet"]);
    }

    #[tokio::test]
    async fn swap_failure_after_approval_clears_busy_and_emits_one_error() {
        let seq = SwapSequencer::new();
        let chain = MockChain {
            fail_swap: true,
            ..MockChain::default()
        };
        let sink = RecordingSink::default();

        let err = seq
            .execute(&intent("WETH", "UNI", 2.0), &connected(), &chain, &sink)
            .await
            .unwrap_err();

        assert!(matches!(err, SwapError::Transaction(_)));
        assert!(!seq.is_in_flight());
        assert_eq!(seq.phase(), SwapPhase::Error);
        assert_eq!(sink.errors(), 1);

        let messages = sink.messages();
        assert!(messages.contains(&"Approved successfully".to_string()));
        assert!(!messages.contains(&"Swapped successfully".to_string()));
        assert_eq!(*messages.last().unwrap(), "Error something went wrong");
    }

    #[tokio::test]
    async fn concurrent_attempt_is_rejected_as_busy() {
        let seq = SwapSequencer::new();
        let chain = MockChain {
            yield_in_wait: true,
            ..MockChain::default()
        };
        let sink = RecordingSink::default();

        let wallet = connected();
        let forward = intent("WETH", "UNI", 1.0);
        let backward = intent("UNI", "WETH", 1.0);
        let first = seq.execute(&forward, &wallet, &chain, &sink);
        let second = seq.execute(&backward, &wallet, &chain, &sink);

        let (first, second) = tokio::join!(first, second);
        let outcomes = [first.is_ok(), second.is_ok()];
        assert_eq!(outcomes.iter().filter(|ok| **ok).count(), 1);
        assert!(matches!(
            [first, second].into_iter().find(|r| r.is_err()),
            Some(Err(SwapError::Busy))
        ));
        assert!(!seq.is_in_flight());
    }

    #[tokio::test]
    async fn sequencer_is_reusable_after_failure() {
        let seq = SwapSequencer::new();
        let sink = RecordingSink::default();

        let failing = MockChain {
            fail_swap: true,
            ..MockChain::default()
        };
        let _ = seq
            .execute(&intent("WETH", "UNI", 1.0), &connected(), &failing, &sink)
            .await;

        let chain = MockChain::default();
        seq.execute(&intent("WETH", "UNI", 1.0), &connected(), &chain, &sink)
            .await
            .unwrap();
        assert_eq!(seq.phase(), SwapPhase::Done);
    }
}
