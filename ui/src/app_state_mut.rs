//! Defines the mutable, reactive state for the application's UI.

use api::balances::BalanceBreakdown;
use api::history::HistoryEntry;
use api::history::TransferEntry;
use api::token::Token;
use dioxus::prelude::*;

use crate::hooks::use_connection_checker::ConnectionChecker;
use crate::hooks::use_connection_checker::ConnectionStatus;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// This struct holds `Signal`s for any UI-related state that needs to change
/// and trigger automatic re-renders in the view. It is separate from the
/// stable `AppState`.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// The token/network everything currently operates on.
    pub token: Signal<Token>,
    /// The connected wallet address. `None` until the wallet is connected.
    pub account: Signal<Option<String>>,
    /// The latest balance breakdown. `None` while loading.
    pub balances: Signal<Option<BalanceBreakdown>>,
    /// Stake/unstake history, newest first. `None` while loading.
    pub staking_history: Signal<Option<Vec<HistoryEntry>>>,
    /// Plain transfer history, newest first. `None` while loading.
    pub transfers: Signal<Option<Vec<TransferEntry>>>,
    /// In-flight guard for balance refreshes.
    pub balances_refreshing: Signal<bool>,
    /// In-flight guard for history refreshes.
    pub history_refreshing: Signal<bool>,
    /// Backend reachability, updated as calls succeed or fail.
    pub connection: Signal<ConnectionStatus>,
}

impl AppStateMut {
    fn checker(&self) -> ConnectionChecker {
        ConnectionChecker::new(self.connection)
    }

    pub fn connected(&self) -> bool {
        self.account.read().is_some()
    }

    /// Re-fetches the balance breakdown for the connected account.
    ///
    /// Re-entrant calls while a refresh is already running are ignored; a
    /// failed fetch keeps whatever was displayed before.
    pub async fn refresh_balances(mut self) {
        if *self.balances_refreshing.peek() {
            return;
        }
        let Some(address) = self.account.peek().clone() else {
            return;
        };
        self.balances_refreshing.set(true);

        let token = *self.token.peek();
        let mut checker = self.checker();
        if let Some(breakdown) = checker.check(api::account_balances(token, address).await) {
            self.balances.set(Some(breakdown));
        }

        self.balances_refreshing.set(false);
    }

    /// Re-fetches staking and transfer history for the connected account,
    /// sequentially, with the same in-flight guard semantics as
    /// [`Self::refresh_balances`].
    pub async fn refresh_history(mut self) {
        if *self.history_refreshing.peek() {
            return;
        }
        let Some(address) = self.account.peek().clone() else {
            return;
        };
        self.history_refreshing.set(true);

        let token = *self.token.peek();
        let mut checker = self.checker();

        let staking = api::staking_history(token, address.clone()).await;
        if let Some(entries) = checker.check(staking) {
            self.staking_history.set(Some(entries));
        }

        let transfers = api::transfer_history(token, address).await;
        if let Some(entries) = checker.check(transfers) {
            self.transfers.set(Some(entries));
        }

        self.history_refreshing.set(false);
    }

    /// Drops all fetched data so the loading states show while the new
    /// network's data arrives.
    pub fn clear_fetched_data(mut self) {
        self.balances.set(None);
        self.staking_history.set(None);
        self.transfers.set(None);
    }
}
