//! The per-tab balance summary shown above the staking forms.

use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::components::amount::Amount;

/// Which form the summary sits on; the two tabs show different rows.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum BalanceTab {
    Stake,
    Unstake,
}

#[component]
fn Row(label: &'static str, value: Element) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: space-between; margin-bottom: 0.25rem;",
            span { style: "color: var(--pico-muted-color);", "{label}" }
            span { {value} }
        }
    }
}

#[component]
pub fn BalanceInfo(active_tab: BalanceTab) -> Element {
    let app = use_context::<AppStateMut>();
    if !app.connected() {
        return rsx! {};
    }

    let token = *app.token.read();
    let balances = app.balances.read();

    // "..." until the first fetch lands.
    let cell = |amount: Option<&api::token_amount::TokenAmount>| -> Element {
        match amount {
            Some(amount) => rsx! {
                Amount { amount: amount.clone(), token }
            },
            None => rsx! { "..." },
        }
    };

    rsx! {
        div {
            style: "margin-bottom: 1rem;",
            match active_tab {
                BalanceTab::Stake => rsx! {
                    Row { label: "Total balance:", value: cell(balances.as_ref().map(|b| &b.total)) }
                    Row { label: "Staked volume:", value: cell(balances.as_ref().map(|b| &b.staked)) }
                    Row { label: "Pending unstake:", value: cell(balances.as_ref().map(|b| &b.locked)) }
                    Row { label: "Available to stake:", value: cell(balances.as_ref().map(|b| &b.available)) }
                },
                BalanceTab::Unstake => rsx! {
                    Row { label: "Pending unstake:", value: cell(balances.as_ref().map(|b| &b.locked)) }
                    Row { label: "Staked volume:", value: cell(balances.as_ref().map(|b| &b.staked)) }
                },
            }
        }
    }
}
