//! The "Your Staking Analytics" summary under the staking form.

#![allow(non_snake_case)]

use api::analytics;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::components::amount::Amount;
use crate::components::pico::Card;

#[component]
fn Stat(label: &'static str, value: Element) -> Element {
    rsx! {
        div {
            style: "text-align: center;",
            small { style: "color: var(--pico-muted-color);", "{label}" }
            p { style: "font-weight: bold; margin: 0;", {value} }
        }
    }
}

/// Total staked, APY, and a projected month of rewards. Hidden until the
/// wallet is connected and the first balance fetch lands.
#[component]
pub fn StakingAnalytics() -> Element {
    let app = use_context::<AppStateMut>();
    if !app.connected() {
        return rsx! {};
    }
    let token = *app.token.read();
    let balances = app.balances.read();
    let Some(balances) = balances.as_ref() else {
        return rsx! {};
    };

    let staked = balances.staked.clone();
    let monthly = analytics::estimated_monthly_reward(&staked);

    rsx! {
        Card {
            h4 { "Your Staking Analytics" }
            div {
                class: "grid",
                Stat {
                    label: "Total Staked",
                    value: rsx! { Amount { amount: staked, token } },
                }
                Stat {
                    label: "Current APY",
                    value: rsx! { "{analytics::APY_PERCENT}%" },
                }
                Stat {
                    label: "Est. Monthly Rewards",
                    value: rsx! { "{monthly.to_fixed_string(2)} {token.symbol()}" },
                }
                Stat {
                    label: "Staking Period",
                    value: rsx! { "{analytics::STAKING_PERIOD}" },
                }
            }
        }
    }
}
