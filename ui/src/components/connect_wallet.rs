#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::app_state_mut::AppStateMut;
use crate::components::pico::Button;
use crate::components::pico::Modal;
use crate::hooks::use_connection_checker::use_connection_checker;

/// The gate shown on the stake and unstake forms before a wallet account is
/// known. Connecting also kicks off the first balance and history fetches.
#[component]
pub fn ConnectWallet() -> Element {
    let app = use_context::<AppStateMut>();
    let mut connecting = use_signal(|| false);
    let mut show_error = use_signal(|| false);
    let mut error_message = use_signal(String::new);

    let mut checker = use_connection_checker();
    let connect = move |_| {
        if connecting() {
            return;
        }
        connecting.set(true);
        spawn(async move {
            let mut app = app;
            match checker.check(api::connected_account().await) {
                Some(Some(address)) => {
                    tracing::info!("wallet connected: {}", address);
                    app.account.set(Some(address));
                    app.refresh_balances().await;
                    app.refresh_history().await;
                }
                Some(None) => {
                    error_message
                        .set("No account available. Unlock your wallet and try again.".to_string());
                    show_error.set(true);
                }
                // The checker already logged the failure and flipped the
                // connection banner.
                None => {
                    error_message.set(
                        "Could not reach the wallet service. Check that it is running.".to_string(),
                    );
                    show_error.set(true);
                }
            }
            connecting.set(false);
        });
    };

    rsx! {
        div {
            style: "text-align: center; padding: 1rem 0;",
            p { "Connect a wallet to view balances and stake tokens." }
            Button {
                disabled: connecting(),
                on_click: connect,
                if connecting() { "Connecting..." } else { "Connect Wallet" }
            }
        }
        Modal {
            is_open: show_error,
            title: "Connection Failed",
            p { "{error_message}" }
        }
    }
}
