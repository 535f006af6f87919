//! The unstaking form. Mirrors the staking form without the fee deduction,
//! and routes a full-balance amount through the unstake-all call.

#![allow(non_snake_case)]

use api::token_amount::TokenAmount;
use api::validate;
use api::validate::AmountValidation;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::app_state_mut::AppStateMut;
use crate::components::balance_info::BalanceInfo;
use crate::components::balance_info::BalanceTab;
use crate::components::connect_wallet::ConnectWallet;
use crate::components::modals::ProgressModal;
use crate::components::modals::SuccessModal;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Modal;

#[component]
pub fn UnstakeScreen() -> Element {
    let app = use_context::<AppStateMut>();

    let mut amount_str = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let show_progress = use_signal(|| false);
    let show_success = use_signal(|| false);
    let mut show_error = use_signal(|| false);
    let mut error_message = use_signal(String::new);
    let tx_hash = use_signal(String::new);

    let validation = use_memo(move || match app.balances.read().as_ref() {
        Some(balances) => {
            validate::validate_unstake(&amount_str.read(), &balances.staked, *app.token.read())
        }
        None => AmountValidation::Empty,
    });

    let fill_max = move |_| {
        if let Some(balances) = app.balances.peek().as_ref() {
            amount_str.set(balances.staked.to_decimal_string());
        }
    };

    let submit = move |_| {
        if submitting() || !validation.peek().is_valid() {
            return;
        }
        let unstake_all = validation.peek().is_max();
        let token = *app.token.peek();
        let input = amount_str.peek().trim().to_string();
        submitting.set(true);
        let mut show_progress = show_progress;
        let mut show_success = show_success;
        let mut tx_hash = tx_hash;
        show_progress.set(true);
        spawn(async move {
            let result = async {
                if unstake_all {
                    // An exact match of the displayed staked balance withdraws
                    // everything, dust included.
                    api::unstake_all(token).await.map_err(|e| e.to_string())
                } else {
                    let amount = TokenAmount::from_decimal_str(&input, token.decimals())
                        .map_err(|e| e.to_string())?;
                    api::unstake(token, amount.raw_string())
                        .await
                        .map_err(|e| e.to_string())
                }
            }
            .await;

            match result {
                Ok(hash) => {
                    tracing::info!("unstake submitted: {}", hash);
                    app.refresh_balances().await;
                    app.refresh_history().await;
                    show_progress.set(false);
                    tx_hash.set(hash);
                    show_success.set(true);
                }
                Err(err) => {
                    tracing::warn!("unstake failed: {}", err);
                    show_progress.set(false);
                    error_message.set(err);
                    show_error.set(true);
                }
            }
            amount_str.set(String::new());
            submitting.set(false);
        });
    };

    let current = validation.read().clone();
    let invalid = match &current {
        AmountValidation::Empty => None,
        AmountValidation::Valid { .. } => Some(false),
        AmountValidation::Invalid { .. } => Some(true),
    };
    let button_label = if submitting() {
        "Unstaking..."
    } else if current.is_max() {
        "Unstake All"
    } else {
        "Unstake"
    };
    let nothing_staked = app
        .balances
        .read()
        .as_ref()
        .is_some_and(|b| !b.has_staked_tokens());

    rsx! {
        Card {
            if !app.connected() {
                ConnectWallet {}
            } else {
                BalanceInfo { active_tab: BalanceTab::Unstake }

                if nothing_staked {
                    p {
                        "You do not have funds in the deposit. "
                        "Please go to the tab \"Stake\"."
                    }
                } else {
                    label {
                        "Amount"
                        fieldset {
                            role: "group",
                            input {
                                r#type: "text",
                                name: "unstake_amount",
                                placeholder: "0.0",
                                inputmode: "decimal",
                                value: "{amount_str}",
                                "aria-invalid": match invalid {
                                    Some(true) => "true",
                                    Some(false) => "false",
                                    None => "",
                                },
                                disabled: submitting(),
                                oninput: move |evt| amount_str.set(evt.value()),
                            }
                            Button {
                                button_type: ButtonType::Secondary,
                                outline: true,
                                disabled: submitting(),
                                on_click: fill_max,
                                "Max"
                            }
                        }
                    }
                    if let Some(message) = current.message() {
                        small { style: "color: var(--pico-del-color);", "{message}" }
                    }

                    p {
                        small {
                            "You can withdraw the entire amount at any time. "
                            "The funds will be credited to the account in a week."
                        }
                    }

                    Button {
                        disabled: submitting() || !current.is_valid(),
                        on_click: submit,
                        "{button_label}"
                    }
                }
            }
        }

        ProgressModal { is_open: show_progress }
        SuccessModal { is_open: show_success, hash: tx_hash, unstaking: true }
        Modal {
            is_open: show_error,
            title: "Transaction Failed",
            p { "{error_message}" }
        }
    }
}
