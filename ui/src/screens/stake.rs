//! The staking form: amount entry, validation, and submission.

#![allow(non_snake_case)]

use api::token_amount::TokenAmount;
use api::token_amount::DISPLAY_DECIMALS;
use api::validate;
use api::validate::AmountValidation;
use api::validate::MIN_STAKE;
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
use crate::components::staking_analytics::StakingAnalytics;

#[component]
pub fn StakeScreen() -> Element {
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
            validate::validate_stake(&amount_str.read(), &balances.available, *app.token.read())
        }
        None => AmountValidation::Empty,
    });

    let fill_max = move |_| {
        if let Some(balances) = app.balances.peek().as_ref() {
            let ceiling = validate::stake_ceiling(&balances.available);
            amount_str.set(ceiling.to_fixed_string(DISPLAY_DECIMALS));
        }
    };

    let submit = move |_| {
        if submitting() || !validation.peek().is_valid() {
            return;
        }
        let token = *app.token.peek();
        let input = amount_str.peek().trim().to_string();
        submitting.set(true);
        let mut show_progress = show_progress;
        let mut show_success = show_success;
        let mut tx_hash = tx_hash;
        show_progress.set(true);
        spawn(async move {
            let result = async {
                let amount = TokenAmount::from_decimal_str(&input, token.decimals())
                    .map_err(|e| e.to_string())?;
                api::stake(token, amount.raw_string())
                    .await
                    .map_err(|e| e.to_string())
            }
            .await;

            match result {
                Ok(hash) => {
                    tracing::info!("stake submitted: {}", hash);
                    // Bring balances and history up to date before the
                    // success modal replaces the spinner.
                    app.refresh_balances().await;
                    app.refresh_history().await;
                    show_progress.set(false);
                    tx_hash.set(hash);
                    show_success.set(true);
                }
                Err(err) => {
                    tracing::warn!("stake failed: {}", err);
                    show_progress.set(false);
                    error_message.set(err);
                    show_error.set(true);
                }
            }
            amount_str.set(String::new());
            submitting.set(false);
        });
    };

    let token = *app.token.read();
    let symbol = token.symbol();
    let current = validation.read().clone();
    let invalid = match &current {
        AmountValidation::Empty => None,
        AmountValidation::Valid { .. } => Some(false),
        AmountValidation::Invalid { .. } => Some(true),
    };
    let button_label = if submitting() {
        "Staking..."
    } else if current.is_max() {
        "Stake All"
    } else {
        "Stake"
    };

    rsx! {
        Card {
            if !app.connected() {
                ConnectWallet {}
            } else {
                BalanceInfo { active_tab: BalanceTab::Stake }

                label {
                    "Amount"
                    fieldset {
                        role: "group",
                        input {
                            r#type: "text",
                            name: "stake_amount",
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
                        "You can deposit any amount from a minimum of "
                        "{MIN_STAKE} {symbol}, up to 10 times per account."
                    }
                }
                p {
                    small { "Transaction cost \u{2248}0.15 {symbol}." }
                }

                Button {
                    disabled: submitting() || !current.is_valid(),
                    on_click: submit,
                    "{button_label}"
                }
            }
        }

        StakingAnalytics {}

        ProgressModal { is_open: show_progress }
        SuccessModal { is_open: show_success, hash: tx_hash, unstaking: false }
        Modal {
            is_open: show_error,
            title: "Transaction Failed",
            p { "{error_message}" }
        }
    }
}
