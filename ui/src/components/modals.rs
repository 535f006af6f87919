//! The transaction lifecycle modals shared by the stake and unstake forms.

#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::compat;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::NoTitleModal;

/// Shown while a signed extrinsic is in flight. There is no cancellation;
/// closing the tab is the only way out of a hung submission.
#[component]
pub fn ProgressModal(is_open: Signal<bool>) -> Element {
    rsx! {
        NoTitleModal {
            is_open,
            div {
                style: "text-align: center;",
                progress {}
                h3 { "Please wait" }
                p {
                    "Staking transaction may take a while..."
                    br {}
                    "Please, don't close this tab."
                }
            }
        }
    }
}

/// Shown after a submission confirms, with the transaction hash, a copy
/// button, and a block-explorer link.
#[component]
pub fn SuccessModal(is_open: Signal<bool>, hash: Signal<String>, unstaking: bool) -> Element {
    let app = use_context::<AppStateMut>();
    let mut copied = use_signal(|| false);

    let message = if unstaking {
        "In a week this sum becomes completely free for further use."
    } else {
        "You successfully staked."
    };
    let subscan_url = {
        let hash = hash.read();
        if hash.is_empty() {
            None
        } else {
            Some(app.token.read().subscan_extrinsic_url(&hash))
        }
    };

    rsx! {
        NoTitleModal {
            is_open,
            div {
                style: "text-align: center;",
                h3 { "Success!" }
                p { "{message}" }

                if !hash.read().is_empty() {
                    p {
                        style: "word-break: break-all;",
                        code { "{hash}" }
                    }
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        on_click: move |_| {
                            let text = hash.peek().clone();
                            spawn(async move {
                                copied.set(compat::clipboard_set(text).await);
                            });
                        },
                        if copied() { "Copied" } else { "Copy hash" }
                    }
                }

                if let Some(url) = subscan_url {
                    p {
                        a {
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "View on Subscan"
                        }
                    }
                }

                Button {
                    on_click: move |_| {
                        copied.set(false);
                        is_open.set(false);
                    },
                    "Close"
                }
            }
        }
    }
}
