//! Transaction history, split into staking, unstaking, and transfer views.

#![allow(non_snake_case)]

use api::history::abbreviate_hash;
use api::history::HistoryEntry;
use api::history::TransferEntry;
use api::token::Token;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::components::connect_wallet::ConnectWallet;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum HistoryTab {
    #[default]
    Staking,
    Unstaking,
    Transfers,
}

impl HistoryTab {
    const ALL: [Self; 3] = [Self::Staking, Self::Unstaking, Self::Transfers];

    fn label(&self) -> &'static str {
        match self {
            Self::Staking => "Staking",
            Self::Unstaking => "Unstaking",
            Self::Transfers => "Transfers",
        }
    }
}

#[component]
pub fn HistoryScreen() -> Element {
    let app = use_context::<AppStateMut>();
    let mut active = use_signal(HistoryTab::default);

    if !app.connected() {
        return rsx! {
            Card { ConnectWallet {} }
        };
    }

    let token = *app.token.read();
    let refreshing = *app.history_refreshing.read();
    let staking = app.staking_history.read();
    let transfers: Option<Vec<TransferEntry>> = app.transfers.read().as_ref().cloned();

    let stakes: Option<Vec<HistoryEntry>> = staking
        .as_ref()
        .map(|all| all.iter().filter(|e| e.kind.is_stake()).cloned().collect());
    let unstakes: Option<Vec<HistoryEntry>> = staking
        .as_ref()
        .map(|all| all.iter().filter(|e| e.kind.is_unstake()).cloned().collect());

    let count = |tab: HistoryTab| -> Option<usize> {
        match tab {
            HistoryTab::Staking => stakes.as_ref().map(Vec::len),
            HistoryTab::Unstaking => unstakes.as_ref().map(Vec::len),
            HistoryTab::Transfers => transfers.as_ref().map(Vec::len),
        }
    };

    rsx! {
        Card {
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                div {
                    role: "group",
                    for tab in HistoryTab::ALL {
                        Button {
                            button_type: if active() == tab {
                                ButtonType::Primary
                            } else {
                                ButtonType::Secondary
                            },
                            outline: active() != tab,
                            on_click: move |_| active.set(tab),
                            {match count(tab) {
                                Some(n) => format!("{} ({})", tab.label(), n),
                                None => tab.label().to_string(),
                            }}
                        }
                    }
                }
                Button {
                    button_type: ButtonType::Contrast,
                    outline: true,
                    disabled: refreshing,
                    on_click: move |_| {
                        spawn(async move {
                            app.refresh_history().await;
                        });
                    },
                    if refreshing { "Refreshing..." } else { "Refresh" }
                }
            }

            match active() {
                HistoryTab::Staking => rsx! {
                    StakingTable {
                        entries: stakes.clone(),
                        token,
                        empty: "No staking history found",
                    }
                },
                HistoryTab::Unstaking => rsx! {
                    StakingTable {
                        entries: unstakes.clone(),
                        token,
                        empty: "No unstaking history found",
                    }
                },
                HistoryTab::Transfers => rsx! {
                    TransfersTable { entries: transfers.clone(), token }
                },
            }
        }
    }
}

#[component]
fn StakingTable(entries: Option<Vec<HistoryEntry>>, token: Token, empty: String) -> Element {
    let Some(entries) = entries else {
        return rsx! { progress {} };
    };
    if entries.is_empty() {
        return rsx! {
            EmptyState {
                title: empty,
                description: "Extrinsics will appear here once they are indexed.",
            }
        };
    }

    rsx! {
        div {
            style: "overflow-x: auto;",
            table {
                thead {
                    tr {
                        th { "Block" }
                        th { "Hash" }
                        th { "Time" }
                        th { "Method" }
                        th { "Amount" }
                    }
                }
                tbody {
                    for entry in entries {
                        tr {
                            key: "{entry.hash}",
                            td { "{entry.block_number}" }
                            td {
                                a {
                                    href: "{token.subscan_extrinsic_url(&entry.hash)}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "{abbreviate_hash(&entry.hash)}"
                                }
                            }
                            td { "{entry.display_time()}" }
                            td { "{entry.section}.{entry.method}" }
                            td { "{entry.display_amount(token)} {token.symbol()}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TransfersTable(entries: Option<Vec<TransferEntry>>, token: Token) -> Element {
    let Some(entries) = entries else {
        return rsx! { progress {} };
    };
    if entries.is_empty() {
        return rsx! {
            EmptyState {
                title: "No transfers found",
                description: "Incoming and outgoing transfers will appear here.",
            }
        };
    }

    rsx! {
        div {
            style: "overflow-x: auto;",
            table {
                thead {
                    tr {
                        th { "Block" }
                        th { "Hash" }
                        th { "Time" }
                        th { "Amount" }
                    }
                }
                tbody {
                    for entry in entries {
                        tr {
                            key: "{entry.hash}",
                            td { "{entry.block_number}" }
                            td {
                                a {
                                    href: "{token.subscan_extrinsic_url(&entry.hash)}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "{abbreviate_hash(&entry.hash)}"
                                }
                            }
                            td { "{entry.display_time()}" }
                            td { "{entry.display_amount(token)} {token.symbol()}" }
                        }
                    }
                }
            }
        }
    }
}
