//! Frequently asked questions about the staking program.

#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::components::pico::Accordion;
use crate::components::pico::Card;

const FAQ_ITEMS: [(&str, &str); 7] = [
    (
        "What is Unique Staking?",
        "Unique Staking Hub enables users to stake their ecosystem tokens to support the \
         development of the Unique Network blockchain and as a mechanism to grow capital while \
         sponsoring dApp transactions on the Unique Network.",
    ),
    (
        "What are the benefits of Unique Staking?",
        "Users can stake their tokens and earn an Annual Percentage Yield (APY) while \
         contributing to the health of the Unique Network blockchain. This yield is generated by \
         inflation and taken from the Treasury.",
    ),
    (
        "When will I receive my tokens after unstaking?",
        "Tokens can be unstaked anytime. However, there is a one-week waiting period for tokens \
         to arrive in the user's wallet.",
    ),
    (
        "What are the future plans for Unique Staking?",
        "AppPromotion features will be integrated into Unique Staking. We plan on enabling \
         UNQ/QTZ owners to influence how the apps are sponsored and earn even more rewards as \
         promoted dApps become successful.",
    ),
    (
        "Can I stake UNQ & QTZ tokens with MetaMask?",
        "Currently, users can stake their tokens only using Substrate wallets, but in future \
         releases, we'll add MetaMask staking functionality.",
    ),
    (
        "How many times can I stake my tokens?",
        "Users can stake 10 times from one wallet. All staked tokens must be unstaked \
         simultaneously. However, there is a one-week waiting period for tokens to arrive in the \
         user's wallet.",
    ),
    (
        "Can I stake coins locked in vesting?",
        "You can stake coins from both transferable and locked balances. When staking coins, \
         staking always starts from balances that are already locked (vesting, democracy, \
         election). For example: you have 1000 coins (500 transferable and 500 vested). If you \
         want to stake 400 coins, they will be staked from the vested balance because it's \
         already locked. However, if you want to stake 600 coins, 500 coins will be staked from \
         the vested balance and the remaining 100 coins from the transferable balance. The \
         system automatically prioritizes the locked funds. This leads to a more efficient and \
         secure staking experience while maximizing the earning potential of your entire coin \
         balance.",
    ),
];

#[component]
pub fn FaqScreen() -> Element {
    rsx! {
        Card {
            h3 { "FAQ" }
            for (question, answer) in FAQ_ITEMS {
                Accordion {
                    title: "{question}",
                    p { "{answer}" }
                }
            }
        }
    }
}
