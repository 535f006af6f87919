//! The UNQ/QTZ network selector.

#![allow(non_snake_case)]

use api::token::Token;
use dioxus::prelude::*;
use std::str::FromStr;
use strum::IntoEnumIterator;

use crate::app_state_mut::AppStateMut;

/// A dropdown for switching between the two supported networks.
///
/// Switching clears all fetched data and kicks off fresh balance and history
/// fetches against the other network's endpoints.
#[component]
pub fn TokenChooser() -> Element {
    let app = use_context::<AppStateMut>();
    let mut token = app.token;

    rsx! {
        select {
            name: "token",
            "aria-label": "Token",
            onchange: move |evt| {
                let Ok(selected) = Token::from_str(&evt.value()) else {
                    return;
                };
                if selected == *token.peek() {
                    return;
                }
                token.set(selected);
                app.clear_fetched_data();
                spawn(async move {
                    app.refresh_balances().await;
                    app.refresh_history().await;
                });
            },
            for t in Token::iter() {
                option {
                    value: "{t.symbol()}",
                    selected: *token.read() == t,
                    "{t.symbol()} - {t.name()}"
                }
            }
        }
    }
}
