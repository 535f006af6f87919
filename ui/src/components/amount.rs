//! A component for displaying token amounts with a lossless tooltip.

use api::token::Token;
use api::token_amount::TokenAmount;
use dioxus::prelude::*;

/// Renders a token amount truncated for display, with the full-precision
/// value and raw unit count available on hover. Truncation can hide real
/// dust, so the tooltip always tells the truth.
#[component]
pub fn Amount(
    amount: TokenAmount,
    token: Token,
    #[props(default = true)] show_code: bool,
) -> Element {
    let display = amount.to_decimal_string();
    let tooltip = format!(
        "{} {}\n({} raw units)",
        amount.display_lossless(),
        token.symbol(),
        amount.raw_string()
    );
    let suffix = if show_code {
        format!(" {}", token.symbol())
    } else {
        String::new()
    };

    rsx! {
        span {
            title: "{tooltip}",
            "{display}{suffix}"
        }
    }
}
