//! Reward projections for the analytics section of the staking form.

use crate::token_amount::TokenAmount;

/// Annual percentage yield of the staking program, in whole percent.
pub const APY_PERCENT: u32 = 18;

const MONTHS_PER_YEAR: u32 = 12;

/// The reward period shown alongside the projection.
pub const STAKING_PERIOD: &str = "30 days";

/// Projects one month of rewards at [`APY_PERCENT`] on the staked balance.
///
/// Like the validators, this works from the balance's display string rather
/// than its full raw precision, so the projection agrees with the staked
/// figure the user sees. Division truncates.
pub fn estimated_monthly_reward(staked: &TokenAmount) -> TokenAmount {
    let decimals = staked.decimals();
    let displayed = TokenAmount::from_decimal_str(&staked.to_decimal_string(), decimals)
        .unwrap_or_else(|_| staked.clone());
    let raw = displayed.raw() * APY_PERCENT / (100u32 * MONTHS_PER_YEAR);
    TokenAmount::from_raw(raw, decimals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Token;

    fn unq(s: &str) -> TokenAmount {
        TokenAmount::from_decimal_str(s, Token::UNQ.decimals()).unwrap()
    }

    #[test]
    fn monthly_reward_is_staked_times_apy_over_twelve() {
        // 1000 * 0.18 / 12 = 15.
        assert_eq!(estimated_monthly_reward(&unq("1000")).to_decimal_string(), "15");
        // 500.4567 * 0.18 / 12 = 7.506850..., shown to 2 places.
        assert_eq!(
            estimated_monthly_reward(&unq("500.4567")).to_fixed_string(2),
            "7.50"
        );
    }

    #[test]
    fn monthly_reward_uses_the_displayed_staked_figure() {
        // Dust past 4 display digits does not feed the projection.
        let staked = unq("500.456789");
        assert_eq!(
            estimated_monthly_reward(&staked),
            estimated_monthly_reward(&unq("500.4567"))
        );
    }

    #[test]
    fn monthly_reward_of_zero_stake_is_zero() {
        assert!(estimated_monthly_reward(&unq("0")).is_zero());
    }
}
