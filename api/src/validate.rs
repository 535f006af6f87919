//! Client-side validation of user-entered stake and unstake amounts.
//!
//! Validation is synchronous and non-fatal: an invalid amount disables the
//! action button and surfaces an inline message, nothing more. All comparisons
//! run on raw integers via [`TokenAmount`] so no precision is lost to floats.

use num_bigint::BigUint;

use crate::token::Token;
use crate::token_amount::TokenAmount;
use crate::token_amount::DISPLAY_DECIMALS;

/// Smallest stakeable amount, in whole tokens.
pub const MIN_STAKE: u32 = 100;

/// Flat fee estimate deducted from the available balance, as (numerator,
/// power-of-ten denominator): 15 / 10^2 = 0.15 tokens.
const ESTIMATED_FEE: (u32, u32) = (15, 2);

/// Outcome of validating an amount field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountValidation {
    /// Nothing entered yet. The action button stays disabled but no error is
    /// shown.
    Empty,
    /// The amount is acceptable. `is_max` is set when the entered string
    /// exactly matches the computed ceiling, which upgrades the action
    /// (stake-all styling, or a true unstake-all submission).
    Valid { is_max: bool },
    /// The amount is rejected with a user-facing message.
    Invalid { message: String },
}

impl AmountValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    pub fn is_max(&self) -> bool {
        matches!(self, Self::Valid { is_max: true })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Invalid { message } => Some(message),
            _ => None,
        }
    }
}

/// The minimum stake at the given scale.
pub fn min_stake(decimals: u32) -> TokenAmount {
    let raw = BigUint::from(MIN_STAKE) * BigUint::from(10u32).pow(decimals);
    TokenAmount::from_raw(raw, decimals)
}

/// The estimated transaction fee at the given scale.
pub fn estimated_fee(decimals: u32) -> TokenAmount {
    let (num, shift) = ESTIMATED_FEE;
    // 18-decimal (or any >= 2) scales hold 0.15 exactly.
    let raw = BigUint::from(num) * BigUint::from(10u32).pow(decimals.saturating_sub(shift));
    TokenAmount::from_raw(raw, decimals)
}

/// The ceiling a stake may reach: the displayed available balance minus the
/// estimated fee, clamped at zero.
///
/// The ceiling is derived from the balance's display string, not its full raw
/// precision, so that the "Max" button, the inline message, and the
/// validation all agree on the same 4-digit figure the user actually sees.
pub fn stake_ceiling(available: &TokenAmount) -> TokenAmount {
    let decimals = available.decimals();
    let displayed = TokenAmount::from_decimal_str(&available.to_decimal_string(), decimals)
        .unwrap_or_else(|_| available.clone());
    displayed.saturating_sub(&estimated_fee(decimals))
}

/// Validates an amount entered into the staking form.
pub fn validate_stake(input: &str, available: &TokenAmount, token: Token) -> AmountValidation {
    let input = input.trim();
    if input.is_empty() {
        return AmountValidation::Empty;
    }

    let decimals = available.decimals();
    let amount = match TokenAmount::from_decimal_str(input, decimals) {
        Ok(amount) => amount,
        Err(_) => {
            return AmountValidation::Invalid {
                message: "Please enter a valid number".to_string(),
            }
        }
    };

    if amount < min_stake(decimals) {
        return AmountValidation::Invalid {
            message: format!("Minimum staking amount is {} {}", MIN_STAKE, token.symbol()),
        };
    }

    let ceiling = stake_ceiling(available);
    let ceiling_str = ceiling.to_fixed_string(DISPLAY_DECIMALS);
    if amount > ceiling {
        return AmountValidation::Invalid {
            message: format!(
                "Amount must not exceed available balance minus fee ({} {})",
                ceiling_str,
                token.symbol()
            ),
        };
    }

    AmountValidation::Valid {
        is_max: input == ceiling_str,
    }
}

/// Validates an amount entered into the unstaking form.
///
/// Mirrors [`validate_stake`] without the fee deduction or minimum: any
/// positive amount up to the displayed staked balance is accepted, and an
/// exact match of the staked balance's display string marks a full
/// withdrawal.
pub fn validate_unstake(input: &str, staked: &TokenAmount, token: Token) -> AmountValidation {
    let input = input.trim();
    if input.is_empty() {
        return AmountValidation::Empty;
    }

    let decimals = staked.decimals();
    let amount = match TokenAmount::from_decimal_str(input, decimals) {
        Ok(amount) => amount,
        Err(_) => {
            // A negative number is still a number; it fails the
            // greater-than-zero check, not the numeric one.
            let negative_number = input
                .strip_prefix('-')
                .is_some_and(|rest| TokenAmount::from_decimal_str(rest, decimals).is_ok());
            let message = if negative_number {
                "Amount must be greater than 0"
            } else {
                "Please enter a valid number"
            };
            return AmountValidation::Invalid {
                message: message.to_string(),
            };
        }
    };

    if amount.is_zero() {
        return AmountValidation::Invalid {
            message: "Amount must be greater than 0".to_string(),
        };
    }

    let staked_str = staked.to_decimal_string();
    let ceiling = TokenAmount::from_decimal_str(&staked_str, decimals)
        .unwrap_or_else(|_| staked.clone());
    if amount > ceiling {
        return AmountValidation::Invalid {
            message: format!(
                "Amount exceeds staked balance ({} {})",
                staked_str,
                token.symbol()
            ),
        };
    }

    AmountValidation::Valid {
        is_max: input == staked_str,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unq(s: &str) -> TokenAmount {
        TokenAmount::from_decimal_str(s, Token::UNQ.decimals()).unwrap()
    }

    #[test]
    fn stake_rejects_non_numeric_input() {
        let result = validate_stake("12abc", &unq("1000"), Token::UNQ);
        assert_eq!(result.message(), Some("Please enter a valid number"));
    }

    #[test]
    fn stake_rejects_below_minimum_naming_it() {
        let result = validate_stake("50", &unq("1000"), Token::UNQ);
        assert!(!result.is_valid());
        let message = result.message().unwrap();
        assert!(message.contains("100"), "message was: {message}");
        assert!(message.contains("UNQ"));
    }

    #[test]
    fn stake_rejects_amounts_above_net_available() {
        // 1000 available, fee 0.15 -> ceiling 999.85.
        let result = validate_stake("999.86", &unq("1000"), Token::UNQ);
        assert!(!result.is_valid());
        let message = result.message().unwrap();
        assert!(message.contains("999.8500"), "message was: {message}");
    }

    #[test]
    fn stake_accepts_exact_net_available_as_max() {
        let result = validate_stake("999.8500", &unq("1000"), Token::UNQ);
        assert_eq!(result, AmountValidation::Valid { is_max: true });
    }

    #[test]
    fn stake_accepts_ordinary_amounts_without_max_flag() {
        let result = validate_stake("250", &unq("1000"), Token::UNQ);
        assert_eq!(result, AmountValidation::Valid { is_max: false });
    }

    #[test]
    fn stake_empty_input_is_neither_valid_nor_an_error() {
        let result = validate_stake("", &unq("1000"), Token::UNQ);
        assert_eq!(result, AmountValidation::Empty);
        assert!(result.message().is_none());
    }

    #[test]
    fn stake_ceiling_clamps_when_fee_exceeds_balance() {
        assert!(stake_ceiling(&unq("0.1")).is_zero());
    }

    #[test]
    fn unstake_rejects_zero_and_non_numeric() {
        let staked = unq("500");
        assert_eq!(
            validate_unstake("0", &staked, Token::UNQ).message(),
            Some("Amount must be greater than 0")
        );
        assert_eq!(
            validate_unstake("oops", &staked, Token::UNQ).message(),
            Some("Please enter a valid number")
        );
    }

    #[test]
    fn unstake_treats_negative_numbers_as_non_positive() {
        let staked = unq("500");
        assert_eq!(
            validate_unstake("-5", &staked, Token::UNQ).message(),
            Some("Amount must be greater than 0")
        );
        assert_eq!(
            validate_unstake("-0.5", &staked, Token::UNQ).message(),
            Some("Amount must be greater than 0")
        );
        // A minus sign on non-numeric garbage is still garbage.
        assert_eq!(
            validate_unstake("-abc", &staked, Token::UNQ).message(),
            Some("Please enter a valid number")
        );
    }

    #[test]
    fn unstake_rejects_amounts_above_staked_balance() {
        let result = validate_unstake("500.0001", &unq("500"), Token::QTZ);
        assert!(!result.is_valid());
        let message = result.message().unwrap();
        assert!(message.contains("500"), "message was: {message}");
        assert!(message.contains("QTZ"));
    }

    #[test]
    fn unstake_full_balance_is_flagged_as_unstake_all() {
        // Staked 500.45678... displays as 500.4567; entering that string is a
        // full withdrawal.
        let staked = unq("500.456789");
        assert_eq!(staked.to_decimal_string(), "500.4567");
        assert_eq!(
            validate_unstake("500.4567", &staked, Token::UNQ),
            AmountValidation::Valid { is_max: true }
        );
        assert_eq!(
            validate_unstake("250", &staked, Token::UNQ),
            AmountValidation::Valid { is_max: false }
        );
    }

    #[test]
    fn fee_and_minimum_constants_scale_correctly() {
        assert_eq!(estimated_fee(18).raw_string(), "150000000000000000");
        assert_eq!(min_stake(18).raw_string(), "100000000000000000000");
        assert_eq!(estimated_fee(18).to_decimal_string(), "0.15");
    }
}
