//! The wallet balance breakdown shown above the staking forms.

use serde::Deserialize;
use serde::Serialize;

use crate::token_amount::TokenAmount;

/// All balances relevant to staking, fetched together per refresh.
///
/// Ephemeral: held in transient UI state and re-fetched on demand, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceBreakdown {
    /// Everything the account owns, staked or not.
    pub total: TokenAmount,
    /// Tokens currently locked in the staking program.
    pub staked: TokenAmount,
    /// Tokens in the unstaking waiting period (pending unstake).
    pub locked: TokenAmount,
    /// Tokens free to stake right now.
    pub available: TokenAmount,
}

impl BalanceBreakdown {
    pub fn has_staked_tokens(&self) -> bool {
        !self.staked.is_zero()
    }
}
