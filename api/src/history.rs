//! Transaction history entries as assembled from the indexer.

use chrono::DateTime;
use serde::Deserialize;
use serde::Serialize;

use crate::token::Token;
use crate::token_amount::TokenAmount;

/// Whether a history entry locked tokens into the program or requested a
/// withdrawal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::EnumIs, strum::IntoStaticStr,
)]
pub enum EventKind {
    Stake,
    Unstake,
}

/// A single staking or unstaking extrinsic signed by the connected account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub hash: String,
    pub block_number: u64,
    pub section: String,
    pub method: String,
    /// ISO-8601 timestamp of the containing block.
    pub block_timestamp: String,
    /// Raw on-chain amount from the matched event, as a base-10 string.
    pub amount: String,
    pub kind: EventKind,
}

/// A plain balance transfer; shown on its own history tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferEntry {
    pub hash: String,
    pub block_number: u64,
    pub section: String,
    pub method: String,
    pub block_timestamp: String,
    pub amount: String,
}

impl HistoryEntry {
    /// The amount scaled for display, falling back to "0" if the indexer
    /// handed us something unparseable.
    pub fn display_amount(&self, token: Token) -> String {
        display_amount(&self.amount, token)
    }

    pub fn display_time(&self) -> String {
        display_time(&self.block_timestamp)
    }
}

impl TransferEntry {
    pub fn display_amount(&self, token: Token) -> String {
        display_amount(&self.amount, token)
    }

    pub fn display_time(&self) -> String {
        display_time(&self.block_timestamp)
    }
}

fn display_amount(raw: &str, token: Token) -> String {
    TokenAmount::from_raw_str(raw, token.decimals())
        .map(|amount| amount.to_decimal_string())
        .unwrap_or_else(|_| "0".to_string())
}

fn display_time(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.format("%b %-d, %Y %H:%M").to_string(),
        // Leave anything non-ISO alone rather than hiding the row.
        Err(_) => timestamp.to_string(),
    }
}

/// Shortens a transaction hash to its first and last six characters
/// (e.g. "0xabcd…").
pub fn abbreviate_hash(hash: &str) -> String {
    if hash.len() <= 12 {
        return hash.to_string();
    }
    format!("{}...{}", &hash[..6], &hash[hash.len() - 6..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviates_long_hashes_only() {
        assert_eq!(
            abbreviate_hash("0x1234567890abcdef1234567890abcdef"),
            "0x1234...abcdef"
        );
        assert_eq!(abbreviate_hash("0xdeadbeef"), "0xdeadbeef");
        assert_eq!(abbreviate_hash(""), "");
    }

    #[test]
    fn display_amount_scales_raw_units() {
        let entry = HistoryEntry {
            hash: "0xabc".into(),
            block_number: 42,
            section: "appPromotion".into(),
            method: "stake".into(),
            block_timestamp: "2024-03-01T12:00:00+00:00".into(),
            amount: "1234567890123456789".into(),
            kind: EventKind::Stake,
        };
        assert_eq!(entry.display_amount(Token::UNQ), "1.2345");
    }

    #[test]
    fn display_amount_tolerates_garbage() {
        let entry = TransferEntry {
            hash: "0xabc".into(),
            block_number: 1,
            section: "balances".into(),
            method: "transfer".into(),
            block_timestamp: "whenever".into(),
            amount: "not-a-number".into(),
        };
        assert_eq!(entry.display_amount(Token::QTZ), "0");
        assert_eq!(entry.display_time(), "whenever");
    }

    #[test]
    fn display_time_formats_iso_timestamps() {
        let entry = HistoryEntry {
            hash: "0xabc".into(),
            block_number: 42,
            section: "appPromotion".into(),
            method: "unstakeAll".into(),
            block_timestamp: "2024-03-01T12:30:00+00:00".into(),
            amount: "0".into(),
            kind: EventKind::Unstake,
        };
        assert_eq!(entry.display_time(), "Mar 1, 2024 12:30");
    }

    #[test]
    fn entries_serialize_with_camel_case_keys() {
        let entry = HistoryEntry {
            hash: "0xabc".into(),
            block_number: 7,
            section: "appPromotion".into(),
            method: "stake".into(),
            block_timestamp: "2024-01-01T00:00:00+00:00".into(),
            amount: "1".into(),
            kind: EventKind::Stake,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("blockNumber").is_some());
        assert!(json.get("blockTimestamp").is_some());
    }
}
