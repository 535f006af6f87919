//! Client for the uniquescan extrinsics indexer.
//!
//! The indexer is queried by signer address plus method/section name lists
//! and returns historical extrinsics with their emitted events embedded. The
//! staked/unstaked amount is not part of the extrinsic itself; it has to be
//! dug out of the matching `appPromotion` event's data.

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::history::EventKind;
use crate::history::HistoryEntry;
use crate::history::TransferEntry;
use crate::token::Token;
use crate::ApiError;

const STAKING_SECTION: &str = "appPromotion";
const BALANCES_SECTION: &str = "balances";
const PAGE_LIMIT: u32 = 1000;

/// The indexer's extrinsics query. Serialized field names follow the
/// service's camelCase contract.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ExtrinsicsQuery<'a> {
    signer_in: [&'a str; 1],
    method_in: &'a [&'a str],
    section_in: [&'a str; 1],
    limit: u32,
    order_by_block_number: &'a str,
}

#[derive(Deserialize, Debug)]
struct ExtrinsicsPage {
    items: Vec<ExtrinsicItem>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ExtrinsicItem {
    hash: String,
    block_number: u64,
    section: String,
    method: String,
    block_timestamp: BlockTimestamp,
    #[serde(default)]
    events: Vec<EventRecord>,
}

/// The indexer reports block times either as epoch milliseconds or as an
/// ISO string, depending on endpoint version.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum BlockTimestamp {
    Millis(i64),
    Iso(String),
}

impl BlockTimestamp {
    fn to_iso(&self) -> String {
        match self {
            Self::Millis(ms) => DateTime::<Utc>::from_timestamp_millis(*ms)
                .map(|dt| dt.to_rfc3339())
                .unwrap_or_else(|| ms.to_string()),
            Self::Iso(s) => s.clone(),
        }
    }
}

#[derive(Deserialize, Debug)]
struct EventRecord {
    section: String,
    method: String,
    #[serde(default)]
    data: Value,
}

pub struct IndexerClient {
    base_url: String,
    http: reqwest::Client,
}

impl IndexerClient {
    pub fn new(token: Token) -> Self {
        Self::with_base_url(token.indexer_base_url())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    async fn extrinsics(&self, query: &ExtrinsicsQuery<'_>) -> Result<Vec<ExtrinsicItem>, ApiError> {
        let url = format!("{}/extrinsics", self.base_url);
        let page: ExtrinsicsPage = self
            .http
            .post(&url)
            .json(query)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(page.items)
    }

    /// Fetches the account's stake and unstake extrinsics, classified and
    /// merged, newest block first.
    pub async fn staking_history(&self, address: &str) -> Result<Vec<HistoryEntry>, ApiError> {
        let stakes = self
            .extrinsics(&ExtrinsicsQuery {
                signer_in: [address],
                method_in: &["stake"],
                section_in: [STAKING_SECTION],
                limit: PAGE_LIMIT,
                order_by_block_number: "desc",
            })
            .await?;

        let unstakes = self
            .extrinsics(&ExtrinsicsQuery {
                signer_in: [address],
                method_in: &["unstake", "unstakePartial", "unstakeAll"],
                section_in: [STAKING_SECTION],
                limit: PAGE_LIMIT,
                order_by_block_number: "desc",
            })
            .await?;

        let mut entries: Vec<HistoryEntry> = stakes
            .into_iter()
            .map(|item| classify(item, EventKind::Stake))
            .chain(
                unstakes
                    .into_iter()
                    .map(|item| classify(item, EventKind::Unstake)),
            )
            .collect();
        entries.sort_by(|a, b| b.block_number.cmp(&a.block_number));

        dioxus_logger::tracing::info!(
            "indexer returned {} staking history entries for {}",
            entries.len(),
            address
        );
        Ok(entries)
    }

    /// Fetches the account's plain balance transfers, newest block first.
    pub async fn transfer_history(&self, address: &str) -> Result<Vec<TransferEntry>, ApiError> {
        let items = self
            .extrinsics(&ExtrinsicsQuery {
                signer_in: [address],
                method_in: &["transfer", "transferKeepAlive"],
                section_in: [BALANCES_SECTION],
                limit: PAGE_LIMIT,
                order_by_block_number: "desc",
            })
            .await?;

        let mut entries: Vec<TransferEntry> = items
            .into_iter()
            .map(|item| TransferEntry {
                amount: transfer_amount(&item.events),
                hash: item.hash,
                block_number: item.block_number,
                section: item.section,
                method: item.method,
                block_timestamp: item.block_timestamp.to_iso(),
            })
            .collect();
        entries.sort_by(|a, b| b.block_number.cmp(&a.block_number));
        Ok(entries)
    }
}

fn classify(item: ExtrinsicItem, kind: EventKind) -> HistoryEntry {
    let prefix = match kind {
        EventKind::Stake => "stake",
        EventKind::Unstake => "unstake",
    };
    HistoryEntry {
        amount: staking_amount(&item.events, prefix),
        hash: item.hash,
        block_number: item.block_number,
        section: item.section,
        method: item.method,
        block_timestamp: item.block_timestamp.to_iso(),
        kind,
    }
}

/// The amount sits at positional index "1" of the matching event's data
/// (index "0" is the staker account). Depending on indexer version the data
/// arrives as an object keyed by stringified indices or as a plain array.
fn staking_amount(events: &[EventRecord], method_prefix: &str) -> String {
    events
        .iter()
        .find(|e| {
            e.section == STAKING_SECTION && e.method.to_lowercase().starts_with(method_prefix)
        })
        .and_then(|e| e.data.get("1").or_else(|| e.data.get(1)))
        .map(value_to_amount)
        .unwrap_or_else(|| "0".to_string())
}

fn transfer_amount(events: &[EventRecord]) -> String {
    events
        .iter()
        .find(|e| e.section == BALANCES_SECTION && e.method == "Transfer")
        .and_then(|e| e.data.get("amount"))
        .map(value_to_amount)
        .unwrap_or_else(|| "0".to_string())
}

fn value_to_amount(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => "0".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_serializes_with_indexer_field_names() {
        let query = ExtrinsicsQuery {
            signer_in: ["5Gabc"],
            method_in: &["stake"],
            section_in: [STAKING_SECTION],
            limit: PAGE_LIMIT,
            order_by_block_number: "desc",
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["signerIn"][0], "5Gabc");
        assert_eq!(json["methodIn"][0], "stake");
        assert_eq!(json["sectionIn"][0], "appPromotion");
        assert_eq!(json["limit"], 1000);
        assert_eq!(json["orderByBlockNumber"], "desc");
    }

    #[test]
    fn classify_pulls_amount_from_the_matching_event() {
        let item: ExtrinsicItem = serde_json::from_value(serde_json::json!({
            "hash": "0xfeed",
            "blockNumber": 1234,
            "section": "appPromotion",
            "method": "stake",
            "blockTimestamp": "2024-05-01T10:00:00+00:00",
            "events": [
                {
                    "section": "balances",
                    "method": "Withdraw",
                    "data": { "amount": "150000000000000000" }
                },
                {
                    "section": "appPromotion",
                    "method": "Stake",
                    "data": { "0": "5Gabc", "1": "100000000000000000000" }
                }
            ]
        }))
        .unwrap();

        let entry = classify(item, EventKind::Stake);
        assert_eq!(entry.amount, "100000000000000000000");
        assert_eq!(entry.block_number, 1234);
        assert!(entry.kind.is_stake());
    }

    #[test]
    fn classify_defaults_to_zero_without_a_matching_event() {
        let item: ExtrinsicItem = serde_json::from_value(serde_json::json!({
            "hash": "0xfeed",
            "blockNumber": 99,
            "section": "appPromotion",
            "method": "unstakeAll",
            "blockTimestamp": 1714557600000i64,
            "events": []
        }))
        .unwrap();

        let entry = classify(item, EventKind::Unstake);
        assert_eq!(entry.amount, "0");
        // Millisecond timestamps are normalized to ISO-8601.
        assert!(entry.block_timestamp.starts_with("2024-05-01T"));
    }

    #[test]
    fn event_matching_is_prefix_and_case_insensitive() {
        let events: Vec<EventRecord> = serde_json::from_value(serde_json::json!([
            {
                "section": "appPromotion",
                "method": "UnstakePartial",
                "data": { "0": "5Gabc", "1": 42u64 }
            }
        ]))
        .unwrap();
        assert_eq!(staking_amount(&events, "unstake"), "42");
        assert_eq!(staking_amount(&events, "stake"), "0");
    }

    #[test]
    fn transfer_amount_reads_the_named_field() {
        let events: Vec<EventRecord> = serde_json::from_value(serde_json::json!([
            {
                "section": "balances",
                "method": "Transfer",
                "data": { "from": "a", "to": "b", "amount": "777" }
            }
        ]))
        .unwrap();
        assert_eq!(transfer_amount(&events), "777");
    }
}
