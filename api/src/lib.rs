//! This crate contains all shared fullstack server functions.

pub mod analytics;
pub mod balances;
pub mod history;
#[cfg(not(target_arch = "wasm32"))]
mod history_cache;
#[cfg(not(target_arch = "wasm32"))]
mod indexer;
pub mod prefs;
pub mod token;
pub mod token_amount;
pub mod validate;

use balances::BalanceBreakdown;
use dioxus::prelude::*;
use history::HistoryEntry;
use history::TransferEntry;
use prefs::user_prefs::UserPrefs;
use token::Token;

pub type ApiError = anyhow::Error;

/// Retrieves the user's preferences.
///
/// In the future this may read from a settings file. For now it just returns
/// the default settings, which read from env vars.
#[post("/api/get_user_prefs")]
pub async fn get_user_prefs() -> Result<UserPrefs, ApiError> {
    Ok(UserPrefs::default())
}

/// Asks the wallet bridge for the currently connected account address, if
/// any.
#[post("/api/connected_account")]
pub async fn connected_account() -> Result<Option<String>, ApiError> {
    let account = wallet_bridge::connected_account().await?;
    dioxus_logger::tracing::info!("connected account: {:?}", account);
    Ok(account)
}

/// Fetches the full balance breakdown for an address on the given network.
#[post("/api/account_balances")]
pub async fn account_balances(token: Token, address: String) -> Result<BalanceBreakdown, ApiError> {
    let breakdown = wallet_bridge::balances(token, &address).await?;

    let json = serde_json::to_string(&breakdown)?;
    dioxus_logger::tracing::info!("balances for {}: {}", address, json);

    Ok(breakdown)
}

/// Fetches the account's stake and unstake extrinsics from the indexer,
/// newest first. Results are cached server-side for a short interval.
#[server(input = Json, output = Json)]
#[post("/api/staking_history")]
pub async fn staking_history(token: Token, address: String) -> Result<Vec<HistoryEntry>, ApiError> {
    history_cache::cached_staking_history(token, address).await
}

/// Fetches the account's plain balance transfers from the indexer.
#[server(input = Json, output = Json)]
#[post("/api/transfer_history")]
pub async fn transfer_history(
    token: Token,
    address: String,
) -> Result<Vec<TransferEntry>, ApiError> {
    indexer::IndexerClient::new(token)
        .transfer_history(&address)
        .await
}

/// Signs and submits a stake extrinsic for `amount_raw` on-chain units.
/// Returns the transaction hash.
#[post("/api/stake")]
pub async fn stake(token: Token, amount_raw: String) -> Result<String, ApiError> {
    wallet_bridge::stake(token, &amount_raw).await
}

/// Signs and submits a partial unstake for `amount_raw` on-chain units.
/// Returns the transaction hash.
#[post("/api/unstake")]
pub async fn unstake(token: Token, amount_raw: String) -> Result<String, ApiError> {
    wallet_bridge::unstake(token, &amount_raw).await
}

/// Signs and submits a full withdrawal of the staked balance. Returns the
/// transaction hash.
#[post("/api/unstake_all")]
pub async fn unstake_all(token: Token) -> Result<String, ApiError> {
    wallet_bridge::unstake_all(token).await
}

/// JSON-RPC bridge to the local wallet/signer service.
///
/// The browser build never talks to the signer directly; these calls run on
/// the server side of the fullstack split. Wallet cryptography and extrinsic
/// construction live entirely behind this boundary.
#[cfg(not(target_arch = "wasm32"))]
mod wallet_bridge {
    use serde::de::DeserializeOwned;
    use serde_json::json;
    use serde_json::Value;

    use super::balances::BalanceBreakdown;
    use super::token::Token;
    use super::ApiError;

    pub fn signer_port() -> u16 {
        const DEFAULT_PORT: u16 = 9877;
        std::env::var("STAKEHUB_SIGNER_PORT")
            .unwrap_or("".to_string())
            .parse()
            .unwrap_or(DEFAULT_PORT)
    }

    fn signer_url() -> String {
        format!("http://127.0.0.1:{}", signer_port())
    }

    async fn call<T: DeserializeOwned>(method: &str, params: Value) -> Result<T, ApiError> {
        // no connection caching. establishing a localhost connection is fast
        // and this way there is nothing to invalidate on error.
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let reply: Value = reqwest::Client::new()
            .post(signer_url())
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(err) = reply.get("error") {
            anyhow::bail!("signer error from {}: {}", method, err);
        }
        let result = reply
            .get("result")
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("signer reply to {} missing result", method))?;
        Ok(serde_json::from_value(result)?)
    }

    pub async fn connected_account() -> Result<Option<String>, ApiError> {
        call("wallet_connectedAccount", json!([])).await
    }

    pub async fn balances(token: Token, address: &str) -> Result<BalanceBreakdown, ApiError> {
        call("wallet_balances", json!([token.symbol(), address])).await
    }

    pub async fn stake(token: Token, amount_raw: &str) -> Result<String, ApiError> {
        call("appPromotion_stake", json!([token.symbol(), amount_raw])).await
    }

    pub async fn unstake(token: Token, amount_raw: &str) -> Result<String, ApiError> {
        call(
            "appPromotion_unstakePartial",
            json!([token.symbol(), amount_raw]),
        )
        .await
    }

    pub async fn unstake_all(token: Token) -> Result<String, ApiError> {
        call("appPromotion_unstakeAll", json!([token.symbol()])).await
    }
}
