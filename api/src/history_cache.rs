//! Server-side caching of indexer history queries.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;

use tokio::sync::OnceCell;
use tokio::sync::RwLock;

use crate::history::HistoryEntry;
use crate::indexer::IndexerClient;
use crate::token::Token;
use crate::ApiError;

#[derive(Clone, Debug)]
struct CachedHistory {
    entries: Vec<HistoryEntry>,
    last_fetched: Instant,
}

type CacheKey = (Token, String);

/// Retrieves an account's staking history, using a lazy, time-based cache.
///
/// This function acts as a gatekeeper to the indexer. It only re-queries when
/// the cached entry for (token, address) is missing or older than
/// `CACHE_DURATION`, so rapid refresh clicks and tab switches do not hammer
/// the public endpoint.
pub async fn cached_staking_history(
    token: Token,
    address: String,
) -> Result<Vec<HistoryEntry>, ApiError> {
    static CACHE: OnceCell<Arc<RwLock<HashMap<CacheKey, CachedHistory>>>> = OnceCell::const_new();
    const CACHE_DURATION: Duration = Duration::from_secs(30);

    let cache_lock = CACHE
        .get_or_init(|| async { Arc::new(RwLock::new(HashMap::new())) })
        .await;

    let key = (token, address.clone());

    // Check for a fresh entry first with a read lock.
    let read_lock = cache_lock.read().await;
    if let Some(cache) = read_lock.get(&key) {
        if cache.last_fetched.elapsed() < CACHE_DURATION {
            return Ok(cache.entries.clone());
        }
    }
    drop(read_lock); // Release read lock before attempting to acquire a write lock.

    let mut write_lock = cache_lock.write().await;

    // Double-check: another task may have refreshed while we waited for the
    // write lock.
    if let Some(cache) = write_lock.get(&key) {
        if cache.last_fetched.elapsed() < CACHE_DURATION {
            return Ok(cache.entries.clone());
        }
    }

    let entries = IndexerClient::new(token).staking_history(&address).await?;

    write_lock.insert(
        key,
        CachedHistory {
            entries: entries.clone(),
            last_fetched: Instant::now(),
        },
    );

    Ok(entries)
}
