use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use vocab_core::LocalCache;

/// Periodically evict expired cache entries until cancelled
pub async fn sweep_cache(cache: Arc<LocalCache>, every: Duration, cancel: CancellationToken) {
    let mut interval = tokio::time::interval(every);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let removed = cache.purge_expired();
                if removed > 0 {
                    tracing::debug!("Evicted {removed} expired cache entries");
                }
            }
            _ = cancel.cancelled() => {
                tracing::info!("Cache sweeper stopping");
                break;
            }
        }
    }
}
