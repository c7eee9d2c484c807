//! Background task dropping idle sessions.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use listkeeper_core::repository::session::SessionStore;

use crate::state::ConcreteListService;

/// Every `every`, remove sessions idle for longer than `max_idle`. Stops
/// when `cancel` fires.
pub fn spawn_sweeper(
    service: Arc<ConcreteListService>,
    every: Duration,
    max_idle: Duration,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; nothing can be idle yet.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {
                    let removed = service.store().purge_idle(max_idle);
                    if removed > 0 {
                        tracing::info!(removed, live = service.store().len(), "swept idle sessions");
                    }
                }
            }
        }

        tracing::debug!("session sweeper stopped");
    })
}
