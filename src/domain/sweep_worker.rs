//! Background task purging expired mappings on a fixed interval.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};
use tracing::{error, info};

use crate::application::services::MappingService;

/// Runs [`MappingService::sweep`] every `period` until `shutdown` fires.
///
/// The first sweep runs immediately. A failed sweep is logged and the worker
/// keeps its schedule; there is no retry in between ticks.
///
/// The worker stops when `true` is sent on `shutdown` or the sender is dropped.
pub async fn run_sweep_worker(
    service: Arc<MappingService>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(period_secs = period.as_secs(), "Sweep worker started");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(e) = service.sweep().await {
                    error!(error = %e, "Sweep failed");
                }
            }
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }

    info!("Sweep worker stopped");
}
