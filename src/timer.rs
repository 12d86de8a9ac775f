//! Countdown background task
//!
//! Counts down from `minutes * 60` seconds, posting one display tick per
//! second, then asks the UI to send the shortcut and restarts. Cooperative
//! cancellation through the shared `running` flag: the loop observes a clear
//! within one tick and returns without triggering.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::{debug, info};

use crate::common::events::{AppEvent, EventQueue};

/// Run countdown cycles until `running` is cleared. The minute count is
/// fixed for the lifetime of the task; Start respawns with the current
/// spinner value.
pub async fn run_countdown(
    minutes: u32,
    running: Arc<AtomicBool>,
    queue: EventQueue,
    tick: Duration,
) {
    let total_seconds = minutes.saturating_mul(60);
    info!(minutes, "countdown started");

    while running.load(Ordering::SeqCst) {
        for remaining in (1..=total_seconds).rev() {
            if !running.load(Ordering::SeqCst) {
                debug!("countdown stopped mid-cycle");
                return;
            }
            queue.send(AppEvent::CountdownTick {
                minutes: remaining / 60,
                seconds: remaining % 60,
            });
            tokio::time::sleep(tick).await;
        }

        // A stop during the final sleep must not fire the shortcut
        if !running.load(Ordering::SeqCst) {
            debug!("countdown stopped before trigger");
            return;
        }
        info!("countdown cycle complete, triggering shortcut");
        queue.send(AppEvent::TriggerShortcut);
    }
}
