//! Exit triggers: companion-process watchers and OS signals
//!
//! Each watcher polls the process list every few seconds for one target
//! name. A one-way latch arms on the first sighting; after that, the first
//! poll that misses the target requests application exit and the watcher
//! stops (one-shot, no re-arming). A target that never appears never
//! triggers exit, so starting this tool before the companions is fine.

use std::time::Duration;

use sysinfo::{ProcessesToUpdate, System};
use tracing::{debug, info, warn};

use crate::common::events::{AppEvent, EventQueue};

/// One-way "was running at least once" latch
#[derive(Debug, Default)]
pub struct DisappearanceLatch {
    seen: bool,
}

impl DisappearanceLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one poll result. Returns true when the process has disappeared
    /// after having been observed running.
    pub fn observe(&mut self, running: bool) -> bool {
        if running {
            self.seen = true;
            return false;
        }
        self.seen
    }
}

/// Poll loop, generic over the probe so tests can script sightings
pub async fn watch_with<F>(mut is_running: F, target: &str, queue: EventQueue, interval: Duration)
where
    F: FnMut() -> bool,
{
    let mut latch = DisappearanceLatch::new();
    loop {
        if latch.observe(is_running()) {
            info!(process = target, "companion process exited, requesting shutdown");
            queue.send(AppEvent::ExitRequested);
            return;
        }
        tokio::time::sleep(interval).await;
    }
}

/// Watch one companion process by name (case-insensitive)
pub async fn watch_process(target: &'static str, queue: EventQueue, interval: Duration) {
    debug!(process = target, "watcher started");
    let mut sys = System::new();
    let probe = move || {
        sys.refresh_processes(ProcessesToUpdate::All, true);
        sys.processes()
            .values()
            .any(|p| p.name().eq_ignore_ascii_case(target))
    };
    watch_with(probe, target, queue, interval).await;
}

/// Route interrupt and terminate signals to the shared exit path
pub async fn exit_on_signal(queue: EventQueue) {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let mut terminate = match signal(SignalKind::terminate()) {
            Ok(s) => s,
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                return;
            }
        };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = terminate.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for ctrl-c");
            return;
        }
    }
    info!("termination signal received, requesting shutdown");
    queue.send(AppEvent::ExitRequested);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::events;

    const TEST_INTERVAL: Duration = Duration::from_millis(1);

    #[test]
    fn latch_never_armed_never_fires() {
        let mut latch = DisappearanceLatch::new();
        for _ in 0..100 {
            assert!(!latch.observe(false));
        }
    }

    #[test]
    fn latch_fires_after_seen_then_absent() {
        let mut latch = DisappearanceLatch::new();
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(!latch.observe(true));
        assert!(latch.observe(false));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn watcher_requests_exit_exactly_once() {
        let (queue, rx) = events::channel(eframe::egui::Context::default());
        let polls = [false, true, true, false];
        let mut i = 0;
        let probe = move || {
            let result = polls[i.min(polls.len() - 1)];
            i += 1;
            result
        };
        watch_with(probe, "slimevr.exe", queue, TEST_INTERVAL).await;

        assert_eq!(rx.try_recv().unwrap(), AppEvent::ExitRequested);
        // Loop returned after firing, so nothing else can arrive
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn absent_target_never_requests_exit() {
        let (queue, rx) = events::channel(eframe::egui::Context::default());
        let task = tokio::spawn(watch_with(
            || false,
            "vrmonitor.exe",
            queue,
            TEST_INTERVAL,
        ));
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(rx.try_recv().is_err());
        task.abort();
    }
}
