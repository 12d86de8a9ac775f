//! Cross-thread event marshaling between background tasks and the UI
//!
//! Background tasks never touch widget state. They enqueue `AppEvent`s on a
//! single-consumer channel which the UI thread drains at the top of each
//! frame; every send also requests a repaint so the drain happens promptly.

use std::sync::mpsc;

/// Events posted by background tasks, consumed only by the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// One countdown tick; payload is the remaining time to display
    CountdownTick { minutes: u32, seconds: u32 },
    /// A countdown cycle completed; the UI should send the shortcut
    TriggerShortcut,
    /// A watcher or OS signal asked the application to shut down
    ExitRequested,
}

/// Producer handle for background tasks. Cloneable; sends are non-blocking.
#[derive(Clone)]
pub struct EventQueue {
    tx: mpsc::Sender<AppEvent>,
    ctx: eframe::egui::Context,
}

impl EventQueue {
    /// Enqueue an event and wake the UI thread.
    /// A closed channel means the UI is gone; the event is silently dropped.
    pub fn send(&self, event: AppEvent) {
        if self.tx.send(event).is_ok() {
            self.ctx.request_repaint();
        }
    }
}

/// Create the event channel bound to the given egui context
pub fn channel(ctx: eframe::egui::Context) -> (EventQueue, mpsc::Receiver<AppEvent>) {
    let (tx, rx) = mpsc::channel();
    (EventQueue { tx, ctx }, rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_delivers_in_order() {
        let (queue, rx) = channel(eframe::egui::Context::default());
        queue.send(AppEvent::CountdownTick {
            minutes: 1,
            seconds: 0,
        });
        queue.send(AppEvent::TriggerShortcut);
        assert_eq!(
            rx.try_recv().unwrap(),
            AppEvent::CountdownTick {
                minutes: 1,
                seconds: 0
            }
        );
        assert_eq!(rx.try_recv().unwrap(), AppEvent::TriggerShortcut);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn send_after_receiver_dropped_is_harmless() {
        let (queue, rx) = channel(eframe::egui::Context::default());
        drop(rx);
        queue.send(AppEvent::ExitRequested);
    }
}
