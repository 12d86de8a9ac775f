//! Main application window
//!
//! Owns the settings form state and the shared `running` flag, drains the
//! background-task event queue at the top of every frame, and is the only
//! place widget state is ever touched.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;

use eframe::egui;
use tracing::{info, warn};

use crate::common::constants::{paths, timer, ui as ui_consts, watch};
use crate::common::events::{self, AppEvent, EventQueue};
use crate::config::Settings;
use crate::input::sender::{self, SystemKeyboard};
use crate::{monitor, timer as countdown};

pub struct ResetTimerApp {
    settings: Settings,
    settings_path: PathBuf,
    running: Arc<AtomicBool>,
    countdown_text: String,
    events: mpsc::Receiver<AppEvent>,
    queue: EventQueue,
    rt: tokio::runtime::Handle,
    keyboard: SystemKeyboard,
    exiting: bool,
}

impl ResetTimerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, rt: tokio::runtime::Handle) -> Self {
        let (queue, events) = events::channel(cc.egui_ctx.clone());

        let settings_path = PathBuf::from(paths::SETTINGS_FILE);
        let settings = Settings::load(&settings_path);

        // Watchers and the signal listener live for the whole session
        for target in watch::TARGET_PROCESSES {
            rt.spawn(monitor::watch_process(
                target,
                queue.clone(),
                watch::POLL_INTERVAL,
            ));
        }
        rt.spawn(monitor::exit_on_signal(queue.clone()));

        Self {
            settings,
            settings_path,
            running: Arc::new(AtomicBool::new(false)),
            countdown_text: "00:00".to_string(),
            events,
            queue,
            rt,
            keyboard: SystemKeyboard,
            exiting: false,
        }
    }

    fn start_countdown(&mut self) {
        // Start is disabled while running; the swap guards a stale click
        if self.running.swap(true, Ordering::SeqCst) {
            return;
        }
        self.rt.spawn(countdown::run_countdown(
            self.settings.timer_minutes,
            self.running.clone(),
            self.queue.clone(),
            timer::TICK,
        ));
    }

    fn stop_countdown(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        info!("countdown stopped");
    }

    fn save_settings(&self) {
        // Best-effort: a failed save is logged and otherwise ignored
        if let Err(e) = self.settings.save(&self.settings_path) {
            warn!(error = %e, "failed to save settings");
        }
    }

    fn send_shortcut(&mut self) {
        if let Err(e) = sender::send_shortcut(&mut self.keyboard, &self.settings.shortcut_keys) {
            warn!(error = %e, "failed to send shortcut");
        }
    }

    /// Shared exit path for watchers and signals; safe to hit repeatedly
    fn request_close(&mut self, ctx: &egui::Context) {
        if self.exiting {
            return;
        }
        self.exiting = true;
        self.running.store(false, Ordering::SeqCst);
        info!("shutting down");
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    fn drain_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                AppEvent::CountdownTick { minutes, seconds } => {
                    self.countdown_text = format!("{minutes:02}:{seconds:02}");
                }
                AppEvent::TriggerShortcut => self.send_shortcut(),
                AppEvent::ExitRequested => self.request_close(ctx),
            }
        }
    }
}

impl eframe::App for ResetTimerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events(ctx);

        let running = self.running.load(Ordering::SeqCst);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.group(|ui| {
                super::components::timer_settings::ui(ui, &mut self.settings);
            });
            ui.add_space(ui_consts::ITEM_SPACING);

            ui.group(|ui| {
                super::components::shortcut_settings::ui(ui, &mut self.settings);
            });
            ui.add_space(ui_consts::ITEM_SPACING);

            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(&self.countdown_text)
                        .monospace()
                        .size(ui_consts::COUNTDOWN_TEXT_SIZE),
                );
            });
            ui.add_space(ui_consts::ITEM_SPACING);

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!running, egui::Button::new("Start"))
                    .clicked()
                {
                    self.start_countdown();
                }
                if ui.add_enabled(running, egui::Button::new("Stop")).clicked() {
                    self.stop_countdown();
                }
                if ui.button("Save settings").clicked() {
                    self.save_settings();
                }
            });
        });
    }
}
