//! GUI module - egui-based timer window

mod app;
mod components;

use anyhow::{Result, anyhow};
use eframe::egui;

use crate::common::constants::ui::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};

pub use app::ResetTimerApp;

/// Run the application window on the calling thread until close
pub fn run_app(rt: tokio::runtime::Handle) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(ResetTimerApp::new(cc, rt)))),
    )
    .map_err(|e| anyhow!("failed to run UI: {e}"))
}
