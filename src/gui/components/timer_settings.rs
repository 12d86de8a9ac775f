//! Timer duration spinner

use eframe::egui;

use crate::common::constants::timer::{MAX_MINUTES, MIN_MINUTES};
use crate::common::constants::ui::ITEM_SPACING;
use crate::config::Settings;

/// Renders the minute spinner and returns true if the value changed.
/// The active countdown is not affected; the new value applies on the
/// next Start.
pub fn ui(ui: &mut egui::Ui, settings: &mut Settings) -> bool {
    let mut changed = false;

    ui.label("Timer duration (minutes):");
    ui.add_space(ITEM_SPACING);
    if ui
        .add(
            egui::DragValue::new(&mut settings.timer_minutes)
                .range(MIN_MINUTES..=MAX_MINUTES)
                .speed(1),
        )
        .changed()
    {
        changed = true;
    }

    changed
}
