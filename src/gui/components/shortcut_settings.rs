//! Shortcut key selectors
//!
//! Four identical combo boxes over the full key vocabulary. The selection
//! is read at trigger time, so changes here affect the next shortcut send
//! even while a countdown is running.

use eframe::egui;

use crate::common::constants::ui::ITEM_SPACING;
use crate::config::Settings;
use crate::input::keys::ShortcutKey;

/// Renders the four key selectors and returns true if any changed
pub fn ui(ui: &mut egui::Ui, settings: &mut Settings) -> bool {
    let mut changed = false;

    ui.label("Shortcut keys:");
    ui.add_space(ITEM_SPACING);

    for (slot, selected) in settings.shortcut_keys.iter_mut().enumerate() {
        egui::ComboBox::from_id_salt(("shortcut_key", slot))
            .selected_text(selected.to_string())
            .show_ui(ui, |ui| {
                for key in ShortcutKey::all() {
                    if ui
                        .selectable_value(selected, key, key.to_string())
                        .changed()
                    {
                        changed = true;
                    }
                }
            });
        ui.add_space(ITEM_SPACING / 2.0);
    }

    changed
}
