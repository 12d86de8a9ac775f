//! Form components, one `ui` function per settings group

pub mod shortcut_settings;
pub mod timer_settings;
