//! Application-wide constants, grouped by concern

/// File paths
pub mod paths {
    /// Settings file, relative to the working directory
    pub const SETTINGS_FILE: &str = "settings.json";
}

/// Process watching
pub mod watch {
    use std::time::Duration;

    /// Companion processes whose disappearance shuts the tool down.
    /// Matched case-insensitively against the OS process list.
    pub const TARGET_PROCESSES: [&str; 2] = ["vrmonitor.exe", "slimevr.exe"];

    /// How often each watcher polls the process list
    pub const POLL_INTERVAL: Duration = Duration::from_secs(5);
}

/// Countdown timer
pub mod timer {
    use std::time::Duration;

    pub const TICK: Duration = Duration::from_secs(1);

    pub const MIN_MINUTES: u32 = 1;
    /// 24 hours
    pub const MAX_MINUTES: u32 = 1440;
}

/// GUI layout
pub mod ui {
    pub const WINDOW_TITLE: &str = "SlimeVR Reset Timer";
    pub const WINDOW_WIDTH: f32 = 400.0;
    pub const WINDOW_HEIGHT: f32 = 400.0;
    pub const ITEM_SPACING: f32 = 8.0;
    pub const COUNTDOWN_TEXT_SIZE: f32 = 48.0;
}
