//! Shortcut injection with scoped modifier hold
//!
//! A shortcut is an ordered list of up to four slots. `None` slots are
//! skipped; of the rest, everything before the last key is a modifier to
//! hold, and the last key is tapped. Modifiers are released in reverse order
//! on every exit path, including mid-sequence injection failures.

use anyhow::{anyhow, Result};
use rdev::EventType;
use tracing::debug;

use crate::input::keys::ShortcutKey;

/// Key-event injection backend. Production code uses [`SystemKeyboard`];
/// tests substitute a recorder.
pub trait Keyboard {
    fn press(&mut self, key: rdev::Key) -> Result<()>;
    fn release(&mut self, key: rdev::Key) -> Result<()>;
}

/// Global key injection through `rdev`
pub struct SystemKeyboard;

impl Keyboard for SystemKeyboard {
    fn press(&mut self, key: rdev::Key) -> Result<()> {
        rdev::simulate(&EventType::KeyPress(key))
            .map_err(|_| anyhow!("failed to inject key press for {key:?}"))
    }

    fn release(&mut self, key: rdev::Key) -> Result<()> {
        rdev::simulate(&EventType::KeyRelease(key))
            .map_err(|_| anyhow!("failed to inject key release for {key:?}"))
    }
}

/// Modifiers currently held down. Dropping the guard releases them in
/// reverse order; release failures at that point are ignored.
struct HeldModifiers<'a, K: Keyboard> {
    keyboard: &'a mut K,
    held: Vec<rdev::Key>,
}

impl<'a, K: Keyboard> HeldModifiers<'a, K> {
    fn new(keyboard: &'a mut K) -> Self {
        Self {
            keyboard,
            held: Vec::new(),
        }
    }

    fn hold(&mut self, key: rdev::Key) -> Result<()> {
        self.keyboard.press(key)?;
        self.held.push(key);
        Ok(())
    }

    fn tap(&mut self, key: rdev::Key) -> Result<()> {
        self.keyboard.press(key)?;
        self.keyboard.release(key)
    }
}

impl<K: Keyboard> Drop for HeldModifiers<'_, K> {
    fn drop(&mut self) {
        while let Some(key) = self.held.pop() {
            let _ = self.keyboard.release(key);
        }
    }
}

/// Send the configured shortcut. All-`None` selections are a no-op.
pub fn send_shortcut<K: Keyboard>(keyboard: &mut K, keys: &[ShortcutKey; 4]) -> Result<()> {
    let resolved: Vec<rdev::Key> = keys.iter().filter_map(|k| k.to_rdev()).collect();
    let Some((&tap, modifiers)) = resolved.split_last() else {
        debug!("no keys selected, skipping shortcut");
        return Ok(());
    };

    debug!(modifiers = ?modifiers, key = ?tap, "sending shortcut");
    let mut held = HeldModifiers::new(keyboard);
    for &modifier in modifiers {
        held.hold(modifier)?;
    }
    held.tap(tap)
}
