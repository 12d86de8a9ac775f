//! Shortcut-key vocabulary and synthetic key injection

pub mod keys;
pub mod sender;
