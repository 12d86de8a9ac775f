//! Shared constants and cross-thread event types

pub mod constants;
pub mod events;
