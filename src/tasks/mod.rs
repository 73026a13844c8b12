//! Background Tasks Module
//!
//! Contains background tasks that run alongside the REPL.
//!
//! # Tasks
//! - Reaper: Removes stale cache entries on a fixed period

mod reaper;

pub(crate) use reaper::spawn_reaper;
