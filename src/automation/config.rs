//! Run configuration.
//!
//! Built once from the command line and never changed afterwards.

use std::time::Duration;

use crate::log::Logger;

/// Delay between polling iterations (milliseconds)
pub const POLL_INTERVAL_MS: u64 = 500;

/// Delay after the focus click before the keystroke (milliseconds)
pub const SETTLE_DELAY_MS: u64 = 100;

/// Default key sent to re-roll.
pub const DEFAULT_KEYSTROKE: &str = "esc";

/// Complete re-roll configuration.
#[derive(Clone, Debug)]
pub struct RerollConfig {
    /// Stop once the recognized value is at least this
    pub threshold: u32,
    /// Key name sent to the game while below threshold
    pub keystroke: String,
    /// Print per-iteration details
    pub verbose: bool,
    /// Sleep between polling iterations
    pub poll_interval: Duration,
    /// Wait after focusing the window, before the keypress
    pub settle_delay: Duration,
}

impl RerollConfig {
    pub fn new(threshold: u32, keystroke: impl Into<String>, verbose: bool) -> Self {
        Self {
            threshold,
            keystroke: keystroke.into(),
            verbose,
            poll_interval: Duration::from_millis(POLL_INTERVAL_MS),
            settle_delay: Duration::from_millis(SETTLE_DELAY_MS),
        }
    }

    /// Returns a logger honoring this configuration's verbosity.
    pub fn logger(&self) -> Logger {
        Logger::new(self.verbose)
    }
}
