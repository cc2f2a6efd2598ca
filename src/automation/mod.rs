//! Re-roll automation.
//!
//! This module provides:
//! - Run configuration built from the command line
//! - Key name mapping and input simulation with the corner fail-safe
//! - The re-roll state machine and the loop that drives it

pub mod config;
pub mod input;
pub mod keys;
pub mod runner;
pub mod state;

pub use config::{RerollConfig, DEFAULT_KEYSTROKE};
pub use input::{Actuator, DesktopActuator};
pub use runner::RerollContext;
pub use state::RerollState;
