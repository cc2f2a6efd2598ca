//! Re-roll state machine states.
//!
//! Selecting → Polling → {Done, Aborted, Failed}. The last three are terminal.

use std::process::ExitCode;

use crate::error::RunError;

/// Process exit code for a run that failed.
pub const EXIT_FAILED: u8 = 1;

/// Process exit code for a run stopped through the fail-safe.
pub const EXIT_ABORTED: u8 = 2;

/// Re-roll state machine states.
#[derive(Debug)]
pub enum RerollState {
    /// Waiting for the user to select the screen region
    Selecting,
    /// Capturing, reading and re-rolling
    Polling,
    /// The value reached the threshold
    Done(u32),
    /// User parked the pointer in a screen corner
    Aborted,
    /// A fatal error occurred
    Failed(RunError),
}

impl RerollState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RerollState::Done(_) | RerollState::Aborted | RerollState::Failed(_)
        )
    }

    /// Exit code reported by the process for this state.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_code_value())
    }

    fn exit_code_value(&self) -> u8 {
        match self {
            RerollState::Done(_) => 0,
            RerollState::Aborted => EXIT_ABORTED,
            RerollState::Failed(_) | RerollState::Selecting | RerollState::Polling => EXIT_FAILED,
        }
    }
}

impl std::fmt::Display for RerollState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RerollState::Selecting => write!(f, "Selecting"),
            RerollState::Polling => write!(f, "Polling"),
            RerollState::Done(value) => write!(f, "Done ({})", value),
            RerollState::Aborted => write!(f, "Aborted"),
            RerollState::Failed(err) => write!(f, "Failed: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SelectionError;

    #[test]
    fn test_state_display() {
        assert_eq!(format!("{}", RerollState::Selecting), "Selecting");
        assert_eq!(format!("{}", RerollState::Done(42)), "Done (42)");
        assert_eq!(
            format!(
                "{}",
                RerollState::Failed(RunError::Selection(SelectionError::NoSelection))
            ),
            "Failed: Error running screen selection: no selection data found in the output"
        );
    }

    #[test]
    fn test_terminal_states() {
        assert!(!RerollState::Selecting.is_terminal());
        assert!(!RerollState::Polling.is_terminal());
        assert!(RerollState::Done(1).is_terminal());
        assert!(RerollState::Aborted.is_terminal());
        assert!(RerollState::Failed(RunError::Unexpected(anyhow::anyhow!("boom"))).is_terminal());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(RerollState::Done(7).exit_code_value(), 0);
        assert_eq!(RerollState::Aborted.exit_code_value(), EXIT_ABORTED);
        assert_eq!(
            RerollState::Failed(RunError::ImageCapture(anyhow::anyhow!("no image")))
                .exit_code_value(),
            EXIT_FAILED
        );
    }
}
