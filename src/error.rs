//! Failure classification for a re-roll run.
//!
//! OCR text that does not parse is not an error here: the recognizer
//! absorbs it and yields `None`. A fail-safe abort is not an error either;
//! it ends the run with `RerollState::Aborted`.

use std::process::ExitStatus;

use thiserror::Error;

/// Region selection failed before polling could start.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("could not start selection helper {path}: {source}")]
    Spawn {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("selection helper exited with {status}: {stderr}")]
    ExitStatus { status: ExitStatus, stderr: String },
    #[error("no selection data found in the output")]
    NoSelection,
    #[error("unexpected selection line: {0}")]
    Malformed(String),
}

/// Fatal failure that ends a run in the `Failed` state.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Error running screen selection: {0}")]
    Selection(#[from] SelectionError),
    #[error("Error capturing screen region: {0:#}")]
    ImageCapture(#[source] anyhow::Error),
    #[error("Unexpected error: {0:#}")]
    Unexpected(#[source] anyhow::Error),
}

/// Input synthesis stopped or failed.
#[derive(Debug, Error)]
pub enum ActuatorError {
    /// The pointer was parked in a screen corner to stop the run.
    #[error("fail-safe triggered by moving the pointer to a screen corner")]
    FailSafe,
    #[error("unknown key name: {0:?}")]
    UnknownKey(String),
    #[error(transparent)]
    Input(#[from] anyhow::Error),
}
