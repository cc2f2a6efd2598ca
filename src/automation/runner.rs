//! Re-roll runner: the capture → recognize → decide → act loop.
//!
//! Every external capability is injected, so the loop runs unchanged against
//! the real desktop or against scripted fakes.

use crate::automation::{Actuator, RerollConfig, RerollState};
use crate::capture::{Capturer, Region};
use crate::error::{ActuatorError, RunError};
use crate::log::Logger;
use crate::ocr::Recognizer;
use crate::selection::RegionSelector;

/// Why a polling iteration stopped the run.
enum Interrupt {
    Abort,
    Fail(RunError),
}

impl From<ActuatorError> for Interrupt {
    fn from(err: ActuatorError) -> Self {
        match err {
            ActuatorError::FailSafe => Interrupt::Abort,
            ActuatorError::Input(e) => Interrupt::Fail(RunError::Unexpected(e)),
            other => Interrupt::Fail(RunError::Unexpected(anyhow::Error::new(other))),
        }
    }
}

/// Re-roll context holding state, configuration and collaborators.
pub struct RerollContext<S, C, R, A> {
    /// Current state
    pub state: RerollState,
    /// Region chosen during selection
    pub region: Option<Region>,
    /// Number of completed polling iterations
    pub iterations: u32,
    pub config: RerollConfig,
    pub selector: S,
    pub capturer: C,
    pub recognizer: R,
    pub actuator: A,
    logger: Logger,
}

impl<S, C, R, A> RerollContext<S, C, R, A>
where
    S: RegionSelector,
    C: Capturer,
    R: Recognizer,
    A: Actuator,
{
    pub fn new(config: RerollConfig, selector: S, capturer: C, recognizer: R, actuator: A) -> Self {
        let logger = config.logger();
        Self {
            state: RerollState::Selecting,
            region: None,
            iterations: 0,
            config,
            selector,
            capturer,
            recognizer,
            actuator,
            logger,
        }
    }

    /// Runs the state machine to a terminal state and logs the final status.
    pub fn run(&mut self) {
        while self.step() {}
        debug_assert!(self.state.is_terminal());

        match &self.state {
            RerollState::Done(value) => self.logger.log(&format!(
                "Threshold reached: {} >= {}",
                value, self.config.threshold
            )),
            RerollState::Aborted => self.logger.log("Aborted by mouse movement."),
            RerollState::Failed(err) => self.logger.log(&err.to_string()),
            RerollState::Selecting | RerollState::Polling => {}
        }
    }

    /// Advances the state machine by one step.
    ///
    /// Returns `true` while the run should continue.
    pub fn step(&mut self) -> bool {
        match self.state {
            RerollState::Selecting => {
                self.logger.log("Please select the screen region...");
                match self.selector.select_region() {
                    Ok(region) => {
                        self.logger.verbose(&format!("Selected region: {}", region));
                        self.logger.log(
                            "(Move the mouse to the screen corner to stop the script prematurely.)",
                        );
                        self.region = Some(region);
                        self.state = RerollState::Polling;
                        true
                    }
                    Err(e) => {
                        self.state = RerollState::Failed(RunError::Selection(e));
                        false
                    }
                }
            }

            RerollState::Polling => {
                let Some(region) = self.region else {
                    self.state = RerollState::Failed(RunError::Unexpected(anyhow::anyhow!(
                        "Polling started without a selected region"
                    )));
                    return false;
                };

                let result = self.poll_once(&region);
                self.iterations += 1;

                match result {
                    Ok(Some(value)) => {
                        self.state = RerollState::Done(value);
                        false
                    }
                    Ok(None) => {
                        // Wait a bit before next iteration
                        std::thread::sleep(self.config.poll_interval);
                        true
                    }
                    Err(Interrupt::Abort) => {
                        self.state = RerollState::Aborted;
                        false
                    }
                    Err(Interrupt::Fail(e)) => {
                        self.state = RerollState::Failed(e);
                        false
                    }
                }
            }

            RerollState::Done(_) | RerollState::Aborted | RerollState::Failed(_) => false,
        }
    }

    /// One polling iteration.
    ///
    /// Returns the value that met the threshold, or `None` to keep polling.
    fn poll_once(&mut self, region: &Region) -> Result<Option<u32>, Interrupt> {
        self.actuator.check_failsafe()?;

        let frame = self
            .capturer
            .capture(region)
            .map_err(|e| Interrupt::Fail(RunError::ImageCapture(e)))?;

        let value = self
            .recognizer
            .recognize(&frame)
            .map_err(|e| Interrupt::Fail(RunError::Unexpected(e)))?;

        let Some(value) = value else {
            return Ok(None);
        };
        self.logger.verbose(&format!("OCR Result: {}", value));

        if value >= self.config.threshold {
            self.logger.verbose(&format!("Stopping at {}...", value));
            return Ok(Some(value));
        }

        let (x, y) = region.focus_point();
        self.actuator.focus_at(x, y)?;
        self.actuator.press_key(&self.config.keystroke)?;
        self.logger.verbose(&format!(
            "Sent {} keystroke to window at {}, {}",
            self.config.keystroke, region.x, region.y
        ));

        Ok(None)
    }
}
