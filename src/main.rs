//! Keep Rolling
//!
//! Watches a selected screen region for a number and keeps re-rolling the
//! game with a keystroke until that number reaches a threshold.

mod args;
mod automation;
mod capture;
mod error;
mod log;
mod ocr;
mod paths;
mod selection;

use std::process::ExitCode;

use clap::Parser;

use args::Args;
use automation::state::EXIT_FAILED;
use automation::{DesktopActuator, RerollContext};
use capture::ScreenCapturer;
use error::RunError;
use log::Logger;
use ocr::TesseractRecognizer;
use selection::HelperSelector;

fn main() -> ExitCode {
    // Log panics with the same timestamped format as everything else
    std::panic::set_hook(Box::new(|panic_info| {
        let msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        let location = panic_info
            .location()
            .map(|l| format!(" at {}:{}", l.file(), l.line()))
            .unwrap_or_default();
        Logger::default().log(&format!("PANIC: {}{}", msg, location));
    }));

    let config = Args::parse().into_config();
    let logger = config.logger();

    let recognizer = match TesseractRecognizer::locate(logger) {
        Ok(recognizer) => recognizer,
        Err(e) => {
            logger.log(&RunError::Unexpected(e).to_string());
            return ExitCode::from(EXIT_FAILED);
        }
    };

    let selector = HelperSelector::new(paths::get_selection_helper_path(), logger);
    let actuator = DesktopActuator::new(config.settle_delay);

    let mut ctx = RerollContext::new(config, selector, ScreenCapturer::new(), recognizer, actuator);
    ctx.run();
    ctx.state.exit_code()
}
