//! Timestamped console logging.
//!
//! The verbose flag lives in the `Logger` value itself, which is handed to
//! every component that logs.

use chrono::Local;

/// Console logger carrying the run's verbosity.
#[derive(Clone, Copy, Debug, Default)]
pub struct Logger {
    verbose: bool,
}

impl Logger {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Logs a message unconditionally.
    pub fn log(&self, msg: &str) {
        println!("{}", format_line(msg));
    }

    /// Logs a message only when verbose output is enabled.
    pub fn verbose(&self, msg: &str) {
        if self.is_verbose() {
            self.log(msg);
        }
    }
}

fn format_line(msg: &str) -> String {
    let timestamp = Local::now().format("%H:%M:%S%.3f");
    format!("[{}] {}", timestamp, msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_has_timestamp_prefix() {
        let line = format_line("hello");
        assert!(line.starts_with('['));
        assert!(line.ends_with("] hello"));
        // [HH:MM:SS.mmm]
        assert_eq!(line.find(']'), Some(13));
    }

    #[test]
    fn test_verbose_flag() {
        assert!(Logger::new(true).is_verbose());
        assert!(!Logger::new(false).is_verbose());
        assert!(!Logger::default().is_verbose());
    }
}
