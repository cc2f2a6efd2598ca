//! Region selection through the external `screen_selection` helper.
//!
//! The helper is an interactive drag-to-select overlay. It must exit with
//! status zero after printing a line `Selection: x, y, width, height`.

pub mod parse;

use std::path::PathBuf;
use std::process::Command;

use crate::capture::Region;
use crate::error::SelectionError;
use crate::log::Logger;

pub use parse::parse_selection_output;

/// Produces the screen region to monitor.
pub trait RegionSelector {
    fn select_region(&mut self) -> Result<Region, SelectionError>;
}

/// Runs the helper executable and parses its standard output.
pub struct HelperSelector {
    helper_path: PathBuf,
    logger: Logger,
}

impl HelperSelector {
    pub fn new(helper_path: PathBuf, logger: Logger) -> Self {
        Self {
            helper_path,
            logger,
        }
    }
}

impl RegionSelector for HelperSelector {
    fn select_region(&mut self) -> Result<Region, SelectionError> {
        self.logger.verbose(&format!(
            "Running selection helper: {}",
            self.helper_path.display()
        ));

        let output = Command::new(&self.helper_path)
            .output()
            .map_err(|source| SelectionError::Spawn {
                path: self.helper_path.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SelectionError::ExitStatus {
                status: output.status,
                stderr: stderr.trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_selection_output(&stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_helper_is_spawn_error() {
        let mut selector = HelperSelector::new(
            PathBuf::from("/nonexistent/keep-rolling/screen_selection"),
            Logger::default(),
        );
        let err = selector.select_region().unwrap_err();
        assert!(matches!(err, SelectionError::Spawn { .. }));
    }

    /// Writes an executable shell script standing in for the helper.
    #[cfg(unix)]
    fn write_helper(dir: &std::path::Path, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("screen_selection");
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_carries_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let helper = write_helper(
            dir.path(),
            "echo 'Selection: 1, 2, 3, 4'\necho 'overlay cancelled' >&2\nexit 3",
        );
        let mut selector = HelperSelector::new(helper, Logger::default());

        let err = selector.select_region().unwrap_err();
        match &err {
            SelectionError::ExitStatus { status, stderr } => {
                assert_eq!(status.code(), Some(3));
                assert_eq!(stderr, "overlay cancelled");
            }
            other => panic!("expected exit status error, got {:?}", other),
        }
        assert!(err.to_string().contains("overlay cancelled"));
    }

    #[cfg(unix)]
    #[test]
    fn test_helper_output_yields_last_selection() {
        let dir = tempfile::tempdir().unwrap();
        let helper = write_helper(
            dir.path(),
            "echo 'Starting overlay'\necho 'Selection: 1, 2, 3, 4'\necho 'Selection: 10, 20, 30, 40'",
        );
        let mut selector = HelperSelector::new(helper, Logger::default());

        let region = selector.select_region().unwrap();
        assert_eq!(region, Region::new(10, 20, 30, 40));
    }
}
