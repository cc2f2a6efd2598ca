use clap::Parser;

use crate::automation::{RerollConfig, DEFAULT_KEYSTROKE};

/// Screen monitoring stat re-roller.
///
/// Select the region showing the stat, then the tool keeps sending a key to
/// the game until the number read there reaches the threshold.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Stop once the value read is at least this
    #[arg(short, long)]
    pub threshold: u32,

    /// Key sent to re-roll while below the threshold
    #[arg(short, long, default_value = DEFAULT_KEYSTROKE)]
    pub keystroke: String,

    /// Print per-iteration details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn into_config(self) -> RerollConfig {
        RerollConfig::new(self.threshold, self.keystroke, self.verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["keep-rolling", "-t", "20"]).unwrap();
        assert_eq!(args.threshold, 20);
        assert_eq!(args.keystroke, "esc");
        assert!(!args.verbose);
    }

    #[test]
    fn test_long_flags() {
        let args = Args::try_parse_from([
            "keep-rolling",
            "--threshold",
            "35",
            "--keystroke",
            "enter",
            "--verbose",
        ])
        .unwrap();
        let config = args.into_config();
        assert_eq!(config.threshold, 35);
        assert_eq!(config.keystroke, "enter");
        assert!(config.verbose);
    }

    #[test]
    fn test_threshold_required() {
        assert!(Args::try_parse_from(["keep-rolling"]).is_err());
        assert!(Args::try_parse_from(["keep-rolling", "-k", "space"]).is_err());
    }

    #[test]
    fn test_threshold_must_be_integer() {
        assert!(Args::try_parse_from(["keep-rolling", "-t", "abc"]).is_err());
        assert!(Args::try_parse_from(["keep-rolling", "-t", "-5"]).is_err());
    }
}
