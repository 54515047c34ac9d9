//! Locations of the feed and of the record file.

use std::env;
use std::path::PathBuf;

/// Default feed, relative to the working directory.
pub const DEFAULT_INPUT: &str = "./wejscie.txt";
/// Default record file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "./wyjscie.txt";

pub const INPUT_VAR: &str = "NMEA_FIX_INPUT";
pub const OUTPUT_VAR: &str = "NMEA_FIX_OUTPUT";

/// Where a run reads sentences from and writes records to.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl Config {
    /// The defaults, with `NMEA_FIX_INPUT` and `NMEA_FIX_OUTPUT` taking
    /// precedence when set to something non-empty.
    pub fn from_env() -> Self {
        Config::from_vars(|name| env::var_os(name).map(PathBuf::from))
    }

    fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<PathBuf>,
    {
        let var = |name| var(name).filter(|p: &PathBuf| !p.as_os_str().is_empty());
        let default = Config::default();
        Config {
            input: var(INPUT_VAR).unwrap_or(default.input),
            output: var(OUTPUT_VAR).unwrap_or(default.output),
        }
    }
}
