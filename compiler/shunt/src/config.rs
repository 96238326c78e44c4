//! Runtime settings shared by the driver and the command line.

use log::LevelFilter;

/// Environment variable holding the benchmark repeat count.
pub const REPEAT_ENV: &str = "REPEAT_TIME";

/// How outcomes are serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// `"<value>\n<tree>"` or the error message
    #[default]
    Text,
    /// `{"value", "tree"}` or `{"error"}`
    Json,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid repeat time for benchmark")]
    InvalidRepeat(String),
}

/// Pick the repeat count: the explicit flag, else the environment value,
/// else 1.
pub fn resolve_repeat(flag: Option<u32>, env_value: Option<&str>) -> Result<u32, ConfigError> {
    if let Some(repeat) = flag {
        return Ok(repeat);
    }
    match env_value {
        None => Ok(1),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidRepeat(raw.to_string())),
    }
}

/// [`resolve_repeat`] against the process environment.
pub fn repeat_from_env(flag: Option<u32>) -> Result<u32, ConfigError> {
    let env_value = std::env::var(REPEAT_ENV).ok();
    resolve_repeat(flag, env_value.as_deref())
}

/// Map a `-v` count to a log level.
pub fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the process logger; `RUST_LOG` overrides the `-v` level.
pub fn init_logging(verbose: u8) {
    let _ = env_logger::Builder::new()
        .filter_level(log_level(verbose))
        .parse_default_env()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_repeat_resolution_order() {
        assert_eq!(resolve_repeat(Some(3), Some("7")), Ok(3));
        assert_eq!(resolve_repeat(None, Some("7")), Ok(7));
        assert_eq!(resolve_repeat(None, Some(" 2\n")), Ok(2));
        assert_eq!(resolve_repeat(None, None), Ok(1));
    }

    #[test]
    fn test_invalid_repeat() {
        let err = resolve_repeat(None, Some("ten")).unwrap_err();
        assert_eq!(err, ConfigError::InvalidRepeat("ten".to_string()));
        assert_eq!(err.to_string(), "Invalid repeat time for benchmark");
        assert!(resolve_repeat(None, Some("-1")).is_err());
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(log_level(0), LevelFilter::Warn);
        assert_eq!(log_level(2), LevelFilter::Debug);
        assert_eq!(log_level(9), LevelFilter::Trace);
    }
}
