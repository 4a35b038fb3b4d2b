//! # Command Line Handling
//!
//! Flags shared by every demo binary, plus logging setup.

use crate::config::DemoSettings;
use crate::{ScaffoldError, ScaffoldResult};
use clap::Args;
use std::path::PathBuf;

/// Log level used when none is given.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Flags accepted by every demo.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// JSON settings file; absent fields keep their defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Frame rate cap (0 disables the cap)
    #[arg(long)]
    pub fps: Option<u32>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl Default for CommonArgs {
    fn default() -> Self {
        Self {
            config: None,
            width: None,
            height: None,
            fps: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl CommonArgs {
    /// Builds the demo settings: defaults, then the config file, then flags.
    pub fn resolve<S: DemoSettings>(&self) -> ScaffoldResult<S> {
        let mut settings = match &self.config {
            Some(path) => S::load_from(path)?,
            None => S::default(),
        };

        let window = settings.window_mut();
        if let Some(width) = self.width {
            window.width = width;
        }
        if let Some(height) = self.height {
            window.height = height;
        }
        if let Some(fps) = self.fps {
            window.target_fps = fps;
        }

        settings.validate()?;
        Ok(settings)
    }
}

/// Initializes the logging system based on the specified log level.
///
/// `RUST_LOG` takes precedence over `log_level` when set.
pub fn initialize_logging(log_level: &str) -> ScaffoldResult<()> {
    let level: log::LevelFilter = log_level
        .parse()
        .map_err(|_| ScaffoldError::InvalidConfig(format!("unknown log level '{}'", log_level)))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .format_target(false)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BallConfig, CubeConfig};

    #[test]
    fn test_resolve_without_flags_is_default() {
        let args = CommonArgs::default();
        let settings: CubeConfig = args.resolve().unwrap();
        assert_eq!(settings, CubeConfig::default());
    }

    #[test]
    fn test_flags_override_window() {
        let args = CommonArgs {
            width: Some(640),
            fps: Some(30),
            ..Default::default()
        };
        let settings: BallConfig = args.resolve().unwrap();
        assert_eq!(settings.window.width, 640);
        assert_eq!(settings.window.height, 400);
        assert_eq!(settings.window.target_fps, 30);
    }

    #[test]
    fn test_zero_height_flag_rejected() {
        let args = CommonArgs {
            height: Some(0),
            ..Default::default()
        };
        assert!(args.resolve::<CubeConfig>().is_err());
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let args = CommonArgs {
            config: Some(PathBuf::from("/nonexistent/scaffold/settings.json")),
            ..Default::default()
        };
        assert!(matches!(
            args.resolve::<BallConfig>(),
            Err(ScaffoldError::Io(_))
        ));
    }

    #[test]
    fn test_default_matches_parsed_defaults() {
        #[derive(clap::Parser)]
        struct Wrapper {
            #[command(flatten)]
            common: CommonArgs,
        }

        let parsed = <Wrapper as clap::Parser>::parse_from(["demo"]).common;
        let defaulted = CommonArgs::default();
        assert_eq!(parsed.log_level, defaulted.log_level);
        assert_eq!(defaulted.log_level, "info");
        assert!(defaulted.log_level.parse::<log::LevelFilter>().is_ok());
        assert_eq!(parsed.config, defaulted.config);
        assert_eq!(parsed.width, defaulted.width);
        assert_eq!(parsed.fps, defaulted.fps);
    }

    #[test]
    fn test_oversized_width_flag_rejected() {
        let args = CommonArgs {
            width: Some(3_000_000_000),
            ..Default::default()
        };
        assert!(matches!(
            args.resolve::<BallConfig>(),
            Err(ScaffoldError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        assert!(matches!(
            initialize_logging("loud"),
            Err(ScaffoldError::InvalidConfig(_))
        ));
    }
}
