//! Logging setup.
//!
//! `log4rs.yml` in the working directory wins when present. Otherwise logs go
//! to stderr at the level named by `SUBNET_CALC_LOG` (default `warn`), so
//! stdout only carries results.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

pub const LOG_CONFIG_FILE: &str = "log4rs.yml";
pub const ENV_LOG_LEVEL: &str = "SUBNET_CALC_LOG";

/// Parse a level name, unknown names fall back to `warn`.
pub fn parse_level(level: Option<&str>) -> LevelFilter {
    level
        .and_then(|l| l.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}",
        )))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

/// Initialise log4rs, from file if available.
pub fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG_FILE).exists() {
        log4rs::init_file(LOG_CONFIG_FILE, Default::default())?;
        log::debug!("Logging configured from {LOG_CONFIG_FILE}");
    } else {
        let level = parse_level(std::env::var(ENV_LOG_LEVEL).ok().as_deref());
        log4rs::init_config(stderr_config(level)?)?;
        log::debug!("Logging to stderr at level {level}");
    }
    Ok(())
}
