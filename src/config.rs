//! Runtime configuration.
//!
//! Values come from the process environment (after `.env` has been loaded by
//! `main`). Display settings live in [`DisplayConfig`] and are only read by
//! the output layer.

use crate::models::PrefixLength;
use crate::validate::validate_prefix;
use clap::ValueEnum;
use colored::Color;
use std::error::Error;
use std::str::FromStr;

pub const ENV_DEFAULT_PREFIX: &str = "SUBNET_CALC_DEFAULT_PREFIX";
pub const ENV_MAX_SUBNET_BITS: &str = "SUBNET_CALC_MAX_SUBNET_BITS";
pub const ENV_COLOR: &str = "SUBNET_CALC_COLOR";
pub const ENV_FORMAT: &str = "SUBNET_CALC_FORMAT";

/// Prefix used when the address input has no `/prefix`.
pub const DEFAULT_PREFIX: u8 = 24;
/// Largest accepted `target - base` difference (65536 subnets).
pub const DEFAULT_MAX_SUBNET_BITS: u8 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<ColorMode, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" | "on" => Ok(ColorMode::Always),
            "never" | "off" => Ok(ColorMode::Never),
            other => Err(format!("Invalid color mode: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<OutputFormat, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Invalid output format: {other}")),
        }
    }
}

/// Colors and column widths for terminal output.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub label_color: Color,
    pub value_color: Color,
    pub error_color: Color,
    pub table_color: Color,
    pub label_width: usize,
    pub banner_width: usize,
    /// Widths of the subnet, usable range and broadcast columns.
    pub column_widths: [usize; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            label_color: Color::White,
            value_color: Color::Cyan,
            error_color: Color::Red,
            table_color: Color::Cyan,
            label_width: 25,
            banner_width: 50,
            column_widths: [20, 40, 20],
        }
    }
}

impl DisplayConfig {
    /// Full width of a subnet table row including separators.
    pub fn table_width(&self) -> usize {
        self.column_widths.iter().sum::<usize>() + self.column_widths.len() - 1
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub default_prefix: PrefixLength,
    pub max_subnet_bits: u8,
    pub color: ColorMode,
    pub format: OutputFormat,
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_prefix: PrefixLength::new(DEFAULT_PREFIX).expect("24 is a valid prefix"),
            max_subnet_bits: DEFAULT_MAX_SUBNET_BITS,
            color: ColorMode::Auto,
            format: OutputFormat::Table,
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    /// Read configuration from environment variables.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup, unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup(ENV_DEFAULT_PREFIX) {
            config.default_prefix = validate_prefix(value.trim())?;
        }
        if let Some(value) = lookup(ENV_MAX_SUBNET_BITS) {
            let bits: u8 = value
                .trim()
                .parse()
                .map_err(|e| format!("Invalid {ENV_MAX_SUBNET_BITS}={value}: {e}"))?;
            if bits == 0 || bits > 31 {
                return Err(format!("{ENV_MAX_SUBNET_BITS} must be between 1 and 31: {bits}").into());
            }
            config.max_subnet_bits = bits;
        }
        if let Some(value) = lookup(ENV_COLOR) {
            config.color = value.parse()?;
        }
        if let Some(value) = lookup(ENV_FORMAT) {
            config.format = value.parse()?;
        }

        log::debug!("Config: {config:?}");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.default_prefix.get(), 24);
        assert_eq!(config.max_subnet_bits, 16);
        assert_eq!(config.color, ColorMode::Auto);
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.display.table_width(), 82);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_DEFAULT_PREFIX, "16"),
            (ENV_MAX_SUBNET_BITS, "8"),
            (ENV_COLOR, "never"),
            (ENV_FORMAT, "JSON"),
        ]))
        .unwrap();
        assert_eq!(config.default_prefix.get(), 16);
        assert_eq!(config.max_subnet_bits, 8);
        assert_eq!(config.color, ColorMode::Never);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_values() {
        assert!(Config::from_lookup(lookup_from(&[(ENV_DEFAULT_PREFIX, "0")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[(ENV_MAX_SUBNET_BITS, "32")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[(ENV_MAX_SUBNET_BITS, "x")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[(ENV_COLOR, "blue")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[(ENV_FORMAT, "xml")])).is_err());
    }
}
