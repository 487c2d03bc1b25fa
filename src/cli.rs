//! Command line handling.
//!
//! Without positional arguments both values are prompted for on stdin.

use crate::config::{ColorMode, Config, OutputFormat};
use clap::Parser;
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(name = "ipv4-subnet-calc")]
#[command(about = "IPv4 subnet calculator: network details and subnetting.")]
pub struct CliArgs {
    /// Address, optionally with /PREFIX (default prefix /24)
    pub address: Option<String>,

    /// Prefix to split the network into, omit for no subnetting
    pub target_prefix: Option<String>,

    /// Output format, overrides SUBNET_CALC_FORMAT
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Always color the output
    #[arg(long, conflicts_with = "no_color")]
    pub color: bool,

    /// Never color the output
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Color mode requested on the command line, if any.
    pub fn color_mode(&self) -> Option<ColorMode> {
        match (self.color, self.no_color) {
            (true, _) => Some(ColorMode::Always),
            (_, true) => Some(ColorMode::Never),
            _ => None,
        }
    }

    /// Command line flags take precedence over environment settings.
    pub fn apply(&self, config: &mut Config) {
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(color) = self.color_mode() {
            config.color = color;
        }
    }
}

/// Print `message` and read one line from `input`, without the line ending.
pub fn prompt<R: BufRead, W: Write>(
    message: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<String> {
    write!(output, "{message}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

/// Fill in missing inputs interactively.
///
/// With no address both values are asked for. A given address without a
/// target means no subnetting.
pub fn resolve_inputs<R: BufRead, W: Write>(
    args: &CliArgs,
    input: &mut R,
    output: &mut W,
) -> io::Result<(String, String)> {
    match &args.address {
        Some(address) => Ok((
            address.clone(),
            args.target_prefix.clone().unwrap_or_default(),
        )),
        None => {
            let address = prompt(
                "Enter the IP address (e.g. 192.168.1.3/24, /24 by default): ",
                input,
                output,
            )?;
            let target = prompt(
                "Enter the prefix for subnetting (optional, leave empty to skip): ",
                input,
                output,
            )?;
            Ok((address, target))
        }
    }
}
