//! IPv4 subnet calculator.
//!
//! Computes network, broadcast, mask, usable range and host counts for an
//! address/prefix pair, and splits a network into subnets of a longer prefix.
//!
//! ```
//! use ipv4_subnet_calc::{calculate, Config};
//!
//! let calc = calculate("192.168.1.10/24", "26", &Config::default()).unwrap();
//! assert_eq!(calc.view.network_address().to_string(), "192.168.1.0");
//! assert_eq!(calc.subnets.unwrap().count(), 4);
//! ```

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod validate;

pub use config::Config;
pub use error::CalcError;
pub use models::{Network, NetworkView, PrefixLength, Subnet};
pub use processing::{calculate, Calculation, SubnetIter};
