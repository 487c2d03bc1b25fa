//! Entry point of the calculator core.
//!
//! Turns the two raw user inputs into a [`NetworkView`] and an optional lazy
//! sequence of subnets. Nothing here formats output.

use super::subnets::SubnetIter;
use crate::config::Config;
use crate::error::{CalcError, Result};
use crate::models::{Network, NetworkView};
use crate::validate::validate_prefix;

/// Result of one calculation request.
#[derive(Debug, Clone)]
pub struct Calculation {
    pub view: NetworkView,
    /// `None` when no subnetting was requested.
    pub subnets: Option<SubnetIter>,
}

impl Calculation {
    pub fn network(&self) -> Network {
        self.view.network()
    }
}

/// Validate the inputs and build the calculation.
///
/// # Arguments
/// * `address` - `a.b.c.d` or `a.b.c.d/p`; without a prefix `config.default_prefix` is used
/// * `target_prefix` - prefix to split into, empty for no subnetting
/// * `config` - supplies the default prefix and the subnetting limit
///
/// # Returns
/// * `Err(CalcError::IpFormat)` - malformed address
/// * `Err(CalcError::PrefixRange)` - target prefix not a number in 1-32
/// * `Err(CalcError::SubnetRange)` - target prefix not longer than the network prefix
/// * `Err(CalcError::SubnetLimit)` - more than `2^max_subnet_bits` subnets requested
pub fn calculate(address: &str, target_prefix: &str, config: &Config) -> Result<Calculation> {
    let address = address.trim();
    let target_prefix = target_prefix.trim();
    log::info!("calculate({address}, '{target_prefix}')");

    let network = Network::parse_with_default(address, config.default_prefix)?;
    let view = network.view();

    let subnets = if target_prefix.is_empty() {
        None
    } else {
        let target = validate_prefix(target_prefix)?;
        let iter = SubnetIter::new(network, target)?;
        if iter.delta() > config.max_subnet_bits {
            log::warn!(
                "Refusing to split {network} into /{target}: {} bits > limit {}",
                iter.delta(),
                config.max_subnet_bits
            );
            return Err(CalcError::SubnetLimit {
                requested: iter.delta(),
                max: config.max_subnet_bits,
            });
        }
        Some(iter)
    };

    Ok(Calculation { view, subnets })
}
