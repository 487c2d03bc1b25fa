//! Dotted-decimal <-> dotted-binary address conversion.

use crate::error::{CalcError, Result};
use crate::validate::validate_binary_address;
use itertools::Itertools;
use std::net::Ipv4Addr;

/// Render an address as four zero-padded 8-bit groups joined by dots.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::codec::to_binary;
/// use std::net::Ipv4Addr;
/// assert_eq!(
///     to_binary(Ipv4Addr::new(192, 168, 1, 1)),
///     "11000000.10101000.00000001.00000001"
/// );
/// ```
pub fn to_binary(addr: Ipv4Addr) -> String {
    addr.octets()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .join(".")
}

/// Parse a dotted-binary address back into an [`Ipv4Addr`].
///
/// The shape is validated first, so every group is exactly eight `0`/`1`.
pub fn from_binary(text: &str) -> Result<Ipv4Addr> {
    validate_binary_address(text)?;
    let mut octets = [0u8; 4];
    for (octet, group) in octets.iter_mut().zip(text.split('.')) {
        *octet =
            u8::from_str_radix(group, 2).map_err(|_| CalcError::IpFormat(text.to_string()))?;
    }
    Ok(Ipv4Addr::from(octets))
}
