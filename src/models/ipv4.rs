//! IPv4 prefix arithmetic.
//!
//! Every derived address holds the first `prefix` bits of the input fixed and
//! replaces the remaining host bits, see [`replace_host_bits`].

use super::prefix::{PrefixLength, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Convert a prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::{get_cidr_mask, PrefixLength};
/// assert_eq!(get_cidr_mask(PrefixLength::new(24).unwrap()), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(prefix: PrefixLength) -> u32 {
    let right_len = MAX_LENGTH - prefix.get();
    let all_bits = u32::MAX as u64;
    let mask = (all_bits >> right_len) << right_len;
    mask as u32
}

/// Keep the network bits of `addr` and take the host bits from `host_bits`.
pub fn replace_host_bits(addr: Ipv4Addr, prefix: PrefixLength, host_bits: u32) -> Ipv4Addr {
    let mask = get_cidr_mask(prefix);
    Ipv4Addr::from((u32::from(addr) & mask) | (host_bits & !mask))
}

/// Subnet mask as an address, e.g. `/24` -> `255.255.255.0`.
pub fn subnet_mask(prefix: PrefixLength) -> Ipv4Addr {
    Ipv4Addr::from(get_cidr_mask(prefix))
}

/// Network address: host bits all zero.
pub fn network_addr(addr: Ipv4Addr, prefix: PrefixLength) -> Ipv4Addr {
    replace_host_bits(addr, prefix, 0)
}

/// Broadcast address: host bits all one.
pub fn broadcast_addr(addr: Ipv4Addr, prefix: PrefixLength) -> Ipv4Addr {
    replace_host_bits(addr, prefix, u32::MAX)
}

/// First usable address.
///
/// `/31` is a point-to-point link where both ends are usable, so this is the
/// network address. `/32` has no host bits and returns `addr` unchanged.
pub fn first_usable(addr: Ipv4Addr, prefix: PrefixLength) -> Ipv4Addr {
    match prefix.get() {
        32 => addr,
        31 => network_addr(addr, prefix),
        _ => replace_host_bits(addr, prefix, 1),
    }
}

/// Last usable address. `/31` gives the broadcast address, `/32` returns `addr`.
pub fn last_usable(addr: Ipv4Addr, prefix: PrefixLength) -> Ipv4Addr {
    match prefix.get() {
        32 => addr,
        31 => broadcast_addr(addr, prefix),
        _ => replace_host_bits(addr, prefix, !1),
    }
}

/// Total number of addresses covered by the prefix, `2^(32 - prefix)`.
pub fn total_hosts(prefix: PrefixLength) -> u64 {
    1u64 << prefix.host_bits()
}

/// Addresses left once network and broadcast are reserved.
///
/// `/31` and `/32` reserve nothing.
pub fn usable_hosts(prefix: PrefixLength) -> u64 {
    match prefix.get() {
        31 | 32 => total_hosts(prefix),
        _ => total_hosts(prefix) - 2,
    }
}
