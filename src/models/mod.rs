//! Domain models for IPv4 subnet calculations.
//!
//! This module contains the core data structures used throughout the application:
//! - [`PrefixLength`] - validated prefix length (1-32)
//! - [`Network`] - address with prefix, host bits allowed
//! - [`NetworkView`] - read-only view of all derived values
//! - prefix arithmetic functions in `ipv4`

mod ipv4;
mod network;
mod prefix;

// Re-export public types
pub use ipv4::{
    broadcast_addr, first_usable, get_cidr_mask, last_usable, network_addr, replace_host_bits,
    subnet_mask, total_hosts, usable_hosts,
};
pub use network::{HostRange, Network, NetworkView, Subnet};
pub use prefix::{PrefixLength, MAX_LENGTH, MIN_LENGTH};
