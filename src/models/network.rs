//! Network value type and its read-only view.

use super::ipv4::{
    broadcast_addr, first_usable, last_usable, network_addr, subnet_mask, total_hosts,
    usable_hosts,
};
use super::prefix::PrefixLength;
use crate::codec::to_binary;
use crate::error::{CalcError, Result};
use crate::processing::SubnetIter;
use crate::validate::split_cidr;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::cell::OnceCell;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// An address plus prefix length.
///
/// The address may have host bits set; derived values are computed on demand.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Network {
    /// The address as given, host bits not cleared.
    pub addr: Ipv4Addr,
    /// Number of network bits.
    pub prefix: PrefixLength,
}

/// Subnets share the representation of their parent network.
pub type Subnet = Network;

impl Network {
    pub fn new(addr: Ipv4Addr, prefix: PrefixLength) -> Network {
        Network { addr, prefix }
    }

    /// Parse `a.b.c.d[/p]`, using `default_prefix` when no prefix is given.
    pub fn parse_with_default(text: &str, default_prefix: PrefixLength) -> Result<Network> {
        let (addr, prefix) = split_cidr(text)?;
        Ok(Network::new(addr, prefix.unwrap_or(default_prefix)))
    }

    /// Same prefix, address replaced by the network address.
    pub fn normalized(&self) -> Network {
        Network::new(self.network(), self.prefix)
    }

    pub fn network(&self) -> Ipv4Addr {
        network_addr(self.addr, self.prefix)
    }

    pub fn broadcast(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.prefix)
    }

    pub fn mask(&self) -> Ipv4Addr {
        subnet_mask(self.prefix)
    }

    pub fn first_usable(&self) -> Ipv4Addr {
        first_usable(self.addr, self.prefix)
    }

    pub fn last_usable(&self) -> Ipv4Addr {
        last_usable(self.addr, self.prefix)
    }

    pub fn total_hosts(&self) -> u64 {
        total_hosts(self.prefix)
    }

    pub fn usable_hosts(&self) -> u64 {
        usable_hosts(self.prefix)
    }

    /// Split this network into subnets of `target` prefix length.
    pub fn subnets(&self, target: PrefixLength) -> Result<SubnetIter> {
        SubnetIter::new(*self, target)
    }

    /// Build the read-only view used by callers.
    pub fn view(&self) -> NetworkView {
        NetworkView::new(*self)
    }
}

impl FromStr for Network {
    type Err = CalcError;

    /// Parse `a.b.c.d/p`. The prefix is mandatory here.
    fn from_str(s: &str) -> Result<Network> {
        match split_cidr(s)? {
            (addr, Some(prefix)) => Ok(Network::new(addr, prefix)),
            (_, None) => Err(CalcError::IpFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Network::from_str(&s).map_err(de::Error::custom)
    }
}

/// First and last usable address of a network.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Serialize)]
pub struct HostRange {
    pub first: Ipv4Addr,
    pub last: Ipv4Addr,
}

impl fmt::Display for HostRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.first == self.last {
            write!(f, "{}", self.first)
        } else {
            write!(f, "{} - {}", self.first, self.last)
        }
    }
}

/// Read-only facade over a [`Network`].
///
/// First and last usable addresses are computed once and cached.
#[derive(Debug, Clone)]
pub struct NetworkView {
    network: Network,
    first: OnceCell<Ipv4Addr>,
    last: OnceCell<Ipv4Addr>,
}

impl NetworkView {
    pub fn new(network: Network) -> NetworkView {
        NetworkView {
            network,
            first: OnceCell::new(),
            last: OnceCell::new(),
        }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// The address as entered.
    pub fn address(&self) -> Ipv4Addr {
        self.network.addr
    }

    pub fn address_bin(&self) -> String {
        to_binary(self.network.addr)
    }

    pub fn prefix(&self) -> PrefixLength {
        self.network.prefix
    }

    /// `address/prefix`, e.g. `192.168.1.10/24`.
    pub fn cidr_notation(&self) -> String {
        self.network.to_string()
    }

    pub fn network_address(&self) -> Ipv4Addr {
        self.network.network()
    }

    pub fn network_address_bin(&self) -> String {
        to_binary(self.network_address())
    }

    pub fn broadcast_address(&self) -> Ipv4Addr {
        self.network.broadcast()
    }

    pub fn broadcast_address_bin(&self) -> String {
        to_binary(self.broadcast_address())
    }

    pub fn netmask(&self) -> Ipv4Addr {
        self.network.mask()
    }

    pub fn netmask_bin(&self) -> String {
        to_binary(self.netmask())
    }

    pub fn first_usable(&self) -> Ipv4Addr {
        *self.first.get_or_init(|| self.network.first_usable())
    }

    pub fn last_usable(&self) -> Ipv4Addr {
        *self.last.get_or_init(|| self.network.last_usable())
    }

    pub fn host_range(&self) -> HostRange {
        HostRange {
            first: self.first_usable(),
            last: self.last_usable(),
        }
    }

    pub fn total_hosts(&self) -> u64 {
        self.network.total_hosts()
    }

    pub fn usable_hosts(&self) -> u64 {
        self.network.usable_hosts()
    }
}

impl From<Network> for NetworkView {
    fn from(network: Network) -> NetworkView {
        NetworkView::new(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(len: u8) -> PrefixLength {
        PrefixLength::new(len).unwrap()
    }

    #[test]
    fn test_network_from_str() {
        let net: Network = "192.168.1.10/24".parse().unwrap();
        assert_eq!(net.addr, Ipv4Addr::new(192, 168, 1, 10));
        assert_eq!(net.prefix, p(24));
        assert_eq!(net.to_string(), "192.168.1.10/24");

        assert!("192.168.1.10".parse::<Network>().is_err());
        assert!("192.168.1.10/33".parse::<Network>().is_err());
    }

    #[test]
    fn test_parse_with_default() {
        let net = Network::parse_with_default("10.1.2.3", p(24)).unwrap();
        assert_eq!(net.to_string(), "10.1.2.3/24");
        let net = Network::parse_with_default("10.1.2.3/8", p(24)).unwrap();
        assert_eq!(net.to_string(), "10.1.2.3/8");
    }

    #[test]
    fn test_normalized() {
        let net: Network = "10.0.0.5/31".parse().unwrap();
        assert_eq!(net.normalized().to_string(), "10.0.0.4/31");
        assert_eq!(net.normalized().normalized(), net.normalized());
    }

    #[test]
    fn test_view_slash_24() {
        let view: NetworkView = "192.168.1.10/24".parse::<Network>().unwrap().view();
        assert_eq!(view.network_address(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(view.broadcast_address(), Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(view.first_usable(), Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(view.last_usable(), Ipv4Addr::new(192, 168, 1, 254));
        assert_eq!(view.netmask(), Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(view.netmask_bin(), "11111111.11111111.11111111.00000000");
        assert_eq!(
            view.network_address_bin(),
            "11000000.10101000.00000001.00000000"
        );
        assert_eq!(view.address_bin(), "11000000.10101000.00000001.00001010");
        assert_eq!(view.total_hosts(), 256);
        assert_eq!(view.usable_hosts(), 254);
        assert_eq!(view.cidr_notation(), "192.168.1.10/24");
        assert_eq!(
            view.host_range().to_string(),
            "192.168.1.1 - 192.168.1.254"
        );
    }

    #[test]
    fn test_view_slash_32_range() {
        let view = "172.16.5.9/32".parse::<Network>().unwrap().view();
        let range = view.host_range();
        assert_eq!(range.first, range.last);
        assert_eq!(range.to_string(), "172.16.5.9");
        // cached value is stable across calls
        assert_eq!(view.first_usable(), view.first_usable());
    }

    #[test]
    fn test_network_serde() {
        let net: Network = serde_json::from_str("\"10.0.0.0/8\"").unwrap();
        assert_eq!(net.prefix, p(8));
        assert_eq!(serde_json::to_string(&net).unwrap(), "\"10.0.0.0/8\"");
        assert!(serde_json::from_str::<Network>("\"10.0.0.0\"").is_err());
    }
}
