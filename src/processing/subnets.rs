//! Lazy enumeration of the subnets of a network.

use crate::error::{CalcError, Result};
use crate::models::{Network, PrefixLength, Subnet};
use std::net::Ipv4Addr;

/// Iterator over all subnets of `base` with a longer `target` prefix.
///
/// Yields `2^(target - base.prefix)` subnets in ascending address order. The
/// host bits of `base` are ignored, so enumeration always starts at the
/// network address. Each instance owns its own cursor; call
/// [`Network::subnets`] again to start over.
#[derive(Debug, Clone)]
pub struct SubnetIter {
    network_bits: u32,
    target: PrefixLength,
    delta: u8,
    next: u64,
    count: u64,
}

impl SubnetIter {
    /// Fails with [`CalcError::SubnetRange`] unless `target` is longer than the base prefix.
    pub fn new(base: Network, target: PrefixLength) -> Result<SubnetIter> {
        if target <= base.prefix {
            return Err(CalcError::SubnetRange(format!(
                "/{} into /{}",
                base.prefix, target
            )));
        }
        let delta = target.get() - base.prefix.get();
        let count = 1u64 << delta;
        log::debug!("SubnetIter::new({base} -> /{target}) count={count}");
        Ok(SubnetIter {
            network_bits: u32::from(base.network()),
            target,
            delta,
            next: 0,
            count,
        })
    }

    /// Number of bits inserted between the base prefix and the target prefix.
    pub fn delta(&self) -> u8 {
        self.delta
    }

    /// Prefix length of every yielded subnet.
    pub fn target(&self) -> PrefixLength {
        self.target
    }

    fn subnet_at(&self, index: u64) -> Subnet {
        // index < 2^delta, shifted into the bits just after the base prefix
        let subnet_id = (index as u32) << self.target.host_bits();
        Network::new(Ipv4Addr::from(self.network_bits | subnet_id), self.target)
    }
}

impl Iterator for SubnetIter {
    type Item = Subnet;

    fn next(&mut self) -> Option<Subnet> {
        if self.next >= self.count {
            return None;
        }
        let subnet = self.subnet_at(self.next);
        self.next += 1;
        log::trace!("subnet {} = {subnet}", self.next);
        Some(subnet)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.count - self.next).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Subnet> {
        self.next = self.next.saturating_add(n as u64).min(self.count);
        self.next()
    }
}

impl ExactSizeIterator for SubnetIter {}
