// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Allocator of concrete networks for abstract prefixes.
//! Every unseen key gets the next free /24 block, starting at 128.0.0.0.
//! A key keeps its network for the lifetime of the allocator, so a single
//! allocator must be shared by all the routers generated in one run.

use config::{AnnouncedPrefix, ConfigError, PrefixKey};
use ipnet::{IpNet, Ipv4Net};
use ordermap::OrderMap;
use std::net::Ipv4Addr;
use tracing::{debug, error};

const POOL_START: Ipv4Addr = Ipv4Addr::new(128, 0, 0, 0);
const BLOCK_LEN: u8 = 24;
const BLOCK_SIZE: u32 = 1 << (32 - BLOCK_LEN);

#[derive(Clone, Debug)]
pub struct PrefixAllocator {
    next: Option<u32>, /* None once the pool is exhausted */
    allocated: OrderMap<PrefixKey, IpNet>,
}

impl Default for PrefixAllocator {
    fn default() -> Self {
        Self::starting_at(POOL_START)
    }
}

impl PrefixAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an allocator whose first block starts at `start`. The address is
    /// aligned down to a block boundary.
    #[must_use]
    pub fn starting_at(start: Ipv4Addr) -> Self {
        Self {
            next: Some(u32::from(start) & !(BLOCK_SIZE - 1)),
            allocated: OrderMap::new(),
        }
    }

    /// Resolve an announced prefix to a concrete network. Concrete networks are
    /// returned as they are and consume nothing from the pool.
    pub fn lookup(&mut self, prefix: &AnnouncedPrefix) -> Result<IpNet, ConfigError> {
        match prefix {
            AnnouncedPrefix::Network(network) => Ok(*network),
            AnnouncedPrefix::Key(key) => self.lookup_key(key),
        }
    }

    fn lookup_key(&mut self, key: &PrefixKey) -> Result<IpNet, ConfigError> {
        if let Some(network) = self.allocated.get(key) {
            return Ok(*network);
        }
        let Some(base) = self.next else {
            let err = ConfigError::AddressPoolExhausted(self.allocated.len());
            error!("Can't allocate a network for prefix {key}: {err}");
            return Err(err);
        };
        let network = IpNet::V4(Ipv4Net::new_assert(Ipv4Addr::from(base), BLOCK_LEN));
        self.next = base.checked_add(BLOCK_SIZE);
        self.allocated.insert(key.clone(), network);
        debug!("Allocated {network} for prefix {key}");
        Ok(network)
    }

    /// The network allocated for a key, if any
    #[must_use]
    pub fn get(&self, key: &PrefixKey) -> Option<&IpNet> {
        self.allocated.get(key)
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.allocated.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.allocated.is_empty()
    }
    /// Allocations, in the order they were made
    pub fn iter(&self) -> impl Iterator<Item = (&PrefixKey, &IpNet)> {
        self.allocated.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn net(s: &str) -> IpNet {
        s.parse().unwrap()
    }

    #[test]
    fn test_allocation_sequence() {
        let mut allocator = PrefixAllocator::new();
        let p1 = allocator.lookup(&AnnouncedPrefix::key("P1")).unwrap();
        let p2 = allocator.lookup(&AnnouncedPrefix::key("P2")).unwrap();
        assert_eq!(p1, net("128.0.0.0/24"));
        assert_eq!(p2, net("128.0.1.0/24"));
        assert_eq!(allocator.len(), 2);
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let mut allocator = PrefixAllocator::new();
        let first = allocator.lookup(&AnnouncedPrefix::key("P1")).unwrap();
        let again = allocator.lookup(&AnnouncedPrefix::key("P1")).unwrap();
        assert_eq!(first, again);
        assert_eq!(allocator.len(), 1);
        assert_eq!(allocator.get(&PrefixKey::new("P1")), Some(&first));
    }

    #[test]
    fn test_concrete_network_passthrough() {
        let mut allocator = PrefixAllocator::new();
        let concrete = net("10.10.0.0/16");
        let got = allocator.lookup(&AnnouncedPrefix::Network(concrete)).unwrap();
        assert_eq!(got, concrete);
        assert!(allocator.is_empty());

        /* the cursor did not move */
        let p1 = allocator.lookup(&AnnouncedPrefix::key("P1")).unwrap();
        assert_eq!(p1, net("128.0.0.0/24"));
    }

    #[test]
    fn test_iter_in_allocation_order() {
        let mut allocator = PrefixAllocator::new();
        for key in ["Z", "A", "M"] {
            allocator.lookup(&AnnouncedPrefix::key(key)).unwrap();
        }
        let keys: Vec<&str> = allocator.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Z", "A", "M"]);
    }

    #[test]
    fn test_pool_exhaustion() {
        let mut allocator = PrefixAllocator::starting_at(Ipv4Addr::new(255, 255, 254, 17));
        let a = allocator.lookup(&AnnouncedPrefix::key("A")).unwrap();
        let b = allocator.lookup(&AnnouncedPrefix::key("B")).unwrap();
        assert_eq!(a, net("255.255.254.0/24"));
        assert_eq!(b, net("255.255.255.0/24"));
        let res = allocator.lookup(&AnnouncedPrefix::key("C"));
        assert_eq!(res, Err(ConfigError::AddressPoolExhausted(2)));

        /* known keys still resolve */
        assert_eq!(allocator.lookup(&AnnouncedPrefix::key("A")).unwrap(), a);
    }
}
