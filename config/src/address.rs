// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Addressing types: abstract prefix keys, announced prefixes and interface addresses.

use ipnet::IpNet;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::net::IpAddr;
use std::str::FromStr;

/// An opaque identifier for a destination prefix whose concrete network is not known yet
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrefixKey(String);

impl PrefixKey {
    #[must_use]
    pub fn new(key: &str) -> Self {
        Self(key.to_owned())
    }
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl Display for PrefixKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A prefix that a boundary router is asked to announce: either still abstract,
/// or already a concrete network. Parsed from a string: anything that reads as a
/// network is concrete (host bits are cleared), anything else is a key.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AnnouncedPrefix {
    Key(PrefixKey),
    Network(IpNet),
}

impl AnnouncedPrefix {
    #[must_use]
    pub fn key(key: &str) -> Self {
        AnnouncedPrefix::Key(PrefixKey::new(key))
    }
}
impl From<String> for AnnouncedPrefix {
    fn from(value: String) -> Self {
        match IpNet::from_str(&value) {
            Ok(net) => AnnouncedPrefix::Network(net.trunc()),
            Err(_) => AnnouncedPrefix::Key(PrefixKey(value)),
        }
    }
}
impl From<&str> for AnnouncedPrefix {
    fn from(value: &str) -> Self {
        AnnouncedPrefix::from(value.to_owned())
    }
}
impl From<IpNet> for AnnouncedPrefix {
    fn from(value: IpNet) -> Self {
        AnnouncedPrefix::Network(value)
    }
}
impl From<AnnouncedPrefix> for String {
    fn from(value: AnnouncedPrefix) -> Self {
        value.to_string()
    }
}
impl Display for AnnouncedPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnnouncedPrefix::Key(key) => write!(f, "{key}"),
            AnnouncedPrefix::Network(net) => write!(f, "{net}"),
        }
    }
}

/// A host address bound to an interface, together with the length of the
/// prefix of the network it belongs to. Unlike a network, it keeps its host bits.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterfaceAddress(IpNet);

impl InterfaceAddress {
    /// Build an interface address. Fails if the mask length exceeds the address size.
    pub fn new(address: IpAddr, mask_len: u8) -> Result<Self, ipnet::PrefixLenError> {
        IpNet::new(address, mask_len).map(Self)
    }
    /// The first usable host address of a network, with the network's mask length
    #[must_use]
    pub fn first_host(network: &IpNet) -> Option<Self> {
        network
            .hosts()
            .next()
            .and_then(|host| IpNet::new(host, network.prefix_len()).ok())
            .map(Self)
    }
    #[must_use]
    pub fn address(&self) -> IpAddr {
        self.0.addr()
    }
    #[must_use]
    pub fn mask_len(&self) -> u8 {
        self.0.prefix_len()
    }
    /// The mask in dotted form, e.g. 255.255.255.0
    #[must_use]
    pub fn netmask(&self) -> IpAddr {
        self.0.netmask()
    }
    /// The network this address belongs to
    #[must_use]
    pub fn network(&self) -> IpNet {
        self.0.trunc()
    }
    #[must_use]
    pub fn is_ipv4(&self) -> bool {
        matches!(self.0, IpNet::V4(_))
    }
}
impl FromStr for InterfaceAddress {
    type Err = ipnet::AddrParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IpNet::from_str(s).map(Self)
    }
}
impl Display for InterfaceAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_announced_prefix_parse() {
        assert_eq!(AnnouncedPrefix::from("P1"), AnnouncedPrefix::key("P1"));
        assert_eq!(
            AnnouncedPrefix::from("10.1.2.3/24"),
            AnnouncedPrefix::Network("10.1.2.0/24".parse().unwrap())
        );
        assert_eq!(
            AnnouncedPrefix::from("10.1.2.0/24").to_string(),
            "10.1.2.0/24"
        );
    }

    #[test]
    fn test_interface_address() {
        let addr: InterfaceAddress = "10.0.0.5/30".parse().unwrap();
        assert_eq!(addr.address().to_string(), "10.0.0.5");
        assert_eq!(addr.mask_len(), 30);
        assert_eq!(addr.netmask().to_string(), "255.255.255.252");
        assert_eq!(addr.network().to_string(), "10.0.0.4/30");
        assert!(addr.is_ipv4());
        assert!("10.0.0.300/24".parse::<InterfaceAddress>().is_err());
    }

    #[test]
    fn test_first_host() {
        let net: IpNet = "128.0.0.0/24".parse().unwrap();
        let addr = InterfaceAddress::first_host(&net).unwrap();
        assert_eq!(addr.to_string(), "128.0.0.1/24");

        let host: IpNet = "7.0.0.1/32".parse().unwrap();
        let addr = InterfaceAddress::first_host(&host).unwrap();
        assert_eq!(addr.to_string(), "7.0.0.1/32");
    }
}
