// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Policy model: BGP announcements and the resolved BGP configuration of a router

use ipnet::IpNet;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::net::IpAddr;
use std::str::FromStr;

use crate::address::AnnouncedPrefix;

/// What a BGP announcement refers to. Parsed from a string: a network
/// is an explicitly attached network, anything else is a name that has to be
/// resolved against the router's loopbacks or adjacent networks.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AnnouncementSource {
    Network(IpNet),
    Name(String),
}

/// A network announced by a router, as stored in the policy model
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BgpAnnouncement {
    pub source: AnnouncementSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_map: Option<String>,
}

/// An announcement that an external peer requests to advertise
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct AnnouncementRequest {
    pub prefix: AnnouncedPrefix,
    #[serde(default)]
    pub as_path: Vec<u32>,
}

/// A resolved `network` statement
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BgpNetwork {
    pub network: IpNet,
    pub route_map: Option<String>,
}

/// A resolved BGP neighbor
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BgpNeighbor {
    pub address: IpAddr,
    pub remote_as: u32,
    pub description: Option<String>,
    pub route_map_in: Option<String>,
    pub route_map_out: Option<String>,
}

/// The BGP configuration of a router, with every reference resolved
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BgpConfig {
    pub asn: u32,
    pub networks: Vec<BgpNetwork>,
    pub neighbors: Vec<BgpNeighbor>,
}

/* Impl basic ops */
impl AnnouncementSource {
    #[must_use]
    pub fn name(name: &str) -> Self {
        AnnouncementSource::Name(name.to_owned())
    }
}
impl From<String> for AnnouncementSource {
    fn from(value: String) -> Self {
        match IpNet::from_str(&value) {
            Ok(net) => AnnouncementSource::Network(net),
            Err(_) => AnnouncementSource::Name(value),
        }
    }
}
impl From<AnnouncementSource> for String {
    fn from(value: AnnouncementSource) -> Self {
        value.to_string()
    }
}
impl Display for AnnouncementSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnnouncementSource::Network(net) => write!(f, "{net}"),
            AnnouncementSource::Name(name) => write!(f, "{name}"),
        }
    }
}

impl BgpAnnouncement {
    #[must_use]
    pub fn new(source: AnnouncementSource) -> Self {
        Self {
            source,
            route_map: None,
        }
    }
    #[must_use]
    pub fn set_route_map(mut self, route_map: &str) -> Self {
        self.route_map = Some(route_map.to_owned());
        self
    }
}

impl AnnouncementRequest {
    #[must_use]
    pub fn new(prefix: AnnouncedPrefix, as_path: Vec<u32>) -> Self {
        Self { prefix, as_path }
    }
}

impl BgpNeighbor {
    #[must_use]
    pub fn new(address: IpAddr, remote_as: u32) -> Self {
        Self {
            address,
            remote_as,
            description: None,
            route_map_in: None,
            route_map_out: None,
        }
    }
    #[must_use]
    pub fn set_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }
    #[must_use]
    pub fn set_route_map_in(mut self, rmap: Option<String>) -> Self {
        self.route_map_in = rmap;
        self
    }
    #[must_use]
    pub fn set_route_map_out(mut self, rmap: Option<String>) -> Self {
        self.route_map_out = rmap;
        self
    }
}

impl BgpConfig {
    #[must_use]
    pub fn new(asn: u32) -> Self {
        Self {
            asn,
            networks: vec![],
            neighbors: vec![],
        }
    }
    pub fn add_network(&mut self, network: IpNet, route_map: Option<String>) {
        self.networks.push(BgpNetwork { network, route_map });
    }
    pub fn add_neighbor(&mut self, neighbor: BgpNeighbor) {
        self.neighbors.push(neighbor);
    }
}
