// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Router configuration model.
//! A `RouterConfig` is the fully resolved configuration of a single router: every
//! reference to the topology has been looked up and validated, so that rendering it
//! to device syntax can no longer fail because of the model.

pub mod interfaces;
pub mod routing;

use crate::internal::interfaces::InterfaceConfig;
use crate::internal::routing::bgp::BgpConfig;
use crate::internal::routing::communitylist::CommunityListTable;
use crate::internal::routing::ospf::Ospf;
use crate::internal::routing::prefixlist::PrefixListTable;
use crate::internal::routing::routemap::RouteMapTable;
use crate::internal::routing::tracker::FailoverConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct RouterConfig {
    pub hostname: String,
    pub interfaces: Vec<InterfaceConfig>, /* physical first, then loopbacks */
    pub community_lists: CommunityListTable,
    pub prefix_lists: PrefixListTable,
    pub route_maps: RouteMapTable,
    pub bgp: Option<BgpConfig>,
    pub ospf: Option<Ospf>,
    pub failover: Option<FailoverConfig>,
}

impl RouterConfig {
    #[must_use]
    pub fn new(hostname: &str) -> Self {
        Self {
            hostname: hostname.to_owned(),
            interfaces: vec![],
            community_lists: CommunityListTable::new(),
            prefix_lists: PrefixListTable::new(),
            route_maps: RouteMapTable::new(),
            bgp: None,
            ospf: None,
            failover: None,
        }
    }
    pub fn add_interface(&mut self, iface: InterfaceConfig) {
        self.interfaces.push(iface);
    }
}
