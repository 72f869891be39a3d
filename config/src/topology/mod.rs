// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! The topology and policy store, as seen by the configuration generator.
//! The generator never depends on how the store is represented: it only relies on
//! the queries and the few mutators of the [`PolicyStore`] trait. [`graph::NetworkGraph`]
//! is an in-memory implementation that can be loaded from a file.

pub mod graph;

use crate::address::InterfaceAddress;
use crate::errors::ConfigResult;
use crate::internal::routing::bgp::{AnnouncementRequest, BgpAnnouncement};
use crate::internal::routing::communitylist::CommunityListTable;
use crate::internal::routing::prefixlist::{PrefixList, PrefixListTable};
use crate::internal::routing::routemap::{RouteMap, RouteMapTable};
use crate::internal::routing::tracker::TrackerTable;

pub trait PolicyStore {
    /* node roles */
    fn has_node(&self, node: &str) -> bool;
    fn is_router(&self, node: &str) -> bool;
    fn is_network(&self, node: &str) -> bool;
    /// Tell if a router is a boundary router peering with the outside
    fn is_peer(&self, node: &str) -> bool;
    /// Tell if a router is an interior router, running OSPF
    fn is_local_router(&self, node: &str) -> bool;
    /// All routers, in store order
    fn routers(&self) -> Vec<String>;

    /* topology */
    /// Adjacent nodes, in store order
    fn neighbors(&self, node: &str) -> Vec<String>;
    fn edge_iface(&self, node: &str, neighbor: &str) -> Option<String>;
    fn edge_iface_description(&self, node: &str, neighbor: &str) -> Option<String>;
    fn iface_addr(&self, node: &str, iface: &str) -> Option<InterfaceAddress>;
    /// Loopback interface names, sorted
    fn loopback_interfaces(&self, node: &str) -> Vec<String>;
    fn loopback_addr(&self, node: &str, loopback: &str) -> Option<InterfaceAddress>;
    fn loopback_description(&self, node: &str, loopback: &str) -> Option<String>;

    /* bgp */
    fn bgp_asnum(&self, node: &str) -> Option<u32>;
    /// BGP neighbors, sorted by name
    fn bgp_neighbors(&self, node: &str) -> Vec<String>;
    fn bgp_neighbor_description(&self, node: &str, neighbor: &str) -> Option<String>;
    fn bgp_import_route_map(&self, node: &str, neighbor: &str) -> Option<String>;
    fn bgp_export_route_map(&self, node: &str, neighbor: &str) -> Option<String>;
    fn bgp_announcements(&self, node: &str) -> Vec<BgpAnnouncement>;
    /// Announcements requested by an external peer
    fn bgp_advertise(&self, node: &str) -> Vec<AnnouncementRequest>;

    /* policy objects */
    fn community_lists(&self, node: &str) -> Option<&CommunityListTable>;
    fn prefix_lists(&self, node: &str) -> Option<&PrefixListTable>;
    fn route_maps(&self, node: &str) -> Option<&RouteMapTable>;
    fn trackers(&self, node: &str) -> Option<&TrackerTable>;

    /* mutators */
    fn set_loopback_addr(&mut self, node: &str, loopback: &str, addr: InterfaceAddress)
    -> ConfigResult;
    fn set_loopback_description(
        &mut self,
        node: &str,
        loopback: &str,
        description: &str,
    ) -> ConfigResult;
    fn add_prefix_list(&mut self, node: &str, plist: PrefixList) -> ConfigResult;
    fn add_route_map(&mut self, node: &str, rmap: RouteMap) -> ConfigResult;
    fn add_bgp_announcement(&mut self, node: &str, announcement: BgpAnnouncement)
    -> ConfigResult;
    fn add_bgp_export_route_map(&mut self, node: &str, neighbor: &str, rmap: &str)
    -> ConfigResult;
}
