// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! In-memory topology and policy store

use ordermap::OrderMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, error};

use crate::address::InterfaceAddress;
use crate::errors::{ConfigError, ConfigResult};
use crate::internal::routing::bgp::{AnnouncementRequest, BgpAnnouncement};
use crate::internal::routing::communitylist::{CommunityList, CommunityListTable};
use crate::internal::routing::prefixlist::{PrefixList, PrefixListTable};
use crate::internal::routing::routemap::{RouteMap, RouteMapTable};
use crate::internal::routing::tracker::{Tracker, TrackerTable};
use crate::topology::PolicyStore;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    #[default]
    Router,
    Network,
}

/// The local end of a link towards a neighbor
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub iface: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Loopback {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addr: Option<InterfaceAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Session attributes of a BGP neighbor
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct BgpPeer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_route_map: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_route_map: Option<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BgpNode {
    pub neighbors: BTreeMap<String, BgpPeer>,
    pub announcements: Vec<BgpAnnouncement>,
    pub advertise: Vec<AnnouncementRequest>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Node {
    pub kind: NodeKind,
    pub peer: bool,
    pub local: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asnum: Option<u32>,
    pub links: OrderMap<String, Link>,
    pub interfaces: BTreeMap<String, InterfaceAddress>,
    pub loopbacks: BTreeMap<String, Loopback>,
    pub bgp: BgpNode,
    pub community_lists: CommunityListTable,
    pub prefix_lists: PrefixListTable,
    pub route_maps: RouteMapTable,
    pub trackers: TrackerTable,
}

/// A network of routers and networks, with the policy of every router
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkGraph {
    nodes: OrderMap<String, Node>,
}

impl Node {
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }
    pub fn set_asnum(&mut self, asnum: u32) -> &mut Self {
        self.asnum = Some(asnum);
        self
    }
    pub fn set_peer(&mut self, peer: bool) -> &mut Self {
        self.peer = peer;
        self
    }
    pub fn set_local(&mut self, local: bool) -> &mut Self {
        self.local = local;
        self
    }
    /// Add a link towards `neighbor` through interface `iface`
    pub fn add_link(
        &mut self,
        neighbor: &str,
        iface: &str,
        addr: Option<InterfaceAddress>,
        description: Option<&str>,
    ) -> &mut Self {
        let link = Link {
            iface: iface.to_owned(),
            description: description.map(str::to_owned),
        };
        self.links.insert(neighbor.to_owned(), link);
        if let Some(addr) = addr {
            self.interfaces.insert(iface.to_owned(), addr);
        }
        self
    }
    pub fn add_loopback(
        &mut self,
        name: &str,
        addr: Option<InterfaceAddress>,
        description: Option<&str>,
    ) -> &mut Self {
        let loopback = Loopback {
            addr,
            description: description.map(str::to_owned),
        };
        self.loopbacks.insert(name.to_owned(), loopback);
        self
    }
    pub fn add_bgp_neighbor(&mut self, neighbor: &str, peer: BgpPeer) -> &mut Self {
        self.bgp.neighbors.insert(neighbor.to_owned(), peer);
        self
    }
    pub fn add_bgp_announcement(&mut self, announcement: BgpAnnouncement) -> &mut Self {
        self.bgp.announcements.push(announcement);
        self
    }
    pub fn add_bgp_advertise(&mut self, request: AnnouncementRequest) -> &mut Self {
        self.bgp.advertise.push(request);
        self
    }
    pub fn add_community_list(&mut self, clist: CommunityList) -> &mut Self {
        self.community_lists.add_community_list(clist);
        self
    }
    pub fn add_prefix_list(&mut self, plist: PrefixList) -> &mut Self {
        self.prefix_lists.add_prefix_list(plist);
        self
    }
    pub fn add_route_map(&mut self, rmap: RouteMap) -> &mut Self {
        self.route_maps.add_route_map(rmap);
        self
    }
    pub fn add_tracker(&mut self, tracker: Tracker) -> &mut Self {
        self.trackers.add_tracker(tracker);
        self
    }
}

impl NetworkGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// Add a router, or get it if it already exists
    pub fn add_router(&mut self, name: &str) -> &mut Node {
        self.nodes
            .entry(name.to_owned())
            .or_insert_with(|| Node::new(NodeKind::Router))
    }
    /// Add a network, or get it if it already exists
    pub fn add_network(&mut self, name: &str) -> &mut Node {
        self.nodes
            .entry(name.to_owned())
            .or_insert_with(|| Node::new(NodeKind::Network))
    }
    #[must_use]
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }
    fn node_mut(&mut self, name: &str) -> Result<&mut Node, ConfigError> {
        self.nodes.get_mut(name).ok_or_else(|| {
            error!("Attempted to modify unknown node {name}");
            ConfigError::NoSuchNode(name.to_owned())
        })
    }
    fn bgp_peer(&self, node: &str, neighbor: &str) -> Option<&BgpPeer> {
        self.nodes.get(node)?.bgp.neighbors.get(neighbor)
    }
}

impl PolicyStore for NetworkGraph {
    fn has_node(&self, node: &str) -> bool {
        self.nodes.contains_key(node)
    }
    fn is_router(&self, node: &str) -> bool {
        self.nodes
            .get(node)
            .is_some_and(|n| n.kind == NodeKind::Router)
    }
    fn is_network(&self, node: &str) -> bool {
        self.nodes
            .get(node)
            .is_some_and(|n| n.kind == NodeKind::Network)
    }
    fn is_peer(&self, node: &str) -> bool {
        self.is_router(node) && self.nodes.get(node).is_some_and(|n| n.peer)
    }
    fn is_local_router(&self, node: &str) -> bool {
        self.is_router(node) && self.nodes.get(node).is_some_and(|n| n.local)
    }
    fn routers(&self) -> Vec<String> {
        self.nodes
            .iter()
            .filter(|(_, n)| n.kind == NodeKind::Router)
            .map(|(name, _)| name.clone())
            .collect()
    }

    fn neighbors(&self, node: &str) -> Vec<String> {
        self.nodes
            .get(node)
            .map(|n| n.links.keys().cloned().collect())
            .unwrap_or_default()
    }
    fn edge_iface(&self, node: &str, neighbor: &str) -> Option<String> {
        Some(self.nodes.get(node)?.links.get(neighbor)?.iface.clone())
    }
    fn edge_iface_description(&self, node: &str, neighbor: &str) -> Option<String> {
        self.nodes.get(node)?.links.get(neighbor)?.description.clone()
    }
    fn iface_addr(&self, node: &str, iface: &str) -> Option<InterfaceAddress> {
        self.nodes.get(node)?.interfaces.get(iface).copied()
    }
    fn loopback_interfaces(&self, node: &str) -> Vec<String> {
        self.nodes
            .get(node)
            .map(|n| n.loopbacks.keys().cloned().collect())
            .unwrap_or_default()
    }
    fn loopback_addr(&self, node: &str, loopback: &str) -> Option<InterfaceAddress> {
        self.nodes.get(node)?.loopbacks.get(loopback)?.addr
    }
    fn loopback_description(&self, node: &str, loopback: &str) -> Option<String> {
        self.nodes
            .get(node)?
            .loopbacks
            .get(loopback)?
            .description
            .clone()
    }

    fn bgp_asnum(&self, node: &str) -> Option<u32> {
        self.nodes.get(node)?.asnum
    }
    fn bgp_neighbors(&self, node: &str) -> Vec<String> {
        self.nodes
            .get(node)
            .map(|n| n.bgp.neighbors.keys().cloned().collect())
            .unwrap_or_default()
    }
    fn bgp_neighbor_description(&self, node: &str, neighbor: &str) -> Option<String> {
        self.bgp_peer(node, neighbor)?.description.clone()
    }
    fn bgp_import_route_map(&self, node: &str, neighbor: &str) -> Option<String> {
        self.bgp_peer(node, neighbor)?.import_route_map.clone()
    }
    fn bgp_export_route_map(&self, node: &str, neighbor: &str) -> Option<String> {
        self.bgp_peer(node, neighbor)?.export_route_map.clone()
    }
    fn bgp_announcements(&self, node: &str) -> Vec<BgpAnnouncement> {
        self.nodes
            .get(node)
            .map(|n| n.bgp.announcements.clone())
            .unwrap_or_default()
    }
    fn bgp_advertise(&self, node: &str) -> Vec<AnnouncementRequest> {
        self.nodes
            .get(node)
            .map(|n| n.bgp.advertise.clone())
            .unwrap_or_default()
    }

    fn community_lists(&self, node: &str) -> Option<&CommunityListTable> {
        self.nodes.get(node).map(|n| &n.community_lists)
    }
    fn prefix_lists(&self, node: &str) -> Option<&PrefixListTable> {
        self.nodes.get(node).map(|n| &n.prefix_lists)
    }
    fn route_maps(&self, node: &str) -> Option<&RouteMapTable> {
        self.nodes.get(node).map(|n| &n.route_maps)
    }
    fn trackers(&self, node: &str) -> Option<&TrackerTable> {
        self.nodes.get(node).map(|n| &n.trackers)
    }

    fn set_loopback_addr(
        &mut self,
        node: &str,
        loopback: &str,
        addr: InterfaceAddress,
    ) -> ConfigResult {
        debug!("{node}: loopback {loopback} address set to {addr}");
        self.node_mut(node)?
            .loopbacks
            .entry(loopback.to_owned())
            .or_default()
            .addr = Some(addr);
        Ok(())
    }
    fn set_loopback_description(
        &mut self,
        node: &str,
        loopback: &str,
        description: &str,
    ) -> ConfigResult {
        self.node_mut(node)?
            .loopbacks
            .entry(loopback.to_owned())
            .or_default()
            .description = Some(description.to_owned());
        Ok(())
    }
    fn add_prefix_list(&mut self, node: &str, plist: PrefixList) -> ConfigResult {
        debug!("{node}: adding prefix-list {}", plist.name);
        self.node_mut(node)?.prefix_lists.add_prefix_list(plist);
        Ok(())
    }
    fn add_route_map(&mut self, node: &str, rmap: RouteMap) -> ConfigResult {
        debug!("{node}: adding route-map {}", rmap.name);
        self.node_mut(node)?.route_maps.add_route_map(rmap);
        Ok(())
    }
    fn add_bgp_announcement(
        &mut self,
        node: &str,
        announcement: BgpAnnouncement,
    ) -> ConfigResult {
        debug!("{node}: announcing {}", announcement.source);
        self.node_mut(node)?.bgp.announcements.push(announcement);
        Ok(())
    }
    fn add_bgp_export_route_map(&mut self, node: &str, neighbor: &str, rmap: &str) -> ConfigResult {
        debug!("{node}: export route-map {rmap} towards {neighbor}");
        self.node_mut(node)?
            .bgp
            .neighbors
            .entry(neighbor.to_owned())
            .or_default()
            .export_route_map = Some(rmap.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::AnnouncedPrefix;
    use crate::internal::routing::bgp::AnnouncementSource;
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    const TOPOLOGY: &str = r"
nodes:
  R1:
    asnum: 100
    local: true
    links:
      R2: { iface: Fa0/0, description: 'to R2' }
      N1: { iface: Fa1/0 }
    interfaces:
      Fa0/0: 10.0.0.1/31
      Fa1/0: 192.168.1.1/24
    loopbacks:
      lo0: { addr: 1.1.1.1/32, description: 'router id' }
    bgp:
      neighbors:
        R2: { description: 'eBGP to R2', import_route_map: RM-IN }
      announcements:
        - source: N1
        - source: 8.8.0.0/16
          route_map: RM-OUT
  R2:
    asnum: 200
    peer: true
    links:
      R1: { iface: Fa0/0 }
    interfaces:
      Fa0/0: 10.0.0.0/31
    bgp:
      neighbors:
        R1: {}
      advertise:
        - prefix: P1
          as_path: [200, 300]
  N1:
    kind: network
    links:
      R1: { iface: eth0 }
";

    #[test]
    fn test_graph_from_yaml() {
        let graph: NetworkGraph = serde_yaml_ng::from_str(TOPOLOGY).unwrap();
        assert_eq!(graph.routers(), vec!["R1".to_string(), "R2".to_string()]);
        assert!(graph.is_network("N1"));
        assert!(!graph.is_router("N1"));
        assert!(graph.is_local_router("R1"));
        assert!(graph.is_peer("R2"));
        assert!(!graph.has_node("R3"));

        assert_eq!(graph.neighbors("R1"), vec!["R2".to_string(), "N1".to_string()]);
        assert_eq!(graph.edge_iface("R1", "R2").as_deref(), Some("Fa0/0"));
        assert_eq!(graph.edge_iface_description("R1", "R2").as_deref(), Some("to R2"));
        assert_eq!(
            graph.iface_addr("R1", "Fa0/0"),
            Some("10.0.0.1/31".parse().unwrap())
        );
        assert_eq!(graph.loopback_interfaces("R1"), vec!["lo0".to_string()]);
        assert_eq!(graph.bgp_asnum("R2"), Some(200));
        assert_eq!(graph.bgp_import_route_map("R1", "R2").as_deref(), Some("RM-IN"));
        assert_eq!(graph.bgp_export_route_map("R1", "R2"), None);

        let announcements = graph.bgp_announcements("R1");
        assert_eq!(announcements[0].source, AnnouncementSource::name("N1"));
        assert_eq!(
            announcements[1].source,
            AnnouncementSource::Network("8.8.0.0/16".parse().unwrap())
        );
        assert_eq!(announcements[1].route_map.as_deref(), Some("RM-OUT"));

        let requests = graph.bgp_advertise("R2");
        assert_eq!(requests[0].prefix, AnnouncedPrefix::key("P1"));
        assert_eq!(requests[0].as_path, vec![200, 300]);
    }

    #[test]
    fn test_bad_address_in_yaml() {
        let yaml = r"
nodes:
  R1:
    interfaces:
      Fa0/0: not-an-address
";
        let err = serde_yaml_ng::from_str::<NetworkGraph>(yaml).unwrap_err();
        assert!(err.to_string().contains("not-an-address"));
    }

    #[test]
    fn test_graph_mutators() {
        let mut graph = NetworkGraph::new();
        graph.add_router("R1").set_asnum(100);
        let addr: InterfaceAddress = "128.0.0.1/24".parse().unwrap();

        graph.set_loopback_addr("R1", "lo0", addr).unwrap();
        graph.set_loopback_description("R1", "lo0", "For P1").unwrap();
        assert_eq!(graph.loopback_addr("R1", "lo0"), Some(addr));
        assert_eq!(graph.loopback_description("R1", "lo0").as_deref(), Some("For P1"));

        graph.add_bgp_export_route_map("R1", "R2", "Export_R1").unwrap();
        assert_eq!(graph.bgp_neighbors("R1"), vec!["R2".to_string()]);
        assert_eq!(graph.bgp_export_route_map("R1", "R2").as_deref(), Some("Export_R1"));

        let res = graph.add_prefix_list("R9", PrefixList::new("L_0", Default::default()));
        assert_eq!(res, Err(ConfigError::NoSuchNode("R9".to_string())));
    }

    #[test]
    #[traced_test]
    fn test_mutating_unknown_node_is_logged() {
        let mut graph = NetworkGraph::new();
        let addr: InterfaceAddress = "128.0.0.1/24".parse().unwrap();
        let res = graph.set_loopback_addr("R9", "lo0", addr);
        assert_eq!(res, Err(ConfigError::NoSuchNode("R9".to_string())));
        assert!(logs_contain("Attempted to modify unknown node R9"));
    }
}
