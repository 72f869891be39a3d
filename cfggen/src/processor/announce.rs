// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Synthesis of the announcements requested by boundary routers.
//!
//! A boundary router stands for an external peer that advertises a set of prefixes.
//! For every requested prefix we add a loopback hosting an address of that prefix,
//! a prefix-list matching it and a route-map line prepending the requested AS path.
//! The resulting route-map is installed as the export policy towards all neighbors.

use tracing::{debug, error, info, warn};

use crate::allocator::PrefixAllocator;
use crate::processor::namegen::{
    export_route_map_name, loopback_description, loopback_name, prefix_list_name,
};
use config::internal::routing::access::Access;
use config::internal::routing::bgp::{AnnouncementRequest, AnnouncementSource, BgpAnnouncement};
use config::internal::routing::prefixlist::PrefixList;
use config::internal::routing::routemap::{RouteMap, RouteMapAction, RouteMapLine, RouteMapMatch};
use config::{ConfigError, ConfigResult, InterfaceAddress, PolicyStore};
use ipnet::IpNet;

const FIRST_LINENO: u32 = 5;
const LINENO_STEP: u32 = 5;

/// Fail if some neighbor of the router already has an export route-map
fn check_export_policies(store: &impl PolicyStore, router: &str) -> ConfigResult {
    for neighbor in store.bgp_neighbors(router) {
        if let Some(route_map) = store.bgp_export_route_map(router, &neighbor) {
            let err = ConfigError::PolicyConflict {
                router: router.to_owned(),
                neighbor,
                route_map,
            };
            error!("Can't install synthesized export policy: {err}");
            return Err(err);
        }
    }
    Ok(())
}

fn name_conflict(router: &str, object: String) -> ConfigError {
    let err = ConfigError::NameConflict {
        router: router.to_owned(),
        object,
    };
    error!("Can't synthesize announcements: {err}");
    err
}

/// Fail if any object that synthesis would create for `count` requests already exists
fn check_names(store: &impl PolicyStore, router: &str, count: usize) -> ConfigResult {
    let loopbacks = store.loopback_interfaces(router);
    for index in 0..count {
        let loopback = loopback_name(index);
        if loopbacks.contains(&loopback) {
            return Err(name_conflict(router, loopback));
        }
        let plist = prefix_list_name(index);
        if store.prefix_lists(router).is_some_and(|t| t.contains(&plist)) {
            return Err(name_conflict(router, plist));
        }
    }
    let rmap = export_route_map_name(router);
    if store.route_maps(router).is_some_and(|t| t.get(&rmap).is_some()) {
        return Err(name_conflict(router, rmap));
    }
    Ok(())
}

/// Resolve the network of every request and the loopback address hosted in it
fn plan_addresses(
    allocator: &mut PrefixAllocator,
    router: &str,
    requests: &[AnnouncementRequest],
) -> Result<Vec<(IpNet, InterfaceAddress)>, ConfigError> {
    let mut plan = Vec::with_capacity(requests.len());
    for request in requests {
        let network = allocator.lookup(&request.prefix)?;
        let Some(address) = InterfaceAddress::first_host(&network) else {
            let err = ConfigError::TypeMismatch {
                router: router.to_owned(),
                object: network.to_string(),
            };
            error!("No usable host address in {network}: {err}");
            return Err(err);
        };
        plan.push((network, address));
    }
    Ok(plan)
}

/// Add to the store of a boundary router the objects needed to announce the
/// prefixes it is requested to advertise. Every check happens before the first
/// write: on failure the store is left untouched.
pub fn synthesize_announcements(
    store: &mut impl PolicyStore,
    allocator: &mut PrefixAllocator,
    router: &str,
) -> ConfigResult {
    check_export_policies(store, router)?;

    let requests = store.bgp_advertise(router);
    if requests.is_empty() {
        warn!("Boundary router {router} has no prefixes to announce");
    }
    check_names(store, router, requests.len())?;
    let plan = plan_addresses(allocator, router, &requests)?;

    let mut route_map = RouteMap::new(&export_route_map_name(router));
    let mut lineno = FIRST_LINENO;
    for (index, (request, (network, address))) in requests.iter().zip(plan).enumerate() {
        let loopback = loopback_name(index);
        store.set_loopback_addr(router, &loopback, address)?;
        let description = loopback_description(&request.prefix);
        store.set_loopback_description(router, &loopback, &description)?;

        let plist_name = prefix_list_name(index);
        store.add_prefix_list(
            router,
            PrefixList::new(&plist_name, Access::Permit).add_network(network),
        )?;

        let mut line = RouteMapLine::new(lineno, Access::Permit)
            .add_match(RouteMapMatch::PrefixList(plist_name));
        if !request.as_path.is_empty() {
            line = line.add_action(RouteMapAction::AsPathPrepend(request.as_path.clone()));
        }
        route_map.add_line(line)?;

        let announcement = BgpAnnouncement::new(AnnouncementSource::name(&loopback));
        store.add_bgp_announcement(router, announcement)?;
        debug!("{router}: {} announced from {loopback} ({network})", request.prefix);
        lineno += LINENO_STEP;
    }

    let name = route_map.name.clone();
    store.add_route_map(router, route_map)?;
    for neighbor in store.bgp_neighbors(router) {
        store.add_bgp_export_route_map(router, &neighbor, &name)?;
    }
    info!(
        "{router}: synthesized {} announcements, exported with {name}",
        requests.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::topology::graph::BgpPeer;
    use config::{AnnouncedPrefix, NetworkGraph};
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    fn boundary_graph() -> NetworkGraph {
        let mut graph = NetworkGraph::new();
        graph
            .add_router("ATT")
            .set_asnum(7018)
            .set_peer(true)
            .add_bgp_neighbor("R1", BgpPeer::default())
            .add_bgp_neighbor("R2", BgpPeer::default())
            .add_bgp_advertise(AnnouncementRequest::new(AnnouncedPrefix::key("P1"), vec![65001]))
            .add_bgp_advertise(AnnouncementRequest::new(
                AnnouncedPrefix::key("P2"),
                vec![65001, 65002],
            ));
        graph
    }

    #[test]
    fn test_synthesis() {
        let mut graph = boundary_graph();
        let mut allocator = PrefixAllocator::new();
        synthesize_announcements(&mut graph, &mut allocator, "ATT").unwrap();

        assert_eq!(graph.loopback_interfaces("ATT"), vec!["lo0", "lo1"]);
        assert_eq!(
            graph.loopback_addr("ATT", "lo1"),
            Some("128.0.1.1/24".parse().unwrap())
        );
        assert_eq!(graph.loopback_description("ATT", "lo0").as_deref(), Some("For P1"));

        let plists = graph.prefix_lists("ATT").unwrap();
        let names: Vec<&String> = plists.names().collect();
        assert_eq!(names, vec!["L_0", "L_1"]);
        assert_eq!(
            plists.get("L_1").unwrap().networks,
            vec!["128.0.1.0/24".parse::<IpNet>().unwrap()]
        );

        let rmap = graph.route_maps("ATT").unwrap().get("Export_ATT").unwrap();
        let lines: Vec<&RouteMapLine> = rmap.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].lineno, 5);
        assert_eq!(lines[1].lineno, 10);
        assert_eq!(lines[1].matches, vec![RouteMapMatch::PrefixList("L_1".to_string())]);
        assert_eq!(lines[1].actions, vec![RouteMapAction::AsPathPrepend(vec![65001, 65002])]);

        for neighbor in ["R1", "R2"] {
            assert_eq!(
                graph.bgp_export_route_map("ATT", neighbor).as_deref(),
                Some("Export_ATT")
            );
        }
        let sources: Vec<String> = graph
            .bgp_announcements("ATT")
            .iter()
            .map(|a| a.source.to_string())
            .collect();
        assert_eq!(sources, vec!["lo0", "lo1"]);
    }

    #[test]
    fn test_rerun_is_a_conflict() {
        let mut graph = boundary_graph();
        let mut allocator = PrefixAllocator::new();
        synthesize_announcements(&mut graph, &mut allocator, "ATT").unwrap();
        let before = graph.clone();

        let res = synthesize_announcements(&mut graph, &mut allocator, "ATT");
        assert_eq!(
            res,
            Err(ConfigError::PolicyConflict {
                router: "ATT".to_string(),
                neighbor: "R1".to_string(),
                route_map: "Export_ATT".to_string()
            })
        );
        assert_eq!(graph, before);
    }

    #[test]
    fn test_concrete_prefix_and_empty_path() {
        let mut graph = NetworkGraph::new();
        graph
            .add_router("EXT")
            .set_peer(true)
            .add_bgp_advertise(AnnouncementRequest::new(
                AnnouncedPrefix::from("9.9.9.0/24"),
                vec![],
            ));
        let mut allocator = PrefixAllocator::new();
        synthesize_announcements(&mut graph, &mut allocator, "EXT").unwrap();
        assert!(allocator.is_empty());
        assert_eq!(
            graph.loopback_addr("EXT", "lo0"),
            Some("9.9.9.1/24".parse().unwrap())
        );
        let rmap = graph.route_maps("EXT").unwrap().get("Export_EXT").unwrap();
        assert!(rmap.lines().all(|l| l.actions.is_empty()));
    }

    #[test]
    #[traced_test]
    fn test_no_requests() {
        let mut graph = NetworkGraph::new();
        graph
            .add_router("EXT")
            .set_peer(true)
            .add_bgp_neighbor("R1", BgpPeer::default());
        let mut allocator = PrefixAllocator::new();
        synthesize_announcements(&mut graph, &mut allocator, "EXT").unwrap();
        assert!(logs_contain("has no prefixes to announce"));
        assert!(graph.route_maps("EXT").unwrap().get("Export_EXT").unwrap().is_empty());
        assert_eq!(graph.bgp_export_route_map("EXT", "R1").as_deref(), Some("Export_EXT"));
    }

    #[test]
    fn test_existing_objects_are_not_overwritten() {
        let mut graph = boundary_graph();
        graph
            .add_router("ATT")
            .add_loopback("lo1", Some("9.9.9.9/32".parse().unwrap()), Some("mgmt"))
            .add_bgp_announcement(BgpAnnouncement::new(AnnouncementSource::name("lo1")));
        let before = graph.clone();
        let mut allocator = PrefixAllocator::new();

        let res = synthesize_announcements(&mut graph, &mut allocator, "ATT");
        assert_eq!(
            res,
            Err(ConfigError::NameConflict {
                router: "ATT".to_string(),
                object: "lo1".to_string()
            })
        );
        assert_eq!(graph, before);
        assert!(allocator.is_empty());
    }

    #[test]
    fn test_existing_prefix_list_or_route_map() {
        let mut graph = boundary_graph();
        graph.add_router("ATT").add_prefix_list(
            PrefixList::new("L_0", Access::Permit).add_network("10.0.0.0/8".parse().unwrap()),
        );
        let mut allocator = PrefixAllocator::new();
        let res = synthesize_announcements(&mut graph, &mut allocator, "ATT");
        assert!(matches!(res, Err(ConfigError::NameConflict { object, .. }) if object == "L_0"));

        let mut graph = boundary_graph();
        graph.add_router("ATT").add_route_map(RouteMap::new("Export_ATT"));
        let res = synthesize_announcements(&mut graph, &mut allocator, "ATT");
        assert!(
            matches!(res, Err(ConfigError::NameConflict { object, .. }) if object == "Export_ATT")
        );
    }

    #[test]
    fn test_unrelated_loopbacks_are_kept() {
        let mut graph = boundary_graph();
        graph
            .add_router("ATT")
            .add_loopback("lo9", Some("9.9.9.9/32".parse().unwrap()), Some("mgmt"));
        let mut allocator = PrefixAllocator::new();
        synthesize_announcements(&mut graph, &mut allocator, "ATT").unwrap();
        assert_eq!(graph.loopback_interfaces("ATT"), vec!["lo0", "lo1", "lo9"]);
        assert_eq!(graph.loopback_description("ATT", "lo9").as_deref(), Some("mgmt"));
    }

    #[test]
    fn test_failure_midway_leaves_store_untouched() {
        let mut graph = boundary_graph();
        let before = graph.clone();
        let mut allocator = PrefixAllocator::starting_at("255.255.255.0".parse().unwrap());
        let res = synthesize_announcements(&mut graph, &mut allocator, "ATT");
        assert_eq!(res, Err(ConfigError::AddressPoolExhausted(1)));
        assert_eq!(graph, before);
    }
}
