// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Resolution of the topology and policy of a router into a [`RouterConfig`].
//! Every lookup that the renderer would otherwise need is performed here, so that
//! missing or inconsistent data is reported with the router and object at fault.

use tracing::{debug, error};

use config::internal::interfaces::{InterfaceConfig, InterfaceType};
use config::internal::routing::bgp::{AnnouncementSource, BgpAnnouncement, BgpConfig, BgpNeighbor};
use config::internal::routing::ospf::Ospf;
use config::internal::routing::tracker::FailoverConfig;
use config::{ConfigError, InterfaceAddress, PolicyStore, RouterConfig};
use ipnet::IpNet;

fn missing(router: &str, attribute: &'static str, object: &str) -> ConfigError {
    let err = ConfigError::MissingAttribute {
        router: router.to_owned(),
        attribute,
        object: object.to_owned(),
    };
    error!("{err}");
    err
}

/// Interfaces towards the neighbors of a router, in neighbor order, then its loopbacks
fn build_interfaces(
    store: &impl PolicyStore,
    router: &str,
    config: &mut RouterConfig,
) -> Result<(), ConfigError> {
    for neighbor in store.neighbors(router) {
        let iface = store
            .edge_iface(router, &neighbor)
            .ok_or_else(|| missing(router, "interface", &neighbor))?;
        let address = store
            .iface_addr(router, &iface)
            .ok_or_else(|| missing(router, "interface address", &iface))?;
        let description = store.edge_iface_description(router, &neighbor);
        config.add_interface(
            InterfaceConfig::new(&iface, InterfaceType::Physical, address)
                .set_description(description),
        );
    }
    for loopback in store.loopback_interfaces(router) {
        let address = store
            .loopback_addr(router, &loopback)
            .ok_or_else(|| missing(router, "loopback address", &loopback))?;
        let description = store.loopback_description(router, &loopback);
        config.add_interface(
            InterfaceConfig::new(&loopback, InterfaceType::Loopback, address)
                .set_description(description),
        );
    }
    Ok(())
}

/// Resolve the network advertised by an announcement. Explicit networks win,
/// then loopbacks of the router, then networks attached to the router.
fn resolve_announcement(
    store: &impl PolicyStore,
    router: &str,
    announcement: &BgpAnnouncement,
) -> Result<IpNet, ConfigError> {
    let name = match &announcement.source {
        AnnouncementSource::Network(network) => return Ok(network.trunc()),
        AnnouncementSource::Name(name) => name,
    };
    if store.loopback_interfaces(router).contains(name) {
        return store
            .loopback_addr(router, name)
            .map(|addr| addr.network())
            .ok_or_else(|| missing(router, "loopback address", name));
    }
    if store.is_network(name)
        && let Some(iface) = store.edge_iface(router, name)
    {
        return store
            .iface_addr(router, &iface)
            .map(|addr| addr.network())
            .ok_or_else(|| missing(router, "interface address", &iface));
    }
    let err = ConfigError::TypeMismatch {
        router: router.to_owned(),
        object: name.clone(),
    };
    error!("Can't resolve announcement: {err}");
    Err(err)
}

/// The address a router uses to peer with `neighbor`: the one that the
/// neighbor has on its link towards the router
fn peering_address(
    store: &impl PolicyStore,
    router: &str,
    neighbor: &str,
) -> Result<InterfaceAddress, ConfigError> {
    let iface = store
        .edge_iface(neighbor, router)
        .ok_or_else(|| missing(router, "peering interface", neighbor))?;
    store
        .iface_addr(neighbor, &iface)
        .ok_or_else(|| missing(router, "peering address", neighbor))
}

pub(crate) fn build_bgp_config(
    store: &impl PolicyStore,
    router: &str,
) -> Result<Option<BgpConfig>, ConfigError> {
    let announcements = store.bgp_announcements(router);
    let neighbors = store.bgp_neighbors(router);
    let Some(asn) = store.bgp_asnum(router) else {
        if announcements.is_empty() && neighbors.is_empty() {
            debug!("{router}: no BGP");
            return Ok(None);
        }
        return Err(missing(router, "AS number", router));
    };

    let mut bgp = BgpConfig::new(asn);
    for announcement in &announcements {
        let network = resolve_announcement(store, router, announcement)?;
        debug!("{router}: announcing {network}");
        bgp.add_network(network, announcement.route_map.clone());
    }
    for neighbor in &neighbors {
        if !store.is_router(neighbor) {
            debug!("{router}: skipping BGP neighbor {neighbor}: not a router");
            continue;
        }
        let remote_as = store
            .bgp_asnum(neighbor)
            .ok_or_else(|| missing(router, "AS number", neighbor))?;
        let address = peering_address(store, router, neighbor)?;
        let neigh = BgpNeighbor::new(address.address(), remote_as)
            .set_description(store.bgp_neighbor_description(router, neighbor))
            .set_route_map_in(store.bgp_import_route_map(router, neighbor))
            .set_route_map_out(store.bgp_export_route_map(router, neighbor));
        bgp.add_neighbor(neigh);
    }
    Ok(Some(bgp))
}

fn build_failover_config(
    store: &impl PolicyStore,
    router: &str,
) -> Result<Option<FailoverConfig>, ConfigError> {
    let trackers = store.trackers(router).cloned().unwrap_or_default();
    if trackers.is_empty() {
        return Ok(None);
    }
    let asn = store
        .bgp_asnum(router)
        .ok_or_else(|| missing(router, "AS number", "trackers"))?;
    Ok(Some(FailoverConfig { asn, trackers }))
}

/// Build the internal configuration of a router
pub fn build_router_config(
    store: &impl PolicyStore,
    router: &str,
) -> Result<RouterConfig, ConfigError> {
    if !store.is_router(router) {
        error!("Can't build config for {router}: no such router");
        return Err(ConfigError::NoSuchNode(router.to_owned()));
    }
    debug!("Building config for router {router}");
    let mut config = RouterConfig::new(router);

    build_interfaces(store, router, &mut config)?;
    config.community_lists = store.community_lists(router).cloned().unwrap_or_default();
    config.prefix_lists = store.prefix_lists(router).cloned().unwrap_or_default();
    config.route_maps = store.route_maps(router).cloned().unwrap_or_default();
    config.bgp = build_bgp_config(store, router)?;
    if store.is_local_router(router) {
        config.ospf = Some(Ospf::default());
    }
    config.failover = build_failover_config(store, router)?;
    Ok(config)
}
