// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Config renderer: BGP

use ipnet::IpNet;

use crate::ios::renderer::builder::{ConfigBuilder, Render};
use config::internal::routing::bgp::{BgpConfig, BgpNeighbor, BgpNetwork};

/// The `network` statement announcing `network`, without indentation
pub(crate) fn network_statement(network: &IpNet, route_map: Option<&str>) -> String {
    let mut statement = match network {
        IpNet::V4(_) => format!("network {} mask {}", network.network(), network.netmask()),
        IpNet::V6(_) => format!("network {network}"),
    };
    if let Some(route_map) = route_map {
        statement += format!(" route-map {route_map}").as_str();
    }
    statement
}

impl Render for BgpNetwork {
    type Context = ();
    type Output = String;
    fn render(&self, _: &Self::Context) -> String {
        format!(
            " {}",
            network_statement(&self.network, self.route_map.as_deref())
        )
    }
}

impl Render for BgpNeighbor {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> ConfigBuilder {
        let mut cfg = ConfigBuilder::new();
        let prefix = format!(" neighbor {}", self.address);
        cfg += format!("{prefix} remote-as {}", self.remote_as);
        if let Some(description) = &self.description {
            cfg += format!("{prefix} description \"{description}\"");
        }
        cfg += format!("{prefix} advertisement-interval 0");
        cfg += format!("{prefix} soft-reconfiguration inbound");
        cfg += format!("{prefix} send-community");
        if let Some(rmap) = &self.route_map_in {
            cfg += format!("{prefix} route-map {rmap} in");
        }
        if let Some(rmap) = &self.route_map_out {
            cfg += format!("{prefix} route-map {rmap} out");
        }
        cfg
    }
}

impl Render for BgpConfig {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> ConfigBuilder {
        let mut cfg = ConfigBuilder::new();
        cfg += format!("router bgp {}", self.asn);
        cfg += " no synchronization";
        cfg += " bgp log-neighbor-changes";
        cfg += " bgp additional-paths send receive";
        self.networks.iter().for_each(|n| cfg += n.render(&()));
        self.neighbors.iter().for_each(|n| cfg += n.render(&()));
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bgp_render() {
        let mut bgp = BgpConfig::new(100);
        bgp.add_network("192.168.5.0/24".parse().unwrap(), None);
        bgp.add_network("128.0.0.0/24".parse().unwrap(), Some("RM".to_string()));
        bgp.add_network("2001:db8::/48".parse().unwrap(), None);
        bgp.add_neighbor(
            BgpNeighbor::new("10.0.0.2".parse().unwrap(), 200)
                .set_description(Some("To R2".to_string()))
                .set_route_map_in(Some("RM-IN".to_string()))
                .set_route_map_out(Some("RM-OUT".to_string())),
        );
        bgp.add_neighbor(BgpNeighbor::new("10.0.1.2".parse().unwrap(), 300));

        let expected = "router bgp 100
 no synchronization
 bgp log-neighbor-changes
 bgp additional-paths send receive
 network 192.168.5.0 mask 255.255.255.0
 network 128.0.0.0 mask 255.255.255.0 route-map RM
 network 2001:db8::/48
 neighbor 10.0.0.2 remote-as 200
 neighbor 10.0.0.2 description \"To R2\"
 neighbor 10.0.0.2 advertisement-interval 0
 neighbor 10.0.0.2 soft-reconfiguration inbound
 neighbor 10.0.0.2 send-community
 neighbor 10.0.0.2 route-map RM-IN in
 neighbor 10.0.0.2 route-map RM-OUT out
 neighbor 10.0.1.2 remote-as 300
 neighbor 10.0.1.2 advertisement-interval 0
 neighbor 10.0.1.2 soft-reconfiguration inbound
 neighbor 10.0.1.2 send-community
";
        assert_eq!(bgp.render(&()).to_string(), expected);
    }
}
