// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! IOS 15.2 configuration renderer

pub mod bgp;
pub mod builder;
pub mod communitylist;
pub mod interface;
pub mod ospf;
pub mod prefixlist;
pub mod routemap;
pub mod tracker;

use crate::ios::renderer::builder::{ConfigBuilder, MARKER, Render};
use config::{ConfigError, RouterConfig};

/// Fixed statements heading every configuration, each followed by a marker
pub const PREAMBLE: [&str; 15] = [
    "version 15.2",
    "service timestamps debug datetime msec",
    "service timestamps log datetime msec",
    "boot-start-marker",
    "boot-end-marker",
    "no aaa new-model",
    "ip cef",
    "no ipv6 cef",
    "multilink bundle-name authenticated",
    "ip forward-protocol nd",
    "no ip http server",
    "no ip http secure-server",
    "ip bgp-community new-format",
    "ip community-list expanded PrimList permit 10:*",
    "ip community-list expanded SecList permit 20:*",
];

/// Fixed statements closing every configuration
pub const POSTAMBLE: [&str; 13] = [
    "!",
    "!",
    "control-plane",
    "!",
    "!",
    "line con 0",
    " stopbits 1",
    "line aux 0",
    " stopbits 1",
    "line vty 0 4",
    " login",
    "!",
    "end",
];

fn render_preamble() -> ConfigBuilder {
    let mut cfg = ConfigBuilder::new();
    cfg += MARKER;
    for (index, statement) in PREAMBLE.iter().enumerate() {
        if index > 0 {
            cfg += MARKER;
        }
        cfg += *statement;
    }
    cfg
}

fn render_postamble() -> ConfigBuilder {
    let mut cfg = ConfigBuilder::new();
    POSTAMBLE.iter().for_each(|s| cfg += *s);
    cfg
}

/// Every section is followed by a marker, even if it renders nothing
impl Render for RouterConfig {
    type Context = ();
    type Output = Result<ConfigBuilder, ConfigError>;
    fn render(&self, _: &Self::Context) -> Self::Output {
        let mut cfg = render_preamble();

        /* hostname block */
        cfg += MARKER;
        cfg += format!("hostname {}", self.hostname);
        cfg += MARKER;
        cfg += MARKER;

        /* interfaces: physical first, then loopbacks */
        cfg += self.interfaces.render(&());
        cfg += MARKER;

        /* policy objects */
        cfg += self.community_lists.render(&());
        cfg += MARKER;
        cfg += self.prefix_lists.render(&());
        cfg += MARKER;
        cfg += self.route_maps.render(self)?;
        cfg += MARKER;

        /* routing */
        if let Some(bgp) = &self.bgp {
            cfg += bgp.render(&());
        }
        cfg += MARKER;
        if let Some(ospf) = &self.ospf {
            cfg += ospf.render(&());
        }
        cfg += MARKER;

        /* failover */
        if let Some(failover) = &self.failover {
            cfg += failover.render(&());
        }
        cfg += MARKER;

        cfg += render_postamble();
        Ok(cfg)
    }
}

/// Render the configuration of a router as an IOS document
pub fn render_router_config(config: &RouterConfig) -> Result<String, ConfigError> {
    Ok(config.render(&())?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_router_document() {
        let config = RouterConfig::new("R1");
        let doc = render_router_config(&config).unwrap();

        let mut expected = String::from("!\n");
        expected += &PREAMBLE.join("\n!\n");
        expected += "\n!\nhostname R1\n!\n";
        /* one marker ahead of the interfaces, then one after every section.
        Community-lists add one of their own */
        expected += "!\n!\n!\n!\n!\n!\n!\n!\n!\n";
        expected += &POSTAMBLE.join("\n");
        expected += "\n";
        assert_eq!(doc, expected);
    }
}
