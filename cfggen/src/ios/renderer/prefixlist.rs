// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Config renderer: prefix lists.
//! Sequence numbers are 10, 20, 30... following the order of the networks.

use ipnet::IpNet;

use crate::ios::renderer::builder::{ConfigBuilder, MARKER, Render, Rendered};
use config::internal::routing::prefixlist::{PrefixList, PrefixListTable};

const SEQ_STEP: usize = 10;

fn prefix_list_keyword(network: &IpNet) -> &'static str {
    match network {
        IpNet::V4(_) => "ip prefix-list",
        IpNet::V6(_) => "ipv6 prefix-list",
    }
}

impl Render for PrefixList {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> ConfigBuilder {
        let mut config = ConfigBuilder::new();
        let access = self.access.rendered();
        for (index, network) in self.networks.iter().enumerate() {
            config += format!(
                "{} {} seq {} {access} {}/{}",
                prefix_list_keyword(network),
                self.name,
                (index + 1) * SEQ_STEP,
                network.network(),
                network.prefix_len()
            );
        }
        config
    }
}
impl Render for PrefixListTable {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> ConfigBuilder {
        let mut cfg = ConfigBuilder::new();
        self.values().for_each(|plist| {
            cfg += plist.render(&());
            cfg += MARKER;
        });
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::internal::routing::access::Access;
    use pretty_assertions::assert_eq;

    fn net(s: &str) -> IpNet {
        s.parse().unwrap()
    }

    #[test]
    fn test_sequence_numbers() {
        let plist = PrefixList::new("L_0", Access::Deny)
            .add_network(net("10.0.0.0/8"))
            .add_network(net("172.16.0.0/12"))
            .add_network(net("192.168.0.0/16"));
        let expected = "ip prefix-list L_0 seq 10 deny 10.0.0.0/8
ip prefix-list L_0 seq 20 deny 172.16.0.0/12
ip prefix-list L_0 seq 30 deny 192.168.0.0/16
";
        assert_eq!(plist.render(&()).to_string(), expected);
    }

    #[test]
    fn test_ipv6_prefix_list() {
        let plist = PrefixList::new("V6", Access::Permit).add_network(net("2001:db8::/32"));
        assert_eq!(
            plist.render(&()).to_string(),
            "ipv6 prefix-list V6 seq 10 permit 2001:db8::/32\n"
        );
    }

    #[test]
    fn test_table_render() {
        let mut table = PrefixListTable::new();
        table.add_prefix_list(PrefixList::new("B", Access::Permit).add_network(net("2.0.0.0/8")));
        table.add_prefix_list(PrefixList::new("A", Access::Permit).add_network(net("1.0.0.0/8")));
        let expected = "ip prefix-list A seq 10 permit 1.0.0.0/8
!
ip prefix-list B seq 10 permit 2.0.0.0/8
!
";
        assert_eq!(table.render(&()).to_string(), expected);
    }
}
