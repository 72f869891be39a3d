// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Policy model: OSPF (minimal). Interior routers run one process with every
//! interface in a single area.

use std::net::Ipv4Addr;

#[derive(Clone, Debug, PartialEq)]
pub struct Ospf {
    pub process_id: u16,
    pub area: Ipv4Addr,
}

impl Default for Ospf {
    fn default() -> Self {
        Self {
            process_id: 100,
            area: Ipv4Addr::UNSPECIFIED,
        }
    }
}
