// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Config renderer: OSPF

use crate::ios::renderer::builder::{ConfigBuilder, Render};
use config::internal::routing::ospf::Ospf;

impl Render for Ospf {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _: &Self::Context) -> ConfigBuilder {
        let mut config = ConfigBuilder::new();
        config += format!("router ospf {}", self.process_id);
        config += format!(" network 0.0.0.0 255.255.255.255 area {}", self.area);
        config
    }
}
