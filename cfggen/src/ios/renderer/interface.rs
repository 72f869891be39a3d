// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Config renderer: interfaces

use std::fmt::Display;

use crate::ios::renderer::builder::{ConfigBuilder, MARKER, Render};
use config::InterfaceAddress;
use config::internal::interfaces::InterfaceConfig;

/// IPv4 addresses are written with a dotted mask, IPv6 ones with a prefix length
#[repr(transparent)]
pub struct RenderInterfaceAddress<'a>(pub &'a InterfaceAddress);

impl Display for RenderInterfaceAddress<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_ipv4() {
            write!(f, " ip address {} {}", self.0.address(), self.0.netmask())
        } else {
            write!(f, " ipv6 address {}/{}", self.0.address(), self.0.mask_len())
        }
    }
}

impl Render for InterfaceConfig {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _ctx: &Self::Context) -> ConfigBuilder {
        let mut config = ConfigBuilder::new();
        config += format!("interface {}", self.name);
        config += RenderInterfaceAddress(&self.address).to_string();
        if let Some(description) = &self.description {
            config += format!(" description \"{description}\"");
        }
        if !self.is_loopback() {
            config += " speed auto";
            config += " duplex auto";
        }
        config += MARKER;
        config
    }
}
impl Render for Vec<InterfaceConfig> {
    type Context = ();
    type Output = ConfigBuilder;
    fn render(&self, _ctx: &Self::Context) -> Self::Output {
        let mut config = ConfigBuilder::new();
        self.iter().for_each(|iface| config += iface.render(&()));
        config
    }
}
