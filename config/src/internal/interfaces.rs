// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Router configuration model: interfaces

use crate::address::InterfaceAddress;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InterfaceType {
    Physical,
    Loopback,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InterfaceConfig {
    pub name: String,
    pub iftype: InterfaceType,
    pub address: InterfaceAddress,
    pub description: Option<String>,
}

impl InterfaceConfig {
    #[must_use]
    pub fn new(name: &str, iftype: InterfaceType, address: InterfaceAddress) -> Self {
        Self {
            name: name.to_owned(),
            iftype,
            address,
            description: None,
        }
    }
    #[must_use]
    pub fn set_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }
    #[must_use]
    pub fn is_loopback(&self) -> bool {
        self.iftype == InterfaceType::Loopback
    }
}
